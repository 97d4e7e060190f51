//! Tree inspection for headless runs and tests.
//!
//! [`outline`] prints a composed tree one node per line. The `Inspector`
//! finds nodes by what the user sees (text, labels, test tags) and fires
//! their handlers the way a tap, a keystroke or a checkbox toggle would.

use std::fmt::Write as _;
use std::io::Write;

use bloom_core::{ButtonStyle, Modifier, RenderBackend, RenderError, View, ViewKind, dp_to_px};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    #[error("no node matches `{0}`")]
    NotFound(String),
    #[error("`{0}` matched a node without a handler")]
    NoHandler(String),
}

fn describe(v: &View) -> String {
    let mut s = String::from(v.kind.name());
    match &v.kind {
        ViewKind::Surface { color } => {
            let _ = write!(s, " {color}");
        }
        ViewKind::Text { text, style, .. } => {
            let _ = write!(s, " {text:?} {}px", dp_to_px(style.scaled_size()));
        }
        ViewKind::ClickableText { text, style, .. } => {
            let tags: Vec<&str> = text.annotations().iter().map(|a| a.tag.as_str()).collect();
            let _ = write!(
                s,
                " {:?} {}px links={tags:?}",
                text.text(),
                dp_to_px(style.scaled_size())
            );
        }
        ViewKind::Image {
            source,
            description,
            fit,
        } => {
            let _ = write!(s, " {source} {fit:?}");
            if let Some(d) = description {
                let _ = write!(s, " {d:?}");
            }
        }
        ViewKind::Icon {
            icon, description, ..
        } => {
            let _ = write!(s, " {}", icon.name());
            if let Some(d) = description {
                let _ = write!(s, " {d:?}");
            }
        }
        ViewKind::Button { style, .. } => {
            s.push_str(match style {
                ButtonStyle::Filled => " filled",
                ButtonStyle::Text => " text",
                ButtonStyle::Icon => " icon",
            });
        }
        ViewKind::TextField {
            value,
            label,
            keyboard,
            ..
        } => {
            let _ = write!(s, " {label:?} = {:?} [{keyboard:?}]", keyboard.display(value));
        }
        ViewKind::Checkbox { checked, .. } => {
            s.push_str(if *checked { " [x]" } else { " [ ]" });
        }
        ViewKind::BottomNavigationItem {
            selected, label, ..
        } => {
            let _ = write!(s, " {label:?}");
            if *selected {
                s.push_str(" (selected)");
            }
        }
        _ => {}
    }
    dimensions(&v.modifier, &mut s);
    if let Some(tag) = &v.modifier.test_tag {
        let _ = write!(s, " #{tag}");
    }
    if v.modifier.is_clickable() {
        s.push_str(" (clickable)");
    }
    s
}

/// Fixed sizes, converted with the current density.
fn dimensions(m: &Modifier, s: &mut String) {
    if let Some(size) = m.size {
        let _ = write!(
            s,
            " {}x{}px",
            dp_to_px(size.width),
            dp_to_px(size.height)
        );
    }
    if let Some(w) = m.width {
        let _ = write!(s, " w={}px", dp_to_px(w));
    }
    if let Some(h) = m.height {
        let _ = write!(s, " h={}px", dp_to_px(h));
    }
}

/// One line per node, indented two spaces per level. Sizes are printed in
/// pixels using the density and text scale locals in effect at the call.
pub fn outline(root: &View) -> String {
    let mut out = String::new();
    root.walk(&mut |v, depth| {
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), describe(v));
    });
    out
}

/// Text, label or content description of the node itself.
fn own_text(v: &View) -> Option<&str> {
    match &v.kind {
        ViewKind::Text { text, .. } => Some(text),
        ViewKind::ClickableText { text, .. } => Some(text.text()),
        ViewKind::BottomNavigationItem { label, .. } => Some(label),
        ViewKind::TextField { label, .. } => Some(label),
        ViewKind::Icon { description, .. } | ViewKind::Image { description, .. } => {
            description.as_deref()
        }
        _ => None,
    }
}

fn matches(v: &View, needle: &str) -> bool {
    own_text(v) == Some(needle) || v.modifier.test_tag.as_deref() == Some(needle)
}

fn subtree_matches(v: &View, needle: &str) -> bool {
    let mut found = false;
    v.walk(&mut |n, _| found |= matches(n, needle));
    found
}

/// Deepest node satisfying `pred`; ties go to the first in pre-order.
fn deepest<'a>(root: &'a View, mut pred: impl FnMut(&View) -> bool) -> Option<&'a View> {
    let mut best: Option<(&View, usize)> = None;
    root.walk(&mut |v, depth| {
        if pred(v) && best.is_none_or(|(_, d)| depth > d) {
            best = Some((v, depth));
        }
    });
    best.map(|(v, _)| v)
}

fn has_click(v: &View) -> bool {
    v.modifier.is_clickable()
        || matches!(
            &v.kind,
            ViewKind::Button {
                on_click: Some(_),
                ..
            } | ViewKind::BottomNavigationItem {
                on_click: Some(_),
                ..
            }
        )
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub frames: u64,
    pub nodes: usize,
}

/// Finds nodes in a composed tree and dispatches events to them.
pub struct Inspector<'a> {
    root: &'a View,
}

impl<'a> Inspector<'a> {
    pub fn new(root: &'a View) -> Self {
        Self { root }
    }

    /// First node, in pre-order, whose text, label, description or test tag is
    /// `needle`.
    pub fn find(&self, needle: &str) -> Option<&'a View> {
        let mut hit = None;
        self.root.walk(&mut |v, _| {
            if hit.is_none() && matches(v, needle) {
                hit = Some(v);
            }
        });
        hit
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.find(needle).is_some()
    }

    /// All `Text` strings, in pre-order.
    pub fn texts(&self) -> Vec<&'a str> {
        let mut out = Vec::new();
        self.root.walk(&mut |v, _| {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push(text.as_str());
            }
        });
        out
    }

    pub fn all(&self, mut pred: impl FnMut(&View) -> bool) -> Vec<&'a View> {
        let mut out = Vec::new();
        self.root.walk(&mut |v, _| {
            if pred(v) {
                out.push(v);
            }
        });
        out
    }

    /// Taps the innermost clickable node showing `needle`.
    pub fn click(&self, needle: &str) -> Result<(), InspectError> {
        let target = deepest(self.root, |v| has_click(v) && subtree_matches(v, needle))
            .ok_or_else(|| InspectError::NotFound(needle.to_string()))?;
        log::debug!("inspector: click {}", describe(target));
        let handler = match &target.kind {
            ViewKind::Button { on_click, .. } | ViewKind::BottomNavigationItem { on_click, .. } => {
                on_click.clone()
            }
            _ => None,
        }
        .or_else(|| target.modifier.on_click.clone());
        match handler {
            Some(h) => {
                h();
                Ok(())
            }
            None => Err(InspectError::NoHandler(needle.to_string())),
        }
    }

    /// Replaces the text of the field labelled `label`.
    pub fn type_text(&self, label: &str, value: &str) -> Result<(), InspectError> {
        match self.text_field(label)? {
            ViewKind::TextField {
                on_change: Some(f), ..
            } => {
                f(value.to_string());
                Ok(())
            }
            _ => Err(InspectError::NoHandler(label.to_string())),
        }
    }

    /// Fires the IME action of the field labelled `label`.
    pub fn submit(&self, label: &str) -> Result<(), InspectError> {
        match self.text_field(label)? {
            ViewKind::TextField {
                value,
                on_submit: Some(f),
                ..
            } => {
                f(value.clone());
                Ok(())
            }
            _ => Err(InspectError::NoHandler(label.to_string())),
        }
    }

    fn text_field(&self, label: &str) -> Result<&'a ViewKind, InspectError> {
        self.all(|v| matches!(&v.kind, ViewKind::TextField { label: l, .. } if l == label))
            .into_iter()
            .next()
            .map(|v| &v.kind)
            .ok_or_else(|| InspectError::NotFound(label.to_string()))
    }

    /// Toggles the checkbox that shares the innermost container with
    /// `needle`. Returns the requested state.
    pub fn toggle(&self, needle: &str) -> Result<bool, InspectError> {
        let checkboxes = |v: &View| {
            let mut n = 0;
            v.walk(&mut |c, _| {
                if matches!(c.kind, ViewKind::Checkbox { .. }) {
                    n += 1
                }
            });
            n
        };
        let row = deepest(self.root, |v| checkboxes(v) == 1 && subtree_matches(v, needle))
            .ok_or_else(|| InspectError::NotFound(needle.to_string()))?;
        let mut result = Err(InspectError::NoHandler(needle.to_string()));
        row.walk(&mut |c, _| {
            if let ViewKind::Checkbox {
                checked,
                on_change: Some(f),
                ..
            } = &c.kind
            {
                f(!checked);
                result = Ok(!checked);
            }
        });
        result
    }

    /// Clicks the hyperlink tagged `tag` inside any clickable text.
    pub fn click_link(&self, tag: &str) -> Result<(), InspectError> {
        let mut result = Err(InspectError::NotFound(tag.to_string()));
        self.root.walk(&mut |v, _| {
            if result.is_ok() {
                return;
            }
            if let ViewKind::ClickableText {
                text,
                on_click: Some(f),
                ..
            } = &v.kind
                && let Some(a) = text.annotations().iter().find(|a| a.tag == tag)
            {
                f(a.range.start);
                result = Ok(());
            }
        });
        result
    }
}

/// Backend that prints each frame as an outline.
pub struct TextBackend<W: Write> {
    out: W,
    pub metrics: Metrics,
}

impl<W: Write> TextBackend<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            metrics: Metrics::default(),
        }
    }

    /// Sink for anything printed between frames.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBackend for TextBackend<W> {
    fn frame(&mut self, root: &View) -> Result<(), RenderError> {
        self.metrics.frames += 1;
        self.metrics.nodes = root.node_count();
        writeln!(
            self.out,
            "--- frame {} ({} nodes) ---",
            self.metrics.frames, self.metrics.nodes
        )?;
        self.out.write_all(outline(root).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bloom_core::*;

    use super::*;

    fn text(s: &str) -> View {
        View::new(
            0,
            ViewKind::Text {
                text: s.into(),
                color: Color::BLACK,
                style: TextStyle::default(),
            },
        )
    }

    fn button(label: &str, hits: Rc<RefCell<Vec<String>>>) -> View {
        let l = label.to_string();
        View::new(
            0,
            ViewKind::Button {
                style: ButtonStyle::Filled,
                background: Color::BLACK,
                on_click: Some(Rc::new(move || hits.borrow_mut().push(l.clone()))),
            },
        )
        .with_children(vec![text(label)])
    }

    fn checkbox(checked: bool, log: Rc<RefCell<Vec<bool>>>) -> View {
        View::new(
            0,
            ViewKind::Checkbox {
                checked,
                checkmark: Color::WHITE,
                on_change: Some(Rc::new(move |c| log.borrow_mut().push(c))),
            },
        )
    }

    #[test]
    fn click_picks_the_innermost_clickable() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let outer = hits.clone();
        let root = View::new(0, ViewKind::Box)
            .modifier(Modifier::new().clickable(move || outer.borrow_mut().push("outer".into())))
            .with_children(vec![button("Log in", hits.clone()), text("Bloom")]);
        let ins = Inspector::new(&root);

        ins.click("Log in").unwrap();
        ins.click("Bloom").unwrap();
        assert_eq!(*hits.borrow(), ["Log in", "outer"]);
        assert_eq!(
            ins.click("Missing"),
            Err(InspectError::NotFound("Missing".into()))
        );
    }

    #[test]
    fn toggle_targets_the_row_with_the_text() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let row = |name: &str, checked| {
            View::new(
                0,
                ViewKind::Row {
                    arrangement: Arrangement::Start,
                },
            )
            .with_children(vec![text(name), checkbox(checked, log.clone())])
        };
        let root = View::new(
            0,
            ViewKind::Column {
                arrangement: Arrangement::Start,
            },
        )
        .with_children(vec![row("Monstera", true), row("Pothos", false)]);

        let ins = Inspector::new(&root);
        assert_eq!(ins.toggle("Pothos"), Ok(true));
        assert_eq!(ins.toggle("Monstera"), Ok(false));
        assert_eq!(*log.borrow(), [true, false]);
    }

    #[test]
    fn type_and_submit_reach_the_field() {
        let got = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (got.clone(), got.clone());
        let field = View::new(
            0,
            ViewKind::TextField {
                value: "fern".into(),
                label: "Search".into(),
                keyboard: KeyboardType::Text,
                leading_icon: None,
                on_change: Some(Rc::new(move |s| a.borrow_mut().push(format!("change:{s}")))),
                on_submit: Some(Rc::new(move |s| b.borrow_mut().push(format!("submit:{s}")))),
            },
        );
        let ins = Inspector::new(&field);
        ins.type_text("Search", "ivy").unwrap();
        ins.submit("Search").unwrap();
        assert_eq!(*got.borrow(), ["change:ivy", "submit:fern"]);
        assert!(ins.submit("Email").is_err());
    }

    #[test]
    fn click_link_passes_the_link_offset() {
        let offsets = Rc::new(RefCell::new(Vec::new()));
        let o = offsets.clone();
        let mut b = AnnotatedString::builder();
        b.append("See Terms and Privacy");
        b.add_string_annotation("terms", "", 4..9);
        b.add_string_annotation("privacy", "", 14..21);
        let root = View::new(
            0,
            ViewKind::ClickableText {
                text: b.build(),
                color: Color::BLACK,
                style: TextStyle::default(),
                on_click: Some(Rc::new(move |i| o.borrow_mut().push(i))),
            },
        );
        let ins = Inspector::new(&root);
        ins.click_link("privacy").unwrap();
        assert_eq!(*offsets.borrow(), [14]);
        assert!(ins.click_link("cookies").is_err());
    }

    #[test]
    fn outline_indents_and_masks() {
        let root = View::new(0, ViewKind::Box).with_children(vec![View::new(
            0,
            ViewKind::TextField {
                value: "secret".into(),
                label: "Password".into(),
                keyboard: KeyboardType::Password,
                leading_icon: None,
                on_change: None,
                on_submit: None,
            },
        )]);
        let out = outline(&root);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Box");
        assert!(lines[1].starts_with("  TextField \"Password\""));
        assert!(!out.contains("secret"));
    }

    #[test]
    fn outline_converts_sizes_with_the_locals() {
        let root = text("Bloom").modifier(Modifier::new().size_dp(24.0).height(48.0));
        let plain = outline(&root);
        assert_eq!(plain, "Text \"Bloom\" 14px 24x24px h=48px\n");

        let scaled = with_density(Density { scale: 2.0 }, || {
            with_text_scale(TextScale(1.5), || outline(&root))
        });
        assert_eq!(scaled, "Text \"Bloom\" 42px 48x48px h=96px\n");
    }

    #[test]
    fn text_backend_counts_frames() {
        let mut backend = TextBackend::new(Vec::new());
        let root = View::new(0, ViewKind::Box).with_children(vec![text("a")]);
        backend.frame(&root).unwrap();
        backend.frame(&root).unwrap();
        assert_eq!(backend.metrics.frames, 2);
        assert_eq!(backend.metrics.nodes, 2);
        let printed = String::from_utf8(backend.into_inner()).unwrap();
        assert!(printed.contains("--- frame 2 (2 nodes) ---"));
    }
}
