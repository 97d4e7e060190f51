//! Outlined text fields.
//!
//! Fields are controlled: the caller owns the text and passes it back in on
//! every composition. Editing, caret and IME handling belong to the backend,
//! which reports edits through `on_change` and the IME action through
//! `on_submit`.

use std::rc::Rc;

use bloom_core::*;

pub fn OutlinedTextField(
    value: impl Into<String>,
    label: impl Into<String>,
    modifier: Modifier,
    on_change: impl Fn(String) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::TextField {
            value: value.into(),
            label: label.into(),
            keyboard: KeyboardType::Text,
            leading_icon: None,
            on_change: Some(Rc::new(on_change)),
            on_submit: None,
        },
    )
    .modifier(modifier)
}

pub trait TextFieldExt {
    fn keyboard(self, k: KeyboardType) -> View;
    fn leading_icon(self, icon: IconKind) -> View;
    /// Called with the current text when the IME action (search, done) fires.
    fn on_submit(self, f: impl Fn(String) + 'static) -> View;
}

impl TextFieldExt for View {
    fn keyboard(mut self, k: KeyboardType) -> View {
        if let ViewKind::TextField { keyboard, .. } = &mut self.kind {
            *keyboard = k;
        }
        self
    }
    fn leading_icon(mut self, icon: IconKind) -> View {
        if let ViewKind::TextField { leading_icon, .. } = &mut self.kind {
            *leading_icon = Some(icon);
        }
        self
    }
    fn on_submit(mut self, f: impl Fn(String) + 'static) -> View {
        if let ViewKind::TextField { on_submit, .. } = &mut self.kind {
            *on_submit = Some(Rc::new(f));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_field_options() {
        let f = OutlinedTextField("", "Search", Modifier::new(), |_| {})
            .keyboard(KeyboardType::Email)
            .leading_icon(IconKind::Search)
            .on_submit(|_| {});
        let ViewKind::TextField {
            keyboard,
            leading_icon,
            on_submit,
            ..
        } = f.kind
        else {
            panic!("expected text field");
        };
        assert_eq!(keyboard, KeyboardType::Email);
        assert_eq!(leading_icon, Some(IconKind::Search));
        assert!(on_submit.is_some());
    }
}
