#![allow(non_snake_case)]
//! Widgets and layout containers.

pub mod annotated;
pub mod lazy;
pub mod material3 {
    pub mod components;
}
pub mod textfield;

use std::rc::Rc;

use bloom_core::*;

pub use annotated::{ClickableText, add_hyperlink};
pub use lazy::{LazyColumn, LazyRow};
pub use material3::components::{BottomNavigation, Card, Divider, NavItem};
pub use textfield::{OutlinedTextField, TextFieldExt};

pub fn Surface(modifier: Modifier, color: Color, child: View) -> View {
    View::new(0, ViewKind::Surface { color })
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Row {
            arrangement: Arrangement::Start,
        },
    )
    .modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Column {
            arrangement: Arrangement::Start,
        },
    )
    .modifier(modifier)
}

/// Fixed gap; give it a `height` inside columns or a `width` inside rows.
pub fn Spacer(modifier: Modifier) -> View {
    View::new(0, ViewKind::Spacer).modifier(modifier)
}

/// Text in the ambient `body1` style and `on_background` color.
pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: colors().on_background,
            style: typography().body1,
        },
    )
}

pub fn Image(modifier: Modifier, source: ImageSource) -> View {
    View::new(
        0,
        ViewKind::Image {
            source,
            description: None,
            fit: ImageFit::Fit,
        },
    )
    .modifier(modifier)
}

pub fn Icon(icon: IconKind, description: Option<String>) -> View {
    View::new(
        0,
        ViewKind::Icon {
            icon,
            description,
            tint: colors().on_surface,
        },
    )
}

/// Filled button on the `secondary` color.
pub fn Button(modifier: Modifier, on_click: impl Fn() + 'static, content: View) -> View {
    View::new(
        0,
        ViewKind::Button {
            style: ButtonStyle::Filled,
            background: colors().secondary,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(modifier.clip_rounded(shapes().medium))
    .with_children(vec![content])
}

pub fn TextButton(modifier: Modifier, on_click: impl Fn() + 'static, content: View) -> View {
    View::new(
        0,
        ViewKind::Button {
            style: ButtonStyle::Text,
            background: Color::TRANSPARENT,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(modifier.clip_rounded(shapes().medium))
    .with_children(vec![content])
}

pub fn IconButton(modifier: Modifier, on_click: impl Fn() + 'static, icon: View) -> View {
    View::new(
        0,
        ViewKind::Button {
            style: ButtonStyle::Icon,
            background: Color::TRANSPARENT,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(modifier)
    .with_children(vec![icon])
}

pub fn Checkbox(checked: bool, on_change: impl Fn(bool) + 'static) -> View {
    View::new(
        0,
        ViewKind::Checkbox {
            checked,
            checkmark: colors().on_secondary,
            on_change: Some(Rc::new(on_change)),
        },
    )
}

/// Styling for `Text` and `ClickableText` nodes; other kinds are returned
/// unchanged.
pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn style(self, s: TextStyle) -> View;
    fn align(self, a: TextAlign) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        match &mut self.kind {
            ViewKind::Text { color, .. } | ViewKind::ClickableText { color, .. } => *color = c,
            _ => {}
        }
        self
    }
    fn style(mut self, s: TextStyle) -> View {
        match &mut self.kind {
            ViewKind::Text { color, style, .. } | ViewKind::ClickableText { color, style, .. } => {
                if let Some(c) = s.color {
                    *color = c;
                }
                *style = s;
            }
            _ => {}
        }
        self
    }
    fn align(mut self, a: TextAlign) -> View {
        match &mut self.kind {
            ViewKind::Text { style, .. } | ViewKind::ClickableText { style, .. } => {
                style.align = a
            }
            _ => {}
        }
        self
    }
}

pub trait ImageExt {
    fn image_fit(self, fit: ImageFit) -> View;
    fn content_description(self, d: impl Into<String>) -> View;
}

impl ImageExt for View {
    fn image_fit(mut self, fit: ImageFit) -> View {
        if let ViewKind::Image { fit: f, .. } = &mut self.kind {
            *f = fit;
        }
        self
    }
    fn content_description(mut self, d: impl Into<String>) -> View {
        match &mut self.kind {
            ViewKind::Image { description, .. } | ViewKind::Icon { description, .. } => {
                *description = Some(d.into())
            }
            _ => {}
        }
        self
    }
}

/// Main-axis arrangement for rows, columns and lazy lists.
pub trait ArrangementExt {
    fn arrangement(self, a: Arrangement) -> View;
}

impl ArrangementExt for View {
    fn arrangement(mut self, a: Arrangement) -> View {
        match &mut self.kind {
            ViewKind::Row { arrangement }
            | ViewKind::Column { arrangement }
            | ViewKind::LazyRow { arrangement }
            | ViewKind::LazyColumn { arrangement } => *arrangement = a,
            _ => {}
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_follows_ambient_scheme() {
        let scheme = ColorScheme {
            on_background: Color::from_hex("#232323"),
            ..ColorScheme::default()
        };
        let t = with_colors(scheme, || Text("Bloom"));
        match t.kind {
            ViewKind::Text { color, .. } => assert_eq!(color, Color::from_hex("#232323")),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn style_color_overrides_text_color() {
        let style = typography().h1.with_color(Color::WHITE);
        let t = Text("Hi").color(Color::BLACK).style(style);
        let ViewKind::Text { color, style, .. } = t.kind else {
            panic!("expected text");
        };
        assert_eq!(color, Color::WHITE);
        assert_eq!(style.size, typography().h1.size);
    }

    #[test]
    fn child_appends_tuples_and_options() {
        let v = Column(Modifier::new())
            .child((Text("a"), None::<View>, vec![Text("b"), Text("c")]))
            .child(Some(Text("d")));
        assert_eq!(v.children.len(), 4);
    }

    #[test]
    fn arrangement_only_touches_containers() {
        let row = Row(Modifier::new()).arrangement(Arrangement::SpaceBetween);
        assert!(matches!(
            row.kind,
            ViewKind::Row {
                arrangement: Arrangement::SpaceBetween
            }
        ));
        let text = Text("x").arrangement(Arrangement::SpaceBetween);
        assert!(matches!(text.kind, ViewKind::Text { .. }));
    }

    #[test]
    fn button_rounds_with_medium_shape() {
        let shapes = Shapes {
            small: 4.0,
            medium: 24.0,
        };
        let b = with_shapes(shapes, || Button(Modifier::new(), || {}, Text("Go")));
        assert_eq!(b.modifier.clip_rounded, Some(24.0));
        assert_eq!(b.children.len(), 1);
    }
}
