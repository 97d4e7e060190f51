//! Lazily composed lists.
//!
//! Items are composed eagerly here; the backend decides which of them are on
//! screen. The list node keeps `content_padding` as its own padding.

use bloom_core::*;

fn lazy_list<T>(
    kind: ViewKind,
    items: &[T],
    modifier: Modifier,
    content_padding: PaddingValues,
    item: impl Fn(&T) -> View,
) -> View {
    let modifier = if content_padding.is_zero() {
        modifier
    } else {
        modifier.padding_values(content_padding)
    };
    View::new(0, kind)
        .modifier(modifier)
        .with_children(items.iter().map(item).collect())
}

pub fn LazyRow<T>(
    items: &[T],
    modifier: Modifier,
    content_padding: PaddingValues,
    spacing: f32,
    item: impl Fn(&T) -> View,
) -> View {
    lazy_list(
        ViewKind::LazyRow {
            arrangement: Arrangement::SpacedBy(spacing),
        },
        items,
        modifier,
        content_padding,
        item,
    )
}

pub fn LazyColumn<T>(
    items: &[T],
    modifier: Modifier,
    content_padding: PaddingValues,
    spacing: f32,
    item: impl Fn(&T) -> View,
) -> View {
    lazy_list(
        ViewKind::LazyColumn {
            arrangement: Arrangement::SpacedBy(spacing),
        },
        items,
        modifier,
        content_padding,
        item,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[test]
    fn items_keep_input_order() {
        let v = LazyColumn(
            &["a", "b", "c"],
            Modifier::new(),
            PaddingValues::default(),
            8.0,
            |s| Text(*s),
        );
        let texts: Vec<_> = v
            .children
            .iter()
            .filter_map(|c| match &c.kind {
                ViewKind::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert!(v.modifier.padding.is_none());
    }

    #[test]
    fn content_padding_lands_on_list() {
        let v = LazyRow(
            &[1, 2],
            Modifier::new(),
            PaddingValues::horizontal(16.0),
            8.0,
            |_| Text("x"),
        );
        assert_eq!(v.modifier.padding, Some(PaddingValues::horizontal(16.0)));
        assert!(matches!(
            v.kind,
            ViewKind::LazyRow {
                arrangement: Arrangement::SpacedBy(gap)
            } if gap == 8.0
        ));
    }
}
