//! Clickable text with tagged hyperlink ranges.

use std::ops::Range;
use std::rc::Rc;

use bloom_core::*;
use bloom_core::text::AnnotatedStringBuilder;

/// Tags `range` with `tag`/`annotation` and underlines it.
pub fn add_hyperlink(
    builder: &mut AnnotatedStringBuilder,
    tag: impl Into<String>,
    annotation: impl Into<String>,
    range: Range<usize>,
) {
    add_hyperlink_styled(
        builder,
        tag,
        annotation,
        range,
        SpanStyle {
            decoration: TextDecoration::Underline,
            color: None,
        },
    )
}

pub fn add_hyperlink_styled(
    builder: &mut AnnotatedStringBuilder,
    tag: impl Into<String>,
    annotation: impl Into<String>,
    range: Range<usize>,
    style: SpanStyle,
) {
    builder.add_string_annotation(tag, annotation, range.clone());
    builder.add_style(style, range);
}

/// Byte range of the first occurrence of `needle` in `text`.
pub fn find_range(text: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    let found = text.find(needle).map(|start| start..start + needle.len());
    if found.is_none() {
        log::debug!("find_range: {needle:?} not in text");
    }
    found
}

/// `on_click` receives the byte offset that was hit.
pub fn ClickableText(
    text: AnnotatedString,
    modifier: Modifier,
    on_click: impl Fn(usize) + 'static,
) -> View {
    View::new(
        0,
        ViewKind::ClickableText {
            text,
            color: colors().on_background,
            style: typography().body1,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperlink_adds_annotation_and_underline() {
        let text = "By clicking below, you agree to our Terms of Use.";
        let mut b = AnnotatedString::builder();
        b.append(text);
        let r = find_range(text, "Terms of Use").expect("present");
        add_hyperlink(&mut b, "terms", "", r.clone());
        let s = b.build();

        assert_eq!(&s.text()[r.clone()], "Terms of Use");
        assert_eq!(s.styles().len(), 1);
        assert_eq!(s.styles()[0].style.decoration, TextDecoration::Underline);
        assert_eq!(s.annotations_at(r.start).next().map(|a| a.tag.as_str()), Some("terms"));
    }

    #[test]
    fn missing_needle_has_no_range() {
        assert_eq!(find_range("abc", "z"), None);
        assert_eq!(find_range("abc", ""), None);
    }
}
