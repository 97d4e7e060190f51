//! Text styles and annotated strings.

use std::ops::Range;

use crate::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    SemiBold,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

/// Logical text style. Sizes are in sp; the text scale local multiplies them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub family: &'static str,
    pub weight: FontWeight,
    pub size: f32,
    pub letter_spacing: f32,
    pub align: TextAlign,
    pub color: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif",
            weight: FontWeight::Normal,
            size: 14.0,
            letter_spacing: 0.0,
            align: TextAlign::Start,
            color: None,
        }
    }
}

impl TextStyle {
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
    pub fn with_align(mut self, a: TextAlign) -> Self {
        self.align = a;
        self
    }
    /// Font size after applying the current text scale.
    pub fn scaled_size(&self) -> f32 {
        self.size * crate::text_scale().0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpanStyle {
    pub decoration: TextDecoration,
    pub color: Option<Color>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringAnnotation {
    pub tag: String,
    pub item: String,
    pub range: Range<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyledRange {
    pub style: SpanStyle,
    pub range: Range<usize>,
}

/// Text with tagged ranges (byte offsets) and span styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotatedString {
    text: String,
    annotations: Vec<StringAnnotation>,
    styles: Vec<StyledRange>,
}

impl AnnotatedString {
    pub fn builder() -> AnnotatedStringBuilder {
        AnnotatedStringBuilder::default()
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn styles(&self) -> &[StyledRange] {
        &self.styles
    }
    pub fn annotations(&self) -> &[StringAnnotation] {
        &self.annotations
    }
    /// Annotations covering `offset`, in insertion order.
    pub fn annotations_at(&self, offset: usize) -> impl Iterator<Item = &StringAnnotation> {
        self.annotations
            .iter()
            .filter(move |a| a.range.start <= offset && offset < a.range.end)
    }
}

impl From<&str> for AnnotatedString {
    fn from(s: &str) -> Self {
        AnnotatedString {
            text: s.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub struct AnnotatedStringBuilder {
    inner: AnnotatedString,
}

impl AnnotatedStringBuilder {
    pub fn append(&mut self, s: &str) -> &mut Self {
        self.inner.text.push_str(s);
        self
    }

    pub fn len(&self) -> usize {
        self.inner.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.text.is_empty()
    }

    /// Ranges outside the text, or not on char boundaries, are dropped.
    pub fn add_string_annotation(
        &mut self,
        tag: impl Into<String>,
        item: impl Into<String>,
        range: Range<usize>,
    ) -> &mut Self {
        if self.check_range(&range) {
            self.inner.annotations.push(StringAnnotation {
                tag: tag.into(),
                item: item.into(),
                range,
            });
        }
        self
    }

    pub fn add_style(&mut self, style: SpanStyle, range: Range<usize>) -> &mut Self {
        if self.check_range(&range) {
            self.inner.styles.push(StyledRange { style, range });
        }
        self
    }

    pub fn build(&mut self) -> AnnotatedString {
        std::mem::take(&mut self.inner)
    }

    fn check_range(&self, range: &Range<usize>) -> bool {
        let text = &self.inner.text;
        let ok = range.start < range.end
            && range.end <= text.len()
            && text.is_char_boundary(range.start)
            && text.is_char_boundary(range.end);
        if !ok {
            log::warn!(
                "annotated string: dropping range {:?} for text of {} bytes",
                range,
                text.len()
            );
        }
        ok
    }
}
