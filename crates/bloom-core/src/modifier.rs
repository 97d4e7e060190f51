use std::rc::Rc;

use crate::{Alignment, Callback, Color, PaddingValues, Size};

/// Distance from the top of a text node to its first baseline, and from its
/// last baseline to the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaselinePadding {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<PaddingValues>,
    pub baseline_padding: Option<BaselinePadding>,
    pub background: Option<Color>,
    pub weight: Option<f32>,
    pub align: Option<Alignment>,
    pub clip_rounded: Option<f32>,
    pub elevation: Option<f32>,
    pub on_click: Option<Callback>,
    /// Stable name used by the inspector and tests to find a node.
    pub test_tag: Option<String>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max_w", &self.fill_max_w)
            .field("fill_max_h", &self.fill_max_h)
            .field("padding", &self.padding)
            .field("baseline_padding", &self.baseline_padding)
            .field("background", &self.background)
            .field("weight", &self.weight)
            .field("align", &self.align)
            .field("clip_rounded", &self.clip_rounded)
            .field("elevation", &self.elevation)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("test_tag", &self.test_tag)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    /// Square size, the common case for icons and cards.
    pub fn size_dp(self, v: f32) -> Self {
        self.size(v, v)
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }

    // Padding calls accumulate, so `.padding_top(40.0).padding_horizontal(16.0)`
    // keeps both insets.
    pub fn padding_values(mut self, p: PaddingValues) -> Self {
        self.padding = Some(self.padding.unwrap_or_default() + p);
        self
    }
    pub fn padding(self, v: f32) -> Self {
        self.padding_values(PaddingValues::all(v))
    }
    pub fn padding_horizontal(self, v: f32) -> Self {
        self.padding_values(PaddingValues::horizontal(v))
    }
    pub fn padding_vertical(self, v: f32) -> Self {
        self.padding_values(PaddingValues::vertical(v))
    }
    pub fn padding_top(self, v: f32) -> Self {
        self.padding_values(PaddingValues {
            top: v,
            ..PaddingValues::default()
        })
    }
    pub fn padding_start(self, v: f32) -> Self {
        self.padding_values(PaddingValues {
            start: v,
            ..PaddingValues::default()
        })
    }
    pub fn padding_from_baseline(mut self, top: f32, bottom: f32) -> Self {
        self.baseline_padding = Some(BaselinePadding { top, bottom });
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    /// Share of the remaining main-axis space inside a `Row`/`Column`.
    pub fn weight(mut self, w: f32) -> Self {
        self.weight = Some(w);
        self
    }
    pub fn align(mut self, a: Alignment) -> Self {
        self.align = Some(a);
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    pub fn elevation(mut self, dp: f32) -> Self {
        self.elevation = Some(dp);
        self
    }
    pub fn clickable(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }
}
