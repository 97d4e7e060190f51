pub use crate::color::Color;
pub use crate::geometry::{Alignment, Arrangement, PaddingValues, Size};
pub use crate::image::{IconKind, ImageFit, ImageSource};
pub use crate::locals::{
    ColorScheme, Density, Dp, Shapes, TextScale, Typography, colors, density, dp_to_px, shapes,
    text_scale, typography, with_colors, with_density, with_shapes, with_text_scale,
    with_typography,
};
pub use crate::modifier::Modifier;
pub use crate::render_api::{RenderBackend, RenderError};
pub use crate::runtime::compose;
pub use crate::signal::{Signal, signal};
pub use crate::text::{
    AnnotatedString, FontWeight, SpanStyle, TextAlign, TextDecoration, TextStyle,
};
pub use crate::view::{ButtonStyle, KeyboardType, View, ViewId, ViewKind};
