//! The Bloom palette, type scale and shapes.

use bloom_core::*;

pub const PINK_100: Color = Color::from_rgb(0xFF, 0xF1, 0xF1);
pub const PINK_900: Color = Color::from_rgb(0x3F, 0x2C, 0x2C);
pub const GREEN_900: Color = Color::from_rgb(0x2D, 0x3B, 0x2D);
pub const GREEN_300: Color = Color::from_rgb(0xB8, 0xC9, 0xB8);
pub const GRAY: Color = Color::from_rgb(0x23, 0x23, 0x23);
pub const WHITE: Color = Color::WHITE;
/// White at 85% and 15% opacity.
pub const WHITE_850: Color = WHITE.with_alpha(217);
pub const WHITE_150: Color = WHITE.with_alpha(38);

pub const LIGHT_COLORS: ColorScheme = ColorScheme {
    primary: PINK_100,
    secondary: PINK_900,
    background: WHITE,
    surface: WHITE_850,
    on_primary: GRAY,
    on_secondary: WHITE,
    on_background: GRAY,
    on_surface: GRAY,
    is_light: true,
};

pub const DARK_COLORS: ColorScheme = ColorScheme {
    primary: GREEN_900,
    secondary: GREEN_300,
    background: GRAY,
    surface: WHITE_150,
    on_primary: WHITE,
    on_secondary: GRAY,
    on_background: WHITE,
    on_surface: WHITE_850,
    is_light: false,
};

const NUNITO_SANS: &str = "Nunito Sans";

const fn nunito(weight: FontWeight, size: f32) -> TextStyle {
    TextStyle {
        family: NUNITO_SANS,
        weight,
        size,
        letter_spacing: 0.0,
        align: TextAlign::Start,
        color: None,
    }
}

pub const BLOOM_TYPOGRAPHY: Typography = Typography {
    h1: nunito(FontWeight::Bold, 18.0),
    h2: nunito(FontWeight::Bold, 14.0),
    subtitle1: nunito(FontWeight::Light, 16.0),
    body1: nunito(FontWeight::Light, 14.0),
    body2: nunito(FontWeight::Light, 12.0),
    button: nunito(FontWeight::SemiBold, 14.0),
    caption: nunito(FontWeight::SemiBold, 12.0),
};

pub const BLOOM_SHAPES: Shapes = Shapes {
    small: 4.0,
    medium: 24.0,
};

pub fn colors_for(dark_theme: bool) -> ColorScheme {
    if dark_theme { DARK_COLORS } else { LIGHT_COLORS }
}

/// Provides the Bloom colors, typography and shapes to `content`.
pub fn BloomTheme<R>(dark_theme: bool, content: impl FnOnce() -> R) -> R {
    with_colors(colors_for(dark_theme), || {
        with_typography(BLOOM_TYPOGRAPHY, || with_shapes(BLOOM_SHAPES, content))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_scoped_to_its_content() {
        let inner = BloomTheme(true, || (colors(), typography().h1, shapes().medium));
        assert_eq!(inner.0, DARK_COLORS);
        assert_eq!(inner.1.family, "Nunito Sans");
        assert_eq!(inner.1.size, 18.0);
        assert_eq!(inner.2, 24.0);
        assert_ne!(colors(), DARK_COLORS);
    }

    #[test]
    fn palettes_match_their_hex_values() {
        assert_eq!(LIGHT_COLORS.primary.to_hex(), "#FFF1F1");
        assert_eq!(DARK_COLORS.background.to_hex(), "#232323");
        assert_eq!(LIGHT_COLORS.surface.3, 217);
    }
}
