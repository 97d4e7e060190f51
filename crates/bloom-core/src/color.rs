#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
    /// Parses `#RRGGBB` or `#RRGGBBAA`. Malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, fallback: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => Color::BLACK,
        }
    }
    pub const fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
    /// Same color with its alpha scaled by `fraction` (0.0..=1.0).
    pub fn copy_alpha(self, fraction: f32) -> Self {
        let a = (fraction.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }

    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
