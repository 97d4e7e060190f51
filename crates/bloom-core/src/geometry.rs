#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Per-edge insets in dp. `start`/`end` follow the layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub start: f32,
    pub end: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub const fn all(v: f32) -> Self {
        Self {
            start: v,
            end: v,
            top: v,
            bottom: v,
        }
    }
    pub const fn horizontal(v: f32) -> Self {
        Self {
            start: v,
            end: v,
            top: 0.0,
            bottom: 0.0,
        }
    }
    pub const fn vertical(v: f32) -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            top: v,
            bottom: v,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.start == 0.0 && self.end == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }
}

impl std::ops::Add for PaddingValues {
    type Output = PaddingValues;

    fn add(self, rhs: Self) -> Self::Output {
        PaddingValues {
            start: self.start + rhs.start,
            end: self.end + rhs.end,
            top: self.top + rhs.top,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    CenterHorizontally,
    CenterStart,
    End,
}

/// Main-axis placement for rows, columns and lazy lists.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Arrangement {
    #[default]
    Start,
    SpaceBetween,
    SpacedBy(f32),
}
