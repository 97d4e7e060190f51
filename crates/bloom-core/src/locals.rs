//! # Theming and locals
//!
//! Bloom uses thread‑local "composition locals" for ambient UI parameters:
//!
//! - `ColorScheme`: colors for backgrounds, surfaces, text and controls.
//! - `Typography`: the text style scale (`h1` … `caption`).
//! - `Shapes`: corner radii for small and medium components.
//! - `Density`: dp→px scale factor.
//! - `TextScale`: user text scaling.
//!
//! Override them for a subtree with `with_colors`, `with_typography`,
//! `with_shapes`, `with_density` and `with_text_scale`:
//!
//! ```rust
//! use bloom_core::*;
//!
//! let dark = ColorScheme {
//!     background: Color::from_hex("#232323"),
//!     is_light: false,
//!     ..ColorScheme::default()
//! };
//!
//! with_colors(dark, || {
//!     assert!(!colors().is_light);
//! });
//! assert!(colors().is_light);
//! ```
//!
//! Widgets in `bloom-ui` read from `colors()`/`typography()` and avoid
//! hard‑coding values.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Color, FontWeight, TextStyle};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

fn with_local<T: Any, R>(value: T, f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _guard = Guard;
    f()
}

fn current<T: Any + Copy + Default>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Material‑style color roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    /// Brand color for bars and large surfaces.
    pub primary: Color,
    /// Accent color for buttons and selection controls.
    pub secondary: Color,
    /// App root.
    pub background: Color,
    /// Cards and sheets.
    pub surface: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_background: Color,
    pub on_surface: Color,
    pub is_light: bool,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: Color::from_hex("#6200EE"),
            secondary: Color::from_hex("#03DAC6"),
            background: Color::WHITE,
            surface: Color::WHITE,
            on_primary: Color::WHITE,
            on_secondary: Color::BLACK,
            on_background: Color::BLACK,
            on_surface: Color::BLACK,
            is_light: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub subtitle1: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub button: TextStyle,
    pub caption: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        let base = TextStyle::default();
        let sized = |size: f32, weight: FontWeight| TextStyle {
            size,
            weight,
            ..base
        };
        Self {
            h1: sized(96.0, FontWeight::Light),
            h2: sized(60.0, FontWeight::Light),
            subtitle1: sized(16.0, FontWeight::Normal),
            body1: sized(16.0, FontWeight::Normal),
            body2: sized(14.0, FontWeight::Normal),
            button: sized(14.0, FontWeight::SemiBold),
            caption: sized(12.0, FontWeight::Normal),
        }
    }
}

/// Corner radii in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shapes {
    pub small: f32,
    pub medium: f32,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            small: 4.0,
            medium: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextScale(pub f32);
impl Default for TextScale {
    fn default() -> Self {
        Self(1.0)
    }
}

pub fn with_colors<R>(colors: ColorScheme, f: impl FnOnce() -> R) -> R {
    with_local(colors, f)
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    with_local(typography, f)
}

pub fn with_shapes<R>(shapes: Shapes, f: impl FnOnce() -> R) -> R {
    with_local(shapes, f)
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_local(density, f)
}

pub fn with_text_scale<R>(ts: TextScale, f: impl FnOnce() -> R) -> R {
    with_local(ts, f)
}

pub fn colors() -> ColorScheme {
    current()
}

pub fn typography() -> Typography {
    current()
}

pub fn shapes() -> Shapes {
    current()
}

pub fn density() -> Density {
    current()
}

pub fn text_scale() -> TextScale {
    current()
}
