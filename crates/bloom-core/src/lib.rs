//! # Views, locals and signals
//!
//! A screen in Bloom is a plain function that returns a [`View`] tree. Views
//! carry a [`ViewKind`], a [`Modifier`] with layout hints and event handlers,
//! and their children. Nothing here lays out or paints; a [`RenderBackend`]
//! presents the finished tree.
//!
//! ## Composition
//!
//! [`compose`] runs a builder under the caller's composition locals and
//! numbers the resulting nodes in pre-order:
//!
//! ```rust
//! use bloom_core::*;
//!
//! let root = compose(|| {
//!     View::new(0, ViewKind::Box).with_children(vec![View::new(0, ViewKind::Spacer)])
//! });
//! assert_eq!(root.id, 1);
//! assert_eq!(root.children[0].id, 2);
//! ```
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to shared state:
//!
//! ```rust
//! use bloom_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```

pub mod color;
pub mod geometry;
pub mod image;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod render_api;
pub mod runtime;
pub mod signal;
pub mod text;
pub mod view;

pub use color::*;
pub use geometry::*;
pub use image::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use render_api::*;
pub use runtime::*;
pub use signal::*;
pub use text::*;
pub use view::*;
