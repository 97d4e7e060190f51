#![allow(non_snake_case)]
//! Bloom, a plant shop demo.
//!
//! [`BloomApp`] owns the navigation state and composes one frame at a time;
//! [`host::Host`] drives it from line commands and prints frames through the
//! devtools text backend.
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use bloom::BloomApp;
//! use bloom_data::StaticContent;
//! use bloom_devtools::Inspector;
//!
//! let app = BloomApp::new(Rc::new(StaticContent::new())).unwrap();
//! let frame = app.compose();
//! Inspector::new(&frame).click("Log in").unwrap();
//! assert_eq!(app.navigator().current_route(), "logIn");
//! ```

pub mod app;
pub mod config;
pub mod host;
pub mod nav_graph;
pub mod strings;
pub mod theme;
pub mod ui;

pub use app::{AppCallbacks, AppSettings, BloomApp};
pub use config::{ConfigError, HostConfig};
pub use nav_graph::{Destinations, build_graph};
