//! Routes of the Bloom app and the graph that declares them.

use bloom_navigation::{GraphError, NavGraph};

use crate::ui::main::MainSection;

/// Top-level destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destinations {
    Welcome,
    LogIn,
    Main,
}

impl Destinations {
    pub const fn route(self) -> &'static str {
        match self {
            Destinations::Welcome => "welcome",
            Destinations::LogIn => "logIn",
            Destinations::Main => "main",
        }
    }
}

/// `welcome` and `logIn` at the root, and a nested `main` graph starting at
/// its home section.
pub fn build_graph() -> Result<NavGraph, GraphError> {
    let mut builder = NavGraph::builder(Destinations::Welcome.route());
    builder
        .destination(Destinations::Welcome.route())
        .destination(Destinations::LogIn.route())
        .nested(Destinations::Main.route(), MainSection::Home.route(), |g| {
            for section in MainSection::ALL {
                g.destination(section.route());
            }
        });
    builder.build()
}
