//! Declared destinations.
//!
//! A graph is a tree of routes: plain destinations, and nested graphs that
//! group destinations under their own route and name a start destination.
//! Routes are unique across the whole tree.
//!
//! ```rust
//! use bloom_navigation::NavGraph;
//!
//! let graph = NavGraph::builder("welcome")
//!     .destination("welcome")
//!     .nested("main", "main/home", |g| {
//!         g.destination("main/home").destination("main/cart");
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.resolve("main").unwrap(), "main/home");
//! assert!(graph.resolve("nope").is_err());
//! ```

use std::collections::HashMap;

use crate::{GraphError, UnknownRouteError};

#[derive(Clone, Debug)]
enum NodeKind {
    Destination,
    Nested { start: String, children: Vec<String> },
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<String>,
    kind: NodeKind,
}

#[derive(Clone, Debug)]
pub struct NavGraph {
    start: String,
    nodes: HashMap<String, Node>,
    /// Declaration order, for listing.
    order: Vec<String>,
}

impl NavGraph {
    pub fn builder(start: impl Into<String>) -> NavGraphBuilder {
        NavGraphBuilder {
            start: start.into(),
            nodes: HashMap::new(),
            order: Vec::new(),
            parents: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// The destination shown first, with nested graphs resolved.
    pub fn start_destination(&self) -> &str {
        // `build` guarantees the start chain ends at a destination.
        self.resolve(&self.start).unwrap_or(&self.start)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.nodes.contains_key(route)
    }

    /// True for plain destinations, false for nested graphs and unknown routes.
    pub fn is_destination(&self, route: &str) -> bool {
        matches!(
            self.nodes.get(route).map(|n| &n.kind),
            Some(NodeKind::Destination)
        )
    }

    /// Maps a route to the destination that navigating to it shows. Nested
    /// graphs resolve to their start destination.
    pub fn resolve<'a>(&'a self, route: &'a str) -> Result<&'a str, UnknownRouteError> {
        let mut current = route;
        // Nested starts are children, so the chain only descends.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(current).map(|n| &n.kind) {
                Some(NodeKind::Destination) => return Ok(current),
                Some(NodeKind::Nested { start, .. }) => current = start,
                None => break,
            }
        }
        Err(UnknownRouteError {
            route: route.to_string(),
        })
    }

    /// Route of the nested graph that declares `route`, if any.
    pub fn parent_of(&self, route: &str) -> Option<&str> {
        self.nodes.get(route)?.parent.as_deref()
    }

    /// Direct children of a nested graph, in declaration order.
    pub fn children_of(&self, graph: &str) -> Option<&[String]> {
        match &self.nodes.get(graph)?.kind {
            NodeKind::Nested { children, .. } => Some(children),
            NodeKind::Destination => None,
        }
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

pub struct NavGraphBuilder {
    start: String,
    nodes: HashMap<String, Node>,
    order: Vec<String>,
    parents: Vec<String>,
    duplicates: Vec<String>,
}

impl NavGraphBuilder {
    fn add(&mut self, route: String, kind: NodeKind) {
        if self.nodes.contains_key(&route) {
            self.duplicates.push(route);
            return;
        }
        let parent = self.parents.last().cloned();
        if let Some(p) = &parent
            && let Some(Node {
                kind: NodeKind::Nested { children, .. },
                ..
            }) = self.nodes.get_mut(p)
        {
            children.push(route.clone());
        }
        self.order.push(route.clone());
        self.nodes.insert(route, Node { parent, kind });
    }

    pub fn destination(&mut self, route: impl Into<String>) -> &mut Self {
        self.add(route.into(), NodeKind::Destination);
        self
    }

    /// Declares a nested graph; `body` declares its members.
    pub fn nested(
        &mut self,
        route: impl Into<String>,
        start: impl Into<String>,
        body: impl FnOnce(&mut NavGraphBuilder),
    ) -> &mut Self {
        let route = route.into();
        self.add(
            route.clone(),
            NodeKind::Nested {
                start: start.into(),
                children: Vec::new(),
            },
        );
        self.parents.push(route);
        body(self);
        self.parents.pop();
        self
    }

    pub fn build(&mut self) -> Result<NavGraph, GraphError> {
        if let Some(route) = self.duplicates.first() {
            return Err(GraphError::DuplicateRoute(route.clone()));
        }
        if !self.nodes.contains_key(&self.start) {
            return Err(GraphError::UnknownStart {
                graph: "root".into(),
                start: self.start.clone(),
            });
        }
        for route in &self.order {
            if let Some(Node {
                kind: NodeKind::Nested { start, children },
                ..
            }) = self.nodes.get(route)
                && !children.contains(start)
            {
                return Err(GraphError::UnknownStart {
                    graph: route.clone(),
                    start: start.clone(),
                });
            }
        }
        let graph = NavGraph {
            start: self.start.clone(),
            nodes: std::mem::take(&mut self.nodes),
            order: std::mem::take(&mut self.order),
        };
        log::debug!(
            "nav graph: {} routes, start '{}'",
            graph.order.len(),
            graph.start
        );
        Ok(graph)
    }
}
