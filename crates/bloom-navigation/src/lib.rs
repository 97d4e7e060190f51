#![allow(non_snake_case)]
//! Route-based navigation with an explicit back stack.
//!
//! A [`NavController`] owns an ordered stack of entries, one per visited
//! destination. It only changes through [`NavController::navigate`],
//! [`NavController::back`] and [`NavController::restore_json`]; navigating to
//! a route the [`NavGraph`] does not declare is an error and leaves the stack
//! alone.

pub mod graph;

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use bloom_core::*;

pub use graph::{NavGraph, NavGraphBuilder};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no destination is declared for route `{route}`")]
pub struct UnknownRouteError {
    pub route: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("route `{0}` is declared more than once")]
    DuplicateRoute(String),
    #[error("start destination `{start}` of `{graph}` is not declared in it")]
    UnknownStart { graph: String, start: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("saved back stack is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("saved back stack is empty")]
    Empty,
    #[error("saved back stack names `{route}`, which is not a destination")]
    NotADestination { route: String },
}

/// Per-entry remembered values. Dropped with the entry when it is popped.
#[derive(Default)]
pub struct SavedState {
    map: RefCell<HashMap<&'static str, Box<dyn Any>>>,
}

impl SavedState {
    pub fn remember<T: 'static>(
        &self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        if let Some(b) = self.map.borrow().get(key) {
            match b.downcast_ref::<Rc<RefCell<T>>>() {
                Some(rc) => return rc.clone(),
                None => log::warn!("saved state `{key}` reused with a different type; replacing"),
            }
        }
        let rc = Rc::new(RefCell::new(init()));
        self.map.borrow_mut().insert(key, Box::new(rc.clone()));
        rc
    }
}

struct Entry {
    id: u64,
    route: String,
    saved: Rc<SavedState>,
}

struct BackState {
    entries: Vec<Entry>,
    next_id: u64,
}

impl BackState {
    fn push(&mut self, route: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            route,
            saved: Rc::new(SavedState::default()),
        });
    }
}

/// Handle to the back stack. Clones share the same stack, so event handlers
/// can hold one.
#[derive(Clone)]
pub struct NavController {
    graph: Rc<NavGraph>,
    inner: Rc<RefCell<BackState>>,
}

impl NavController {
    /// Starts with a single entry for the graph's start destination.
    pub fn new(graph: Rc<NavGraph>) -> Self {
        let mut state = BackState {
            entries: Vec::new(),
            next_id: 1,
        };
        state.push(graph.start_destination().to_string());
        Self {
            graph,
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Pushes the destination for `route` and makes it current.
    pub fn navigate(&self, route: &str) -> Result<(), UnknownRouteError> {
        let target = match self.graph.resolve(route) {
            Ok(t) => t.to_string(),
            Err(e) => {
                log::warn!("navigate: {e}");
                return Err(e);
            }
        };
        {
            let mut s = self.inner.borrow_mut();
            log::debug!(
                "navigate: {} -> {} (depth {})",
                s.entries.last().map(|e| e.route.as_str()).unwrap_or("-"),
                target,
                s.entries.len() + 1
            );
            s.push(target);
        }
        Ok(())
    }

    /// Pops the current entry. The last entry is never popped.
    pub fn back(&self) -> bool {
        let popped = {
            let mut s = self.inner.borrow_mut();
            if s.entries.len() <= 1 {
                return false;
            }
            s.entries.pop()
        };
        if let Some(e) = popped {
            log::debug!("back: left {} (entry {})", e.route, e.id);
        }
        true
    }

    pub fn current_route(&self) -> String {
        let s = self.inner.borrow();
        s.entries
            .last()
            .map(|e| e.route.clone())
            .unwrap_or_else(|| self.graph.start_destination().to_string())
    }

    pub fn depth(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Routes from bottom to top.
    pub fn back_stack(&self) -> Vec<String> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.route.clone())
            .collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.back_stack()).unwrap_or_else(|_| "[]".into())
    }

    /// Replaces the stack with saved routes. Every route must be a declared
    /// destination; on error the current stack is kept.
    pub fn restore_json(&self, json: &str) -> Result<(), RestoreError> {
        let routes: Vec<String> = serde_json::from_str(json)?;
        if routes.is_empty() {
            return Err(RestoreError::Empty);
        }
        if let Some(bad) = routes.iter().find(|r| !self.graph.is_destination(r)) {
            return Err(RestoreError::NotADestination { route: bad.clone() });
        }
        {
            let mut s = self.inner.borrow_mut();
            s.entries.clear();
            for r in routes {
                s.push(r);
            }
            log::info!("restored back stack of depth {}", s.entries.len());
        }
        Ok(())
    }

    fn top(&self) -> Option<(u64, String, Rc<SavedState>)> {
        let s = self.inner.borrow();
        s.entries
            .last()
            .map(|e| (e.id, e.route.clone(), e.saved.clone()))
    }
}

/// What a destination renderer gets to see.
pub struct EntryScope {
    id: u64,
    route: String,
    saved: Rc<SavedState>,
    nav: NavController,
}

impl EntryScope {
    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn route(&self) -> &str {
        &self.route
    }
    pub fn navigator(&self) -> NavController {
        self.nav.clone()
    }
    /// State kept as long as this entry stays on the stack.
    pub fn remember_saveable<T: 'static>(
        &self,
        slot: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        self.saved.remember(slot, init)
    }
}

/// Renders the top entry of `nav`.
pub fn NavHost(
    nav: &NavController,
    modifier: Modifier,
    render: impl FnOnce(&EntryScope) -> View,
) -> View {
    let content = match nav.top() {
        Some((id, route, saved)) => {
            let scope = EntryScope {
                id,
                route,
                saved,
                nav: nav.clone(),
            };
            vec![render(&scope)]
        }
        None => vec![],
    };
    View::new(0, ViewKind::Box)
        .modifier(modifier)
        .with_children(content)
}

/// Back-dispatcher
///
/// The platform calls `handle()` on the system back gesture; the app installs
/// a handler during composition.
pub mod back {
    use std::{cell::RefCell, rc::Rc};

    type Handler = Rc<dyn Fn() -> bool>;

    thread_local! {
        static H: RefCell<Option<Handler>> = RefCell::new(None);
    }

    pub fn set(handler: Option<Handler>) {
        H.with(|h| *h.borrow_mut() = handler);
    }

    /// Returns false when nothing consumed the back press.
    pub fn handle() -> bool {
        let handler = H.with(|h| h.borrow().clone());
        match handler {
            Some(handler) => handler(),
            None => false,
        }
    }
}

/// Routes system back presses to `nav`.
pub fn InstallBackHandler(nav: &NavController) {
    let nav = nav.clone();
    back::set(Some(Rc::new(move || nav.back())));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bloom_graph() -> Rc<NavGraph> {
        let graph = NavGraph::builder("welcome")
            .destination("welcome")
            .destination("logIn")
            .nested("main", "main/home", |g| {
                g.destination("main/home")
                    .destination("main/favorites")
                    .destination("main/profile")
                    .destination("main/cart");
            })
            .build()
            .expect("valid graph");
        Rc::new(graph)
    }

    #[test]
    fn starts_at_start_route() {
        let nav = NavController::new(bloom_graph());
        assert_eq!(nav.current_route(), "welcome");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_pushes_and_updates_current() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        assert_eq!(nav.current_route(), "logIn");
        assert_eq!(nav.depth(), 2);

        nav.navigate("main/home").unwrap();
        nav.navigate("main/favorites").unwrap();
        assert_eq!(nav.depth(), 4);
        assert_eq!(nav.current_route(), "main/favorites");
    }

    #[test]
    fn navigate_to_same_route_still_pushes() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("welcome").unwrap();
        assert_eq!(nav.back_stack(), ["welcome", "welcome"]);
    }

    #[test]
    fn nested_graph_resolves_to_its_start() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("main").unwrap();
        assert_eq!(nav.current_route(), "main/home");
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn unknown_route_is_an_error_and_changes_nothing() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        let before = nav.back_stack();

        let err = nav.navigate("nonexistent").unwrap_err();
        assert_eq!(
            err,
            UnknownRouteError {
                route: "nonexistent".into()
            }
        );
        assert_eq!(nav.current_route(), "logIn");
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.back_stack(), before);
    }

    #[test]
    fn back_pops_but_keeps_root() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        assert!(nav.back());
        assert_eq!(nav.current_route(), "welcome");
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn json_round_trip_and_rejections() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        nav.navigate("main").unwrap();
        let saved = nav.to_json();
        assert_eq!(saved, r#"["welcome","logIn","main/home"]"#);

        let other = NavController::new(bloom_graph());
        other.restore_json(&saved).unwrap();
        assert_eq!(other.back_stack(), nav.back_stack());

        assert!(matches!(other.restore_json("[]"), Err(RestoreError::Empty)));
        assert!(matches!(other.restore_json("{"), Err(RestoreError::Json(_))));
        assert!(matches!(
            other.restore_json(r#"["welcome","main"]"#),
            Err(RestoreError::NotADestination { route }) if route == "main"
        ));
        assert_eq!(other.depth(), 3);
    }

    #[test]
    fn saved_state_lives_with_its_entry() {
        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        let read = |nav: &NavController| {
            let mut out = String::new();
            NavHost(nav, Modifier::new(), |e| {
                let email = e.remember_saveable("email", String::new);
                if email.borrow().is_empty() {
                    email.borrow_mut().push_str("a@b.c");
                } else {
                    out = email.borrow().clone();
                }
                View::new(0, ViewKind::Box)
            });
            out
        };
        assert_eq!(read(&nav), "");
        assert_eq!(read(&nav), "a@b.c");

        nav.back();
        nav.navigate("logIn").unwrap();
        assert_eq!(read(&nav), "", "fresh entry starts empty");
    }

    #[test]
    fn saved_state_replaces_a_slot_of_another_type() {
        let saved = SavedState::default();
        saved.remember("query", || 7u32);
        let s = saved.remember("query", || String::from("fern"));
        assert_eq!(*s.borrow(), "fern");
        assert_eq!(*saved.remember("query", String::new).borrow(), "fern");
    }

    #[test]
    fn back_dispatcher_uses_installed_handler() {
        back::set(None);
        assert!(!back::handle());

        let nav = NavController::new(bloom_graph());
        nav.navigate("logIn").unwrap();
        InstallBackHandler(&nav);
        assert!(back::handle());
        assert_eq!(nav.current_route(), "welcome");
        assert!(!back::handle());
        back::set(None);
    }

    #[test]
    fn graph_rejects_duplicates_and_bad_starts() {
        let dup = NavGraph::builder("a")
            .destination("a")
            .nested("g", "a", |g| {
                g.destination("a");
            })
            .build();
        assert!(matches!(dup, Err(GraphError::DuplicateRoute(r)) if r == "a"));

        let bad_start = NavGraph::builder("x").destination("a").build();
        assert!(matches!(bad_start, Err(GraphError::UnknownStart { .. })));

        let bad_nested = NavGraph::builder("a")
            .destination("a")
            .nested("g", "g/missing", |g| {
                g.destination("g/one");
            })
            .build();
        assert!(matches!(
            bad_nested,
            Err(GraphError::UnknownStart { graph, .. }) if graph == "g"
        ));
    }

    #[test]
    fn graph_queries() {
        let g = bloom_graph();
        assert_eq!(g.parent_of("main/cart"), Some("main"));
        assert_eq!(g.parent_of("welcome"), None);
        assert_eq!(g.children_of("main").map(|c| c.len()), Some(4));
        assert!(g.children_of("welcome").is_none());
        assert!(g.contains("main") && !g.is_destination("main"));
        assert_eq!(g.routes().count(), 7);
    }
}
