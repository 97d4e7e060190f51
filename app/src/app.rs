//! The application root: theme, navigation host and bottom bar.

use std::rc::Rc;

use bloom_core::*;
use bloom_data::{ContentProvider, Plant, Selection, Theme};
use bloom_navigation::{EntryScope, GraphError, InstallBackHandler, NavController, NavHost};
use bloom_ui::*;

use crate::nav_graph::{Destinations, build_graph};
use crate::theme::BloomTheme;
use crate::ui::login::{Credentials, LogIn, LogInCallbacks};
use crate::ui::main::home::{Home, HomeCallbacks};
use crate::ui::main::{BottomBar, EmptySection, MainSection};
use crate::ui::welcome::Welcome;

/// Presentation settings applied through composition locals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppSettings {
    pub dark_theme: bool,
    pub density: f32,
    pub text_scale: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            density: 1.0,
            text_scale: 1.0,
        }
    }
}

/// Where screen events end up. The defaults only log.
#[derive(Clone)]
pub struct AppCallbacks {
    pub on_create_account: Rc<dyn Fn()>,
    pub log_in: LogInCallbacks,
    pub home: HomeCallbacks,
}

impl Default for AppCallbacks {
    fn default() -> Self {
        Self {
            on_create_account: Rc::new(|| log::info!("create account requested")),
            log_in: LogInCallbacks {
                on_log_in: Rc::new(|email: String, _: String| log::info!("log in as {email:?}")),
                on_terms_of_use: Rc::new(|| log::info!("terms of use opened")),
                on_privacy_policy: Rc::new(|| log::info!("privacy policy opened")),
            },
            home: HomeCallbacks {
                on_search: Rc::new(|q: String| log::info!("search {q:?}")),
                on_theme_selected: Rc::new(|t: &Theme| log::info!("theme {} selected", t.name)),
                on_filter_requested: Rc::new(|| log::debug!("filter requested")),
                on_plant_toggled: Rc::new(|p: &Plant, checked: bool| {
                    log::debug!("plant {} checked={checked}", p.name)
                }),
            },
        }
    }
}

pub struct BloomApp {
    content: Rc<dyn ContentProvider>,
    nav: NavController,
    selection: Signal<Selection>,
    settings: AppSettings,
    callbacks: AppCallbacks,
}

impl BloomApp {
    /// Starts at the welcome screen with the first plant selected.
    pub fn new(content: Rc<dyn ContentProvider>) -> Result<Self, GraphError> {
        let nav = NavController::new(Rc::new(build_graph()?));
        let selection = signal(Selection::of(content.list_plants().first()));
        Ok(Self {
            content,
            nav,
            selection,
            settings: AppSettings::default(),
            callbacks: AppCallbacks::default(),
        })
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_callbacks(mut self, callbacks: AppCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn navigator(&self) -> NavController {
        self.nav.clone()
    }

    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    /// Builds the current frame.
    pub fn compose(&self) -> View {
        InstallBackHandler(&self.nav);
        let s = self.settings;
        compose(|| {
            BloomTheme(s.dark_theme, || {
                with_density(Density { scale: s.density }, || {
                    with_text_scale(TextScale(s.text_scale), || self.scaffold())
                })
            })
        })
    }

    /// Hands `frame` to `backend` under this app's density and text scale,
    /// which the backend uses to turn dp and sp into pixels.
    pub fn present(
        &self,
        frame: &View,
        backend: &mut impl RenderBackend,
    ) -> Result<(), RenderError> {
        let s = self.settings;
        with_density(Density { scale: s.density }, || {
            with_text_scale(TextScale(s.text_scale), || backend.frame(frame))
        })
    }

    /// Composes and presents one frame.
    pub fn render(&self, backend: &mut impl RenderBackend) -> Result<(), RenderError> {
        let frame = self.compose();
        self.present(&frame, backend)
    }

    fn scaffold(&self) -> View {
        Surface(
            Modifier::new().fill_max_size(),
            colors().background,
            Column(Modifier::new().fill_max_size()).child((
                NavHost(&self.nav, Modifier::new().weight(1.0), |entry| {
                    self.destination(entry)
                }),
                BottomBar(&self.nav),
            )),
        )
    }

    fn destination(&self, entry: &EntryScope) -> View {
        let route = entry.route();
        if route == Destinations::Welcome.route() {
            let nav = entry.navigator();
            let on_create_account = self.callbacks.on_create_account.clone();
            return Welcome(
                move || on_create_account(),
                move || navigate_or_log(&nav, Destinations::LogIn.route()),
            );
        }
        if route == Destinations::LogIn.route() {
            let credentials = Credentials {
                email: entry.remember_saveable("email", String::new),
                password: entry.remember_saveable("password", String::new),
            };
            let nav = entry.navigator();
            let report = self.callbacks.log_in.on_log_in.clone();
            let callbacks = LogInCallbacks {
                on_log_in: Rc::new(move |email: String, password: String| {
                    report(email, password);
                    navigate_or_log(&nav, Destinations::Main.route());
                }),
                ..self.callbacks.log_in.clone()
            };
            return LogIn(&credentials, &callbacks);
        }
        match MainSection::from_route(route) {
            Some(MainSection::Home) => self.home(entry),
            Some(section) => EmptySection(section),
            None => {
                log::warn!("no screen for route {route:?}");
                Box(Modifier::new())
            }
        }
    }

    fn home(&self, entry: &EntryScope) -> View {
        let selection = self.selection.clone();
        let report = self.callbacks.home.on_plant_toggled.clone();
        let callbacks = HomeCallbacks {
            on_plant_toggled: Rc::new(move |plant: &Plant, checked: bool| {
                selection.update(|s| s.set(plant, checked));
                report(plant, checked);
            }),
            ..self.callbacks.home.clone()
        };
        Home(
            Modifier::new(),
            entry.remember_saveable("query", String::new),
            self.content.list_themes(),
            self.content.list_plants(),
            &self.selection.get(),
            &callbacks,
        )
    }
}

fn navigate_or_log(nav: &NavController, route: &str) {
    if let Err(e) = nav.navigate(route) {
        log::error!("{e}");
    }
}
