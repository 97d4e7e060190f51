//! The `main` graph: four sections behind a bottom navigation bar.

pub mod home;

use std::rc::Rc;

use bloom_core::*;
use bloom_navigation::NavController;
use bloom_ui::*;

use crate::strings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MainSection {
    Home,
    Favorites,
    Profile,
    Cart,
}

impl MainSection {
    /// Bottom bar order.
    pub const ALL: [MainSection; 4] = [
        MainSection::Home,
        MainSection::Favorites,
        MainSection::Profile,
        MainSection::Cart,
    ];

    pub const fn route(self) -> &'static str {
        match self {
            MainSection::Home => "main/home",
            MainSection::Favorites => "main/favorites",
            MainSection::Profile => "main/profile",
            MainSection::Cart => "main/cart",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MainSection::Home => strings::MAIN_HOME,
            MainSection::Favorites => strings::MAIN_FAVORITES,
            MainSection::Profile => strings::MAIN_PROFILE,
            MainSection::Cart => strings::MAIN_CART,
        }
    }

    pub const fn icon(self) -> IconKind {
        match self {
            MainSection::Home => IconKind::Home,
            MainSection::Favorites => IconKind::FavoriteBorder,
            MainSection::Profile => IconKind::AccountCircle,
            MainSection::Cart => IconKind::ShoppingCart,
        }
    }

    pub fn from_route(route: &str) -> Option<MainSection> {
        Self::ALL.into_iter().find(|s| s.route() == route)
    }
}

/// Bar for the `main` sections, or `None` when the current route is not one
/// of them. The item for the current route is selected; tapping an item
/// navigates to its section.
pub fn BottomBar(nav: &NavController) -> Option<View> {
    let current = MainSection::from_route(&nav.current_route())?;
    let items = MainSection::ALL
        .into_iter()
        .map(|section| {
            let nav = nav.clone();
            NavItem {
                icon: section.icon(),
                label: section.label().to_string(),
                selected: section == current,
                on_click: Rc::new(move || {
                    if nav.current_route() == section.route() {
                        return;
                    }
                    if let Err(e) = nav.navigate(section.route()) {
                        log::error!("bottom bar: {e}");
                    }
                }),
            }
        })
        .collect();
    Some(BottomNavigation(
        Modifier::new().fill_max_width().height(56.0),
        items,
    ))
}

/// Favorites, profile and cart have no content yet.
pub fn EmptySection(section: MainSection) -> View {
    Box(Modifier::new().fill_max_size().test_tag(section.route()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_sections() {
        for s in MainSection::ALL {
            assert_eq!(MainSection::from_route(s.route()), Some(s));
        }
        assert_eq!(MainSection::from_route("main"), None);
        assert_eq!(MainSection::from_route("welcome"), None);
    }
}
