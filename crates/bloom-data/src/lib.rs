//! Read-only content shown by the Bloom screens.
//!
//! The catalogue is a value: build it once at startup with
//! [`StaticContent::new`] and hand it to the UI as a [`ContentProvider`].

mod catalogue;
mod selection;

use serde::{Deserialize, Serialize};

pub use catalogue::{PlantRepository, ThemeRepository};
pub use selection::Selection;

pub type ThemeId = u32;
pub type PlantId = u32;

/// A browsable collection, shown as a card in the themes row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub image_url: String,
    pub image_description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// Source of the home screen content. Both lists are fixed for the life of
/// the provider and keep their declaration order.
pub trait ContentProvider {
    fn list_themes(&self) -> &[Theme];
    fn list_plants(&self) -> &[Plant];
}

/// The built-in catalogue.
#[derive(Clone, Debug)]
pub struct StaticContent {
    themes: Vec<Theme>,
    plants: Vec<Plant>,
}

impl StaticContent {
    pub fn new() -> Self {
        Self {
            themes: ThemeRepository::themes(),
            plants: PlantRepository::plants(),
        }
    }
}

impl Default for StaticContent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for StaticContent {
    fn list_themes(&self) -> &[Theme] {
        &self.themes
    }
    fn list_plants(&self) -> &[Plant] {
        &self.plants
    }
}
