use std::collections::HashSet;

use crate::{Plant, PlantId};

/// Plants currently checked in the list, by identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<PlantId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of<'a>(plants: impl IntoIterator<Item = &'a Plant>) -> Self {
        Self {
            ids: plants.into_iter().map(|p| p.id).collect(),
        }
    }

    pub fn contains(&self, plant: &Plant) -> bool {
        self.ids.contains(&plant.id)
    }

    pub fn set(&mut self, plant: &Plant, checked: bool) {
        if checked {
            self.ids.insert(plant.id);
        } else {
            self.ids.remove(&plant.id);
        }
    }

    /// Flips `plant` and returns its new state.
    pub fn toggle(&mut self, plant: &Plant) -> bool {
        let checked = !self.contains(plant);
        self.set(plant, checked);
        checked
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
