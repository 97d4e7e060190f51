use crate::{Plant, Theme};

fn theme(id: u32, name: &str, image_url: &str, image_description: &str) -> Theme {
    Theme {
        id,
        name: name.into(),
        image_url: image_url.into(),
        image_description: image_description.into(),
    }
}

fn plant(id: u32, name: &str, image_url: &str) -> Plant {
    Plant {
        id,
        name: name.into(),
        description: "This is a description".into(),
        image_url: image_url.into(),
    }
}

/// Fake repository
pub struct ThemeRepository;

impl ThemeRepository {
    pub fn themes() -> Vec<Theme> {
        vec![
            theme(
                1,
                "Desert chic",
                "https://images.pexels.com/photos/2132227/pexels-photo-2132227.jpeg",
                "Assorted-color Flowers",
            ),
            theme(
                2,
                "Tiny terrariums",
                "https://images.pexels.com/photos/1400375/pexels-photo-1400375.jpeg",
                "Clear Glass Terrarium Jar With Mossy Plants",
            ),
            theme(
                3,
                "Jungle vibes",
                "https://images.pexels.com/photos/5699665/pexels-photo-5699665.jpeg",
                "Big green leaves of Monstera",
            ),
            theme(
                4,
                "Easy care",
                "https://images.pexels.com/photos/6208086/pexels-photo-6208086.jpeg",
                "Green plant with long leaves in pot at home",
            ),
            theme(
                5,
                "Statements",
                "https://images.pexels.com/photos/3511755/pexels-photo-3511755.jpeg",
                "Green Leaf Plant Indoors",
            ),
        ]
    }
}

/// Fake repository. Names and order are fixed; the photos are stand-ins
/// from the same stock library as the theme images.
pub struct PlantRepository;

impl PlantRepository {
    pub fn plants() -> Vec<Plant> {
        vec![
            plant(
                1,
                "Monstera",
                "https://images.pexels.com/photos/3097770/pexels-photo-3097770.jpeg",
            ),
            plant(
                2,
                "Aglaonema",
                "https://images.pexels.com/photos/4751978/pexels-photo-4751978.jpeg",
            ),
            plant(
                3,
                "Peace lily",
                "https://images.pexels.com/photos/4425201/pexels-photo-4425201.jpeg",
            ),
            plant(
                4,
                "Fiddle leaf tree",
                "https://images.pexels.com/photos/6208087/pexels-photo-6208087.jpeg",
            ),
            plant(
                5,
                "Snake plant",
                "https://images.pexels.com/photos/2123482/pexels-photo-2123482.jpeg",
            ),
            plant(
                6,
                "Pothos",
                "https://images.pexels.com/photos/1084199/pexels-photo-1084199.jpeg",
            ),
        ]
    }
}
