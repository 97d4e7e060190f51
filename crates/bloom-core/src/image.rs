/// Where an image comes from. Fetching and decoding belong to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Remote image, e.g. `https://images.pexels.com/...`.
    Url(String),
    /// Drawable bundled with the application, by name.
    Resource(&'static str),
}

impl ImageSource {
    pub fn url(u: impl Into<String>) -> Self {
        ImageSource::Url(u.into())
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Url(u) => f.write_str(u),
            ImageSource::Resource(name) => write!(f, "res://{name}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Fit,
    Crop,
    FillBounds,
}

/// Built-in vector icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Home,
    FavoriteBorder,
    AccountCircle,
    ShoppingCart,
    Search,
    FilterList,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Home => "home",
            IconKind::FavoriteBorder => "favorite_border",
            IconKind::AccountCircle => "account_circle",
            IconKind::ShoppingCart => "shopping_cart",
            IconKind::Search => "search",
            IconKind::FilterList => "filter_list",
        }
    }
}
