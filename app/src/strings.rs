//! User-visible strings.

pub const APP_NAME: &str = "Bloom";

pub const WELCOME_TAGLINE: &str = "Beautiful home garden solutions";
pub const WELCOME_CREATE_ACCOUNT: &str = "Create account";
pub const WELCOME_LOG_IN: &str = "Log in";

pub const LOG_IN_TITLE: &str = "Log in with email";
pub const LOG_IN_EMAIL: &str = "Email address";
pub const LOG_IN_PASSWORD: &str = "Password (8+ characters)";
pub const LOG_IN_CONSENT: &str =
    "By clicking below, you agree to our Terms of Use and consent to our Privacy Policy.";
pub const LOG_IN_TERMS_OF_USE: &str = "Terms of Use";
pub const LOG_IN_PRIVACY_POLICY: &str = "Privacy Policy";
pub const LOG_IN_BUTTON: &str = "Log in";

pub const HOME_SEARCH: &str = "Search";
pub const HOME_THEMES: &str = "Browse themes";
pub const HOME_PLANTS: &str = "Design your home garden";
pub const HOME_FILTER_PLANTS: &str = "Filter plants";

pub const MAIN_HOME: &str = "Home";
pub const MAIN_FAVORITES: &str = "Favorites";
pub const MAIN_PROFILE: &str = "Profile";
pub const MAIN_CART: &str = "Cart";
