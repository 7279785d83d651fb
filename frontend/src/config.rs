use log::Level;

pub const BRAND: &str = "Mistakr";
pub const CONTACT_EMAIL: &str = "mistakr.official@gmail.com";

/// Pixels scrolled before the navbar picks up its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
