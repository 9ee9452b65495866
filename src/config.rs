use log::Level;

pub const BUSINESS_NAME: &str = "Home Transformations";
pub const TAGLINE: &str = "Building dreams, one space at a time";

/// Fraction of a section that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset (px) after which the nav bar switches to its solid style.
pub const NAV_SCROLL_OFFSET: f64 = 50.0;

pub const SPLASH_DURATION_MS: u32 = 2000;
pub const SPLASH_FADE_MS: u32 = 1000;

pub const CONTACT_CONFIRMATION_MS: u32 = 5000;

/// Per-item delay used for staggered reveals inside a section.
pub const STAGGER_STEP_MS: u32 = 150;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", index as u32 * STAGGER_STEP_MS)
}
