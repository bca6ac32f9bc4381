//! Motion defaults shared by hooks and components.

#[cfg(debug_assertions)]
pub fn is_dev() -> bool {
    true // Configuration errors panic while developing
}

#[cfg(not(debug_assertions))]
pub fn is_dev() -> bool {
    false // Production logs and renders content statically
}

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";
pub const DEFAULT_STAGGER_S: f64 = 0.1;
pub const TEXT_STAGGER_S: f64 = 0.03;

pub const COUNT_UP_DURATION_MS: f64 = 2000.0;
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

pub const PARALLAX_OFFSET: f64 = 50.0;
pub const PARALLAX_SPEED: f64 = 0.5;

pub const MAGNETIC_STRENGTH: f64 = 0.2;
pub const MAGNETIC_DISTANCE: f64 = 100.0;

pub const ACCORDION_DURATION_MS: u32 = 300;

/// Pixels scrolled before the nav switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: i32 = 80;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";
