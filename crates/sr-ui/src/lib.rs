//! # sr-ui — UI chrome for SpinReel
//!
//! Widget state and layout math for the spin button, the score panel, and
//! the sound toggle. Drawing stays in the frontend binary; these types hold
//! no authoritative game state and no rendering dependencies.

pub mod button;
pub mod panel;
pub mod toggle;

pub use button::*;
pub use panel::*;
pub use toggle::*;

/// Responsive UI scale from the live screen width
pub fn ui_scale(screen_width: f32) -> f32 {
    if screen_width >= 1280.0 {
        1.0
    } else if screen_width >= 1024.0 {
        0.85
    } else if screen_width >= 480.0 {
        0.75
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_scale_breakpoints() {
        assert_eq!(ui_scale(1920.0), 1.0);
        assert_eq!(ui_scale(1280.0), 1.0);
        assert_eq!(ui_scale(1100.0), 0.85);
        assert_eq!(ui_scale(800.0), 0.75);
        assert_eq!(ui_scale(320.0), 0.5);
    }
}
