//! Spin button: press feedback and input gating

/// Scale-approach speed per frame for press feedback
const PRESS_APPROACH: f32 = 0.2;
/// Snap threshold for ending the press animation
const PRESS_SNAP: f32 = 0.01;
/// Scale multiplier while held down
const PRESSED_SCALE: f32 = 0.8;

/// The spin button. Disabled means input is gated and the sprite dims;
/// the engine re-enables it when a spin settles.
#[derive(Debug, Clone)]
pub struct SpinButton {
    enabled: bool,
    pressed: bool,
    screen_scale: f32,
    scale: f32,
    target_scale: f32,
}

impl SpinButton {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pressed: false,
            screen_scale: 1.0,
            scale: 1.0,
            target_scale: 1.0,
        }
    }

    /// Apply the responsive UI scale (re-targets the press animation)
    pub fn set_screen_scale(&mut self, screen_scale: f32) {
        self.screen_scale = screen_scale;
        self.retarget();
    }

    /// Gate or un-gate input; a disabled button also releases any press
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
            self.retarget();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sprite alpha: dimmed while disabled
    pub fn alpha(&self) -> f32 {
        if self.enabled {
            1.0
        } else {
            0.5
        }
    }

    /// Register a press. Returns `false` (and does nothing) while gated.
    pub fn press(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.pressed = true;
        self.retarget();
        true
    }

    /// Register a release (also for pointer-out / release-outside)
    pub fn release(&mut self) {
        self.pressed = false;
        self.retarget();
    }

    /// Advance the press-feedback animation one frame
    pub fn tick(&mut self) {
        let step = (self.target_scale - self.scale) * PRESS_APPROACH;
        self.scale += step;
        if (self.scale - self.target_scale).abs() < PRESS_SNAP {
            self.scale = self.target_scale;
        }
    }

    /// Current sprite scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Hit test a point against the button's drawn rect (centered)
    pub fn contains(&self, point: (f32, f32), center: (f32, f32), size: (f32, f32)) -> bool {
        let half_w = size.0 * self.scale / 2.0;
        let half_h = size.1 * self.scale / 2.0;
        (point.0 - center.0).abs() <= half_w && (point.1 - center.1).abs() <= half_h
    }

    fn retarget(&mut self) {
        let pressed = if self.pressed { PRESSED_SCALE } else { 1.0 };
        self.target_scale = pressed * self.screen_scale;
    }
}

impl Default for SpinButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_shrinks_and_release_restores() {
        let mut button = SpinButton::new();
        assert!(button.press());
        for _ in 0..100 {
            button.tick();
        }
        assert_eq!(button.scale(), 0.8);

        button.release();
        for _ in 0..100 {
            button.tick();
        }
        assert_eq!(button.scale(), 1.0);
    }

    #[test]
    fn test_disabled_button_ignores_presses() {
        let mut button = SpinButton::new();
        button.set_enabled(false);
        assert!(!button.press());
        assert_eq!(button.alpha(), 0.5);

        button.set_enabled(true);
        assert!(button.press());
        assert_eq!(button.alpha(), 1.0);
    }

    #[test]
    fn test_screen_scale_compounds_press_scale() {
        let mut button = SpinButton::new();
        button.set_screen_scale(0.5);
        button.press();
        for _ in 0..100 {
            button.tick();
        }
        assert!((button.scale() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_hit_test() {
        let button = SpinButton::new();
        assert!(button.contains((100.0, 100.0), (100.0, 100.0), (50.0, 50.0)));
        assert!(button.contains((120.0, 90.0), (100.0, 100.0), (50.0, 50.0)));
        assert!(!button.contains((200.0, 100.0), (100.0, 100.0), (50.0, 50.0)));
    }
}
