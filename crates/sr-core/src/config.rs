//! Game configuration

use serde::{Deserialize, Serialize};

/// Grid specification (square: `size` reels × `size` visible rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of reels, and visible rows per reel
    pub size: u8,
    /// Rendered symbol size in pixels (square)
    pub symbol_px: f32,
    /// Symbol alphabet: indices are drawn from `1..=symbol_alphabet`
    pub symbol_alphabet: u8,
    /// Credits paid per symbol in a winning run
    pub symbol_value: u32,
    /// Asset alias prefix ("sym" → "sym1-symbol", "sym1-frame", ...)
    pub symbol_prefix: String,
}

impl GridConfig {
    /// Total cells held per reel column. Each column carries `size²` cells
    /// so the scroll can wrap without ever showing a gap; only the first
    /// `size` rows are live result positions at rest.
    pub fn cells_per_reel(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Height of the visible reel window in pixels
    pub fn reel_height_px(&self) -> f32 {
        self.size as f32 * self.symbol_px
    }

    /// Width of the full grid in pixels
    pub fn width_px(&self) -> f32 {
        self.size as f32 * self.symbol_px
    }

    /// Vertical center of a row slot (rows may exceed `size` for parked
    /// filler cells below the visible window)
    pub fn row_center_y(&self, row: usize) -> f32 {
        row as f32 * self.symbol_px + self.symbol_px / 2.0
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 3,
            symbol_px: 200.0,
            symbol_alphabet: 4,
            symbol_value: 1,
            symbol_prefix: "sym".into(),
        }
    }
}

/// Bet and balance configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BetConfig {
    /// Cost of a single spin, debited before the outcome is known
    pub bet: u32,
    /// Balance at process start (nothing is persisted across sessions)
    pub starting_balance: i64,
}

impl Default for BetConfig {
    fn default() -> Self {
        Self {
            bet: 2,
            starting_balance: 100,
        }
    }
}

/// Timing profile selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimingProfile {
    /// Normal gameplay timing
    #[default]
    Normal,
    /// Fast mode for demos and impatient testers
    Turbo,
    /// Custom timing (produced by `SpinTiming::scaled`)
    Custom,
}

/// All animation timing constants for a spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Profile type
    pub profile: TimingProfile,
    /// Spin duration of reel 0 (ms)
    pub base_duration_ms: f64,
    /// Extra duration per reel index, producing the left-to-right stop cascade (ms)
    pub reel_offset_ms: f64,
    /// Window before each reel's stop during which scroll speed ramps down (ms)
    pub slowdown_window_ms: f64,
    /// Scroll speed at full spin (px per frame)
    pub fast_speed: f32,
    /// Scroll speed at the end of the ramp (px per frame)
    pub slow_speed: f32,
    /// Frames for the bounce lift phase
    pub bounce_up_frames: u32,
    /// Frames for the bounce settle phase
    pub bounce_settle_frames: u32,
    /// Bounce lift distance above the rest position (px)
    pub bounce_lift_px: f32,
    /// Settle-phase overshoot below the rest position (px)
    pub settle_overshoot_px: f32,
    /// Win pulse auto-cancel duration (ms)
    pub win_pulse_ms: f64,
}

impl SpinTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            base_duration_ms: 3200.0,
            reel_offset_ms: 200.0,
            slowdown_window_ms: 1000.0,
            fast_speed: 30.0,
            slow_speed: 15.0,
            bounce_up_frames: 15,
            bounce_settle_frames: 15,
            bounce_lift_px: 10.0,
            settle_overshoot_px: 4.0,
            win_pulse_ms: 2000.0,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            base_duration_ms: 1600.0,
            reel_offset_ms: 100.0,
            slowdown_window_ms: 500.0,
            fast_speed: 45.0,
            slow_speed: 20.0,
            bounce_up_frames: 8,
            bounce_settle_frames: 8,
            bounce_lift_px: 10.0,
            settle_overshoot_px: 4.0,
            win_pulse_ms: 1200.0,
        }
    }

    /// Get timing for a profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal | TimingProfile::Custom => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
        }
    }

    /// Scale all durations by `factor` (< 1.0 = faster). Scroll speeds scale
    /// inversely so a faster spin still travels a comparable distance.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: TimingProfile::Custom,
            base_duration_ms: self.base_duration_ms * factor,
            reel_offset_ms: self.reel_offset_ms * factor,
            slowdown_window_ms: self.slowdown_window_ms * factor,
            fast_speed: (self.fast_speed as f64 / factor) as f32,
            slow_speed: (self.slow_speed as f64 / factor) as f32,
            bounce_up_frames: self.bounce_up_frames,
            bounce_settle_frames: self.bounce_settle_frames,
            bounce_lift_px: self.bounce_lift_px,
            settle_overshoot_px: self.settle_overshoot_px,
            win_pulse_ms: self.win_pulse_ms * factor,
        }
    }

    /// Spin duration for a given reel: `base + index * offset`
    pub fn column_stop_ms(&self, reel_index: u8) -> f64 {
        self.base_duration_ms + reel_index as f64 * self.reel_offset_ms
    }

    /// Total spin duration (time until the last reel stops)
    pub fn total_duration_ms(&self, reel_count: u8) -> f64 {
        self.column_stop_ms(reel_count.saturating_sub(1))
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}

/// Visual theme (colors as RGB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Window and reel background
    pub primary: [u8; 3],
    /// Text and accents
    pub secondary: [u8; 3],
    /// Score panel background
    pub accent: [u8; 3],
    /// Score panel height (px, unscaled)
    pub ui_height: f32,
    /// Base font size (px, unscaled)
    pub font_px: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: [0x00, 0x00, 0x00],
            secondary: [0xff, 0xff, 0xff],
            accent: [0x23, 0x23, 0x23],
            ui_height: 120.0,
            font_px: 24.0,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid specification
    pub grid: GridConfig,
    /// Bet and balance
    pub bet: BetConfig,
    /// Animation timing
    pub timing: SpinTiming,
    /// Visual theme
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_derived_dimensions() {
        let grid = GridConfig::default();
        assert_eq!(grid.cells_per_reel(), 9);
        assert_eq!(grid.reel_height_px(), 600.0);
        assert_eq!(grid.width_px(), 600.0);
        assert_eq!(grid.row_center_y(0), 100.0);
        assert_eq!(grid.row_center_y(2), 500.0);
    }

    #[test]
    fn test_column_stop_stagger() {
        let timing = SpinTiming::normal();
        assert_eq!(timing.column_stop_ms(0), 3200.0);
        assert_eq!(timing.column_stop_ms(1), 3400.0);
        assert_eq!(timing.column_stop_ms(2), 3600.0);
        assert_eq!(timing.total_duration_ms(3), 3600.0);
    }

    #[test]
    fn test_timing_profiles() {
        let normal = SpinTiming::normal();
        let turbo = SpinTiming::turbo();
        assert!(turbo.base_duration_ms < normal.base_duration_ms);
        assert!(turbo.fast_speed > normal.fast_speed);
    }

    #[test]
    fn test_timing_scaled() {
        let half = SpinTiming::normal().scaled(0.5);
        assert_eq!(half.profile, TimingProfile::Custom);
        assert_eq!(half.base_duration_ms, 1600.0);
        assert_eq!(half.fast_speed, 60.0);
    }
}
