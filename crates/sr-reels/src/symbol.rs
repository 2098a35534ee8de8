//! Symbol cell: one renderable grid position
//!
//! A cell shows a symbol image with a frame overlay, scrolls during a spin,
//! settles with a bounce, and pulses while part of a winning run. Cells are
//! created once per grid position and mutated in place for the lifetime of
//! the engine.

use log::warn;

use sr_core::{frame_alias, symbol_alias, AliasIndex, SpinTiming};

use crate::anim::{BounceAnim, PulseAnim, PulseFrame};

/// A single symbol position inside a reel column
#[derive(Debug)]
pub struct SymbolCell {
    index: u8,
    y: f32,
    winning: bool,
    scale: f32,
    frame_alpha: f32,
    bounce: Option<BounceAnim>,
    pulse: Option<PulseAnim>,
}

impl SymbolCell {
    pub fn new(index: u8, y: f32) -> Self {
        Self {
            index,
            y,
            winning: false,
            scale: 1.0,
            frame_alpha: 1.0,
            bounce: None,
            pulse: None,
        }
    }

    /// Current symbol index
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Vertical center within the column (px)
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move the cell (scroll / wrap / park)
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Is the cell part of the highlighted winning run?
    pub fn winning(&self) -> bool {
        self.winning
    }

    /// Current pulse scale (1.0 at rest)
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current frame overlay alpha (1.0 at rest)
    pub fn frame_alpha(&self) -> f32 {
        self.frame_alpha
    }

    /// Swap the displayed symbol. A missing image degrades to a warning;
    /// the cell keeps animating and the frontend draws a fallback layer.
    pub fn set_index(&mut self, index: u8, prefix: &str, catalog: &AliasIndex) {
        self.index = index;
        if !catalog.has(&symbol_alias(prefix, index)) {
            warn!("missing symbol texture for index {index}");
        }
        if !catalog.has(&frame_alias(prefix, index)) {
            warn!("missing frame texture for index {index}");
        }
    }

    /// Start the settle bounce toward `rest_y`, replacing any bounce still
    /// running from a previous spin.
    pub fn start_bounce(&mut self, rest_y: f32, timing: &SpinTiming) {
        let bounce = BounceAnim::new(
            rest_y,
            timing.bounce_up_frames,
            timing.bounce_settle_frames,
            timing.bounce_lift_px,
            timing.settle_overshoot_px,
        );
        self.y = bounce.start_y();
        self.bounce = Some(bounce);
    }

    /// Toggle the win highlight. Enabling starts a fresh pulse (replacing
    /// an active one); disabling stops it immediately and restores rest
    /// scale and alpha.
    pub fn set_winning(&mut self, winning: bool, timing: &SpinTiming) {
        self.winning = winning;
        if winning {
            self.pulse = Some(PulseAnim::new(timing.win_pulse_ms));
        } else {
            self.pulse = None;
            self.apply_pulse(PulseFrame::REST);
        }
    }

    /// Advance both drivers by one tick of `dt_ms` wall time
    pub fn tick(&mut self, dt_ms: f64) {
        if let Some(bounce) = &mut self.bounce {
            self.y = bounce.advance();
            if bounce.done() {
                self.bounce = None;
            }
        }

        if let Some(pulse) = &mut self.pulse {
            let frame = pulse.advance(dt_ms);
            if pulse.expired() {
                self.pulse = None;
                self.winning = false;
                self.apply_pulse(PulseFrame::REST);
            } else {
                self.apply_pulse(frame);
            }
        }
    }

    /// Is a bounce driver active?
    pub fn bouncing(&self) -> bool {
        self.bounce.is_some()
    }

    /// Is a pulse driver active?
    pub fn pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    fn apply_pulse(&mut self, frame: PulseFrame) {
        self.scale = frame.scale;
        self.frame_alpha = frame.frame_alpha;
    }
}
