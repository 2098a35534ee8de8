//! Animation drivers
//!
//! Drivers are plain state records advanced once per tick by their owner;
//! there is no per-driver clock and no callback registration. A cell holds
//! at most one driver of each kind, and starting a new one replaces the
//! previous.

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Two-phase settle bounce for a symbol landing on its rest position.
///
/// Phase 1: start lifted above the rest position, ease out down to it.
/// Phase 2: jump to a small overshoot below, ease in back up to rest.
/// Frame-counted, matching the scroll animation's per-frame cadence.
#[derive(Debug, Clone)]
pub struct BounceAnim {
    frame: u32,
    up_frames: u32,
    settle_frames: u32,
    rest_y: f32,
    lift_px: f32,
    overshoot_px: f32,
}

impl BounceAnim {
    pub fn new(
        rest_y: f32,
        up_frames: u32,
        settle_frames: u32,
        lift_px: f32,
        overshoot_px: f32,
    ) -> Self {
        Self {
            frame: 0,
            up_frames: up_frames.max(1),
            settle_frames: settle_frames.max(1),
            rest_y,
            lift_px,
            overshoot_px,
        }
    }

    /// Position the driver starts from (lifted above rest)
    pub fn start_y(&self) -> f32 {
        self.rest_y - self.lift_px
    }

    /// Advance one frame and return the new vertical position
    pub fn advance(&mut self) -> f32 {
        let total = self.up_frames + self.settle_frames;
        let y = if self.frame < self.up_frames {
            let t = self.frame as f32 / self.up_frames as f32;
            self.start_y() + self.lift_px * ease_out_quad(t)
        } else if self.frame < total {
            let t = (self.frame - self.up_frames) as f32 / self.settle_frames as f32;
            self.rest_y + self.overshoot_px * (1.0 - ease_in_quad(t))
        } else {
            self.rest_y
        };
        self.frame = (self.frame + 1).min(total + 1);
        y
    }

    /// True once the driver has delivered its final rest frame
    pub fn done(&self) -> bool {
        self.frame > self.up_frames + self.settle_frames
    }
}

/// One frame of pulse output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    /// Uniform scale around the cell center
    pub scale: f32,
    /// Alpha of the frame overlay
    pub frame_alpha: f32,
}

impl PulseFrame {
    /// Rest values applied when a pulse stops or expires
    pub const REST: PulseFrame = PulseFrame {
        scale: 1.0,
        frame_alpha: 1.0,
    };
}

/// Continuous win-highlight pulse: sine oscillation on scale and frame
/// alpha, self-expiring after a fixed duration of accumulated tick time.
#[derive(Debug, Clone)]
pub struct PulseAnim {
    phase: f32,
    elapsed_ms: f64,
    duration_ms: f64,
}

impl PulseAnim {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            phase: 0.0,
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    /// Advance by one tick of `dt_ms` and return the frame to apply
    pub fn advance(&mut self, dt_ms: f64) -> PulseFrame {
        self.phase += 0.15;
        self.elapsed_ms += dt_ms.max(0.0);
        PulseFrame {
            scale: 1.0 + 0.1 * self.phase.sin(),
            frame_alpha: 0.7 + 0.3 * (self.phase * 2.0).sin(),
        }
    }

    /// Has the auto-cancel duration elapsed?
    pub fn expired(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounce_starts_lifted_and_ends_at_rest() {
        let mut b = BounceAnim::new(100.0, 15, 15, 10.0, 4.0);
        assert_relative_eq!(b.start_y(), 90.0);

        let mut ys = Vec::new();
        while !b.done() {
            ys.push(b.advance());
        }

        assert_eq!(ys.len(), 31);
        assert_relative_eq!(ys[0], 90.0);
        // First settle frame sits at the full overshoot below rest.
        assert_relative_eq!(ys[15], 104.0);
        assert_relative_eq!(*ys.last().unwrap(), 100.0);
    }

    #[test]
    fn test_bounce_phase_one_never_exceeds_rest() {
        let mut b = BounceAnim::new(100.0, 15, 15, 10.0, 4.0);
        for _ in 0..15 {
            let y = b.advance();
            assert!(y >= 89.9 && y <= 100.1, "lift phase y {y} out of band");
        }
    }

    #[test]
    fn test_pulse_output_stays_in_band() {
        let mut p = PulseAnim::new(2000.0);
        for _ in 0..200 {
            let f = p.advance(16.0);
            assert!(f.scale >= 0.9 && f.scale <= 1.1);
            assert!(f.frame_alpha >= 0.4 - f32::EPSILON && f.frame_alpha <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn test_pulse_expires_after_duration() {
        let mut p = PulseAnim::new(2000.0);
        let mut ticks = 0;
        while !p.expired() {
            p.advance(100.0);
            ticks += 1;
            assert!(ticks < 100, "pulse never expired");
        }
        assert_eq!(ticks, 20);
    }

    #[test]
    fn test_pulse_rest_frame() {
        assert_eq!(PulseFrame::REST.scale, 1.0);
        assert_eq!(PulseFrame::REST.frame_alpha, 1.0);
    }
}
