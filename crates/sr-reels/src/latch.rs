//! Countdown latch for the "all reels stopped" join
//!
//! The spin settles only after every reel has stopped. Instead of joining
//! per-reel futures, the engine counts stops down through this latch, which
//! keeps the join condition inspectable in tests.

/// A single-use countdown latch
#[derive(Debug, Clone)]
pub struct CountdownLatch {
    remaining: usize,
}

impl CountdownLatch {
    /// Latch that opens after `count` countdowns
    pub fn new(count: usize) -> Self {
        Self { remaining: count }
    }

    /// Count one event down. Returns `true` exactly when this call opens
    /// the latch; further calls are no-ops returning `false`.
    pub fn count_down(&mut self) -> bool {
        match self.remaining {
            0 => false,
            1 => {
                self.remaining = 0;
                true
            }
            _ => {
                self.remaining -= 1;
                false
            }
        }
    }

    /// Countdowns still outstanding
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Has the latch opened?
    pub fn is_open(&self) -> bool {
        self.remaining == 0
    }
}
