//! Sound cues and the mute policy
//!
//! The engine reports *what* should sound via [`SoundCue`] values in its
//! event stream; whether anything is audible is decided at play time by
//! querying the [`SoundPolicy`] owned by the settings layer. No component
//! mutates ambient global audio state.

use serde::{Deserialize, Serialize};

/// A sound the game can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Reels start moving
    SpinStart,
    /// A winning outcome was settled
    Win,
}

/// Mute policy queried by whichever component plays audio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPolicy {
    muted: bool,
}

impl SoundPolicy {
    /// Policy with an explicit initial mute state
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    /// Flip the mute state
    pub fn toggle(&mut self) {
        self.muted = !self.muted;
    }

    /// Current mute state
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Should this cue be played right now?
    pub fn allows(&self, _cue: SoundCue) -> bool {
        !self.muted
    }
}
