//! Sound toggle: flips the mute policy and picks the icon to draw

use sr_core::{SoundPolicy, SOUND_OFF_ALIAS, SOUND_ON_ALIAS};

/// Icon size in pixels (unscaled)
pub const TOGGLE_SIZE_PX: f32 = 50.0;

/// The sound on/off toggle. Owns the [`SoundPolicy`] the frontend queries
/// before playing any cue.
#[derive(Debug, Clone, Default)]
pub struct SoundToggle {
    policy: SoundPolicy,
}

impl SoundToggle {
    pub fn new(policy: SoundPolicy) -> Self {
        Self { policy }
    }

    /// Flip the mute state and return the new policy
    pub fn toggle(&mut self) -> SoundPolicy {
        self.policy.toggle();
        self.policy
    }

    /// Current policy, queried at play time
    pub fn policy(&self) -> SoundPolicy {
        self.policy
    }

    pub fn is_on(&self) -> bool {
        !self.policy.is_muted()
    }

    /// Alias of the icon matching the current state
    pub fn icon_alias(&self) -> &'static str {
        if self.is_on() {
            SOUND_ON_ALIAS
        } else {
            SOUND_OFF_ALIAS
        }
    }

    /// Hit test against the drawn icon rect (top-left anchored)
    pub fn contains(&self, point: (f32, f32), top_left: (f32, f32), scale: f32) -> bool {
        let size = TOGGLE_SIZE_PX * scale;
        point.0 >= top_left.0
            && point.0 <= top_left.0 + size
            && point.1 >= top_left.1
            && point.1 <= top_left.1 + size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::SoundCue;

    #[test]
    fn test_toggle_flips_policy_and_icon() {
        let mut toggle = SoundToggle::default();
        assert!(toggle.is_on());
        assert_eq!(toggle.icon_alias(), SOUND_ON_ALIAS);
        assert!(toggle.policy().allows(SoundCue::SpinStart));

        let policy = toggle.toggle();
        assert!(policy.is_muted());
        assert!(!toggle.is_on());
        assert_eq!(toggle.icon_alias(), SOUND_OFF_ALIAS);
        assert!(!toggle.policy().allows(SoundCue::Win));

        toggle.toggle();
        assert!(toggle.is_on());
    }

    #[test]
    fn test_hit_test() {
        let toggle = SoundToggle::default();
        assert!(toggle.contains((10.0, 10.0), (0.0, 0.0), 1.0));
        assert!(!toggle.contains((60.0, 10.0), (0.0, 0.0), 1.0));
        assert!(toggle.contains((60.0, 10.0), (0.0, 0.0), 1.5));
    }
}
