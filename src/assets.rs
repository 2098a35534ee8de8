//! Asset loading: textures by alias, sound effects by cue
//!
//! Every load failure degrades to a warning. Missing textures fall back to
//! flat tiles at draw time; missing sounds simply stay silent.

use std::collections::HashMap;

use log::warn;
use macroquad::audio::{load_sound, play_sound_once, Sound};
use macroquad::prelude::*;

use sr_core::{
    AliasIndex, AssetManifest, SoundCue, SoundPolicy, SPIN_SOUND_PATH, WIN_SOUND_PATH,
};

/// Textures keyed by manifest alias
pub struct TextureStore {
    textures: HashMap<String, Texture2D>,
}

impl TextureStore {
    /// Load every manifest asset that exists on disk
    pub async fn load(manifest: &AssetManifest) -> Self {
        let mut textures = HashMap::new();
        for spec in manifest.iter() {
            match load_texture(&spec.path).await {
                Ok(texture) => {
                    textures.insert(spec.alias.clone(), texture);
                }
                Err(err) => warn!("could not load {} ({}): {err}", spec.alias, spec.path),
            }
        }
        Self { textures }
    }

    /// Option-typed lookup: absent means "draw the fallback layer"
    pub fn texture(&self, alias: &str) -> Option<&Texture2D> {
        self.textures.get(alias)
    }

    /// Aliases that resolved, for the engine's degraded-rendering warnings
    pub fn alias_index(&self) -> AliasIndex {
        self.textures.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// The two sound effects, if their files exist
pub struct SoundBank {
    spin: Option<Sound>,
    win: Option<Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        Self {
            spin: try_sound(SPIN_SOUND_PATH).await,
            win: try_sound(WIN_SOUND_PATH).await,
        }
    }

    /// Play a cue if the policy allows it and the file loaded
    pub fn play(&self, cue: SoundCue, policy: SoundPolicy) {
        if !policy.allows(cue) {
            return;
        }
        let sound = match cue {
            SoundCue::SpinStart => &self.spin,
            SoundCue::Win => &self.win,
        };
        if let Some(sound) = sound {
            play_sound_once(sound);
        }
    }
}

async fn try_sound(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("could not load sound {path}: {err}");
            None
        }
    }
}
