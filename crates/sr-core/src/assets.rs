//! Asset aliases, the load manifest, and the resolved-alias index
//!
//! Every drawable resource is keyed by a string alias ("sym2-symbol",
//! "spin-button", ...). The frontend loads the manifest and records which
//! aliases actually resolved in an [`AliasIndex`]; a missing asset is never
//! fatal, the layer is simply not drawn.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Alias of a symbol's main image, e.g. `sym2-symbol`
pub fn symbol_alias(prefix: &str, index: u8) -> String {
    format!("{prefix}{index}-symbol")
}

/// Alias of a symbol's frame overlay, e.g. `sym2-frame`
pub fn frame_alias(prefix: &str, index: u8) -> String {
    format!("{prefix}{index}-frame")
}

/// Spin button texture alias
pub const SPIN_BUTTON_ALIAS: &str = "spin-button";
/// Logo texture alias
pub const LOGO_ALIAS: &str = "logo";
/// Sound-on icon alias
pub const SOUND_ON_ALIAS: &str = "sound-on";
/// Sound-off icon alias
pub const SOUND_OFF_ALIAS: &str = "sound-off";

/// Path of the spin sound effect
pub const SPIN_SOUND_PATH: &str = "assets/sounds/spin.ogg";
/// Path of the win sound effect
pub const WIN_SOUND_PATH: &str = "assets/sounds/win.ogg";

/// One loadable asset: alias plus source path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    /// Lookup alias
    pub alias: String,
    /// Source path relative to the working directory
    pub path: String,
}

/// A named group of assets loaded together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBundle {
    /// Bundle name
    pub name: String,
    /// Assets in this bundle
    pub assets: Vec<AssetSpec>,
}

/// The full set of bundles the game wants at bootstrap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// All bundles
    pub bundles: Vec<AssetBundle>,
}

impl AssetManifest {
    /// Standard manifest: one bundle per symbol (image + frame), the UI
    /// bundle, and the sound toggle icons.
    pub fn standard(prefix: &str, alphabet: u8) -> Self {
        let mut bundles = Vec::with_capacity(alphabet as usize + 2);

        for i in 1..=alphabet {
            bundles.push(AssetBundle {
                name: format!("{prefix}{i}"),
                assets: vec![
                    AssetSpec {
                        alias: symbol_alias(prefix, i),
                        path: format!("assets/{prefix}{i}.png"),
                    },
                    AssetSpec {
                        alias: frame_alias(prefix, i),
                        path: format!("assets/{prefix}{i}_frame.png"),
                    },
                ],
            });
        }

        bundles.push(AssetBundle {
            name: "game-ui".into(),
            assets: vec![
                AssetSpec {
                    alias: SPIN_BUTTON_ALIAS.into(),
                    path: "assets/spin.png".into(),
                },
                AssetSpec {
                    alias: LOGO_ALIAS.into(),
                    path: "assets/logo.png".into(),
                },
            ],
        });

        bundles.push(AssetBundle {
            name: "sound".into(),
            assets: vec![
                AssetSpec {
                    alias: SOUND_ON_ALIAS.into(),
                    path: "assets/sound-on.png".into(),
                },
                AssetSpec {
                    alias: SOUND_OFF_ALIAS.into(),
                    path: "assets/sound-off.png".into(),
                },
            ],
        });

        Self { bundles }
    }

    /// Iterate over every asset in every bundle
    pub fn iter(&self) -> impl Iterator<Item = &AssetSpec> {
        self.bundles.iter().flat_map(|b| b.assets.iter())
    }
}

/// The set of aliases that resolved to a real resource at load time.
///
/// The engine consults this only to warn about degraded rendering; the
/// frontend's texture accessor is the authoritative `Option`-typed lookup.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    aliases: HashSet<String>,
    universal: bool,
}

impl AliasIndex {
    /// Empty index (nothing resolved)
    pub fn new() -> Self {
        Self::default()
    }

    /// An index that claims every alias is present. Used by headless runs
    /// and tests, where no textures exist but warnings would be noise.
    pub fn universal() -> Self {
        Self {
            aliases: HashSet::new(),
            universal: true,
        }
    }

    /// Record a resolved alias
    pub fn insert(&mut self, alias: impl Into<String>) {
        self.aliases.insert(alias.into());
    }

    /// Is this alias backed by a real resource?
    pub fn has(&self, alias: &str) -> bool {
        self.universal || self.aliases.contains(alias)
    }

    /// Number of resolved aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True when nothing resolved (and the index is not universal)
    pub fn is_empty(&self) -> bool {
        !self.universal && self.aliases.is_empty()
    }
}

impl FromIterator<String> for AliasIndex {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
            universal: false,
        }
    }
}
