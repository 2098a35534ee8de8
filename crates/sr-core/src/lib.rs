//! # sr-core — Shared foundation for SpinReel
//!
//! Configuration values, asset aliasing, the audio policy, and the common
//! error type. This crate holds no game logic and no rendering code; the
//! reel engine (`sr-reels`), the UI chrome (`sr-ui`), and the frontend
//! binary all build on it.

pub mod assets;
pub mod audio;
pub mod config;
pub mod error;

pub use assets::*;
pub use audio::*;
pub use config::*;
pub use error::*;
