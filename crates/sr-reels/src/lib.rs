//! # sr-reels — Reel engine for SpinReel
//!
//! A deterministic, frame-driven slot reel simulation. The outcome of a
//! spin is committed before any motion starts; the animation only ever
//! catches up with it.
//!
//! ## Architecture
//!
//! ```text
//! ReelEngine (spin state machine, single animation scheduler)
//!     │
//!     ├── ResultGenerator (seeded RNG → ResultGrid)
//!     ├── winline::evaluate (leftmost-anchored run rule)
//!     ├── SymbolCell × size² per reel (bounce + pulse drivers)
//!     └── CountdownLatch ("all reels stopped" join)
//!           │
//!           v
//!     tick(now_ms) → Vec<ReelEvent>
//! ```
//!
//! The engine never touches a real clock: callers feed timestamps into
//! [`ReelEngine::tick`], which makes every animation and the whole spin
//! lifecycle reproducible under test.

pub mod anim;
pub mod engine;
pub mod latch;
pub mod result;
pub mod symbol;
pub mod winline;

pub use anim::*;
pub use engine::*;
pub use latch::*;
pub use result::*;
pub use symbol::*;
pub use winline::*;
