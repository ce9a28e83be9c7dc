//! Procedural sound effects for chess interfaces.
//!
//! Five short cues — move, capture, check, castle, and game end — are
//! synthesized from oscillators, filters, and gain envelopes; no sample
//! files, no media fetch. [`SoundEngine::play`] is fire-and-forget: it
//! schedules the cue against the output device's clock and returns
//! immediately, and it never fails — a missing or broken audio device
//! degrades every call to a silent no-op.
//!
//! ```no_run
//! use chess_sfx::SoundEngine;
//!
//! let sounds = SoundEngine::new();
//! sounds.play("capture", None);     // layered, non-blocking
//! sounds.play("not-a-real-tag", None); // unknown tags fall back to "move"
//! sounds.set_enabled(false);        // later cues become no-ops
//! ```

pub mod classify;
pub mod config;
pub mod dsp;
pub mod engine;
pub mod event;
pub mod output;

pub use config::EngineConfig;
pub use engine::SoundEngine;
pub use event::SoundEvent;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
