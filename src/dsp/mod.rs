//! DSP — pure Rust synthesis of the chess cues.
//!
//! Everything here is sample-accurate and deterministic; the same code
//! feeds both the real-time output stream and the offline WAV renderer.

pub mod envelope;
pub mod filter;
pub mod mixer;
pub mod oscillator;
pub mod recipe;
pub mod renderer;
pub mod voice;
