//! SoundEngine — fire-and-forget playback of synthesized chess cues.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::config::EngineConfig;
use crate::dsp::mixer::CueMixer;
use crate::dsp::recipe;
use crate::event::SoundEvent;
use crate::output::OutputStream;

/// The sound engine: one output handle, one enable flag.
///
/// Construction never fails — when no output device is available every
/// `play` call degrades to a silent no-op and the engine stays usable.
/// `play` returns immediately; the cue is scheduled on the device clock and
/// layers with whatever is already sounding. Disabling the engine gates new
/// cues but never silences in-flight ones.
pub struct SoundEngine {
    mixer: Arc<Mutex<CueMixer>>,
    enabled: AtomicBool,
    output: Option<OutputStream>,
}

impl SoundEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mixer = Arc::new(Mutex::new(CueMixer::new(config.sample_rate as f64)));
        mixer.lock().master_gain = config.master_gain;

        let output = match OutputStream::open(Arc::clone(&mixer), &config) {
            Ok(stream) => {
                // The device may have negotiated a different rate than the
                // preferred one; the recipes must follow it.
                mixer.lock().set_sample_rate(stream.sample_rate as f64);
                Some(stream)
            }
            Err(e) => {
                log::warn!("sound output unavailable, cues disabled: {e}");
                None
            }
        };

        SoundEngine {
            mixer,
            enabled: AtomicBool::new(config.enabled),
            output,
        }
    }

    /// Play the cue for a tag. Unknown tags resolve to the move cue; the
    /// piece hint is accepted for future per-piece timbre variation and is
    /// currently unused by synthesis.
    pub fn play(&self, tag: &str, piece_hint: Option<&str>) {
        self.play_event(SoundEvent::from_tag(tag), piece_hint);
    }

    /// Play a cue. No-op while disabled or without an output device; never
    /// fails, never blocks on the sound finishing.
    pub fn play_event(&self, event: SoundEvent, _piece_hint: Option<&str>) {
        if !self.is_enabled() {
            return;
        }
        let Some(output) = &self.output else {
            return;
        };

        // The host may have paused the stream; resume is fire-and-forget.
        output.resume();

        let mut mixer = self.mixer.lock();
        let sample_rate = mixer.sample_rate();
        for tone in recipe::tones_for(event) {
            mixer.schedule(tone.onset, tone.build(sample_rate));
        }
        log::debug!("scheduled cue {}", event.as_tag());
    }

    /// Play the plain move cue for a specific piece.
    pub fn play_piece(&self, piece: &str) {
        self.play_event(SoundEvent::Move, Some(piece));
    }

    /// Flip the enable toggle. Purely a flag mutation: no audio side
    /// effects, and cues already scheduled keep playing.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Is an output device attached? False means every `play` is a no-op.
    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    /// Number of scheduled-but-unfinished bursts on the shared clock.
    pub fn pending_bursts(&self) -> usize {
        self.mixer.lock().pending()
    }
}

impl Default for SoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These run with or without an audio device: on headless hosts the
    // engine must construct cleanly and no-op.

    #[test]
    fn construction_never_panics() {
        let engine = SoundEngine::new();
        assert!(engine.is_enabled());
        assert_eq!(engine.pending_bursts(), 0);
    }

    #[test]
    fn enable_toggle_round_trips() {
        let engine = SoundEngine::new();
        assert!(engine.is_enabled());
        engine.set_enabled(false);
        assert!(!engine.is_enabled());
        engine.set_enabled(true);
        assert!(engine.is_enabled());
    }

    #[test]
    fn config_controls_initial_enabled_state() {
        let engine = SoundEngine::with_config(EngineConfig {
            enabled: false,
            ..EngineConfig::default()
        });
        assert!(!engine.is_enabled());
    }

    #[test]
    fn disabled_play_schedules_nothing() {
        let engine = SoundEngine::new();
        engine.set_enabled(false);
        for event in SoundEvent::ALL {
            engine.play_event(event, None);
        }
        engine.play("capture", Some("q"));
        assert_eq!(
            engine.pending_bursts(),
            0,
            "Disabled engine must not build or schedule bursts"
        );
    }

    #[test]
    fn rapid_fire_all_tags_never_panics() {
        let engine = SoundEngine::new();
        for _ in 0..10 {
            for event in SoundEvent::ALL {
                engine.play_event(event, None);
            }
            engine.play("not-a-real-tag", None);
        }
    }

    #[test]
    fn independent_engines_do_not_share_state() {
        let a = SoundEngine::new();
        let b = SoundEngine::new();
        a.set_enabled(false);
        assert!(b.is_enabled(), "Engines must not share the enable flag");
    }
}
