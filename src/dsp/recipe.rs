//! Cue recipes — the synthesis parameters behind each chess sound.
//!
//! Each recipe is a list of [`Tone`]s: declarative burst descriptions with
//! an onset offset on the shared clock. Multi-part cues (castle, game end)
//! are just tones with later onsets — the mixer's sample clock takes the
//! place of deferred timers.

use crate::event::SoundEvent;

use super::envelope::Envelope;
use super::filter::Lowpass;
use super::oscillator::{Oscillator, Waveform};
use super::voice::Burst;

/// Offset of the castle cue's second burst (the rook landing after the king).
pub const CASTLE_ROOK_OFFSET: f64 = 0.06;

/// The game-end arpeggio: C5, E5, G5, C6.
pub const GAME_END_ARPEGGIO_HZ: [f64; 4] = [523.0, 659.0, 784.0, 1047.0];

/// Spacing between game-end arpeggio tones.
pub const GAME_END_TONE_SPACING: f64 = 0.15;

/// Lowpass stage of a tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub cutoff: f64,
    /// Exponential cutoff sweep to (target Hz, seconds), if any.
    pub sweep: Option<(f64, f64)>,
}

impl FilterSpec {
    pub fn fixed(cutoff: f64) -> Self {
        FilterSpec { cutoff, sweep: None }
    }

    pub fn swept(from: f64, to: f64, secs: f64) -> Self {
        FilterSpec {
            cutoff: from,
            sweep: Some((to, secs)),
        }
    }
}

/// Declarative description of one scheduled burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Tone {
    /// Offset from the cue trigger, in seconds.
    pub onset: f64,
    pub waveform: Waveform,
    pub frequency: f64,
    /// Linear frequency glide to (target Hz, seconds), if any.
    pub glide: Option<(f64, f64)>,
    pub filter: Option<FilterSpec>,
    /// Linear attack time to `peak`, in seconds.
    pub attack: f64,
    /// Peak gain [0, 1].
    pub peak: f64,
    /// Hold at peak until this time, if any.
    pub hold_until: Option<f64>,
    /// Total length; the exponential decay lands on the terminal epsilon here.
    pub duration: f64,
}

impl Default for Tone {
    fn default() -> Self {
        Tone {
            onset: 0.0,
            waveform: Waveform::Sine,
            frequency: 440.0,
            glide: None,
            filter: None,
            attack: 0.01,
            peak: 0.3,
            hold_until: None,
            duration: 0.1,
        }
    }
}

impl Tone {
    /// Instantiate the synthesis graph for this tone.
    pub fn build(&self, sample_rate: f64) -> Burst {
        let oscillator = match self.glide {
            Some((to, secs)) => {
                Oscillator::with_glide(self.waveform, self.frequency, to, secs, sample_rate)
            }
            None => Oscillator::new(self.waveform, self.frequency, sample_rate),
        };
        let filter = self.filter.map(|spec| match spec.sweep {
            Some((to, secs)) => Lowpass::with_sweep(spec.cutoff, to, secs, sample_rate),
            None => Lowpass::new(spec.cutoff, sample_rate),
        });
        let envelope = Envelope::new(
            self.attack,
            self.peak,
            self.hold_until,
            self.duration,
            sample_rate,
        );
        Burst::new(oscillator, filter, envelope, self.duration, sample_rate)
    }
}

/// The tone schedule for a sound event.
pub fn tones_for(event: SoundEvent) -> Vec<Tone> {
    match event {
        // Short percussive click, chess.com style.
        SoundEvent::Move => vec![Tone {
            waveform: Waveform::Square,
            frequency: 800.0,
            filter: Some(FilterSpec::fixed(1200.0)),
            attack: 0.002,
            peak: 0.4,
            duration: 0.08,
            ..Tone::default()
        }],

        // More aggressive: sawtooth with a closing filter sweep.
        SoundEvent::Capture => vec![Tone {
            waveform: Waveform::Sawtooth,
            frequency: 1000.0,
            filter: Some(FilterSpec::swept(2000.0, 400.0, 0.15)),
            attack: 0.001,
            peak: 0.5,
            duration: 0.15,
            ..Tone::default()
        }],

        // Sustained falling sine — must be unmistakable next to the clicks.
        SoundEvent::Check => vec![Tone {
            waveform: Waveform::Sine,
            frequency: 1400.0,
            glide: Some((1200.0, 0.1)),
            attack: 0.01,
            peak: 0.4,
            hold_until: Some(0.08),
            duration: 0.12,
            ..Tone::default()
        }],

        // Two onsets: the king settles, then the rook.
        SoundEvent::Castle => vec![
            Tone {
                waveform: Waveform::Square,
                frequency: 600.0,
                attack: 0.002,
                peak: 0.3,
                duration: 0.1,
                ..Tone::default()
            },
            Tone {
                onset: CASTLE_ROOK_OFFSET,
                waveform: Waveform::Square,
                frequency: 800.0,
                attack: 0.002,
                peak: 0.3,
                duration: 0.08,
                ..Tone::default()
            },
        ],

        // Rising C-major arpeggio for a conclusive ending.
        SoundEvent::GameEnd => GAME_END_ARPEGGIO_HZ
            .iter()
            .enumerate()
            .map(|(i, &frequency)| Tone {
                onset: i as f64 * GAME_END_TONE_SPACING,
                waveform: Waveform::Sine,
                frequency,
                attack: 0.01,
                peak: 0.3,
                duration: 0.4,
                ..Tone::default()
            })
            .collect(),
    }
}
