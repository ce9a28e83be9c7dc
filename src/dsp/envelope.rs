//! One-shot gain envelopes for percussive cues.
//!
//! Matches the ramp semantics of a WebAudio gain schedule: a linear attack
//! to the peak, an optional hold, then an exponential decay. Exponential
//! ramps cannot reach zero, so the decay lands on [`MIN_GAIN`] exactly at
//! the envelope's duration — the small residual is part of the cues'
//! audible character and is intentional.

/// Terminal gain of every exponential decay.
pub const MIN_GAIN: f64 = 0.001;

/// Envelope stages.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Attack,
    Hold,
    Decay,
    Done,
}

/// One-shot attack → hold → exponential-decay envelope.
///
/// Unlike a gated ADSR there is no sustain and no note-off: the whole shape
/// is fixed when the envelope is built, and it runs to completion.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub peak: f64,
    stage: Stage,
    level: f64,
    attack_samples: usize,
    hold_samples: usize,
    decay_samples: usize,
    /// Per-sample multiplier that reaches MIN_GAIN at the end of the decay.
    decay_ratio: f64,
    counter: usize,
}

impl Envelope {
    /// Build an envelope: linear attack over `attack` seconds to `peak`,
    /// optional hold at peak until `hold_until` seconds, exponential decay
    /// reaching [`MIN_GAIN`] at `duration` seconds. All times are relative
    /// to the start of the burst.
    pub fn new(
        attack: f64,
        peak: f64,
        hold_until: Option<f64>,
        duration: f64,
        sample_rate: f64,
    ) -> Self {
        let attack_samples = (attack * sample_rate) as usize;
        let hold_end = hold_until.unwrap_or(attack).max(attack);
        let hold_samples = ((hold_end - attack) * sample_rate) as usize;
        let total_samples = (duration * sample_rate) as usize;
        let decay_samples = total_samples
            .saturating_sub(attack_samples + hold_samples)
            .max(1);
        let decay_ratio = (MIN_GAIN / peak).powf(1.0 / decay_samples as f64);

        Envelope {
            peak,
            stage: Stage::Attack,
            level: 0.0,
            attack_samples,
            hold_samples,
            decay_samples,
            decay_ratio,
            counter: 0,
        }
    }

    /// Generate the next gain value [0, peak].
    pub fn next_sample(&mut self) -> f64 {
        match self.stage {
            Stage::Attack => {
                if self.attack_samples == 0 {
                    self.level = self.peak;
                    self.enter_hold();
                } else {
                    let t = self.counter as f64 / self.attack_samples as f64;
                    self.level = self.peak * t;
                    self.counter += 1;
                    if self.counter >= self.attack_samples {
                        self.level = self.peak;
                        self.enter_hold();
                    }
                }
            }
            Stage::Hold => {
                self.level = self.peak;
                self.counter += 1;
                if self.counter >= self.hold_samples {
                    self.stage = Stage::Decay;
                    self.counter = 0;
                }
            }
            Stage::Decay => {
                self.level *= self.decay_ratio;
                self.counter += 1;
                if self.counter >= self.decay_samples {
                    self.stage = Stage::Done;
                }
            }
            Stage::Done => {
                self.level = 0.0;
            }
        }
        self.level
    }

    /// Has the envelope run to completion?
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Done
    }

    fn enter_hold(&mut self) {
        self.counter = 0;
        if self.hold_samples == 0 {
            self.stage = Stage::Decay;
        } else {
            self.stage = Stage::Hold;
        }
    }
}
