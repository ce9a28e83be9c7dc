//! Cue mixer — schedules bursts on a shared sample clock and sums them.
//!
//! `play` pushes bursts with absolute start positions derived from the
//! current clock; the output callback advances the clock a sample at a time
//! and mixes every burst that is due. Overlapping cues layer — there is no
//! queueing and no cancellation, so a scheduled burst always plays out even
//! if the engine is disabled afterwards.

use super::voice::Burst;

/// A burst waiting on (or playing against) the sample clock.
#[derive(Debug, Clone)]
struct ScheduledBurst {
    /// Absolute clock position of the first sample.
    start: u64,
    burst: Burst,
}

/// Summing mixer with a monotonic sample clock and master gain.
#[derive(Debug, Clone)]
pub struct CueMixer {
    pub master_gain: f64,
    clock: u64,
    sample_rate: f64,
    active: Vec<ScheduledBurst>,
}

impl CueMixer {
    pub fn new(sample_rate: f64) -> Self {
        CueMixer {
            master_gain: 0.8,
            clock: 0,
            sample_rate,
            active: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Adjust the rate after output-device negotiation. Only meaningful
    /// before anything is scheduled.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    /// Current clock position in samples.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Queue a burst to start `offset` seconds after the current clock
    /// position.
    pub fn schedule(&mut self, offset: f64, burst: Burst) {
        let start = self.clock + (offset * self.sample_rate) as u64;
        self.active.push(ScheduledBurst { start, burst });
    }

    /// Number of scheduled-but-unfinished bursts.
    pub fn pending(&self) -> usize {
        self.active.len()
    }

    /// Nothing scheduled and nothing playing?
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Render one mono sample and advance the clock.
    pub fn next_sample(&mut self) -> f32 {
        let now = self.clock;
        self.clock += 1;

        let mut sum = 0.0;
        for s in self.active.iter_mut() {
            if s.start <= now {
                sum += s.burst.next_sample();
            }
        }
        self.active.retain(|s| !s.burst.is_finished());

        soft_clip(sum * self.master_gain) as f32
    }

    /// Fill an interleaved output buffer; every channel carries the same
    /// mono mix.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels.max(1)) {
            let sample = self.next_sample();
            for out in frame.iter_mut() {
                *out = sample;
            }
        }
    }
}

/// Soft clipper using tanh to prevent harsh digital clipping when cues
/// overlap.
fn soft_clip(x: f64) -> f64 {
    x.tanh()
}
