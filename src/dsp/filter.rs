//! Biquad lowpass — matches WebAudio BiquadFilterNode coefficients.

use std::f64::consts::PI;

/// A 2nd-order lowpass filter with an optional exponential cutoff sweep.
///
/// Implements the standard Direct Form II Transposed structure.
/// Coefficient formulas from the Audio EQ Cookbook (Robert Bristow-Johnson).
/// While sweeping, the cutoff glides exponentially from its start value to
/// the target (the capture cue's 2000 → 400 Hz), with coefficients
/// recomputed per sample.
#[derive(Debug, Clone)]
pub struct Lowpass {
    start_cutoff: f64,
    target_cutoff: f64,
    sweep_secs: f64,
    q: f64,

    // Coefficients
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    // State (Direct Form II Transposed)
    z1: f64,
    z2: f64,

    elapsed: usize,
    sample_rate: f64,
}

impl Lowpass {
    pub fn new(cutoff: f64, sample_rate: f64) -> Self {
        Self::with_sweep(cutoff, cutoff, 0.0, sample_rate)
    }

    /// Lowpass whose cutoff glides exponentially from `from` to `to` over
    /// `secs` seconds, then holds at `to`.
    pub fn with_sweep(from: f64, to: f64, secs: f64, sample_rate: f64) -> Self {
        let mut f = Lowpass {
            start_cutoff: from,
            target_cutoff: to,
            sweep_secs: secs,
            q: 0.707, // Butterworth
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
            elapsed: 0,
            sample_rate,
        };
        f.update_coefficients(from);
        f
    }

    /// Instantaneous cutoff at the current playback position.
    pub fn current_cutoff(&self) -> f64 {
        if self.sweep_secs <= 0.0 {
            return self.target_cutoff;
        }
        let t = self.elapsed as f64 / self.sample_rate;
        if t >= self.sweep_secs {
            self.target_cutoff
        } else {
            self.start_cutoff * (self.target_cutoff / self.start_cutoff).powf(t / self.sweep_secs)
        }
    }

    /// Recompute coefficients for the given cutoff frequency.
    fn update_coefficients(&mut self, cutoff: f64) {
        let w0 = 2.0 * PI * cutoff / self.sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * self.q);

        let b1 = 1.0 - cos_w0;
        let b0 = b1 / 2.0;
        let b2 = b0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        // Normalize by a0
        self.b0 = b0 / a0;
        self.b1 = b1 / a0;
        self.b2 = b2 / a0;
        self.a1 = a1 / a0;
        self.a2 = a2 / a0;
    }

    /// Process a single sample through the filter.
    pub fn process(&mut self, input: f64) -> f64 {
        if self.sweep_secs > 0.0 {
            let t = self.elapsed as f64 / self.sample_rate;
            if t <= self.sweep_secs {
                let cutoff = self.current_cutoff();
                self.update_coefficients(cutoff);
            }
        }
        self.elapsed += 1;

        let output = self.b0 * input + self.z1;
        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;
        output
    }
}
