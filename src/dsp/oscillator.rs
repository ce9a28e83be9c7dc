//! Anti-aliased oscillators using PolyBLEP.

use std::f64::consts::PI;

/// Waveform shapes used by the cue recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// A band-limited oscillator with anti-aliasing (PolyBLEP) and an optional
/// linear frequency glide (start Hz → target Hz over a fixed time, then hold).
#[derive(Debug, Clone)]
pub struct Oscillator {
    pub waveform: Waveform,
    start_freq: f64,
    target_freq: f64,
    glide_secs: f64,
    phase: f64,
    elapsed: usize,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f64, sample_rate: f64) -> Self {
        Oscillator {
            waveform,
            start_freq: frequency,
            target_freq: frequency,
            glide_secs: 0.0,
            phase: 0.0,
            elapsed: 0,
            sample_rate,
        }
    }

    /// Oscillator whose frequency moves linearly from `from` to `to` over
    /// `secs` seconds, then holds at `to`.
    pub fn with_glide(waveform: Waveform, from: f64, to: f64, secs: f64, sample_rate: f64) -> Self {
        Oscillator {
            waveform,
            start_freq: from,
            target_freq: to,
            glide_secs: secs,
            phase: 0.0,
            elapsed: 0,
            sample_rate,
        }
    }

    /// Instantaneous frequency at the current playback position.
    pub fn current_frequency(&self) -> f64 {
        if self.glide_secs <= 0.0 {
            return self.target_freq;
        }
        let t = self.elapsed as f64 / self.sample_rate;
        if t >= self.glide_secs {
            self.target_freq
        } else {
            self.start_freq + (self.target_freq - self.start_freq) * (t / self.glide_secs)
        }
    }

    /// Phase increment per sample.
    fn phase_inc(&self) -> f64 {
        self.current_frequency() / self.sample_rate
    }

    /// Generate the next sample.
    pub fn next_sample(&mut self) -> f64 {
        let inc = self.phase_inc();
        let sample = match self.waveform {
            Waveform::Sine => self.sine(),
            Waveform::Sawtooth => self.sawtooth(inc),
            Waveform::Square => self.square(inc),
        };

        self.phase += inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        self.elapsed += 1;

        sample
    }

    fn sine(&self) -> f64 {
        (2.0 * PI * self.phase).sin()
    }

    /// Naive sawtooth: rises from -1 to +1, then drops.
    /// PolyBLEP corrects the discontinuity at the wrap.
    fn sawtooth(&self, inc: f64) -> f64 {
        let naive = 2.0 * self.phase - 1.0;
        naive - poly_blep(self.phase, inc)
    }

    /// Square wave via two PolyBLEP-corrected step edges.
    fn square(&self, inc: f64) -> f64 {
        let mut value = if self.phase < 0.5 { 1.0 } else { -1.0 };
        value += poly_blep(self.phase, inc);
        value -= poly_blep((self.phase + 0.5) % 1.0, inc);
        value
    }
}

/// PolyBLEP (Polynomial Band-Limited Step) anti-aliasing correction.
///
/// `t` is the phase [0, 1), `dt` is the phase increment per sample.
/// Returns a correction value to subtract from the naive waveform
/// at discontinuities.
fn poly_blep(t: f64, dt: f64) -> f64 {
    if t < dt {
        // Just after the discontinuity
        let t = t / dt;
        2.0 * t - t * t - 1.0
    } else if t > 1.0 - dt {
        // Just before the next discontinuity
        let t = (t - 1.0) / dt;
        t * t + 2.0 * t + 1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_zero_at_start() {
        let mut osc = Oscillator::new(Waveform::Sine, 800.0, 44100.0);
        let sample = osc.next_sample();
        assert!(sample.abs() < 1e-10, "Sine should start near 0, got {sample}");
    }

    #[test]
    fn sine_range() {
        let mut osc = Oscillator::new(Waveform::Sine, 1400.0, 44100.0);
        for _ in 0..44100 {
            let s = osc.next_sample();
            assert!(s >= -1.0 && s <= 1.0, "Sine out of range: {s}");
        }
    }

    #[test]
    fn square_range() {
        let mut osc = Oscillator::new(Waveform::Square, 800.0, 44100.0);
        for _ in 0..44100 {
            let s = osc.next_sample();
            assert!(s >= -1.5 && s <= 1.5, "Square out of range: {s}");
        }
    }

    #[test]
    fn sawtooth_range() {
        let mut osc = Oscillator::new(Waveform::Sawtooth, 1000.0, 44100.0);
        for _ in 0..44100 {
            let s = osc.next_sample();
            assert!(s >= -1.5 && s <= 1.5, "Saw out of range: {s}");
        }
    }

    #[test]
    fn glide_is_linear_and_holds() {
        // The check cue: 1400 Hz → 1200 Hz over 0.1 s
        let mut osc = Oscillator::with_glide(Waveform::Sine, 1400.0, 1200.0, 0.1, 44100.0);
        assert!((osc.current_frequency() - 1400.0).abs() < 1e-9);

        // Halfway through the glide
        for _ in 0..2205 {
            osc.next_sample();
        }
        let mid = osc.current_frequency();
        assert!((mid - 1300.0).abs() < 1.0, "Expected ~1300 Hz at midpoint, got {mid}");

        // Past the glide it holds the target
        for _ in 0..4410 {
            osc.next_sample();
        }
        assert!((osc.current_frequency() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn static_oscillator_reports_fixed_frequency() {
        let mut osc = Oscillator::new(Waveform::Square, 600.0, 44100.0);
        for _ in 0..1000 {
            osc.next_sample();
        }
        assert_eq!(osc.current_frequency(), 600.0);
    }
}
