//! Burst — one scheduled sound: oscillator, optional lowpass, gain envelope.

use super::envelope::Envelope;
use super::filter::Lowpass;
use super::oscillator::Oscillator;

/// A single synthesized burst with a fixed duration.
///
/// Built fresh for every cue, never pooled; the mixer drops it once it has
/// produced its last sample.
#[derive(Debug, Clone)]
pub struct Burst {
    oscillator: Oscillator,
    filter: Option<Lowpass>,
    envelope: Envelope,
    remaining: usize,
}

impl Burst {
    pub fn new(
        oscillator: Oscillator,
        filter: Option<Lowpass>,
        envelope: Envelope,
        duration: f64,
        sample_rate: f64,
    ) -> Self {
        Burst {
            oscillator,
            filter,
            envelope,
            remaining: (duration * sample_rate) as usize,
        }
    }

    /// Generate the next sample; 0.0 once the burst has ended.
    pub fn next_sample(&mut self) -> f64 {
        if self.remaining == 0 {
            return 0.0;
        }
        self.remaining -= 1;

        let mut sample = self.oscillator.next_sample();
        if let Some(filter) = &mut self.filter {
            sample = filter.process(sample);
        }
        sample * self.envelope.next_sample()
    }

    /// Has the burst produced all of its samples?
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;

    fn click(sample_rate: f64) -> Burst {
        let osc = Oscillator::new(Waveform::Square, 800.0, sample_rate);
        let filter = Lowpass::new(1200.0, sample_rate);
        let env = Envelope::new(0.002, 0.4, None, 0.08, sample_rate);
        Burst::new(osc, Some(filter), env, 0.08, sample_rate)
    }

    #[test]
    fn burst_produces_sound() {
        let mut b = click(44100.0);
        let mut has_nonzero = false;
        for _ in 0..1000 {
            if b.next_sample().abs() > 0.001 {
                has_nonzero = true;
            }
        }
        assert!(has_nonzero, "Burst should produce non-zero output");
    }

    #[test]
    fn burst_ends_exactly_at_duration() {
        let sample_rate = 44100.0;
        let mut b = click(sample_rate);
        let total = (0.08 * sample_rate) as usize;
        for i in 0..total {
            b.next_sample();
            if i < total - 1 {
                assert!(!b.is_finished(), "Finished early at sample {i}");
            }
        }
        assert!(b.is_finished(), "Burst should be finished at its duration");
        assert_eq!(b.next_sample(), 0.0, "Finished burst must be silent");
    }

    #[test]
    fn burst_output_bounded() {
        let mut b = click(44100.0);
        for _ in 0..4000 {
            let s = b.next_sample();
            assert!(s.abs() <= 1.0, "Burst output should stay within ±peak, got {s}");
        }
    }
}
