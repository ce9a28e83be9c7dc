//! Offline renderer — renders one cue to samples or a WAV byte buffer.
//!
//! The same recipes that feed the live output stream can be rendered
//! headless; the preview binary uses this for its WAV mode and the tests
//! use it to inspect whole cues.

use std::io::Cursor;

use crate::event::SoundEvent;

use super::mixer::CueMixer;
use super::recipe::tones_for;

/// Render one cue to mono f32 samples at the given rate.
pub fn render_event(event: SoundEvent, sample_rate: u32) -> Vec<f32> {
    let mut mixer = CueMixer::new(sample_rate as f64);
    for tone in tones_for(event) {
        mixer.schedule(tone.onset, tone.build(sample_rate as f64));
    }

    let mut samples = Vec::new();
    while !mixer.is_idle() {
        samples.push(mixer.next_sample());
    }
    samples
}

/// Render one cue to a WAV byte buffer (16-bit mono PCM).
pub fn render_event_wav(event: SoundEvent, sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let samples = render_event(event, sample_rate);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(pcm)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}
