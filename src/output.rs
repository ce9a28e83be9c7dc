//! Output device management — a cpal stream that drains the cue mixer.
//!
//! The stream is the Output Device Handle: created at most once per engine,
//! never rebuilt. Absence of a device (headless hosts, CI) is reported as
//! an error string for the engine to log and absorb — it is not fatal
//! anywhere.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use parking_lot::Mutex;

use crate::config::EngineConfig;
use crate::dsp::mixer::CueMixer;

/// An open output stream bound to the shared mixer.
pub struct OutputStream {
    stream: cpal::Stream,
    pub sample_rate: u32,
    pub channels: u16,
}

impl OutputStream {
    /// Open the default output device and start a stream whose callback
    /// renders the shared mixer.
    pub fn open(mixer: Arc<Mutex<CueMixer>>, config: &EngineConfig) -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| "no default output device".to_string())?;

        let stream_config = supported_config(&device, config)?;
        let sample_rate = stream_config.sample_rate.0;
        let channels = stream_config.channels;

        log::info!("sound output: {sample_rate} Hz, {channels} channels");

        let callback_channels = channels as usize;
        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    mixer.lock().fill(data, callback_channels);
                },
                |err| log::warn!("output stream error: {err}"),
                None,
            )
            .map_err(|e| format!("failed to build output stream: {e}"))?;

        stream
            .play()
            .map_err(|e| format!("failed to start output stream: {e}"))?;

        Ok(OutputStream {
            stream,
            sample_rate,
            channels,
        })
    }

    /// Fire-and-forget resume for streams the host may have paused. A
    /// failure only means the next cue may be inaudible.
    pub fn resume(&self) {
        if let Err(e) = self.stream.play() {
            log::debug!("output stream resume failed: {e}");
        }
    }
}

/// Negotiate a stream config close to the preferred one, falling back to
/// the device default.
fn supported_config(
    device: &cpal::Device,
    preferred: &EngineConfig,
) -> Result<cpal::StreamConfig, String> {
    let supported = device
        .supported_output_configs()
        .map_err(|e| format!("failed to query output configs: {e}"))?;

    for config in supported {
        let min_rate = config.min_sample_rate().0;
        let max_rate = config.max_sample_rate().0;

        if preferred.sample_rate >= min_rate
            && preferred.sample_rate <= max_rate
            && config.channels() >= preferred.channels
            && config.sample_format() == cpal::SampleFormat::F32
        {
            return Ok(cpal::StreamConfig {
                channels: preferred.channels,
                sample_rate: cpal::SampleRate(preferred.sample_rate),
                buffer_size: cpal::BufferSize::Fixed(preferred.buffer_size),
            });
        }
    }

    let default_config = device
        .default_output_config()
        .map_err(|e| format!("failed to get default output config: {e}"))?;

    Ok(cpal::StreamConfig {
        channels: default_config.channels().min(2),
        sample_rate: default_config.sample_rate(),
        buffer_size: cpal::BufferSize::Default,
    })
}
