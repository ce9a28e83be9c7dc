//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Preferences for the sound engine and its output stream.
///
/// The sample rate and channel count are negotiated against what the
/// output device actually supports; these are the preferred values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub buffer_size: u32,
    /// Master gain applied to the summed mix [0, 1].
    pub master_gain: f64,
    /// Initial state of the enable toggle.
    pub enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            buffer_size: 512,
            master_gain: 0.8,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert!(config.enabled);
        assert!((config.master_gain - 0.8).abs() < 1e-12);
    }

    #[test]
    fn serde_round_trip() {
        let config = EngineConfig {
            sample_rate: 48000,
            master_gain: 0.5,
            enabled: false,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.sample_rate, 44100);
    }
}
