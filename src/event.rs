//! Sound event tags.

use serde::{Deserialize, Serialize};

/// The symbolic classification of a game event, used to select a cue recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEvent {
    Move,
    Capture,
    Check,
    Castle,
    GameEnd,
}

impl SoundEvent {
    /// Every event, in playback-priority-agnostic order.
    pub const ALL: [SoundEvent; 5] = [
        SoundEvent::Move,
        SoundEvent::Capture,
        SoundEvent::Check,
        SoundEvent::Castle,
        SoundEvent::GameEnd,
    ];

    /// Parse a tag. Unknown tags fall back to `Move` — an unexpected tag
    /// must never block gameplay, so this is deliberately not an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "capture" => SoundEvent::Capture,
            "check" => SoundEvent::Check,
            "castle" => SoundEvent::Castle,
            "gameEnd" => SoundEvent::GameEnd,
            _ => SoundEvent::Move,
        }
    }

    /// The canonical tag string.
    pub fn as_tag(self) -> &'static str {
        match self {
            SoundEvent::Move => "move",
            SoundEvent::Capture => "capture",
            SoundEvent::Check => "check",
            SoundEvent::Castle => "castle",
            SoundEvent::GameEnd => "gameEnd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tags_round_trip() {
        for event in SoundEvent::ALL {
            assert_eq!(SoundEvent::from_tag(event.as_tag()), event);
        }
    }

    #[test]
    fn unknown_tags_default_to_move() {
        assert_eq!(SoundEvent::from_tag("promotion"), SoundEvent::Move);
        assert_eq!(SoundEvent::from_tag(""), SoundEvent::Move);
        assert_eq!(SoundEvent::from_tag("CAPTURE"), SoundEvent::Move);
        assert_eq!(SoundEvent::from_tag("game_end"), SoundEvent::Move);
    }

    #[test]
    fn serde_uses_camel_case_tags() {
        let json = serde_json::to_string(&SoundEvent::GameEnd).unwrap();
        assert_eq!(json, "\"gameEnd\"");
        let back: SoundEvent = serde_json::from_str("\"capture\"").unwrap();
        assert_eq!(back, SoundEvent::Capture);
    }
}
