//! Maps the outcome of an applied move to a sound event.
//!
//! The flags are produced by the move handler after consulting the rules
//! engine; nothing here inspects a board.

use crate::event::SoundEvent;

/// Outcome flags for a single applied move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move left the opponent in check.
    pub is_check: bool,
    /// The move captured a piece.
    pub is_capture: bool,
    /// The move was a kingside or queenside castle.
    pub is_castle: bool,
    /// The move ended the game (checkmate, stalemate, or draw).
    pub is_game_over: bool,
}

/// Pick the cue for a move.
///
/// Priority: game over, then check, then capture, then castle; everything
/// else is a plain move.
pub fn classify(outcome: &MoveOutcome) -> SoundEvent {
    if outcome.is_game_over {
        SoundEvent::GameEnd
    } else if outcome.is_check {
        SoundEvent::Check
    } else if outcome.is_capture {
        SoundEvent::Capture
    } else if outcome.is_castle {
        SoundEvent::Castle
    } else {
        SoundEvent::Move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_move() {
        assert_eq!(classify(&MoveOutcome::default()), SoundEvent::Move);
    }

    #[test]
    fn check_outranks_capture_and_castle() {
        let outcome = MoveOutcome {
            is_check: true,
            is_capture: true,
            is_castle: true,
            ..MoveOutcome::default()
        };
        assert_eq!(classify(&outcome), SoundEvent::Check);
    }

    #[test]
    fn capture_outranks_castle() {
        let outcome = MoveOutcome {
            is_capture: true,
            is_castle: true,
            ..MoveOutcome::default()
        };
        assert_eq!(classify(&outcome), SoundEvent::Capture);
    }

    #[test]
    fn castle_alone() {
        let outcome = MoveOutcome {
            is_castle: true,
            ..MoveOutcome::default()
        };
        assert_eq!(classify(&outcome), SoundEvent::Castle);
    }

    #[test]
    fn game_over_outranks_everything() {
        let outcome = MoveOutcome {
            is_check: true,
            is_capture: true,
            is_game_over: true,
            ..MoveOutcome::default()
        };
        assert_eq!(classify(&outcome), SoundEvent::GameEnd);
    }
}
