//! Presentation-sink contract
//!
//! The sim never touches a concrete UI toolkit. Once per frame the platform
//! layer mirrors the numeric state through this trait, and routes terminal
//! transitions to the overlay controls. The DOM implementation lives with
//! the wasm entry point.

use crate::sim::GameState;

/// Commentary shown on the "lost" overlay
pub const LOST_COMMENTARY: &str =
    "Your escape pattern shows 73% Matrix attachment. Escape Pass or Founders can tilt the odds.";
/// Commentary shown on the "won" overlay
pub const WON_COMMENTARY: &str = "You punched a hole through the code. Most never get this far.";

/// Read-only consumer of per-frame display state
pub trait PresentationSink {
    /// Mirror the displayed score (whole seconds survived)
    fn set_score(&mut self, seconds: u64);
    /// Mirror the lives counter
    fn set_lives(&mut self, lives: u32);
    /// Update the hint channel
    fn set_hint(&mut self, hint: &str);
    /// Show the "lost" overlay with the final score
    fn show_lost(&mut self, final_score: u64, commentary: &str);
    /// Show the "won" overlay with the elapsed time in whole seconds
    fn show_won(&mut self, elapsed_secs: u64, commentary: &str);
    /// Hide both overlays (invoked on restart)
    fn hide_overlays(&mut self);
}

/// Mirror the numeric display state, once per frame
pub fn mirror_frame(state: &GameState, sink: &mut dyn PresentationSink) {
    sink.set_score(state.displayed_score());
    sink.set_lives(state.lives);
    sink.set_hint(state.hint);
}

/// Whole seconds since the session started
pub fn elapsed_secs(state: &GameState, now_ms: f64) -> u64 {
    ((now_ms - state.started_at_ms) / 1000.0).max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MovementModel;
    use crate::sim::{Arena, TickInput, tick};

    #[derive(Default)]
    struct RecordingSink {
        score: u64,
        lives: u32,
        hint: String,
        lost_shown: Option<u64>,
        won_shown: Option<u64>,
    }

    impl PresentationSink for RecordingSink {
        fn set_score(&mut self, seconds: u64) {
            self.score = seconds;
        }
        fn set_lives(&mut self, lives: u32) {
            self.lives = lives;
        }
        fn set_hint(&mut self, hint: &str) {
            self.hint = hint.to_string();
        }
        fn show_lost(&mut self, final_score: u64, _commentary: &str) {
            self.lost_shown = Some(final_score);
        }
        fn show_won(&mut self, elapsed_secs: u64, _commentary: &str) {
            self.won_shown = Some(elapsed_secs);
        }
        fn hide_overlays(&mut self) {
            self.lost_shown = None;
            self.won_shown = None;
        }
    }

    #[test]
    fn test_mirror_frame_scales_score_to_seconds() {
        let mut state = GameState::new(1, Arena::new(800.0, 600.0), MovementModel::Direct, 0.0);
        for _ in 0..130 {
            tick(&mut state, &TickInput::default());
        }
        let mut sink = RecordingSink::default();
        mirror_frame(&state, &mut sink);
        assert_eq!(sink.score, 2);
        assert_eq!(sink.lives, state.lives);
        assert!(!sink.hint.is_empty());
    }

    #[test]
    fn test_elapsed_secs_rounds_down() {
        let state = GameState::new(1, Arena::new(800.0, 600.0), MovementModel::Direct, 10_000.0);
        assert_eq!(elapsed_secs(&state, 10_000.0), 0);
        assert_eq!(elapsed_secs(&state, 11_999.0), 1);
        assert_eq!(elapsed_secs(&state, 102_500.0), 92);
        // A clock that moved backwards never underflows
        assert_eq!(elapsed_secs(&state, 9_000.0), 0);
    }
}
