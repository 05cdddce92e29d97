//! MatrixXscape - a Matrix-themed dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, session state)
//! - `present`: Presentation-sink contract between the sim and the HUD/overlays
//! - `render`: 2D canvas painter (wasm only)
//! - `platform`: Out-of-core glue (checkout, scheduling link, share action)
//! - `highscores`: Durable high-score scalar
//! - `settings`: User preferences

pub mod highscores;
pub mod platform;
pub mod present;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::{MovementModel, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per displayed second (the HUD shows `score / 60`)
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 22.0;
    pub const PLAYER_SPEED: f32 = 7.0;

    /// Agent spawn tuning: probability per tick is BASE + score * RAMP
    pub const AGENT_SPAWN_BASE: f64 = 0.03;
    pub const AGENT_SPAWN_RAMP: f64 = 0.000_000_7;
    pub const AGENT_SIZE_MIN: f32 = 18.0;
    pub const AGENT_SIZE_SPREAD: f32 = 8.0;
    pub const AGENT_SPEED_MIN: f32 = 3.0;
    pub const AGENT_SPEED_SPREAD: f32 = 3.0;
    /// Vertical drift is uniform in [-AGENT_DRIFT, AGENT_DRIFT]
    pub const AGENT_DRIFT: f32 = 1.0;
    /// Sinusoidal weave applied on top of the vertical drift
    pub const AGENT_WEAVE_AMP: f32 = 0.6;
    pub const AGENT_WEAVE_RATE: f32 = 0.05;

    /// Sigil tuning
    pub const SIGIL_SPAWN_CHANCE: f64 = 0.015;
    pub const SIGIL_SIZE: f32 = 14.0;
    pub const SIGIL_SPEED: f32 = 2.5;
    /// Concurrent sigil cap; spawn rolls are suppressed at the cap
    pub const MAX_SIGILS: usize = 4;
    /// Score awarded on sigil pickup
    pub const SIGIL_BONUS: u64 = 900;

    /// Entities spawn this far past the right arena edge
    pub const SPAWN_EDGE_PAD: f32 = 40.0;
    /// Entities are dropped once their x falls below this margin
    pub const OFF_ARENA_X: f32 = -80.0;

    /// Score above which the run is won (~90 seconds of survival)
    pub const WIN_SCORE: u64 = 5400;

    /// Lives at the start of a normal / "harder" run
    pub const START_LIVES: u32 = 3;
    pub const HARD_MODE_LIVES: u32 = 1;

    /// A coaching hint is emitted every this many ticks
    pub const HINT_INTERVAL_TICKS: u64 = 900;

    /// Per-tick velocity decay for the inertial movement model
    pub const INERTIA_DECAY: f32 = 0.85;

    /// Rain decoration pool
    pub const RAIN_DROPS: usize = 140;
    pub const RAIN_SPEED_MIN: f32 = 12.0;
    pub const RAIN_SPEED_SPREAD: f32 = 10.0;
    pub const RAIN_LEN_MIN: f32 = 6.0;
    pub const RAIN_LEN_SPREAD: f32 = 10.0;
    /// Vertical spacing of the glyphs in one rain column
    pub const RAIN_GLYPH_STEP: f32 = 18.0;
}
