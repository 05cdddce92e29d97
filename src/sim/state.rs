//! Session state and core simulation types
//!
//! Everything the tick mutates lives here, owned by one `GameState` with an
//! explicit `new`/`reset` lifecycle. The presentation side only reads it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::MovementModel;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Lives reached zero
    Lost,
    /// Score crossed the win threshold
    Won,
}

/// Events produced by a tick, drained once per frame by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Advisory text for the hint channel
    Hint(&'static str),
    /// An agent reached the player
    LifeLost,
    /// A sigil was collected (bonus already added to score)
    SigilCollected,
    /// Terminal loss; `final_score` is the displayed score at the transition
    Lost { final_score: u64 },
    /// Terminal win
    Won,
}

/// Arena dimensions in canvas pixels (resizable)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player-controlled square
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Player {
    /// Starting position: a quarter across, vertically centered
    pub fn spawn(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(arena.width / 4.0, arena.height / 2.0),
            vel: Vec2::ZERO,
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
        }
    }

    /// Clamp position to the arena interior, half a body inside each wall
    pub fn clamp_to(&mut self, arena: &Arena) {
        let half = self.size / 2.0;
        self.pos.x = self.pos.x.clamp(half, arena.width - half);
        self.pos.y = self.pos.y.clamp(half, arena.height - half);
    }
}

/// A hostile agent drifting leftward across the arena
#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Weave phase assigned at spawn; stable across removals elsewhere
    /// in the collection
    pub phase: f32,
}

/// A bonus sigil, constant leftward velocity
#[derive(Debug, Clone, Copy)]
pub struct Sigil {
    pub pos: Vec2,
    pub vel_x: f32,
    pub size: f32,
}

/// One decorative rain column. Recycled, never destroyed.
#[derive(Debug, Clone, Copy)]
pub struct RainDrop {
    pub pos: Vec2,
    pub speed: f32,
    /// Glyph count in the column
    pub len: f32,
}

impl RainDrop {
    fn spawn(rng: &mut Pcg32, arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * arena.width,
                rng.random::<f32>() * -arena.height,
            ),
            speed: RAIN_SPEED_MIN + rng.random::<f32>() * RAIN_SPEED_SPREAD,
            len: RAIN_LEN_MIN + rng.random::<f32>() * RAIN_LEN_SPREAD,
        }
    }

    /// Reset above the top edge at a fresh random column
    pub fn recycle(&mut self, rng: &mut Pcg32, arena: &Arena) {
        self.pos.y = -self.len * RAIN_GLYPH_STEP;
        self.pos.x = rng.random::<f32>() * arena.width;
    }

    /// True once the whole column has fallen past the bottom edge
    pub fn below(&self, arena: &Arena) -> bool {
        self.pos.y > arena.height + self.len * RAIN_GLYPH_STEP
    }
}

/// Hint shown right after (re)start
pub const HINT_AWAKE: &str = "Awake";

/// Complete session state, exclusively owned by the scheduling loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG (spawn rolls, rain recycling)
    pub rng: Pcg32,
    pub arena: Arena,
    pub phase: GamePhase,
    /// Tick/bonus accumulator; the HUD shows `score / 60`
    pub score: u64,
    pub lives: u32,
    /// Wall-clock start, used for the elapsed-time display on the win overlay
    pub started_at_ms: f64,
    pub movement: MovementModel,
    pub player: Player,
    pub agents: Vec<Agent>,
    pub sigils: Vec<Sigil>,
    /// Fixed-size decoration pool
    pub rain: Vec<RainDrop>,
    /// Most recent hint text, mirrored to the HUD every frame
    pub hint: &'static str,
    /// Pending events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session with a seeded rain pool
    pub fn new(seed: u64, arena: Arena, movement: MovementModel, now_ms: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rain = (0..RAIN_DROPS)
            .map(|_| RainDrop::spawn(&mut rng, &arena))
            .collect();

        Self {
            seed,
            rng,
            arena,
            phase: GamePhase::Running,
            score: 0,
            lives: START_LIVES,
            started_at_ms: now_ms,
            movement,
            player: Player::spawn(&arena),
            agents: Vec::new(),
            sigils: Vec::new(),
            rain,
            hint: HINT_AWAKE,
            events: Vec::new(),
        }
    }

    /// Restart the session. The "harder" flag trades the usual three lives
    /// for a single one. Rain and RNG carry over.
    pub fn reset(&mut self, harder: bool, now_ms: f64) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.lives = if harder { HARD_MODE_LIVES } else { START_LIVES };
        self.started_at_ms = now_ms;
        self.player = Player::spawn(&self.arena);
        self.agents.clear();
        self.sigils.clear();
        self.hint = HINT_AWAKE;
        self.events.clear();
    }

    /// Observe a canvas resize; clamping and spawn-edge math pick up the new
    /// dimensions from the next tick on.
    pub fn set_arena_size(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        self.player.clamp_to(&self.arena);
    }

    /// Score as shown on the HUD and stored as the high score
    pub fn displayed_score(&self) -> u64 {
        self.score / TICKS_PER_SECOND
    }

    /// Take the events accumulated since the last frame
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
