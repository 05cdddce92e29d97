//! Per-frame simulation step
//!
//! One `tick` call per scheduled frame: apply any pending restart, then
//! spawn, move, collide, and update score/phase. While the session is not
//! `Running` the whole step is a no-op so the scheduler can keep polling for
//! a restart without re-entering the loop.

use glam::Vec2;

use super::collision::{off_arena, overlaps};
use super::input::{KeyState, resolve_velocity};
use super::spawn::spawn_step;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Hint shown on the periodic coaching interval
pub const HINT_BREATHE: &str = "Breathe. Strafe sideways. Agents are tracking your last line.";
/// Hint shown when an agent reaches the player
pub const HINT_AGENT_HIT: &str = "Hit by agent. System latency spiked.";
/// Hint shown on sigil pickup
pub const HINT_SIGIL: &str = "Sigil absorbed. Escape vector strengthened.";

/// Restart request carried into the tick so it applies exactly at a tick
/// boundary, never mid-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartRequest {
    pub harder: bool,
    /// Wall clock at the moment of the request, becomes the new session start
    pub now_ms: f64,
}

/// Input state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Discrete key-state source
    pub keys: KeyState,
    /// Analog joystick vector, magnitude <= 1. When absent the key-state
    /// source is used instead.
    pub analog: Option<Vec2>,
    pub restart: Option<RestartRequest>,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(req) = input.restart {
        state.reset(req.harder, req.now_ms);
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.score += 1;
    if state.score.is_multiple_of(HINT_INTERVAL_TICKS) {
        emit_hint(state, HINT_BREATHE);
    }

    // Player movement: analog source wins when present, otherwise key state
    let raw = match input.analog {
        Some(v) => v.clamp_length_max(1.0),
        None => input.keys.axis(),
    };
    state.player.vel = resolve_velocity(state.movement, raw, state.player.vel, state.player.speed);
    state.player.pos += state.player.vel;
    let arena = state.arena;
    state.player.clamp_to(&arena);

    spawn_step(state);
    step_agents(state);
    if state.phase == GamePhase::Running {
        step_sigils(state);
    }
    step_rain(state);

    if state.phase == GamePhase::Running && state.score > WIN_SCORE {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        log::info!("Won at score {} ({}s)", state.score, state.displayed_score());
    }
}

fn emit_hint(state: &mut GameState, text: &'static str) {
    state.hint = text;
    state.events.push(GameEvent::Hint(text));
}

fn enter_lost(state: &mut GameState) {
    state.phase = GamePhase::Lost;
    let final_score = state.displayed_score();
    state.events.push(GameEvent::Lost { final_score });
    log::info!("Lost with final score {final_score}");
}

/// Advance agents and resolve their collisions/removals.
///
/// Ascending index with `swap_remove` keeps the pass well-defined under
/// multiple removals in one tick: the swapped-in element comes from the
/// unprocessed tail, so nothing is skipped or handled twice. Collision is
/// checked before the off-arena cull; when both hold the scoring-relevant
/// path wins.
fn step_agents(state: &mut GameState) {
    let weave_t = state.score as f32 * AGENT_WEAVE_RATE;
    let mut i = 0;
    while i < state.agents.len() {
        let a = &mut state.agents[i];
        a.pos += a.vel;
        a.pos.y += (weave_t + a.phase).sin() * AGENT_WEAVE_AMP;

        if overlaps(state.player.pos, state.player.size, a.pos, a.size) {
            state.agents.swap_remove(i);
            state.lives = state.lives.saturating_sub(1);
            emit_hint(state, HINT_AGENT_HIT);
            state.events.push(GameEvent::LifeLost);
            if state.lives == 0 {
                enter_lost(state);
                return;
            }
            continue;
        }

        if off_arena(a.pos) {
            state.agents.swap_remove(i);
            continue;
        }

        i += 1;
    }
}

fn step_sigils(state: &mut GameState) {
    let mut i = 0;
    while i < state.sigils.len() {
        let s = &mut state.sigils[i];
        s.pos.x += s.vel_x;

        if overlaps(state.player.pos, state.player.size, s.pos, s.size) {
            state.sigils.swap_remove(i);
            state.score += SIGIL_BONUS;
            emit_hint(state, HINT_SIGIL);
            state.events.push(GameEvent::SigilCollected);
            continue;
        }

        if off_arena(s.pos) {
            state.sigils.swap_remove(i);
            continue;
        }

        i += 1;
    }
}

/// Advance the decoration pool; drops recycle instead of being removed
fn step_rain(state: &mut GameState) {
    for drop in &mut state.rain {
        drop.pos.y += drop.speed;
        if drop.below(&state.arena) {
            drop.recycle(&mut state.rng, &state.arena);
        }
    }
}
