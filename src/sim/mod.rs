//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and platform
//! free:
//! - One fixed step per scheduled frame
//! - Seeded RNG only, owned by the session state
//! - No rendering or DOM dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{off_arena, overlaps};
pub use input::{KeyState, resolve_velocity};
pub use spawn::spawn_step;
pub use state::{Agent, Arena, GameEvent, GamePhase, GameState, Player, RainDrop, Sigil};
pub use tick::{RestartRequest, TickInput, tick};
