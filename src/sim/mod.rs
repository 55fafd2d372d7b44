//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per call, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order, IDs ascending)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod score;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod theme;
pub mod tick;

pub use collision::{Outcome, resolve};
pub use score::ScoreTracker;
pub use snapshot::{EntityView, FrameSnapshot};
pub use spawn::{SpawnController, SpawnDecision};
pub use state::{Entity, EntityKind, GamePhase, GameState, Player};
pub use theme::{Rgb, Theme, ThemeSelector, default_themes};
pub use tick::{Cue, TickInput, TickOutput, tick};
