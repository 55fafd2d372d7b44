//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, one logical
//! tick per call. The caller owns the frame clock.

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::collision::{Outcome, resolve};
use super::state::{Entity, EntityKind, GamePhase, GameState};
use crate::Rect;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move key held (applied once per tick)
    pub move_left: bool,
    pub move_right: bool,
    /// Playing <-> Paused
    pub toggle_pause: bool,
    /// Start over (only meaningful in GameOver)
    pub restart: bool,
    /// Stop the loop; passed through to the caller
    pub quit: bool,
}

/// Fire-and-forget effects for the audio/render collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Score climbed another clap threshold
    Clap,
    /// An obstacle hit the paddle
    Fatal,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Cues in firing order
    pub cues: Vec<Cue>,
    /// Score gained this tick
    pub score_delta: u64,
    /// Entities caught / missed this tick
    pub caught: u32,
    pub missed: u32,
    pub theme_changed: bool,
    pub quit_requested: bool,
}

/// Per-collection tally from one sweep
#[derive(Debug, Default, Clone, Copy)]
struct Sweep {
    caught: u32,
    missed: u32,
    fatal: bool,
}

/// Advance every entity, classify it, then drop everything that resolved.
///
/// Outcomes are computed over the whole collection before any removal.
fn sweep(entities: &mut Vec<Entity>, player: &Rect, field_height: f32) -> Sweep {
    let outcomes: Vec<Outcome> = entities
        .iter_mut()
        .map(|entity| {
            entity.advance();
            resolve(player, entity, field_height)
        })
        .collect();

    let mut tally = Sweep::default();
    for outcome in &outcomes {
        match outcome {
            Outcome::Pending => {}
            Outcome::Caught => tally.caught += 1,
            Outcome::Missed => tally.missed += 1,
            Outcome::Fatal => tally.fatal = true,
        }
    }

    let mut keep = outcomes.iter().map(|o| !o.removes());
    entities.retain(|_| keep.next().unwrap_or(true));
    tally
}

/// Advance the game state by one tick
pub fn tick<R: Rng + SeedableRng>(state: &mut GameState<R>, input: &TickInput) -> TickOutput {
    let mut output = TickOutput {
        quit_requested: input.quit,
        ..Default::default()
    };

    if input.toggle_pause {
        state.toggle_pause();
    }
    if input.restart {
        state.restart();
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return output;
    }

    state.time_ticks += 1;

    // Update paddle position
    let speed = state.player.speed;
    let mut dx = 0.0;
    if input.move_left {
        dx -= speed;
    }
    if input.move_right {
        dx += speed;
    }
    if dx != 0.0 {
        state.move_player(dx);
    }

    // Spawn rules see the score from before this tick's catches
    let decision = state.spawner.tick(state.score());
    state.insert_spawns(decision);

    let player = state.player.rect();
    let field_height = state.settings().field_height;
    let mut fatal = false;
    for kind in [EntityKind::Item, EntityKind::Giant, EntityKind::Obstacle] {
        let tally = sweep(state.collection_mut(kind), &player, field_height);
        output.caught += tally.caught;
        output.missed += tally.missed;
        output.score_delta += u64::from(tally.caught) * state.points_for(kind);
        fatal |= tally.fatal;
    }

    state.scores.update(output.score_delta);

    if fatal {
        output.cues.push(Cue::Fatal);
        state.game_over();
        return output;
    }

    if state.scores.check_clap() {
        log::debug!("Clap at score {}", state.score());
        output.cues.push(Cue::Clap);
    }
    output.theme_changed = state.themes.evaluate(state.score());

    output
}
