//! Spawn cadence and per-window spawn rules

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Entity, EntityKind};
use crate::settings::{EntitySettings, Settings};

/// What a single tick decided to spawn. Kinds are decided independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnDecision {
    pub item: Option<Entity>,
    pub giant: Option<Entity>,
    pub obstacle: Option<Entity>,
}

impl SpawnDecision {
    pub fn is_empty(&self) -> bool {
        self.item.is_none() && self.giant.is_none() && self.obstacle.is_none()
    }

    /// Spawned entities in insertion order
    pub fn into_entities(self) -> impl Iterator<Item = Entity> {
        [self.item, self.giant, self.obstacle].into_iter().flatten()
    }
}

/// Counts ticks and opens a spawn window every `window` ticks.
///
/// Randomness comes from the injected `R`, so a seeded generator gives a
/// reproducible run.
#[derive(Debug, Clone)]
pub struct SpawnController<R = Pcg32> {
    rng: R,
    frame_counter: u32,
    window: u32,
    field_width: i32,
    item: EntitySettings,
    giant: EntitySettings,
    obstacle: EntitySettings,
    giant_score_divisor: u64,
    obstacle_chance: f64,
}

impl<R: Rng> SpawnController<R> {
    pub fn new(settings: &Settings, rng: R) -> Self {
        Self {
            rng,
            frame_counter: 0,
            window: settings.spawn_window_ticks,
            field_width: settings.field_width as i32,
            item: settings.item,
            giant: settings.giant,
            obstacle: settings.obstacle,
            giant_score_divisor: settings.giant_score_divisor,
            obstacle_chance: settings.obstacle_chance,
        }
    }

    /// Ticks since the last spawn window
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Advance one tick. `score` is the score before this tick's collisions.
    pub fn tick(&mut self, score: u64) -> SpawnDecision {
        self.frame_counter += 1;
        if self.frame_counter < self.window {
            return SpawnDecision::default();
        }
        self.frame_counter = 0;

        let item = Some(self.spawn(EntityKind::Item, self.item));

        let giant = (score > 0 && score % self.giant_score_divisor == 0)
            .then(|| self.spawn(EntityKind::Giant, self.giant));

        let obstacle = (self.rng.random::<f64>() < self.obstacle_chance)
            .then(|| self.spawn(EntityKind::Obstacle, self.obstacle));

        let decision = SpawnDecision { item, giant, obstacle };
        log::debug!(
            "Spawn window at score {}: giant={} obstacle={}",
            score,
            decision.giant.is_some(),
            decision.obstacle.is_some()
        );
        decision
    }

    /// Fresh counter and random stream for a new run
    pub fn reset(&mut self, rng: R) {
        self.rng = rng;
        self.frame_counter = 0;
    }

    fn spawn(&mut self, kind: EntityKind, tuning: EntitySettings) -> Entity {
        let margin = tuning.spawn_margin;
        let x = self.rng.random_range(margin..=self.field_width - margin);
        Entity::new(kind, Vec2::new(x as f32, 0.0), tuning.radius, tuning.speed)
    }
}
