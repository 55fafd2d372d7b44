//! Game state and core simulation types
//!
//! A single `GameState` owns every piece of mutable run state: the paddle,
//! the falling entities, score and theme trackers, and the spawn RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::score::ScoreTracker;
use super::spawn::{SpawnController, SpawnDecision};
use super::theme::{Theme, ThemeSelector};
use crate::settings::{Settings, SettingsError};
use crate::{Rect, clamp_span};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen until pause is toggled again
    Paused,
    /// Run ended on an obstacle hit; waiting for restart
    GameOver,
}

/// Falling entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Regular catchable item
    Item,
    /// Large bonus item
    Giant,
    /// Ends the run when caught
    Obstacle,
}

/// A falling circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Assigned when the entity joins the game (0 until then)
    pub id: u32,
    pub kind: EntityKind,
    /// Reference point (circle center) used for collision and bounds tests
    pub pos: Vec2,
    pub radius: f32,
    /// Downward speed in pixels per tick
    pub speed: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            id: 0,
            kind,
            pos,
            radius,
            speed,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    /// Fixed for the whole run
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal pixels per tick while a move key is held
    pub speed: f32,
    max_x: f32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: settings.player_start_x(),
            y: settings.player_y(),
            width: settings.player_width,
            height: settings.player_height,
            speed: settings.player_speed,
            max_x: settings.player_max_x(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Shift horizontally, staying inside `[0, field_width - width]`
    pub fn shift(&mut self, dx: f32) {
        let moved = if dx.is_finite() { self.x + dx } else { self.x };
        self.x = clamp_span(moved, 0.0, self.max_x);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Run seed; restart re-seeds the spawn RNG from it
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Active entities per kind, in spawn order
    pub items: Vec<Entity>,
    pub giants: Vec<Entity>,
    pub obstacles: Vec<Entity>,
    pub spawner: SpawnController<R>,
    pub scores: ScoreTracker,
    pub themes: ThemeSelector,
    /// Simulation ticks advanced this run (Playing only)
    pub time_ticks: u64,
    settings: Settings,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the default PCG generator
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        Self::seeded(settings, seed)
    }
}

impl<R: Rng + SeedableRng> GameState<R> {
    /// Create a new game with any seedable generator
    pub fn seeded(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!("Game created with seed {seed}");
        Ok(Self {
            seed,
            phase: GamePhase::Playing,
            player: Player::new(&settings),
            items: Vec::new(),
            giants: Vec::new(),
            obstacles: Vec::new(),
            spawner: SpawnController::new(&settings, R::seed_from_u64(seed)),
            scores: ScoreTracker::new(settings.clap_threshold),
            themes: ThemeSelector::new(settings.themes.clone(), settings.theme_threshold),
            time_ticks: 0,
            settings,
            next_id: 1,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn score(&self) -> u64 {
        self.scores.score()
    }

    pub fn high_score(&self) -> u64 {
        self.scores.high_score()
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity to the collection for its kind, returning its ID
    pub fn insert(&mut self, mut entity: Entity) -> u32 {
        entity.id = self.next_entity_id();
        let id = entity.id;
        self.collection_mut(entity.kind).push(entity);
        id
    }

    /// Add everything a spawn window produced
    pub fn insert_spawns(&mut self, decision: SpawnDecision) {
        for entity in decision.into_entities() {
            self.insert(entity);
        }
    }

    /// Place an entity of the given kind with its configured radius and speed
    pub fn spawn_at(&mut self, kind: EntityKind, pos: Vec2) -> u32 {
        let tuning = match kind {
            EntityKind::Item => self.settings.item,
            EntityKind::Giant => self.settings.giant,
            EntityKind::Obstacle => self.settings.obstacle,
        };
        self.insert(Entity::new(kind, pos, tuning.radius, tuning.speed))
    }

    pub fn collection(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Item => &self.items,
            EntityKind::Giant => &self.giants,
            EntityKind::Obstacle => &self.obstacles,
        }
    }

    pub(crate) fn collection_mut(&mut self, kind: EntityKind) -> &mut Vec<Entity> {
        match kind {
            EntityKind::Item => &mut self.items,
            EntityKind::Giant => &mut self.giants,
            EntityKind::Obstacle => &mut self.obstacles,
        }
    }

    /// Points for catching an entity of this kind
    pub fn points_for(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Item => self.settings.item.points,
            EntityKind::Giant => self.settings.giant.points,
            EntityKind::Obstacle => self.settings.obstacle.points,
        }
    }

    /// Move the paddle by `dx`. Ignored unless Playing. Returns true if applied.
    pub fn move_player(&mut self, dx: f32) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.player.shift(dx);
        true
    }

    /// Playing <-> Paused. Inert in GameOver. Returns true if the phase changed.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => return false,
        };
        log::debug!("Phase now {:?}", self.phase);
        true
    }

    /// End the run after a fatal collision
    pub fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over at score {} (high score {})",
            self.scores.score(),
            self.scores.high_score()
        );
    }

    /// Start a fresh run from GameOver. Only the high score carries over.
    /// Returns false (and changes nothing) in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.player = Player::new(&self.settings);
        self.items.clear();
        self.giants.clear();
        self.obstacles.clear();
        self.spawner.reset(R::seed_from_u64(self.seed));
        self.scores.reset();
        self.themes.reset();
        self.time_ticks = 0;
        self.next_id = 1;
        log::info!("Game restarted with seed {}", self.seed);
        true
    }
}
