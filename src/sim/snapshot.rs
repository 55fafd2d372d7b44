//! Read-only view of a frame for the render and audio collaborators

use glam::Vec2;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::state::{Entity, GamePhase, GameState};
use super::theme::Theme;
use super::tick::Cue;
use crate::Rect;

/// Position and size of one falling entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            pos: entity.pos,
            radius: entity.radius,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub player: Rect,
    pub items: Vec<EntityView>,
    pub giants: Vec<EntityView>,
    pub obstacles: Vec<EntityView>,
    pub score: u64,
    pub high_score: u64,
    pub theme_index: usize,
    pub theme: Theme,
    /// Cues fired by the tick that produced this frame
    pub cues: Vec<Cue>,
}

impl FrameSnapshot {
    /// Copy with the high score zeroed, for comparing runs across restarts
    pub fn without_high_score(&self) -> Self {
        Self {
            high_score: 0,
            ..self.clone()
        }
    }
}

fn views(entities: &[Entity]) -> Vec<EntityView> {
    entities.iter().map(EntityView::from).collect()
}

impl<R: Rng + SeedableRng> GameState<R> {
    pub fn snapshot(&self, cues: &[Cue]) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            player: self.player.rect(),
            items: views(&self.items),
            giants: views(&self.giants),
            obstacles: views(&self.obstacles),
            score: self.score(),
            high_score: self.high_score(),
            theme_index: self.themes.index(),
            theme: *self.theme(),
            cues: cues.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::EntityKind;

    #[test]
    fn test_snapshot_lists_entities_in_spawn_order() {
        let mut state = GameState::new(Settings::default(), 3).unwrap();
        state.spawn_at(EntityKind::Item, Vec2::new(40.0, 10.0));
        state.spawn_at(EntityKind::Obstacle, Vec2::new(90.0, 20.0));
        state.spawn_at(EntityKind::Item, Vec2::new(60.0, 30.0));

        let frame = state.snapshot(&[Cue::Clap]);
        assert_eq!(frame.phase, GamePhase::Playing);
        assert_eq!(frame.player, Rect::new(275.0, 740.0, 50.0, 50.0));
        let ids: Vec<u32> = frame.items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(frame.obstacles[0].radius, 20.0);
        assert!(frame.giants.is_empty());
        assert_eq!(frame.theme, Theme::dark());
        assert_eq!(frame.cues, vec![Cue::Clap]);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(Settings::default(), 3).unwrap();
        let json = serde_json::to_value(state.snapshot(&[])).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["theme"]["background"], serde_json::json!([30, 30, 30]));
    }
}
