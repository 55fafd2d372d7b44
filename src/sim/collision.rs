//! Entity vs. player collision classification
//!
//! Only the entity's reference point (its center) is tested against the
//! paddle rectangle. A circle grazing the paddle edge with its center outside
//! is not a hit; gameplay tuning depends on this.

use super::state::{Entity, EntityKind};
use crate::Rect;

/// Result of classifying one entity after it moved this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still falling
    Pending,
    /// Item or giant landed on the paddle
    Caught,
    /// Left the bottom of the field untouched
    Missed,
    /// Obstacle hit the paddle
    Fatal,
}

impl Outcome {
    /// True when the entity leaves its collection
    #[inline]
    pub fn removes(self) -> bool {
        self != Outcome::Pending
    }
}

/// Classify an entity against the player rect.
///
/// Collision is checked before the bottom edge, so an entity that is both
/// inside the paddle and past `field_height` counts as a collision.
pub fn resolve(player: &Rect, entity: &Entity, field_height: f32) -> Outcome {
    if player.contains(entity.pos) {
        match entity.kind {
            EntityKind::Item | EntityKind::Giant => Outcome::Caught,
            EntityKind::Obstacle => Outcome::Fatal,
        }
    } else if entity.pos.y > field_height {
        Outcome::Missed
    } else {
        Outcome::Pending
    }
}
