//! Catchfall - catch what falls, dodge what hurts
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, scoring)
//! - `settings`: Tunable game configuration loaded from JSON
//! - `audio`: Routing of simulation cues to a sound backend
//! - `ui`: On-screen buttons and HUD text

pub mod audio;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{AudioSettings, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Nominal simulation rate; the caller owns the clock
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Player paddle
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Distance from the bottom of the field to the paddle's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 60.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Ticks between spawn windows
    pub const SPAWN_WINDOW_TICKS: u32 = 30;

    /// Falling items (+1)
    pub const ITEM_SPEED: f32 = 4.0;
    pub const ITEM_RADIUS: f32 = 10.0;
    pub const ITEM_SPAWN_MARGIN: i32 = 20;
    pub const ITEM_POINTS: u64 = 1;

    /// Giant bonus items (+10)
    pub const GIANT_SPEED: f32 = 3.0;
    pub const GIANT_RADIUS: f32 = 15.0;
    pub const GIANT_SPAWN_MARGIN: i32 = 30;
    pub const GIANT_POINTS: u64 = 10;
    /// A giant joins a spawn window whenever the score is a positive multiple of this
    pub const GIANT_SCORE_DIVISOR: u64 = 5;

    /// Obstacles (fatal)
    pub const OBSTACLE_SPEED: f32 = 5.0;
    pub const OBSTACLE_RADIUS: f32 = 20.0;
    pub const OBSTACLE_SPAWN_MARGIN: i32 = 30;
    /// Chance per spawn window
    pub const OBSTACLE_CHANCE: f64 = 0.1;

    /// Score gained between clap cues
    pub const CLAP_THRESHOLD: u64 = 100;
    /// Score gained between theme changes
    pub const THEME_THRESHOLD: u64 = 150;
}

/// Clamp a value into `[lo, hi]`, tolerating `hi < lo` by pinning to `lo`
#[inline]
pub fn clamp_span(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Half-open point test: the left/top edges are inside, right/bottom are not
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 50.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(59.9, 69.9)));
        assert!(!rect.contains(Vec2::new(60.0, 30.0)));
        assert!(!rect.contains(Vec2::new(30.0, 70.0)));
        assert!(!rect.contains(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(-5.0, 0.0, 550.0), 0.0);
        assert_eq!(clamp_span(600.0, 0.0, 550.0), 550.0);
        assert_eq!(clamp_span(42.0, 0.0, 550.0), 42.0);
        assert_eq!(clamp_span(3.0, 0.0, -1.0), 0.0);
    }
}
