//! Game settings and tuning
//!
//! Every gameplay constant is overridable here so tests and custom runs can
//! reshape the field, the spawn cadence or the scoring thresholds. Settings
//! files are JSON; any top-level field left out keeps its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::theme::{Theme, default_themes};

/// Per-kind tuning for falling entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySettings {
    /// Downward speed (pixels per tick)
    pub speed: f32,
    pub radius: f32,
    /// Spawn x is drawn from `[margin, field_width - margin]`
    pub spawn_margin: i32,
    /// Score awarded when caught
    pub points: u64,
}

impl EntitySettings {
    pub fn item() -> Self {
        Self {
            speed: ITEM_SPEED,
            radius: ITEM_RADIUS,
            spawn_margin: ITEM_SPAWN_MARGIN,
            points: ITEM_POINTS,
        }
    }

    pub fn giant() -> Self {
        Self {
            speed: GIANT_SPEED,
            radius: GIANT_RADIUS,
            spawn_margin: GIANT_SPAWN_MARGIN,
            points: GIANT_POINTS,
        }
    }

    pub fn obstacle() -> Self {
        Self {
            speed: OBSTACLE_SPEED,
            radius: OBSTACLE_RADIUS,
            spawn_margin: OBSTACLE_SPAWN_MARGIN,
            points: 0,
        }
    }
}

/// Volume preferences handed to the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub player_speed: f32,

    // === Spawning ===
    pub spawn_window_ticks: u32,
    pub item: EntitySettings,
    pub giant: EntitySettings,
    pub obstacle: EntitySettings,
    pub giant_score_divisor: u64,
    pub obstacle_chance: f64,

    // === Score effects ===
    pub clap_threshold: u64,
    pub theme_threshold: u64,
    /// Ordered theme cycle; must not be empty
    pub themes: Vec<Theme>,

    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_speed: PLAYER_SPEED,

            spawn_window_ticks: SPAWN_WINDOW_TICKS,
            item: EntitySettings::item(),
            giant: EntitySettings::giant(),
            obstacle: EntitySettings::obstacle(),
            giant_score_divisor: GIANT_SCORE_DIVISOR,
            obstacle_chance: OBSTACLE_CHANCE,

            clap_threshold: CLAP_THRESHOLD,
            theme_threshold: THEME_THRESHOLD,
            themes: default_themes(),

            audio: AudioSettings::default(),
        }
    }
}

/// Configuration rejected at load or construction time
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Negative { field: &'static str, value: f32 },
    NotFinite { field: &'static str },
    Zero { field: &'static str },
    ChanceOutOfRange(f64),
    NoThemes,
    PlayerWiderThanField { player: f32, field: f32 },
    EmptySpawnRange { field: &'static str, margin: i32 },
    Parse(String),
    Io(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field, value } => write!(f, "{field} must not be negative (got {value})"),
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::Zero { field } => write!(f, "{field} must be greater than zero"),
            Self::ChanceOutOfRange(p) => write!(f, "obstacle_chance must be within 0..=1 (got {p})"),
            Self::NoThemes => write!(f, "theme list is empty"),
            Self::PlayerWiderThanField { player, field } => {
                write!(f, "player width {player} does not fit in field width {field}")
            }
            Self::EmptySpawnRange { field, margin } => {
                write!(f, "{field}.spawn_margin {margin} leaves no room to spawn")
            }
            Self::Parse(msg) => write!(f, "invalid settings JSON: {msg}"),
            Self::Io(msg) => write!(f, "could not read settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

fn check_size(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(SettingsError::Negative { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    check_size(field, value)?;
    if value == 0.0 {
        return Err(SettingsError::Zero { field });
    }
    Ok(())
}

impl Settings {
    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_positive("field_width", self.field_width)?;
        check_positive("field_height", self.field_height)?;
        check_positive("player_width", self.player_width)?;
        check_positive("player_height", self.player_height)?;
        check_size("player_bottom_margin", self.player_bottom_margin)?;
        check_size("player_speed", self.player_speed)?;

        if self.player_width > self.field_width {
            return Err(SettingsError::PlayerWiderThanField {
                player: self.player_width,
                field: self.field_width,
            });
        }

        if self.spawn_window_ticks == 0 {
            return Err(SettingsError::Zero { field: "spawn_window_ticks" });
        }

        let kinds = [
            ("item", "item.speed", "item.radius", &self.item),
            ("giant", "giant.speed", "giant.radius", &self.giant),
            ("obstacle", "obstacle.speed", "obstacle.radius", &self.obstacle),
        ];
        for (name, speed_field, radius_field, entity) in kinds {
            check_size(speed_field, entity.speed)?;
            check_size(radius_field, entity.radius)?;
            let width = self.field_width as i32;
            if entity.spawn_margin < 0 || width - entity.spawn_margin < entity.spawn_margin {
                return Err(SettingsError::EmptySpawnRange {
                    field: name,
                    margin: entity.spawn_margin,
                });
            }
        }

        if self.giant_score_divisor == 0 {
            return Err(SettingsError::Zero { field: "giant_score_divisor" });
        }
        if !(0.0..=1.0).contains(&self.obstacle_chance) {
            return Err(SettingsError::ChanceOutOfRange(self.obstacle_chance));
        }
        if self.clap_threshold == 0 {
            return Err(SettingsError::Zero { field: "clap_threshold" });
        }
        if self.theme_threshold == 0 {
            return Err(SettingsError::Zero { field: "theme_threshold" });
        }
        if self.themes.is_empty() {
            return Err(SettingsError::NoThemes);
        }

        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("{}: {e}", path.display())))?;
        let settings = Self::from_json(&json);
        match &settings {
            Ok(_) => log::info!("Loaded settings from {}", path.display()),
            Err(e) => log::warn!("Rejected settings file {}: {e}", path.display()),
        }
        settings
    }

    pub fn to_json_pretty(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Fixed y of the paddle's top edge
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_margin
    }

    /// Centered paddle x used at start and on restart
    pub fn player_start_x(&self) -> f32 {
        (self.field_width / 2.0 - self.player_width / 2.0).floor()
    }

    /// Rightmost legal paddle x
    pub fn player_max_x(&self) -> f32 {
        self.field_width - self.player_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.player_y(), 740.0);
        assert_eq!(settings.player_start_x(), 275.0);
        assert_eq!(settings.themes.len(), 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "obstacle_chance": 0.0, "spawn_window_ticks": 10 }"#)
            .expect("valid settings");
        assert_eq!(settings.obstacle_chance, 0.0);
        assert_eq!(settings.spawn_window_ticks, 10);
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.giant, EntitySettings::giant());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::default();
        let parsed = Settings::from_json(&settings.to_json_pretty()).expect("roundtrip");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_rejects_empty_theme_list() {
        let settings = Settings {
            themes: Vec::new(),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::NoThemes));
    }

    #[test]
    fn test_rejects_negative_radius_and_speed() {
        let mut settings = Settings::default();
        settings.giant.radius = -1.0;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::Negative { field: "giant.radius", value: -1.0 })
        );

        let mut settings = Settings::default();
        settings.obstacle.speed = -5.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Negative { field: "obstacle.speed", .. })
        ));

        let settings = Settings {
            player_speed: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NotFinite { field: "player_speed" })
        );
    }

    #[test]
    fn test_rejects_bad_spawn_rules() {
        let settings = Settings {
            spawn_window_ticks: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::Zero { field: "spawn_window_ticks" })
        );

        let settings = Settings {
            obstacle_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ChanceOutOfRange(1.5)));

        let mut settings = Settings::default();
        settings.item.spawn_margin = 400;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::EmptySpawnRange { field: "item", .. })
        ));
    }

    #[test]
    fn test_rejects_player_wider_than_field() {
        let settings = Settings {
            player_width: 700.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PlayerWiderThanField { .. })
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("invalid settings JSON"));
    }
}
