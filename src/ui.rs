//! On-screen buttons and HUD text
//!
//! Maps pointer clicks to game commands and produces the strings a renderer
//! draws. Drawing itself happens elsewhere.

use glam::Vec2;

use crate::Rect;
use crate::settings::Settings;
use crate::sim::{GamePhase, TickInput};

/// Discrete commands the UI can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Restart,
    Quit,
}

impl Command {
    /// Fold a one-shot command into the next tick's input
    pub fn apply_to(self, input: &mut TickInput) {
        match self {
            Command::TogglePause => input.toggle_pause = true,
            Command::Restart => input.restart = true,
            Command::Quit => input.quit = true,
        }
    }
}

/// Button placement for a given field size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiLayout {
    /// Always visible, top-left
    pub play_pause: Rect,
    /// Only shown on the game over screen
    pub restart: Rect,
    /// Where the score line is drawn
    pub score_origin: Vec2,
}

impl UiLayout {
    pub fn new(settings: &Settings) -> Self {
        let cx = (settings.field_width / 2.0).floor();
        let cy = (settings.field_height / 2.0).floor();
        Self {
            play_pause: Rect::new(10.0, 10.0, 120.0, 30.0),
            restart: Rect::new(cx - 60.0, cy + 50.0, 120.0, 40.0),
            score_origin: Vec2::new(10.0, 100.0),
        }
    }

    /// Translate a click into a command, if it landed on a live button
    pub fn click(&self, point: Vec2, phase: GamePhase) -> Option<Command> {
        if self.play_pause.contains(point) {
            Some(Command::TogglePause)
        } else if phase == GamePhase::GameOver && self.restart.contains(point) {
            Some(Command::Restart)
        } else {
            None
        }
    }
}

pub fn score_text(score: u64, high_score: u64) -> String {
    format!("Score: {score}  High Score: {high_score}")
}

/// Label of the play/pause button for the current phase
pub fn pause_label(phase: GamePhase) -> &'static str {
    if phase == GamePhase::Paused { "Play" } else { "Pause" }
}

pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_LABEL: &str = "Replay";

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> UiLayout {
        UiLayout::new(&Settings::default())
    }

    #[test]
    fn test_layout_positions() {
        let ui = layout();
        assert_eq!(ui.restart, Rect::new(240.0, 450.0, 120.0, 40.0));
    }

    #[test]
    fn test_pause_button_click() {
        let ui = layout();
        let inside = Vec2::new(20.0, 20.0);
        assert_eq!(ui.click(inside, GamePhase::Playing), Some(Command::TogglePause));
        assert_eq!(ui.click(inside, GamePhase::Paused), Some(Command::TogglePause));
        assert_eq!(ui.click(Vec2::new(200.0, 20.0), GamePhase::Playing), None);
    }

    #[test]
    fn test_restart_button_only_live_in_game_over() {
        let ui = layout();
        let inside = Vec2::new(300.0, 470.0);
        assert_eq!(ui.click(inside, GamePhase::Playing), None);
        assert_eq!(ui.click(inside, GamePhase::Paused), None);
        assert_eq!(ui.click(inside, GamePhase::GameOver), Some(Command::Restart));
    }

    #[test]
    fn test_commands_fold_into_input() {
        let mut input = TickInput::default();
        Command::TogglePause.apply_to(&mut input);
        Command::Quit.apply_to(&mut input);
        assert!(input.toggle_pause && input.quit && !input.restart);
    }

    #[test]
    fn test_hud_text() {
        assert_eq!(score_text(12, 40), "Score: 12  High Score: 40");
        assert_eq!(pause_label(GamePhase::Playing), "Pause");
        assert_eq!(pause_label(GamePhase::Paused), "Play");
    }
}
