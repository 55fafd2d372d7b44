//! Visual themes and the score-driven theme cycle

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour set for one visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Rgb,
    pub player: Rgb,
    pub item: Rgb,
    pub giant: Rgb,
    pub obstacle: Rgb,
    pub text: Rgb,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: Rgb(30, 30, 30),
            player: Rgb(200, 200, 50),
            item: Rgb(50, 200, 200),
            giant: Rgb(255, 0, 0),
            obstacle: Rgb(200, 0, 200),
            text: Rgb(255, 255, 255),
        }
    }

    pub const fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            player: Rgb(0, 100, 200),
            item: Rgb(50, 200, 200),
            giant: Rgb(255, 0, 0),
            obstacle: Rgb(200, 0, 200),
            text: Rgb(0, 0, 0),
        }
    }
}

/// Built-in cycle: dark, then light
pub fn default_themes() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Advances through the theme list each time the score climbs `threshold`
/// past the last change.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelector {
    themes: Vec<Theme>,
    threshold: u64,
    index: usize,
    last_change_score: u64,
}

impl ThemeSelector {
    /// `themes` must be non-empty (enforced by `Settings::validate`)
    pub fn new(themes: Vec<Theme>, threshold: u64) -> Self {
        debug_assert!(!themes.is_empty());
        Self {
            themes,
            threshold,
            index: 0,
            last_change_score: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_change_score(&self) -> u64 {
        self.last_change_score
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.index]
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Check the score once for this tick. Returns true if the theme advanced.
    ///
    /// The watermark snaps to `score`, so a large jump changes the theme once.
    pub fn evaluate(&mut self, score: u64) -> bool {
        if score >= self.last_change_score + self.threshold {
            self.index = (self.index + 1) % self.themes.len();
            self.last_change_score = score;
            log::info!("Theme changed to #{} at score {}", self.index, score);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.last_change_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_advances_at_threshold() {
        let mut selector = ThemeSelector::new(default_themes(), 150);
        assert!(!selector.evaluate(149));
        assert_eq!(selector.index(), 0);

        assert!(selector.evaluate(150));
        assert_eq!(selector.index(), 1);
        assert_eq!(selector.current(), &Theme::light());
        assert_eq!(selector.last_change_score(), 150);
    }

    #[test]
    fn test_theme_wraps_around() {
        let mut selector = ThemeSelector::new(default_themes(), 150);
        assert!(selector.evaluate(150));
        assert!(selector.evaluate(300));
        assert_eq!(selector.index(), 0);
        assert_eq!(selector.current(), &Theme::dark());
    }

    #[test]
    fn test_big_jump_fires_once_and_snaps_watermark() {
        let mut selector = ThemeSelector::new(default_themes(), 150);
        assert!(selector.evaluate(470));
        assert_eq!(selector.index(), 1);
        assert_eq!(selector.last_change_score(), 470);
        // Next change needs 620, not 300
        assert!(!selector.evaluate(600));
    }

    #[test]
    fn test_single_theme_stays_put() {
        let mut selector = ThemeSelector::new(vec![Theme::dark()], 150);
        assert!(selector.evaluate(200));
        assert_eq!(selector.index(), 0);
    }

    #[test]
    fn test_reset() {
        let mut selector = ThemeSelector::new(default_themes(), 150);
        selector.evaluate(160);
        selector.reset();
        assert_eq!(selector.index(), 0);
        assert_eq!(selector.last_change_score(), 0);
    }

    #[test]
    fn test_rgb_serializes_as_array() {
        let json = serde_json::to_string(&Rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
    }
}
