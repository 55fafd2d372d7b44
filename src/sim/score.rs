//! Score, high score and the clap-cue watermark

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    high_score: u64,
    /// Score at which the last clap cue fired
    last_clap_score: u64,
    clap_threshold: u64,
}

impl ScoreTracker {
    pub fn new(clap_threshold: u64) -> Self {
        Self {
            score: 0,
            high_score: 0,
            last_clap_score: 0,
            clap_threshold,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn last_clap_score(&self) -> u64 {
        self.last_clap_score
    }

    /// Apply a score delta and refresh the high score
    pub fn update(&mut self, delta: u64) {
        self.score = self.score.saturating_add(delta);
        self.high_score = self.high_score.max(self.score);
    }

    /// Check the clap rule once for this tick. Returns true if a clap fires.
    pub fn check_clap(&mut self) -> bool {
        if self.score >= self.last_clap_score + self.clap_threshold {
            self.last_clap_score = self.score;
            true
        } else {
            false
        }
    }

    /// Start a new run. The high score survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.last_clap_score = 0;
    }
}
