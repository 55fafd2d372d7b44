//! Audio cue routing
//!
//! The simulation only reports *which* cue fired. This module maps cues to
//! sound effects, applies the volume settings and hands the result to a
//! backend that actually produces sound.

use crate::settings::AudioSettings;
use crate::sim::Cue;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Looping background track, started once per session
    BackgroundMusic,
    /// Score milestone applause
    Clap,
    /// Obstacle hit
    OhNo,
}

impl SoundEffect {
    /// Music is mixed on its own volume channel
    pub fn is_music(self) -> bool {
        matches!(self, SoundEffect::BackgroundMusic)
    }

    pub fn looping(self) -> bool {
        self.is_music()
    }
}

impl From<Cue> for SoundEffect {
    fn from(cue: Cue) -> Self {
        match cue {
            Cue::Clap => SoundEffect::Clap,
            Cue::Fatal => SoundEffect::OhNo,
        }
    }
}

/// Something that can play a sound at a given volume
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend for headless runs: writes each sound to the log
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Play {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_started: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &AudioSettings) -> Self {
        let mut manager = Self {
            backend,
            master_volume: 0.0,
            sfx_volume: 0.0,
            music_volume: 0.0,
            muted: settings.muted,
            music_started: false,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Play a sound effect (silent effects are skipped)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Start the looping background track once per session
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        self.play(SoundEffect::BackgroundMusic);
    }

    /// Play the sound for every cue a tick fired, in order
    pub fn dispatch(&mut self, cues: &[Cue]) {
        for &cue in cues {
            self.play(cue.into());
        }
    }
}
