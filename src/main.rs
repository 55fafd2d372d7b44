//! Catchfall headless runner
//!
//! Drives the simulation with a simple autopilot and reports how the run went.
//! Useful for tuning settings files without a window.
//!
//! Usage:
//!   catchfall --seed 42 --ticks 36000
//!   RUST_LOG=debug catchfall --settings tuning.json --restarts 3

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use catchfall::Settings;
use catchfall::audio::{AudioManager, LogBackend};
use catchfall::consts::TICKS_PER_SECOND;
use catchfall::sim::{Cue, FrameSnapshot, GamePhase, GameState, TickInput, tick};
use catchfall::ui::{self, Command};

#[derive(Parser, Debug)]
#[command(name = "catchfall")]
#[command(about = "Run the catchfall simulation headless with an autopilot")]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Ticks to simulate (60 per second of game time)
    #[arg(long, default_value_t = 60 * 60 * 10)]
    ticks: u64,
    /// JSON settings file overriding the defaults
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Restarts allowed after a game over
    #[arg(long, default_value_t = 0)]
    restarts: u32,
    /// Print the default settings as JSON and exit
    #[arg(long)]
    dump_settings: bool,
}

/// Steer under the lowest catchable entity, sidestepping obstacles overhead
fn autopilot(frame: &FrameSnapshot, speed: f32) -> TickInput {
    let paddle = frame.player;
    let center = paddle.x + paddle.w / 2.0;

    let danger = frame.obstacles.iter().find(|o| {
        o.pos.y < paddle.y && paddle.y - o.pos.y < 200.0 && (o.pos.x - center).abs() < paddle.w
    });

    let target = if let Some(obstacle) = danger {
        if obstacle.pos.x >= center { center - paddle.w } else { center + paddle.w }
    } else {
        let lowest = frame
            .items
            .iter()
            .chain(&frame.giants)
            .filter(|e| e.pos.y <= paddle.bottom())
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        match lowest {
            Some(entity) => entity.pos.x,
            None => return TickInput::default(),
        }
    };

    TickInput {
        move_left: target < center - speed,
        move_right: target > center + speed,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.dump_settings {
        println!("{}", Settings::default().to_json_pretty());
        return Ok(());
    }

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut audio = AudioManager::new(LogBackend, &settings.audio);
    let mut state = GameState::new(settings, seed).context("Invalid game settings")?;
    log::info!("Catchfall starting (seed {seed})");
    audio.start_music();

    let speed = state.player.speed;
    let mut restarts_left = args.restarts;
    let mut runs: Vec<u64> = Vec::new();
    let mut claps = 0u32;
    let mut frame = state.snapshot(&[]);

    for _ in 0..args.ticks {
        let mut input = autopilot(&frame, speed);
        if state.phase == GamePhase::GameOver {
            if restarts_left == 0 {
                Command::Quit.apply_to(&mut input);
            } else {
                restarts_left -= 1;
                Command::Restart.apply_to(&mut input);
            }
        }

        let score_before = state.score();
        let out = tick(&mut state, &input);
        if out.quit_requested {
            break;
        }
        if out.cues.contains(&Cue::Fatal) {
            runs.push(state.score());
        }
        claps += out.cues.iter().filter(|c| **c == Cue::Clap).count() as u32;
        if out.theme_changed {
            log::info!("Theme #{} at score {}", state.themes.index(), state.score());
        }
        if state.score() / 100 > score_before / 100 {
            log::debug!("{}", ui::score_text(state.score(), state.high_score()));
        }

        audio.dispatch(&out.cues);
        frame = state.snapshot(&out.cues);
    }

    if state.phase != GamePhase::GameOver {
        runs.push(state.score());
    }

    println!("=== CATCHFALL RUN ===");
    println!("  Seed:        {seed}");
    println!(
        "  Game time:   {:.1}s (last run)",
        state.time_ticks as f64 / f64::from(TICKS_PER_SECOND)
    );
    println!("  Runs:        {}", runs.len());
    for (i, score) in runs.iter().enumerate() {
        println!("    #{:<3} score {}", i + 1, score);
    }
    println!("  Claps:       {claps}");
    println!("  High score:  {}", state.high_score());
    println!("  Final phase: {:?}", state.phase);

    Ok(())
}
