//! Activity CLI - inspect, analyze and replay recorded sessions
//!
//! Sessions are the text files produced by `Recorder::save`. Replay runs
//! against a headless surface and a sink that logs every injected input.

mod config;
mod sink;

use activity_format::{Action, Session};
use activity_recorder::testing::HeadlessSurface;
use activity_recorder::{MovementTrack, Player, ReplayConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ActivityConfig;
use serde::Serialize;
use sink::TracingSink;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Inspect, analyze and replay recorded activity sessions
#[derive(Parser, Debug)]
#[command(name = "activity")]
#[command(about = "Inspect, analyze and replay recorded activity sessions")]
#[command(version)]
struct Cli {
    /// Config file or directory containing activity.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the envelope and decoded actions of a session
    Inspect {
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize the pointer track of a session
    Analyze { file: PathBuf },
    /// Replay a session against a logging sink
    Replay {
        file: PathBuf,

        /// Playback speed multiplier (overrides the config file)
        #[arg(short, long)]
        speed: Option<f64>,
    },
}

#[derive(Serialize)]
struct Inspection<'a> {
    frame_rate: u32,
    starting_width: f64,
    starting_height: f64,
    starting_config: &'a str,
    actions: Vec<Action>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ActivityConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .with_context(|| format!("Invalid log filter `{}`", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Inspect { file, json } => inspect(&file, json),
        Command::Analyze { file } => analyze(&file),
        Command::Replay { file, speed } => replay(&file, speed, &config).await,
    }
}

fn read_session_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_session(path: &Path) -> Result<Session> {
    let text = read_session_text(path)?;
    Session::deserialize(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn inspect(path: &Path, json: bool) -> Result<()> {
    let session = load_session(path)?;
    let actions: Vec<Action> = session.decode_actions().collect();

    if json {
        let inspection = Inspection {
            frame_rate: session.frame_rate,
            starting_width: session.starting_width,
            starting_height: session.starting_height,
            starting_config: &session.starting_config,
            actions,
        };
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    println!("frame rate: {}", session.frame_rate);
    println!(
        "starting size: {}x{}",
        session.starting_width, session.starting_height
    );
    println!("starting config: {}", session.starting_config);
    println!("actions: {}", actions.len());
    for (index, action) in actions.iter().enumerate() {
        println!(
            "{index:>5}  {:<11} {}",
            action.kind().name(),
            action.params().join(",")
        );
    }
    Ok(())
}

fn analyze(path: &Path) -> Result<()> {
    let session = load_session(path)?;
    let track = MovementTrack::from_session(&session);

    println!(
        "starting size: {}x{}",
        track.starting_size.0, track.starting_size.1
    );
    println!("extent: {}x{}", track.extent.0, track.extent.1);
    println!(
        "paths: {} ({} segments, length {:.1})",
        track.paths.len(),
        track.segment_count(),
        track.path_length()
    );
    println!(
        "clicks: {} ({} presses)",
        track.clicks.len(),
        track.press_count()
    );
    Ok(())
}

async fn replay(path: &Path, speed: Option<f64>, config: &ActivityConfig) -> Result<()> {
    let text = read_session_text(path)?;
    let replay_config = ReplayConfig::default()
        .with_speed(speed.unwrap_or(config.replay.speed))
        .with_restore_size(config.replay.restore_size);

    let sink = Arc::new(TracingSink::new());
    let player = Player::new(sink.clone(), replay_config)
        .with_target(Arc::new(HeadlessSurface::new(0.0, 0.0)));

    let token = player.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, stopping playback");
            token.cancel();
        }
    });

    let summary = player
        .play_with_config(&text, |starting_config| {
            tracing::info!(starting_config, "Starting config");
        })
        .await
        .with_context(|| format!("Failed to replay {}", path.display()))?;

    println!(
        "dispatched {} actions ({} injections), skipped {}, unknown {}, messages {}, paused {:?}",
        summary.dispatched,
        sink.injected(),
        summary.skipped,
        summary.unknown,
        summary.messages,
        summary.paused
    );
    Ok(())
}
