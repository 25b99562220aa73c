mod frontend;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::{Conf, get_time, is_quit_requested, next_frame, prevent_quit};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use snake_arcade::puns::PunBook;
use snake_arcade::{BLOCK, GameContext, Grid, SceneMachine, SceneRequest, SettingsStore};
use snake_arcade::{WINDOW_HEIGHT, WINDOW_WIDTH};

use frontend::{ScreenCanvas, ToneAudio, keys};

#[derive(Parser, Debug)]
#[command(name = "snake_arcade", about = "Snake with menus, settings and highscores")]
struct Cli {
    /// Settings, key bindings and highscores (created when missing).
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    /// Jokes for the game over screen.
    #[arg(long, default_value = "puns.json")]
    puns: PathBuf,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Fixed seed for snake and apple placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake - the classic game!".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn load_store(path: &Path) -> SettingsStore {
    match SettingsStore::load(path) {
        Ok(store) => store,
        Err(error) => {
            // keep the broken file untouched; changes this session stay in memory
            warn!(error = %error, "settings_unusable_using_defaults");
            SettingsStore::in_memory()
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = load_store(&cli.settings);
    info!(path = ?store.path(), "settings_ready");
    let audio = ToneAudio::load().await.context("failed to prepare audio")?;
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let grid = Grid::from_window(WINDOW_WIDTH, WINDOW_HEIGHT, BLOCK);
    let mut ctx = GameContext::new(grid, store, Box::new(audio), rng)
        .with_puns(PunBook::load(&cli.puns));

    let mut canvas = ScreenCanvas::new(grid);
    let mut machine = SceneMachine::new(&mut ctx, SceneRequest::Menu);
    let frame_budget = Duration::from_secs_f64(1.0 / cli.fps.max(1) as f64);
    info!(width = grid.width, height = grid.height, fps = cli.fps, "snake_arcade_started");

    prevent_quit();
    loop {
        let started = Instant::now();
        if is_quit_requested() {
            info!("window_closed");
            break;
        }

        let input = keys::poll();
        let now = (get_time() * 1000.0) as u64;
        let running = machine.frame(&mut ctx, &input, now, &mut canvas);
        canvas.present();
        if !running {
            break;
        }

        next_frame().await;
        if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
    info!("snake_arcade_finished");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        error!(error = %format!("{error:#}"), "snake_arcade_failed");
        std::process::exit(1);
    }
}
