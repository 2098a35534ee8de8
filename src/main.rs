//! SpinReel — a slot machine mini-game
//!
//! Application bootstrap: window setup, asset loading, the frame loop, and
//! the wiring between engine events, UI chrome, and audio.

mod assets;
mod render;

use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::*;

use sr_core::{
    AliasIndex, AssetManifest, GameConfig, GameError, GameResult, SoundPolicy, SpinTiming,
};
use sr_reels::{ReelEngine, ReelEvent};
use sr_ui::{ui_scale, ScorePanel, SoundToggle, SpinButton};

use crate::assets::{SoundBank, TextureStore};

#[derive(Parser, Debug)]
#[command(name = "spinreel", about = "A slot machine mini-game", version)]
struct Args {
    /// Load the game configuration from a JSON file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the outcome RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Fast spin timing
    #[arg(long)]
    turbo: bool,

    /// Start with sound muted
    #[arg(long)]
    muted: bool,

    /// Bet per spin
    #[arg(long)]
    bet: Option<u32>,

    /// Starting balance
    #[arg(long)]
    balance: Option<i64>,

    /// Run N spins headless, print one JSON line per outcome, and exit
    #[arg(long, value_name = "N")]
    dump_spins: Option<u32>,
}

impl Args {
    /// Base configuration (file or defaults) with CLI overrides applied
    fn to_config(&self) -> GameResult<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                serde_json::from_str(&text)
                    .map_err(|err| GameError::InvalidConfig(err.to_string()))?
            }
            None => GameConfig::default(),
        };
        if self.turbo {
            config.timing = SpinTiming::turbo();
        }
        if let Some(bet) = self.bet {
            config.bet.bet = bet;
        }
        if let Some(balance) = self.balance {
            config.bet.starting_balance = balance;
        }
        Ok(config)
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "SpinReel".to_owned(),
        window_width: 1280,
        window_height: 800,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Starting SpinReel...");

    let config = match args.to_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    if let Some(spins) = args.dump_spins {
        dump_spins(config, args.seed, spins);
        return;
    }

    let manifest = AssetManifest::standard(&config.grid.symbol_prefix, config.grid.symbol_alphabet);
    let textures = TextureStore::load(&manifest).await;
    let sounds = SoundBank::load().await;
    log::info!(
        "resolved {} of {} texture assets",
        textures.len(),
        manifest.iter().count()
    );

    let mut engine = ReelEngine::new(config, textures.alias_index());
    if let Some(seed) = args.seed {
        engine.seed(seed);
    }

    let mut button = SpinButton::new();
    let mut panel = ScorePanel::new(engine.bet(), engine.balance());
    let mut toggle = SoundToggle::new(SoundPolicy::new(args.muted));
    let mut pressing_button = false;

    loop {
        let now_ms = get_time() * 1000.0;
        let scale = ui_scale(screen_width());
        let layout = render::Layout::compute(engine.config(), scale);

        button.set_screen_scale(scale);
        button.set_enabled(!engine.is_spinning());

        let mouse = mouse_position();
        let mut spin_requested = false;

        if is_mouse_button_pressed(MouseButton::Left) {
            if button.contains(mouse, layout.button_center, layout.button_size) {
                pressing_button = button.press();
            }
            if toggle.contains(mouse, layout.toggle_top_left, scale) {
                let policy = toggle.toggle();
                log::info!("sound {}", if policy.is_muted() { "off" } else { "on" });
            }
        }
        if is_mouse_button_released(MouseButton::Left) {
            if pressing_button
                && button.is_enabled()
                && button.contains(mouse, layout.button_center, layout.button_size)
            {
                spin_requested = true;
            }
            pressing_button = false;
            button.release();
        }
        if is_key_pressed(KeyCode::Space) && button.is_enabled() {
            spin_requested = true;
        }

        let mut events = Vec::new();
        if spin_requested {
            events.extend(engine.start_spin(now_ms));
        }
        events.extend(engine.tick(now_ms));
        button.tick();

        for event in &events {
            match event {
                ReelEvent::Sound(cue) => sounds.play(*cue, toggle.policy()),
                ReelEvent::SpinStarted { balance } => {
                    log::debug!("spin accepted, balance {balance}");
                }
                ReelEvent::ReelStopped { reel } => log::debug!("reel {reel} stopped"),
                ReelEvent::SpinSettled {
                    win_amount,
                    balance,
                    ..
                } => {
                    panel.update_win(*win_amount);
                    panel.update_balance(*balance);
                }
            }
        }

        render::draw(&engine, &button, &panel, &toggle, &textures, &layout);
        next_frame().await;
    }
}

/// Headless demo mode: run spins against synthetic timestamps and print
/// each settled outcome as a JSON line.
fn dump_spins(config: GameConfig, seed: Option<u64>, count: u32) {
    let timing = config.timing.clone();
    let reels = config.grid.size;
    let mut engine = ReelEngine::new(config, AliasIndex::universal());
    if let Some(seed) = seed {
        engine.seed(seed);
    }

    let mut now_ms = 0.0;
    for spin in 0..count {
        engine.start_spin(now_ms);
        let deadline = now_ms + timing.total_duration_ms(reels) + 100.0;
        let mut outcome = None;
        while outcome.is_none() && now_ms <= deadline {
            now_ms += 16.0;
            for event in engine.tick(now_ms) {
                if let ReelEvent::SpinSettled {
                    win_amount,
                    balance,
                    winning_positions,
                } = event
                {
                    outcome = Some((win_amount, balance, winning_positions));
                }
            }
        }

        if let Some((win, balance, positions)) = outcome {
            let line = serde_json::json!({
                "spin": spin + 1,
                "win": win,
                "balance": balance,
                "winning_positions": positions,
            });
            println!("{line}");
        }
    }

    let stats = engine.stats();
    log::info!(
        "{} spins, {} wins, session RTP {:.1}%",
        stats.spins,
        stats.wins,
        stats.rtp()
    );
}
