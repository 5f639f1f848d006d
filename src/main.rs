//! Terminal Snake runner (default binary).
//!
//! Owns the frame loop: input and bot commands are polled every frame, the
//! simulation ticks at its own (score-ramped) cadence, and the bot bridge gets
//! exactly one post-tick snapshot per tick.

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::adapter::BotBridge;
use tui_snake::core::{GameConfig, GameSession, SimpleRng};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{BotStatusView, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{InputAction, FRAME_MS};

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig {
        seed: seed_from_env(),
        ..GameConfig::default()
    };
    let mut game = GameSession::new(config)?;
    info!(seed = config.seed, w = config.grid_w, h = config.grid_h, "starting game");

    let mut bot = BotBridge::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut bot);

    // Always try to restore terminal state.
    let _ = term.exit();
    bot.shutdown();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameSession, bot: &mut BotBridge) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Bot commands go through the same turn buffer as keys, before the tick.
        bot.poll_accept();
        bot.drain_dirs(|dir| game.queue_dir(dir));

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = bot.is_enabled().then(|| BotStatusView {
            connected: bot.is_connected(),
            port: bot.port(),
        });
        view.render_into(game, status.as_ref(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input, waiting at most one frame.
        let tick = Duration::from_millis(game.tick_interval_ms() as u64);
        let timeout = frame.min(tick.saturating_sub(last_tick.elapsed()));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputAction::Turn(dir)) => game.queue_dir(dir),
                        Some(InputAction::Restart) => {
                            game.restart()?;
                            last_tick = Instant::now();
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. The snapshot goes out even after the game ends so a late bot
        // still sees the final flags.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let outcome = game.tick();
            if outcome.game_over || outcome.you_win {
                info!(score = game.score(), win = outcome.you_win, "game finished");
            }
            bot.send_state(&game.bot_view());
        }
    }
}

fn seed_from_env() -> u32 {
    env::var("SNAKE_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| SimpleRng::from_time().seed())
}

/// Logs go to `SNAKE_LOG_PATH` only; stdout belongs to the game screen.
fn init_tracing() {
    let Some(path) = env::var("SNAKE_LOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
    else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
