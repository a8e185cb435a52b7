//! Terminal runner (default binary).
//!
//! Gravity runs on a [`TickDriver`] task. Keyboard and focus events are read on
//! a blocking thread and forwarded over a channel. Ticks, applied moves and
//! game ends all wake the render loop.
//!
//! Set `TETRIS_LOG_PATH` to write logs to a file (filtered by `RUST_LOG`); the
//! terminal itself is busy drawing the game.

use std::fs::File;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use tokio::sync::{mpsc, Notify};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use campus_tetris::core::GameConfig;
use campus_tetris::engine::{
    EndEvent, FocusAction, GameLoop, LoopState, SharedGame, TickDriver, TickEvent,
};
use campus_tetris::input::{translate_event, InputEvent};
use campus_tetris::term::{Frame, GameView, Hud, Status, TerminalRenderer, Viewport};

const INPUT_POLL: Duration = Duration::from_millis(50);

fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("TETRIS_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = GameConfig::from_env();
    info!(?config, "starting");
    let game = GameLoop::new(config).context("invalid game configuration")?;
    let game: SharedGame = Arc::new(Mutex::new(game));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer, game: SharedGame) -> Result<()> {
    let redraw = Arc::new(Notify::new());
    start(&game, &redraw);
    let driver = TickDriver::spawn(game.clone());

    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || read_input(tx));

    let view = GameView::default();
    let mut frame = Frame::new(0, 0);
    loop {
        draw(term, &view, &game, &mut frame)?;
        tokio::select! {
            _ = redraw.notified() => {}
            input = rx.recv() => match input {
                None | Some(InputEvent::Quit) => break,
                Some(InputEvent::Resize) => term.invalidate(),
                Some(input) => handle_input(&game, input),
            },
        }
    }

    driver.stop();
    Ok(())
}

fn lock(game: &SharedGame) -> MutexGuard<'_, GameLoop> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start the first game. Callbacks only wake the render loop; they run with
/// the game locked and must not lock it again.
fn start(game: &SharedGame, redraw: &Arc<Notify>) {
    let on_tick = {
        let redraw = redraw.clone();
        move |_: &TickEvent| redraw.notify_one()
    };
    let on_end = {
        let redraw = redraw.clone();
        move |end: &EndEvent| {
            info!(
                score = end.score,
                elapsed_secs = end.elapsed_secs,
                is_restart = end.is_restart,
                "game ended"
            );
            redraw.notify_one();
        }
    };
    lock(game).start_game(on_tick, on_end);
}

fn handle_input(game: &SharedGame, input: InputEvent) {
    let mut game = lock(game);
    match input {
        InputEvent::Action(action) => {
            let applied = game.apply_action(action);
            debug!(action = action.as_str(), applied, "input");
        }
        InputEvent::FocusLost => game.suspend(),
        InputEvent::FocusGained => {
            if game.resume_view() == FocusAction::Started {
                info!("new game started on focus");
            }
        }
        InputEvent::Resize | InputEvent::Quit => {}
    }
}

fn read_input(tx: mpsc::UnboundedSender<InputEvent>) {
    loop {
        match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(raw) => {
                    if let Some(input) = translate_event(&raw) {
                        if tx.send(input).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    warn!(%err, "reading terminal input failed");
                    let _ = tx.send(InputEvent::Quit);
                    return;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    return;
                }
            }
            Err(err) => {
                warn!(%err, "polling terminal input failed");
                let _ = tx.send(InputEvent::Quit);
                return;
            }
        }
    }
}

fn draw(term: &mut TerminalRenderer, view: &GameView, game: &SharedGame, frame: &mut Frame) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let (grid, hud) = {
        let game = lock(game);
        (game.grid_snapshot(), hud(&game))
    };
    view.render_into(&grid, &hud, Viewport::new(w, h), frame);
    term.draw(frame)
}

fn hud(game: &GameLoop) -> Hud {
    let status = match game.state() {
        LoopState::Idle => Status::Ready,
        LoopState::Running => Status::Playing,
        LoopState::Paused => Status::Paused,
        LoopState::Terminated | LoopState::Faulted => Status::GameOver,
    };
    Hud {
        elapsed_secs: game.elapsed_secs(),
        score: game.score(),
        level: game.level(),
        next: game
            .session()
            .filter(|s| s.is_running())
            .map(|s| s.next_shape().kind),
        status,
    }
}
