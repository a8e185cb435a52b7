//! Game loop state machine.
//!
//! Owns the current session and the caller's callbacks. All session changes go
//! through here: the next session is computed from the current one and then
//! swapped in, so readers never observe a half-applied lock.

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::core::{
    can_place, drop_piece, move_piece, on_lock, rotate_piece, EngineError, GameConfig,
    GameSession, GridSnapshot,
};
use crate::events::{EndCallback, EndEvent, TickCallback, TickEvent};
use crate::types::GameAction;

/// Where the loop is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No game has been started yet.
    Idle,
    Running,
    Paused,
    /// The last game ended, by game over or by the caller.
    Terminated,
    /// A lock failed; the session is frozen until the next `start_game`.
    Faulted,
}

/// When the next tick is due.
///
/// `epoch` changes every time the schedule does. A timer that armed itself for
/// an older epoch must not tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub epoch: u64,
    /// `None` while no tick should fire.
    pub interval: Option<Duration>,
}

/// What a front end should do when the game view regains focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
    /// A new game was started.
    Started,
    /// A game is paused; offer to resume it.
    ShowPause,
    Nothing,
}

pub struct GameLoop {
    config: GameConfig,
    session: Option<GameSession>,
    faulted: bool,
    next_seed: u32,
    on_tick: Option<TickCallback>,
    on_end: Option<EndCallback>,
    epoch: u64,
    schedule_tx: watch::Sender<Schedule>,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let schedule_tx = watch::Sender::new(Schedule {
            epoch: 0,
            interval: None,
        });
        Ok(Self {
            config,
            session: None,
            faulted: false,
            next_seed: config.seed,
            on_tick: None,
            on_end: None,
            epoch: 0,
            schedule_tx,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        if self.faulted {
            return LoopState::Faulted;
        }
        match &self.session {
            None => LoopState::Idle,
            Some(session) if !session.is_running() => LoopState::Terminated,
            Some(session) if session.is_paused() => LoopState::Paused,
            Some(_) => LoopState::Running,
        }
    }

    /// Start a new game on an empty board.
    ///
    /// A game still in progress is ended first, and its end callback (the one
    /// registered with that game) fires with `is_restart = true`.
    pub fn start_game<T, E>(&mut self, on_tick: T, on_end: E)
    where
        T: FnMut(&TickEvent) + Send + 'static,
        E: FnMut(&EndEvent) + Send + 'static,
    {
        let session = self.fresh_session();
        self.install(session, Box::new(on_tick), Box::new(on_end));
    }

    /// Start a prepared session, e.g. one built on a pre-filled board.
    ///
    /// The session's board must have the configured size; otherwise nothing
    /// changes and [`EngineError::InvalidConfig`] is returned.
    pub fn start_session<T, E>(
        &mut self,
        session: GameSession,
        on_tick: T,
        on_end: E,
    ) -> Result<(), EngineError>
    where
        T: FnMut(&TickEvent) + Send + 'static,
        E: FnMut(&EndEvent) + Send + 'static,
    {
        let board = session.board();
        if (board.width(), board.height()) != (self.config.width, self.config.height) {
            return Err(EngineError::InvalidConfig(format!(
                "session board is {}x{}, loop is configured for {}x{}",
                board.width(),
                board.height(),
                self.config.width,
                self.config.height
            )));
        }
        self.install(session, Box::new(on_tick), Box::new(on_end));
        Ok(())
    }

    /// End the current game and start another with the same callbacks.
    ///
    /// Returns `false` if no game was ever started.
    pub fn restart(&mut self) -> bool {
        if self.on_end.is_none() {
            return false;
        }
        if matches!(self.state(), LoopState::Running | LoopState::Paused) {
            self.finish(true);
        }
        let session = self.fresh_session();
        self.begin(session);
        true
    }

    /// Flip between running and paused. Other states are left alone.
    pub fn toggle_pause(&mut self) {
        match self.state() {
            LoopState::Running => self.set_paused(true),
            LoopState::Paused => self.set_paused(false),
            _ => {}
        }
    }

    /// Pause if running; used when the view loses focus.
    pub fn suspend(&mut self) {
        if self.state() == LoopState::Running {
            self.set_paused(true);
        }
    }

    /// The view regained focus.
    ///
    /// A finished game is replaced by a new one. A paused game stays paused and
    /// the front end is asked to offer resuming it.
    pub fn resume_view(&mut self) -> FocusAction {
        match self.state() {
            LoopState::Paused => FocusAction::ShowPause,
            LoopState::Terminated | LoopState::Faulted => {
                if self.restart() {
                    FocusAction::Started
                } else {
                    FocusAction::Nothing
                }
            }
            LoopState::Idle | LoopState::Running => FocusAction::Nothing,
        }
    }

    /// Advance the game by one gravity step.
    ///
    /// Does nothing unless running. The active piece falls one row if it can;
    /// otherwise it locks, rows are cleared and the next piece spawns. Then the
    /// clock advances by the current interval and the tick callback fires, or
    /// the end callback if the lock ended the game.
    ///
    /// A lock error freezes the loop in [`LoopState::Faulted`] and is returned.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        if self.state() != LoopState::Running {
            return Ok(());
        }
        let Some(current) = self.session.take() else {
            return Ok(());
        };

        let interval_ms = self.config.tick_interval_ms(current.level());
        let level_before = current.level();

        let falls = current
            .active()
            .map(|piece| can_place(current.board(), &piece, 0, 1, 0))
            .unwrap_or(false);

        let mut next = if falls {
            move_piece(current, 0, 1)
        } else {
            match on_lock(current.clone()) {
                Ok(next) => next,
                Err(err) => {
                    error!(%err, score = current.score(), "lock failed, halting game");
                    self.session = Some(current);
                    self.faulted = true;
                    self.publish();
                    return Err(err);
                }
            }
        };
        next.advance_clock(interval_ms as u64);

        let over = !next.is_running();
        let level_changed = next.level() != level_before;
        self.session = Some(next);

        if over {
            info!(
                score = self.score(),
                elapsed_secs = self.elapsed_secs(),
                "game over"
            );
            self.emit_end(false);
            self.publish();
        } else {
            self.emit_tick();
            if level_changed {
                debug!(level = self.level(), "level up");
                self.publish();
            }
        }
        Ok(())
    }

    /// Tick only if `epoch` is still the current schedule's epoch.
    ///
    /// Returns whether a tick was run.
    pub fn tick_if_current(&mut self, epoch: u64) -> Result<bool, EngineError> {
        if epoch != self.epoch {
            return Ok(false);
        }
        self.tick()?;
        Ok(true)
    }

    pub fn left_pressed(&mut self) -> Option<GridSnapshot> {
        self.apply_move(|s| move_piece(s, -1, 0))
    }

    pub fn right_pressed(&mut self) -> Option<GridSnapshot> {
        self.apply_move(|s| move_piece(s, 1, 0))
    }

    pub fn down_pressed(&mut self) -> Option<GridSnapshot> {
        self.apply_move(|s| move_piece(s, 0, 1))
    }

    pub fn rotate_pressed(&mut self) -> Option<GridSnapshot> {
        let kicks = self.config.kicks;
        self.apply_move(move |s| rotate_piece(s, kicks))
    }

    pub fn drop_pressed(&mut self) -> Option<GridSnapshot> {
        self.apply_move(drop_piece)
    }

    /// Dispatch an abstract action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.left_pressed().is_some(),
            GameAction::MoveRight => self.right_pressed().is_some(),
            GameAction::MoveDown => self.down_pressed().is_some(),
            GameAction::Rotate => self.rotate_pressed().is_some(),
            GameAction::Drop => self.drop_pressed().is_some(),
            GameAction::Pause => {
                let before = self.state();
                self.toggle_pause();
                self.state() != before
            }
            GameAction::Restart => self.restart(),
        }
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// A game is in progress, paused or not.
    pub fn is_running(&self) -> bool {
        matches!(self.state(), LoopState::Running | LoopState::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state() == LoopState::Paused
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    pub fn level(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::level)
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.session.as_ref().map_or(0, GameSession::elapsed_secs)
    }

    pub fn grid_snapshot(&self) -> GridSnapshot {
        match &self.session {
            Some(session) => session.grid(),
            None => GridSnapshot::empty(self.config.width, self.config.height),
        }
    }

    /// Gravity interval at the current level.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms(self.level()) as u64)
    }

    pub fn schedule(&self) -> Schedule {
        *self.schedule_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Schedule> {
        self.schedule_tx.subscribe()
    }

    fn install(&mut self, session: GameSession, on_tick: TickCallback, on_end: EndCallback) {
        if matches!(self.state(), LoopState::Running | LoopState::Paused) {
            self.finish(true);
        }
        self.on_tick = Some(on_tick);
        self.on_end = Some(on_end);
        self.begin(session);
    }

    fn fresh_session(&mut self) -> GameSession {
        let seed = self
            .session
            .as_ref()
            .map_or(self.next_seed, GameSession::next_seed);
        self.next_seed = seed;
        GameSession::new(&GameConfig { seed, ..self.config })
    }

    fn begin(&mut self, session: GameSession) {
        self.faulted = false;
        let blocked = !session.is_running();
        self.session = Some(session);
        if blocked {
            info!("first spawn blocked, game over");
            self.emit_end(false);
        } else {
            debug!(
                width = self.config.width,
                height = self.config.height,
                "game started"
            );
        }
        self.publish();
    }

    fn finish(&mut self, is_restart: bool) {
        if let Some(session) = self.session.as_mut() {
            session.end();
        }
        debug!(is_restart, score = self.score(), "game ended");
        self.emit_end(is_restart);
        self.publish();
    }

    fn set_paused(&mut self, paused: bool) {
        if let Some(session) = self.session.as_mut() {
            session.set_paused(paused);
        }
        debug!(paused, "pause toggled");
        self.publish();
    }

    /// Run a placement op on the live session; report the grid if the active
    /// piece changed.
    fn apply_move(&mut self, op: impl FnOnce(GameSession) -> GameSession) -> Option<GridSnapshot> {
        if self.state() != LoopState::Running {
            return None;
        }
        let current = self.session.take()?;
        let before = current.active();
        let next = op(current);
        let changed = next.active() != before;
        let grid = changed.then(|| next.grid());
        self.session = Some(next);
        grid
    }

    fn emit_tick(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let event = TickEvent {
            elapsed_secs: session.elapsed_secs(),
            score: session.score(),
            grid: session.grid(),
        };
        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick(&event);
        }
    }

    fn emit_end(&mut self, is_restart: bool) {
        let event = EndEvent {
            elapsed_secs: self.elapsed_secs(),
            score: self.score(),
            is_restart,
        };
        if let Some(on_end) = self.on_end.as_mut() {
            on_end(&event);
        }
    }

    fn publish(&mut self) {
        self.epoch += 1;
        let interval = (self.state() == LoopState::Running).then(|| self.tick_interval());
        self.schedule_tx.send_replace(Schedule {
            epoch: self.epoch,
            interval,
        });
    }
}

impl std::fmt::Debug for GameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoop")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::{shape_of, spawn, Board};
    use crate::types::{ColorToken, PieceKind};

    #[derive(Clone, Default)]
    struct Recorder {
        ticks: Arc<Mutex<Vec<TickEvent>>>,
        ends: Arc<Mutex<Vec<EndEvent>>>,
    }

    impl Recorder {
        fn start(&self, game: &mut GameLoop) {
            let ticks = self.ticks.clone();
            let ends = self.ends.clone();
            game.start_game(
                move |e| ticks.lock().unwrap().push(e.clone()),
                move |e| ends.lock().unwrap().push(*e),
            );
        }

        fn start_session(&self, game: &mut GameLoop, session: GameSession) {
            let ticks = self.ticks.clone();
            let ends = self.ends.clone();
            game.start_session(
                session,
                move |e| ticks.lock().unwrap().push(e.clone()),
                move |e| ends.lock().unwrap().push(*e),
            )
            .unwrap();
        }

        fn ticks(&self) -> Vec<TickEvent> {
            self.ticks.lock().unwrap().clone()
        }

        fn ends(&self) -> Vec<EndEvent> {
            self.ends.lock().unwrap().clone()
        }
    }

    fn game() -> GameLoop {
        GameLoop::new(GameConfig::default()).unwrap()
    }

    /// Nine full rows above a bottom row with a gap at columns 3..=6, and a
    /// horizontal I sitting in the gap. The next tick locks it and clears ten
    /// rows at once.
    fn ten_line_session() -> GameSession {
        let mut board = Board::new(10, 20);
        let cells: Vec<(i16, i16, ColorToken)> = (10..20)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| y != 19 || !(3..=6).contains(&x))
            .map(|(x, y)| (x, y, ColorToken::Green))
            .collect();
        board.lock_cells(&cells).unwrap();
        let piece = spawn(shape_of(PieceKind::I), 10).translated(0, 18);
        GameSession::with_piece(board, piece, 1)
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameLoop::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_idle_loop_ignores_everything() {
        let mut game = game();
        assert_eq!(game.state(), LoopState::Idle);
        game.tick().unwrap();
        assert!(game.left_pressed().is_none());
        assert!(!game.restart());
        game.toggle_pause();
        assert_eq!(game.state(), LoopState::Idle);
        assert_eq!(game.grid_snapshot().filled_count(), 0);
        assert_eq!(game.schedule().interval, None);
    }

    #[test]
    fn test_tick_moves_piece_down_and_reports() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        assert_eq!(game.state(), LoopState::Running);
        assert!(rec.ticks().is_empty());

        let before = game.session().unwrap().active().unwrap();
        game.tick().unwrap();
        let after = game.session().unwrap().active().unwrap();
        assert_eq!(after.origin_y, before.origin_y + 1);

        let ticks = rec.ticks();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].elapsed_secs, 1);
        assert_eq!(ticks[0].score, 0);
        assert_eq!(ticks[0].grid.filled_count(), 4);
    }

    #[test]
    fn test_paused_loop_ignores_ticks_and_input() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        game.toggle_pause();
        assert!(game.is_paused());
        assert!(game.is_running());

        let before = game.session().unwrap().active();
        for _ in 0..5 {
            game.tick().unwrap();
        }
        assert!(game.right_pressed().is_none());
        assert_eq!(game.session().unwrap().active(), before);
        assert!(rec.ticks().is_empty());

        game.toggle_pause();
        game.tick().unwrap();
        assert_eq!(rec.ticks().len(), 1);
    }

    #[test]
    fn test_start_while_running_ends_with_restart_flag() {
        let mut game = game();
        let first = Recorder::default();
        first.start(&mut game);
        game.tick().unwrap();
        game.tick().unwrap();

        let second = Recorder::default();
        second.start(&mut game);

        assert_eq!(
            first.ends(),
            vec![EndEvent {
                elapsed_secs: 2,
                score: 0,
                is_restart: true
            }]
        );
        assert!(second.ends().is_empty());
        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.elapsed_secs(), 0);
    }

    #[test]
    fn test_blocked_first_spawn_ends_without_tick() {
        let mut game = game();
        let rec = Recorder::default();
        let mut board = Board::new(10, 20);
        let row: Vec<(i16, i16, ColorToken)> =
            (0..10).map(|x| (x, 1, ColorToken::Red)).collect();
        board.lock_cells(&row).unwrap();

        rec.start_session(&mut game, GameSession::with_board(board, 1));

        assert_eq!(game.state(), LoopState::Terminated);
        assert_eq!(
            rec.ends(),
            vec![EndEvent {
                elapsed_secs: 0,
                score: 0,
                is_restart: false
            }]
        );
        game.tick().unwrap();
        assert!(rec.ticks().is_empty());
        assert_eq!(game.schedule().interval, None);
    }

    #[test]
    fn test_restart_resets_score_and_clock() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        for _ in 0..3 {
            game.tick().unwrap();
        }
        assert!(game.restart());
        assert_eq!(rec.ends().len(), 1);
        assert!(rec.ends()[0].is_restart);
        assert_eq!(game.score(), 0);
        assert_eq!(game.elapsed_secs(), 0);
        assert_eq!(game.grid_snapshot().filled_count(), 4);
    }

    #[test]
    fn test_schedule_follows_phase_changes() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        let running = game.schedule();
        assert_eq!(running.interval, Some(Duration::from_millis(1000)));

        game.toggle_pause();
        let paused = game.schedule();
        assert!(paused.epoch > running.epoch);
        assert_eq!(paused.interval, None);

        assert!(!game.tick_if_current(running.epoch).unwrap());
        game.toggle_pause();
        let resumed = game.schedule();
        assert!(game.tick_if_current(resumed.epoch).unwrap());
        assert_eq!(rec.ticks().len(), 1);
    }

    #[test]
    fn test_focus_changes() {
        let mut game = game();
        assert_eq!(game.resume_view(), FocusAction::Nothing);

        let rec = Recorder::default();
        rec.start(&mut game);
        game.suspend();
        assert!(game.is_paused());
        assert_eq!(game.resume_view(), FocusAction::ShowPause);
        assert!(game.is_paused());

        game.toggle_pause();
        assert_eq!(game.resume_view(), FocusAction::Nothing);
        assert_eq!(game.state(), LoopState::Running);
    }

    #[test]
    fn test_inputs_report_only_applied_moves() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);

        let moved = game.left_pressed().expect("room to move left");
        assert_eq!(moved, game.grid_snapshot());

        // Walk into the left wall; the last press is refused.
        let mut refused = false;
        for _ in 0..10 {
            if game.left_pressed().is_none() {
                refused = true;
                break;
            }
        }
        assert!(refused);

        assert!(game.drop_pressed().is_some());
        assert!(game.drop_pressed().is_none());
        assert!(game.down_pressed().is_none());
        assert!(game.apply_action(GameAction::Pause));
        assert!(game.is_paused());
        assert!(!game.apply_action(GameAction::MoveRight));
    }

    #[test]
    fn test_dropped_piece_locks_on_next_tick() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        let first = game.session().unwrap().active().unwrap();
        game.drop_pressed().unwrap();
        game.tick().unwrap();

        let session = game.session().unwrap();
        let next = session.active().unwrap();
        assert_eq!(next.origin_y, 0);
        assert!(session
            .board()
            .cells()
            .iter()
            .any(|c| c.color == Some(first.color())));
    }

    #[test]
    fn test_session_of_wrong_size_is_rejected() {
        let mut game = game();
        let rec = Recorder::default();
        let ticks = rec.ticks.clone();
        let result = game.start_session(
            GameSession::with_board(Board::new(6, 8), 1),
            move |e| ticks.lock().unwrap().push(e.clone()),
            |_| {},
        );

        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
        assert_eq!(game.state(), LoopState::Idle);
        assert!(game.session().is_none());
        assert_eq!((game.width(), game.height()), (10, 20));
        let grid = game.grid_snapshot();
        assert_eq!((grid.width, grid.height), (10, 20));
        assert!(!game.restart());
    }

    #[test]
    fn test_rejected_session_keeps_running_game() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start(&mut game);
        game.tick().unwrap();

        let result = game.start_session(
            GameSession::with_board(Board::new(12, 20), 1),
            |_| {},
            |_| {},
        );
        assert!(result.is_err());
        assert_eq!(game.state(), LoopState::Running);
        assert!(rec.ends().is_empty());
        game.tick().unwrap();
        assert_eq!(rec.ticks().len(), 2);
    }

    #[test]
    fn test_level_up_shortens_interval() {
        let mut game = game();
        let rec = Recorder::default();
        rec.start_session(&mut game, ten_line_session());
        let before = game.schedule();
        assert_eq!(before.interval, Some(Duration::from_millis(1000)));

        game.tick().unwrap();

        assert_eq!(game.level(), 1);
        assert_eq!(game.session().unwrap().lines(), 10);
        assert_eq!(game.score(), 3000);
        assert_eq!(game.tick_interval(), Duration::from_millis(800));
        let after = game.schedule();
        assert!(after.epoch > before.epoch);
        assert_eq!(after.interval, Some(Duration::from_millis(800)));
        assert!(!game.tick_if_current(before.epoch).unwrap());

        // The clearing tick ran at the old speed; the next one runs at the new.
        assert_eq!(rec.ticks()[0].elapsed_secs, 1);
        assert_eq!(game.session().unwrap().elapsed_ms(), 1000);
        game.tick().unwrap();
        assert_eq!(game.session().unwrap().elapsed_ms(), 1800);
    }

    #[test]
    fn test_lock_failure_faults_the_loop() {
        let mut game = game();
        let rec = Recorder::default();
        let piece = spawn(shape_of(PieceKind::O), 10).translated(0, 30);
        rec.start_session(
            &mut game,
            GameSession::with_piece_unchecked(Board::new(10, 20), piece, 1),
        );
        assert_eq!(game.state(), LoopState::Running);
        let before = game.schedule();

        assert!(matches!(game.tick(), Err(EngineError::OutOfBounds { .. })));
        assert_eq!(game.state(), LoopState::Faulted);
        assert!(!game.is_running());
        let faulted = game.schedule();
        assert!(faulted.epoch > before.epoch);
        assert_eq!(faulted.interval, None);
        assert!(rec.ticks().is_empty());
        assert!(rec.ends().is_empty());

        // Frozen: the session is kept as it was and nothing moves.
        assert_eq!(game.session().unwrap().active(), Some(piece));
        game.tick().unwrap();
        assert!(game.left_pressed().is_none());
        game.toggle_pause();
        assert_eq!(game.state(), LoopState::Faulted);

        let fresh = Recorder::default();
        fresh.start(&mut game);
        assert_eq!(game.state(), LoopState::Running);
        assert_eq!(game.schedule().interval, Some(Duration::from_millis(1000)));
        assert!(rec.ends().is_empty());
        game.tick().unwrap();
        assert_eq!(fresh.ticks().len(), 1);
    }
}
