//! Integration tests for the game loop and the session functions it drives.

use std::sync::{Arc, Mutex};

use campus_tetris::core::{
    move_piece, on_lock, shape_of, spawn, Board, GameConfig, GameSession, KickPolicy,
};
use campus_tetris::engine::{EndEvent, GameLoop, LoopState, TickEvent};
use campus_tetris::types::{ColorToken, GameAction, PieceKind};

#[derive(Clone, Default)]
struct Events {
    ticks: Arc<Mutex<Vec<TickEvent>>>,
    ends: Arc<Mutex<Vec<EndEvent>>>,
}

impl Events {
    fn callbacks(
        &self,
    ) -> (
        impl FnMut(&TickEvent) + Send + 'static,
        impl FnMut(&EndEvent) + Send + 'static,
    ) {
        let ticks = self.ticks.clone();
        let ends = self.ends.clone();
        (
            move |e: &TickEvent| ticks.lock().unwrap().push(e.clone()),
            move |e: &EndEvent| ends.lock().unwrap().push(*e),
        )
    }

    fn ticks(&self) -> Vec<TickEvent> {
        self.ticks.lock().unwrap().clone()
    }

    fn ends(&self) -> Vec<EndEvent> {
        self.ends.lock().unwrap().clone()
    }
}

fn started(events: &Events) -> GameLoop {
    let mut game = GameLoop::new(GameConfig::default()).unwrap();
    let (on_tick, on_end) = events.callbacks();
    game.start_game(on_tick, on_end);
    game
}

/// Row 19 filled everywhere except columns 3..=6.
fn board_with_gap() -> Board {
    let mut board = Board::new(10, 20);
    let cells: Vec<(i16, i16, ColorToken)> = (0..10)
        .filter(|x| !(3..=6).contains(x))
        .map(|x| (x, 19, ColorToken::Red))
        .collect();
    board.lock_cells(&cells).unwrap();
    board
}

#[test]
fn test_nineteen_moves_down_then_lock_at_bottom() {
    for kind in PieceKind::ALL {
        let piece = spawn(shape_of(kind), 10);
        let mut session = GameSession::with_piece(Board::new(10, 20), piece, 1);
        for _ in 0..19 {
            session = move_piece(session, 0, 1);
        }
        let landed = session.active().unwrap();
        let bottom = landed.cells_at(0, 0, 0).iter().map(|c| c.1).max().unwrap();
        assert_eq!(bottom, 19, "{:?} did not reach the floor", kind);

        let session = on_lock(session).unwrap();
        let row = session.board().row(19).unwrap();
        assert!(row.iter().any(|c| c.color == Some(kind.color())));
        assert!(session.is_running());
    }
}

#[test]
fn test_landing_piece_completes_single_row() {
    let mut piece = spawn(shape_of(PieceKind::I), 10);
    for _ in 0..18 {
        piece = piece.translated(0, 1);
    }
    let session = GameSession::with_piece(board_with_gap(), piece, 1);

    let mut board = session.board().clone();
    board.lock_cells(&piece.cells()).unwrap();
    assert_eq!(board.full_rows(), vec![19]);

    let session = on_lock(session).unwrap();
    assert_eq!(session.board().height(), 20);
    assert!(session.board().full_rows().is_empty());
    assert_eq!(session.score(), 40);
}

#[test]
fn test_tick_during_pause_changes_nothing() {
    let events = Events::default();
    let mut game = started(&events);
    game.tick().unwrap();
    game.toggle_pause();
    assert_eq!(game.state(), LoopState::Paused);

    let (elapsed, score, grid) = (game.elapsed_secs(), game.score(), game.grid_snapshot());
    for _ in 0..10 {
        game.tick().unwrap();
    }
    assert_eq!(game.elapsed_secs(), elapsed);
    assert_eq!(game.score(), score);
    assert_eq!(game.grid_snapshot(), grid);
    assert_eq!(events.ticks().len(), 1);
}

#[test]
fn test_blocked_spawn_ends_without_tick() {
    let mut board = Board::new(10, 20);
    let cells: Vec<(i16, i16, ColorToken)> = (3..7)
        .flat_map(|x| [(x, 0, ColorToken::Blue), (x, 1, ColorToken::Blue)])
        .collect();
    board.lock_cells(&cells).unwrap();

    let events = Events::default();
    let mut game = GameLoop::new(GameConfig::default()).unwrap();
    let (on_tick, on_end) = events.callbacks();
    game.start_session(GameSession::with_board(board, 1), on_tick, on_end).unwrap();
    game.tick().unwrap();

    assert!(events.ticks().is_empty());
    let ends = events.ends();
    assert_eq!(ends.len(), 1);
    assert!(!ends[0].is_restart);
    assert_eq!(game.state(), LoopState::Terminated);
}

#[test]
fn test_start_after_game_over_resets_everything() {
    let events = Events::default();
    let mut game = GameLoop::new(GameConfig::default()).unwrap();
    let mut piece = spawn(shape_of(PieceKind::I), 10);
    piece.origin_y = 18;
    let (on_tick, on_end) = events.callbacks();
    game.start_session(GameSession::with_piece(board_with_gap(), piece, 1), on_tick, on_end).unwrap();

    game.tick().unwrap();
    assert_eq!(game.score(), 40);

    // Stack pieces in the middle until the spawn is blocked.
    for _ in 0..500 {
        if game.state() != LoopState::Running {
            break;
        }
        game.drop_pressed();
        game.tick().unwrap();
    }
    assert_eq!(game.state(), LoopState::Terminated);
    let ends = events.ends();
    assert_eq!(ends.len(), 1);
    assert!(!ends[0].is_restart);
    assert_eq!(ends[0].score, 40);

    let fresh = Events::default();
    let (on_tick, on_end) = fresh.callbacks();
    game.start_game(on_tick, on_end);
    assert_eq!(game.score(), 0);
    assert_eq!(game.elapsed_secs(), 0);
    assert_eq!(events.ends().len(), 1);

    game.tick().unwrap();
    let ticks = fresh.ticks();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].score, 0);
    assert_eq!(ticks[0].elapsed_secs, 1);
    assert_eq!(ticks[0].grid.filled_count(), 4);
}

#[test]
fn test_left_right_down_are_independent() {
    let events = Events::default();
    let mut game = started(&events);
    let origin = game.session().unwrap().active().unwrap();

    game.left_pressed().unwrap();
    let left = game.session().unwrap().active().unwrap();
    assert_eq!((left.origin_x, left.origin_y), (origin.origin_x - 1, origin.origin_y));

    game.right_pressed().unwrap();
    game.right_pressed().unwrap();
    let right = game.session().unwrap().active().unwrap();
    assert_eq!((right.origin_x, right.origin_y), (origin.origin_x + 1, origin.origin_y));

    game.down_pressed().unwrap();
    let down = game.session().unwrap().active().unwrap();
    assert_eq!((down.origin_x, down.origin_y), (origin.origin_x + 1, origin.origin_y + 1));
}

#[test]
fn test_actions_route_through_the_loop() {
    let events = Events::default();
    let mut game = started(&events);

    assert!(game.apply_action(GameAction::MoveDown));
    assert!(game.apply_action(GameAction::Drop));
    assert!(game.apply_action(GameAction::Pause));
    assert!(game.is_paused());
    assert!(game.apply_action(GameAction::Pause));
    assert!(!game.is_paused());

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(events.ends().len(), 1);
    assert!(events.ends()[0].is_restart);
    assert_eq!(game.state(), LoopState::Running);
}

#[test]
fn test_srs_config_applies_to_rotation() {
    let config = GameConfig {
        kicks: KickPolicy::Srs,
        ..GameConfig::default()
    };
    let mut game = GameLoop::new(config).unwrap();
    let events = Events::default();
    let (on_tick, on_end) = events.callbacks();
    let piece = spawn(shape_of(PieceKind::I), 10);
    game.start_session(GameSession::with_piece(Board::new(10, 20), piece, 1), on_tick, on_end).unwrap();

    game.rotate_pressed().unwrap();
    while game.left_pressed().is_some() {}
    let vertical = game.session().unwrap().active().unwrap();

    // Back to horizontal only fits with a kick.
    game.rotate_pressed().unwrap();
    let kicked = game.session().unwrap().active().unwrap();
    assert_eq!(kicked.rotation_index, 2);
    assert_ne!(kicked.origin_x, vertical.origin_x);
}

#[test]
fn test_tick_snapshot_includes_active_piece() {
    let events = Events::default();
    let mut game = started(&events);
    game.tick().unwrap();
    let tick = &events.ticks()[0];
    let session = game.session().unwrap();
    assert_eq!(tick.grid, session.grid());
    assert_eq!(tick.grid.filled_count(), 4);
    assert_eq!(session.board().cells().iter().filter(|c| !c.is_empty()).count(), 0);
}

#[test]
fn test_prepared_session_must_match_configured_size() {
    let config = GameConfig {
        width: 12,
        height: 16,
        ..GameConfig::default()
    };
    let mut game = GameLoop::new(config).unwrap();
    let events = Events::default();

    let (on_tick, on_end) = events.callbacks();
    let wrong = game.start_session(GameSession::with_board(Board::new(10, 20), 1), on_tick, on_end);
    assert!(wrong.is_err());
    assert_eq!(game.state(), LoopState::Idle);

    let (on_tick, on_end) = events.callbacks();
    game.start_session(GameSession::with_board(Board::new(12, 16), 1), on_tick, on_end)
        .unwrap();
    assert_eq!(game.state(), LoopState::Running);
    let grid = game.grid_snapshot();
    assert_eq!((grid.width, grid.height), (game.width(), game.height()));
}
