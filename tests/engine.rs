use tic_tac_toe_core::game::tic_tac_toe::{GameSnapshot, Index, TicTacToe};
use tic_tac_toe_core::game::{FinishedState, Game, GameError, GameResult, GameState, Mark};

/// Forwards a click on cell (row, col) the way a display layer would:
/// untrusted coordinates in, typed turn data through.
fn click(game: &mut TicTacToe, row: usize, col: usize) -> GameResult<GameState> {
    game.update(Index::try_from((row, col))?)
}

fn mark_at(snapshot: &GameSnapshot, row: usize, col: usize) -> Option<Mark> {
    snapshot.board[row][col].0
}

#[test]
fn snapshot_tracks_every_accepted_move() {
    let mut game = TicTacToe::new();

    click(&mut game, 1, 1).unwrap();
    click(&mut game, 0, 2).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(mark_at(&snapshot, 1, 1), Some(Mark::X));
    assert_eq!(mark_at(&snapshot, 0, 2), Some(Mark::O));
    assert_eq!(snapshot.current_player(), Some(Mark::X));

    let occupied = snapshot
        .board
        .iter()
        .flatten()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(occupied, 2);
}

#[test]
fn rejected_clicks_leave_the_view_unchanged() {
    let mut game = TicTacToe::new();
    click(&mut game, 0, 0).unwrap();
    let before = game.snapshot();

    // occupied cell, row out of range, column out of range
    assert!(click(&mut game, 0, 0).is_err());
    assert_eq!(click(&mut game, 5, 1), Err(GameError::invalid_grid_row(2, 5)));
    assert_eq!(click(&mut game, 1, 3), Err(GameError::invalid_grid_col(2, 3)));

    assert_eq!(game.snapshot(), before);
}

#[test]
fn finished_banner_matches_the_outcome() {
    let mut game = TicTacToe::new();
    for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        click(&mut game, row, col).unwrap();
    }

    let banner = match game.snapshot().state {
        GameState::Finished(finished) => finished.to_string(),
        GameState::Turn(_) => unreachable!("game must be over"),
    };
    assert_eq!(banner, "Player X Wins!");
}

#[test]
fn session_keeps_score_over_multiple_games() {
    let mut game = TicTacToe::new();

    // game 1: X takes the top row
    for &(row, col) in &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        click(&mut game, row, col).unwrap();
    }
    assert_eq!(game.snapshot().winner(), Some(Mark::X));

    game.reset();

    // game 2: O takes the left column
    for &(row, col) in &[(0, 1), (0, 0), (0, 2), (1, 0), (2, 2), (2, 0)] {
        click(&mut game, row, col).unwrap();
    }
    assert_eq!(game.snapshot().winner(), Some(Mark::O));

    game.reset();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.score.wins(Mark::X), 1);
    assert_eq!(snapshot.score.wins(Mark::O), 1);
    assert_eq!(snapshot.current_player(), Some(Mark::X));
    assert!(snapshot.board.iter().flatten().all(|cell| cell.is_none()));
}

#[test]
fn turn_order_alternates_from_x_for_accepted_moves_only() {
    let mut game = TicTacToe::new();
    let mut observed = Vec::new();

    let clicks = [
        (1, 1),
        (1, 1), // rejected: occupied, O keeps the turn
        (0, 0),
        (7, 0), // rejected: out of range, X keeps the turn
        (0, 1),
        (2, 2),
    ];
    for &(row, col) in &clicks {
        let mover = game.snapshot().current_player().unwrap();
        if click(&mut game, row, col).is_ok() {
            observed.push(mover);
        }
    }

    itertools::assert_equal(observed, [Mark::X, Mark::O, Mark::X, Mark::O]);
}
