use generic_array::typenum::Unsigned;

use crate::game::grid::{Grid, GridIndex, WithLength};
use crate::game::player_pool::PlayerIdQueue;
use crate::game::{
    BoardCell, FinishedState, Game, GameError, GameResult, GameState, Mark, ScoreBoard,
};

#[derive(Clone, Copy, Debug)]
pub enum FieldRow {
    R1,
    R2,
    R3,
}

impl WithLength for FieldRow {
    type Length = generic_array::typenum::U3;
}

impl TryFrom<usize> for FieldRow {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::R1),
            1 => Ok(Self::R2),
            2 => Ok(Self::R3),
            _ => Err(GameError::invalid_grid_row(
                <Self as WithLength>::Length::to_usize() - 1,
                value,
            )),
        }
    }
}

impl From<FieldRow> for usize {
    fn from(value: FieldRow) -> Self {
        match value {
            FieldRow::R1 => 0,
            FieldRow::R2 => 1,
            FieldRow::R3 => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FieldCol {
    C1,
    C2,
    C3,
}

impl WithLength for FieldCol {
    type Length = generic_array::typenum::U3;
}

impl TryFrom<usize> for FieldCol {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::C1),
            1 => Ok(Self::C2),
            2 => Ok(Self::C3),
            _ => Err(GameError::invalid_grid_col(
                <Self as WithLength>::Length::to_usize() - 1,
                value,
            )),
        }
    }
}

impl From<FieldCol> for usize {
    fn from(value: FieldCol) -> Self {
        match value {
            FieldCol::C1 => 0,
            FieldCol::C2 => 1,
            FieldCol::C3 => 2,
        }
    }
}

pub type Cell = BoardCell<Mark>;
pub type Index = GridIndex<FieldRow, FieldCol>;

impl TryFrom<(usize, usize)> for Index {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        let row = FieldRow::try_from(row)?;
        let col = FieldCol::try_from(col)?;
        Ok(Self::new(row, col))
    }
}

fn winning_combinations() -> [(Index, Index, Index); 8] {
    [
        (
            Index::new(FieldRow::R1, FieldCol::C1),
            Index::new(FieldRow::R1, FieldCol::C2),
            Index::new(FieldRow::R1, FieldCol::C3),
        ),
        (
            Index::new(FieldRow::R2, FieldCol::C1),
            Index::new(FieldRow::R2, FieldCol::C2),
            Index::new(FieldRow::R2, FieldCol::C3),
        ),
        (
            Index::new(FieldRow::R3, FieldCol::C1),
            Index::new(FieldRow::R3, FieldCol::C2),
            Index::new(FieldRow::R3, FieldCol::C3),
        ),
        (
            Index::new(FieldRow::R1, FieldCol::C1),
            Index::new(FieldRow::R2, FieldCol::C1),
            Index::new(FieldRow::R3, FieldCol::C1),
        ),
        (
            Index::new(FieldRow::R1, FieldCol::C2),
            Index::new(FieldRow::R2, FieldCol::C2),
            Index::new(FieldRow::R3, FieldCol::C2),
        ),
        (
            Index::new(FieldRow::R1, FieldCol::C3),
            Index::new(FieldRow::R2, FieldCol::C3),
            Index::new(FieldRow::R3, FieldCol::C3),
        ),
        (
            Index::new(FieldRow::R1, FieldCol::C1),
            Index::new(FieldRow::R2, FieldCol::C2),
            Index::new(FieldRow::R3, FieldCol::C3),
        ),
        (
            Index::new(FieldRow::R3, FieldCol::C1),
            Index::new(FieldRow::R2, FieldCol::C2),
            Index::new(FieldRow::R1, FieldCol::C3),
        ),
    ]
}

/// Point-in-time view of a game for the display layer. Detached from the
/// engine: holding one never blocks or mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Cell>>,
    pub state: GameState,
    pub score: ScoreBoard,
}

impl GameSnapshot {
    pub fn current_player(&self) -> Option<Mark> {
        match self.state {
            GameState::Turn(mark) => Some(mark),
            GameState::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.state {
            GameState::Finished(FinishedState::Win(mark)) => Some(mark),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }
}

#[derive(Debug)]
pub struct TicTacToe {
    players: PlayerIdQueue<Mark>,
    state: GameState,
    field: Grid<Cell, FieldRow, FieldCol>,
    score: ScoreBoard,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToe {
    type TurnData = Index;
    type Players = PlayerIdQueue<Mark>;
    type Board = Grid<Cell, FieldRow, FieldCol>;

    fn new() -> Self {
        Self {
            players: PlayerIdQueue::new(vec![Mark::X, Mark::O]),
            state: GameState::Turn(Mark::X),
            field: Grid::default(),
            score: ScoreBoard::default(),
        }
    }

    fn update(&mut self, data: Self::TurnData) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }

        let mark = *self.get_current_player()?;
        let cell = self.get_cell_mut(data);
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(
                data.row().into(),
                data.col().into(),
            ));
        }
        cell.0 = Some(mark);

        self.update_state()
    }

    /// Starts the next game: empty board, X to move. Scores survive.
    fn reset(&mut self) {
        self.players = PlayerIdQueue::new(vec![Mark::X, Mark::O]);
        self.field = Grid::default();
        self.set_state(GameState::Turn(Mark::X));
    }

    fn board(&self) -> &Self::Board {
        &self.field
    }

    fn players(&self) -> &Self::Players {
        &self.players
    }

    fn players_mut(&mut self) -> &mut Self::Players {
        &mut self.players
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl TicTacToe {
    /// Pure win predicate: true if one of the eight lines is fully
    /// occupied by `mark`.
    pub fn has_won(&self, mark: Mark) -> bool {
        winning_combinations().into_iter().any(|(idx1, idx2, idx3)| {
            [idx1, idx2, idx3]
                .into_iter()
                .all(|idx| self.get_cell(idx).0 == Some(mark))
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.get_board_content(),
            state: self.state(),
            score: self.score,
        }
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    fn get_cell(&self, position: Index) -> &Cell {
        &self.field[position]
    }

    fn get_cell_mut(&mut self, position: Index) -> &mut Cell {
        &mut self.field[position]
    }

    fn update_state(&mut self) -> GameResult<GameState> {
        let mark = *self.get_current_player()?;
        // the win check runs before the full-board check: a ninth move
        // that completes a line is a win, not a draw
        if self.has_won(mark) {
            self.score.record_win(mark);
            return Ok(self.set_winner(mark));
        }

        if self.field.iter().flatten().all(|cell| cell.is_some()) {
            return Ok(self.set_draw());
        }

        self.switch_player()
    }
}
