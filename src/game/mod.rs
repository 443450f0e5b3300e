pub mod error;
pub mod grid;
pub mod player_pool;
pub mod score;
pub mod tic_tac_toe;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use grid::{Grid, WithLength};
use player_pool::{Player, PlayerQueue};

pub use error::GameError;
pub use grid::GridIndex;
pub use score::ScoreBoard;

pub type GameResult<T> = Result<T, GameError>;

/// Player symbol. The engine has no notion of accounts or connections,
/// so the mark doubles as the player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark that moves after `self`.
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

impl Player for Mark {
    type Id = Mark;

    fn id(&self) -> Self::Id {
        *self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(Mark),
    Draw,
}

impl Display for FinishedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishedState::Win(mark) => write!(f, "Player {} Wins!", mark),
            FinishedState::Draw => f.write_str("It's a Draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(Mark),
    Finished(FinishedState),
}

pub trait GameBoard {
    type Item;

    fn get_content(&self) -> Vec<Vec<Self::Item>>;
}

impl<T, R, C> GameBoard for Grid<T, R, C>
where
    T: Clone,
    R: WithLength,
    C: WithLength,
{
    type Item = T;

    fn get_content(&self) -> Vec<Vec<Self::Item>> {
        self.iter()
            .map(|row| row.iter().cloned().collect())
            .collect()
    }
}

pub trait Game: Sized {
    type TurnData;
    type Players: PlayerQueue<Id = Mark>;
    type Board: GameBoard;

    fn new() -> Self;
    fn update(&mut self, data: Self::TurnData) -> GameResult<GameState>;
    fn reset(&mut self);

    fn board(&self) -> &Self::Board;

    fn players(&self) -> &Self::Players;
    fn players_mut(&mut self) -> &mut Self::Players;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, mark: Mark) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(mark)));
        self.state()
    }

    fn get_board_content(&self) -> Vec<Vec<<Self::Board as GameBoard>::Item>> {
        self.board().get_content()
    }

    fn get_current_player(&mut self) -> GameResult<&<Self::Players as PlayerQueue>::Item> {
        self.players_mut()
            .get_current()
            .ok_or(GameError::PlayerPoolCorrupted)
    }

    fn switch_player(&mut self) -> GameResult<GameState> {
        let next_player = self
            .players_mut()
            .next()
            .ok_or(GameError::PlayerPoolCorrupted)?
            .id();
        self.set_state(GameState::Turn(next_player));
        Ok(self.state())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_finished_state_display() {
        assert_eq!(
            FinishedState::Win(Mark::X).to_string(),
            "Player X Wins!"
        );
        assert_eq!(FinishedState::Win(Mark::O).to_string(), "Player O Wins!");
        assert_eq!(FinishedState::Draw.to_string(), "It's a Draw!");
    }

    #[test]
    fn test_board_cell_display() {
        assert_eq!(BoardCell::from(Mark::O).to_string(), "[O]");
        assert_eq!(BoardCell::<Mark>::default().to_string(), "[ ]");
    }
}
