mod error;
mod grid;
mod player_pool;
pub mod tic_tac_toe;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use generic_array::ArrayLength;

pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use player_pool::{Player, PlayerIdQueue, PlayerQueue};

pub type GameResult<T> = Result<T, GameError>;

/// One of the two marks placed on the board. `x` always opens the match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    X,
    O,
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::X => f.write_str("x"),
            Sign::O => f.write_str("o"),
        }
    }
}

// The sign is also the player identity: there are no accounts,
// just whoever is holding x or o right now.
impl Player for Sign {
    type Id = Sign;

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
    Win(Sign),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(Sign),
    Finished(FinishedState),
}

pub trait GameBoard {
    type Item;

    fn get_content(&self) -> Vec<Vec<Self::Item>>;
}

impl<T, R: ArrayLength, C: ArrayLength> GameBoard for Grid<T, R, C>
where
    T: Clone,
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
    type Players: PlayerQueue<Id = Sign>;
    type Board: GameBoard;

    fn new() -> Self;
    fn update(&mut self, data: Self::TurnData) -> GameResult<GameState>;

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

    fn set_winner(&mut self, sign: Sign) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(sign)));
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
