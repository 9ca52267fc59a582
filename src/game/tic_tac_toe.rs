use std::fmt::{Debug, Formatter};

use generic_array::typenum::{Unsigned, U3};

use crate::game::{
    BoardCell, FinishedState, Game, GameError, GameResult, GameState, Grid, GridIndex,
    PlayerIdQueue, Sign,
};

/// Number of cells per board side.
type Side = U3;

pub type Cell = BoardCell<Sign>;
pub type Board = Grid<Cell, Side, Side>;

/// Move target: a cell index in `0..9`, counted row by row over the board.
///
/// Construction through `TryFrom<usize>` is the only way to get one,
/// so every [`CellIndex`] refers to an existing cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellIndex(GridIndex);

impl CellIndex {
    pub fn row(&self) -> usize {
        self.0.row()
    }

    pub fn col(&self) -> usize {
        self.0.col()
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let side = Side::to_usize();
        if value >= side * side {
            return Err(GameError::invalid_index(side * side - 1, value));
        }
        Ok(Self(GridIndex::new(value / side, value % side)))
    }
}

impl From<CellIndex> for GridIndex {
    fn from(value: CellIndex) -> Self {
        value.0
    }
}

fn winning_lines() -> [[GridIndex; 3]; 8] {
    [
        // rows
        [GridIndex::new(0, 0), GridIndex::new(0, 1), GridIndex::new(0, 2)],
        [GridIndex::new(1, 0), GridIndex::new(1, 1), GridIndex::new(1, 2)],
        [GridIndex::new(2, 0), GridIndex::new(2, 1), GridIndex::new(2, 2)],
        // columns
        [GridIndex::new(0, 0), GridIndex::new(1, 0), GridIndex::new(2, 0)],
        [GridIndex::new(0, 1), GridIndex::new(1, 1), GridIndex::new(2, 1)],
        [GridIndex::new(0, 2), GridIndex::new(1, 2), GridIndex::new(2, 2)],
        // diagonals
        [GridIndex::new(0, 0), GridIndex::new(1, 1), GridIndex::new(2, 2)],
        [GridIndex::new(2, 0), GridIndex::new(1, 1), GridIndex::new(0, 2)],
    ]
}

type GameEndedCallback = Box<dyn FnMut(FinishedState)>;

pub struct TicTacToe {
    players: PlayerIdQueue<Sign>,
    state: GameState,
    field: Board,
    on_game_ended: Option<GameEndedCallback>,
}

impl Debug for TicTacToe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicTacToe")
            .field("players", &self.players)
            .field("state", &self.state)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

impl Game for TicTacToe {
    type TurnData = CellIndex;
    type Players = PlayerIdQueue<Sign>;
    type Board = Board;

    fn new() -> Self {
        Self {
            players: PlayerIdQueue::new(vec![Sign::X, Sign::O]),
            state: GameState::Turn(Sign::X),
            field: Board::default(),
            on_game_ended: None,
        }
    }

    fn update(&mut self, data: Self::TurnData) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }

        let sign = *self.get_current_player()?;
        let index = GridIndex::from(data);
        let cell = &mut self.field[index];
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(index.row(), index.col()));
        }
        *cell = sign.into();
        tracing::debug!(%sign, %index, "mark placed");

        // the turn flips on every accepted move, even the one that ends the game
        self.switch_player()?;
        self.update_state()
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
    /// Sign that will be placed by the next accepted move.
    /// Stays readable after the game has finished.
    pub fn turn(&mut self) -> GameResult<Sign> {
        Ok(*self.get_current_player()?)
    }

    /// Registers the collaborator notified when a game reaches a terminal state.
    /// Called exactly once per finished game, for draws as well as wins.
    pub fn on_game_ended<F>(&mut self, callback: F)
    where
        F: FnMut(FinishedState) + 'static,
    {
        self.on_game_ended = Some(Box::new(callback));
    }

    /// Starts the match over: empty board, `x` to move.
    /// A callback registered with [`Self::on_game_ended`] stays in place.
    pub fn reset(&mut self) {
        self.players = PlayerIdQueue::new(vec![Sign::X, Sign::O]);
        self.state = GameState::Turn(Sign::X);
        self.field = Board::default();
        tracing::debug!("game reset");
    }

    fn update_state(&mut self) -> GameResult<GameState> {
        for [idx1, idx2, idx3] in winning_lines() {
            if let (Some(s1), Some(s2), Some(s3)) =
                (*self.field[idx1], *self.field[idx2], *self.field[idx3])
            {
                if s1 == s2 && s2 == s3 {
                    let state = self.set_winner(s1);
                    self.notify_game_ended();
                    return Ok(state);
                }
            }
        }

        if self.field.iter().flatten().all(|cell| cell.is_some()) {
            let state = self.set_draw();
            self.notify_game_ended();
            return Ok(state);
        }

        Ok(self.state())
    }

    fn notify_game_ended(&mut self) {
        if let GameState::Finished(result) = self.state() {
            tracing::debug!(?result, "game finished");
            if let Some(callback) = self.on_game_ended.as_mut() {
                callback(result);
            }
        }
    }
}
