use std::cell::RefCell;
use std::rc::Rc;

use tic_tac_toe::game::tic_tac_toe::{CellIndex, TicTacToe};
use tic_tac_toe::game::{FinishedState, Game, GameError, GameState, Sign};

fn click(game: &mut TicTacToe, index: usize) -> Result<GameState, GameError> {
    game.update(CellIndex::try_from(index)?)
}

#[test]
fn scripted_match_reaches_a_win() {
    let mut game = TicTacToe::new();

    // x takes the center column, o scatters
    click(&mut game, 4).unwrap();
    click(&mut game, 0).unwrap();
    click(&mut game, 1).unwrap();
    click(&mut game, 8).unwrap();
    let state = click(&mut game, 7).unwrap();

    assert_eq!(state, GameState::Finished(FinishedState::Win(Sign::X)));
    assert!(game.is_finished());

    let rendered = format!("{}", game.board());
    assert_eq!(rendered, "[\n[[o][x][ ]]\n[[ ][x][ ]]\n[[ ][x][o]]\n]");
}

#[test]
fn ui_clicks_that_go_nowhere_are_ignored() {
    let mut game = TicTacToe::new();
    click(&mut game, 4).unwrap();

    // a click outside the board never reaches the engine
    assert_eq!(
        click(&mut game, 9).unwrap_err(),
        GameError::invalid_index(8, 9)
    );
    // a click on an occupied cell changes nothing
    assert_eq!(
        click(&mut game, 4).unwrap_err(),
        GameError::cell_is_occupied(1, 1)
    );

    assert_eq!(game.state(), GameState::Turn(Sign::O));
    itertools::assert_equal(
        game.get_board_content()
            .into_iter()
            .flatten()
            .map(|cell| *cell),
        [
            None,
            None,
            None,
            None,
            Some(Sign::X),
            None,
            None,
            None,
            None,
        ],
    );
}

#[test]
fn celebration_fires_for_wins_and_draws_across_resets() {
    let celebrations = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&celebrations);

    let mut game = TicTacToe::new();
    game.on_game_ended(move |result| sink.borrow_mut().push(result));

    // first match: x wins the left column
    for index in [0, 1, 3, 2, 6] {
        click(&mut game, index).unwrap();
    }
    // second match: nobody wins
    game.reset();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        click(&mut game, index).unwrap();
    }

    assert_eq!(
        *celebrations.borrow(),
        vec![FinishedState::Win(Sign::X), FinishedState::Draw]
    );
}

#[test]
fn reset_gives_a_fresh_board_mid_game() {
    let mut game = TicTacToe::new();
    click(&mut game, 4).unwrap();
    click(&mut game, 0).unwrap();

    game.reset();

    assert_eq!(game.state(), GameState::Turn(Sign::X));
    assert_eq!(game.turn().unwrap(), Sign::X);
    assert!(game
        .get_board_content()
        .into_iter()
        .flatten()
        .all(|cell| cell.is_none()));
}
