//! Turn order invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: the current player matches the marks on the board.
///
/// While the game runs it is X's turn exactly when both players have the
/// same number of marks. Once it is over, the current player is whoever
/// moved last.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        let x_to_move = game.current_player() == Player::X;

        if game.is_over() {
            x_to_move == (x == o + 1)
        } else {
            x_to_move == (x == o)
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
