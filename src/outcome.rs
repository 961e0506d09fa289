use crate::board::{Action, Board, Symbol};
use crate::moves::actions;
use serde::{Deserialize, Serialize};

/// The eight winning lines: three rows, three columns, then both diagonals.
pub const WIN_LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The given player has completed a line.
    Won(Symbol),
    /// The board is full and nobody has a line.
    Draw,
}

/// Returns `true` if `symbol` owns any complete line on `board`.
pub fn check_win(symbol: Symbol, board: &Board) -> bool {
    let mark = symbol.to_cell();
    WIN_LINES.iter().any(|line| {
        line.iter()
            .all(|cell| board.cell(cell.row, cell.col) == Some(mark))
    })
}

/// Scores `board` from `X`'s point of view: `1` if `X` has a line, `-1` if `O` has one, `0`
/// otherwise.
///
/// `X` is checked first, so a board where both players have a line scores `1`.
pub fn utility(board: &Board) -> i32 {
    if check_win(Symbol::X, board) {
        1
    } else if check_win(Symbol::O, board) {
        -1
    } else {
        0
    }
}

/// Returns the player with a completed line, or `None` if nobody has won (yet).
pub fn winner(board: &Board) -> Option<Symbol> {
    match utility(board) {
        1 => Some(Symbol::X),
        -1 => Some(Symbol::O),
        _ => None,
    }
}

/// Returns `true` once somebody has won or no empty cell is left.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Summarizes `board` for whoever renders the end of the game.
pub fn outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(symbol) => GameOutcome::Won(symbol),
        None if terminal(board) => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Symbol};
    use crate::moves::actions;
    use crate::outcome::{GameOutcome, check_win, outcome, terminal, utility, winner};

    #[test]
    fn every_line_is_detected() {
        let boards = [
            "XXX/OO./...",
            "OO./XXX/...",
            "OO./.../XXX",
            "XO./XO./X..",
            "OX./OX./.X.",
            "O.X/O.X/..X",
            "XO./OX./..X",
            "O.X/OX./X..",
        ];
        for text in boards {
            let board: Board = text.parse().unwrap();
            assert!(check_win(Symbol::X, &board), "{text}");
            assert!(!check_win(Symbol::O, &board), "{text}");
            assert_eq!(utility(&board), 1, "{text}");
            assert_eq!(winner(&board), Some(Symbol::X), "{text}");
        }
    }

    #[test]
    fn o_line_scores_minus_one() {
        let board: Board = "XX./OOO/X.X".parse().unwrap();
        assert_eq!(utility(&board), -1);
        assert_eq!(winner(&board), Some(Symbol::O));
        assert!(terminal(&board));
        assert_eq!(outcome(&board), GameOutcome::Won(Symbol::O));
    }

    #[test]
    fn no_line_scores_zero() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(utility(&board), 0);
        assert_eq!(winner(&board), None);
        assert!(!terminal(&board));
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn x_wins_when_both_have_a_line() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(check_win(Symbol::O, &board));
        assert_eq!(utility(&board), 1);
        assert_eq!(winner(&board), Some(Symbol::X));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert!(terminal(&board));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn terminal_matches_winner_or_no_actions() {
        let boards = [
            "...//...//...",
            "X../.../...",
            "XXX/OO./...",
            "XOX/XOO/OXX",
            "XOX/OXO/OXX",
            "XX./OO./...",
        ];
        for text in boards {
            let board: Board = text.parse().unwrap();
            assert_eq!(
                terminal(&board),
                winner(&board).is_some() || actions(&board).is_empty(),
                "{text}"
            );
        }
    }
}
