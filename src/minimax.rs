use crate::board::{Action, Board, Symbol};
use crate::error::{Error, Result};
use crate::moves::actions;
use crate::outcome::{terminal, utility};
use tracing::debug;

/// Counters collected while searching one position.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct SearchStats {
    /// Number of boards evaluated, the root included.
    pub nodes_visited: u64,
    /// Game value of the searched position under optimal play, from `X`'s point of view.
    pub value: i32,
}

/// Returns the optimal action for the player to move on `board`.
///
/// Every action is scored by searching the full game tree below it. `X` keeps the first action
/// with the highest score and `O` the first with the lowest, so ties go to the earliest action in
/// row-major order.
///
/// Fails with [`Error::PreconditionViolation`] if `board` is terminal.
pub fn minimax(board: &Board) -> Result<Action> {
    minimax_with_stats(board).map(|(action, _)| action)
}

/// Same as [`minimax`], also reporting how much of the tree was searched.
pub fn minimax_with_stats(board: &Board) -> Result<(Action, SearchStats)> {
    if terminal(board) {
        return Err(Error::PreconditionViolation {
            operation: "minimax",
        });
    }

    let mut stats = SearchStats {
        nodes_visited: 1,
        value: 0,
    };
    let mut best: Option<(Action, i32)> = None;
    let player = board.player();

    for action in actions(board) {
        let child = board.place(action);
        let value = match player {
            Symbol::X => min_value_counted(&child, &mut stats.nodes_visited),
            Symbol::O => max_value_counted(&child, &mut stats.nodes_visited),
        };
        let improves = match (best, player) {
            (None, _) => true,
            (Some((_, best_value)), Symbol::X) => value > best_value,
            (Some((_, best_value)), Symbol::O) => value < best_value,
        };
        if improves {
            best = Some((action, value));
        }
    }

    // A non-terminal board has at least one empty cell.
    let (action, value) = best.ok_or(Error::PreconditionViolation {
        operation: "minimax",
    })?;
    stats.value = value;
    debug!(%player, %action, value, nodes = stats.nodes_visited, "minimax search finished");
    Ok((action, stats))
}

/// Best utility `X` can force from `board`, with `X` to move.
pub fn max_value(board: &Board) -> i32 {
    max_value_counted(board, &mut 0)
}

/// Best utility `O` can force from `board`, with `O` to move.
pub fn min_value(board: &Board) -> i32 {
    min_value_counted(board, &mut 0)
}

fn max_value_counted(board: &Board, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if terminal(board) {
        return utility(board);
    }

    actions(board)
        .into_iter()
        .map(|action| min_value_counted(&board.place(action), nodes))
        .fold(i32::MIN, i32::max)
}

fn min_value_counted(board: &Board, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if terminal(board) {
        return utility(board);
    }

    actions(board)
        .into_iter()
        .map(|action| max_value_counted(&board.place(action), nodes))
        .fold(i32::MAX, i32::min)
}

#[cfg(test)]
mod tests {
    use crate::board::{Action, Board, Symbol};
    use crate::error::Error;
    use crate::minimax::{max_value, min_value, minimax, minimax_with_stats};
    use crate::outcome::{terminal, winner};

    #[test]
    fn completes_own_row() {
        // arrange
        let board: Board = "XX./OO./...".parse().unwrap();

        // act
        let action = minimax(&board).unwrap();

        // assert
        assert_eq!(action, Action::new(0, 2));
        let next = board.result(action).unwrap();
        assert_eq!(winner(&next), Some(Symbol::X));
        assert!(terminal(&next));
    }

    #[test]
    fn o_blocks_immediate_threat() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.player(), Symbol::O);
        assert_eq!(minimax(&board).unwrap(), Action::new(0, 2));
    }

    #[test]
    fn o_prefers_winning_over_blocking() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(board.player(), Symbol::O);
        assert_eq!(minimax(&board).unwrap(), Action::new(1, 2));
    }

    #[test]
    fn empty_board_is_a_draw_and_ties_go_to_first_cell() {
        // arrange
        let board = Board::new();

        // act
        let (action, stats) = minimax_with_stats(&board).unwrap();

        // assert
        assert_eq!(stats.value, 0);
        assert_eq!(max_value(&board), 0);
        assert_eq!(action, Action::new(0, 0));
        assert!(stats.nodes_visited > 9);
    }

    #[test]
    fn values_at_terminal_boards_are_utilities() {
        let x_won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(max_value(&x_won), 1);
        assert_eq!(min_value(&x_won), 1);

        let draw: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(max_value(&draw), 0);
        assert_eq!(min_value(&draw), 0);
    }

    #[test]
    fn o_answers_opposite_corners_with_an_edge() {
        let board: Board = "X../.O./..X".parse().unwrap();
        assert_eq!(board.player(), Symbol::O);
        assert_eq!(min_value(&board), 0);
        assert_eq!(minimax(&board).unwrap(), Action::new(0, 1));

        // A corner reply lets X fork.
        let corner = board.result(Action::new(0, 2)).unwrap();
        assert_eq!(max_value(&corner), 1);
    }

    #[test]
    fn search_does_not_touch_the_board() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        minimax(&board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            minimax(&board),
            Err(Error::PreconditionViolation {
                operation: "minimax"
            })
        );

        let full: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(minimax(&full).is_err());
    }
}
