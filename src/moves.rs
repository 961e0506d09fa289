use crate::board::{Action, BOARD_SIZE, Board};

/// Returns every empty cell of `board`, scanned row by row.
///
/// The order is significant: both the minimax tie-break and the uniform random pick index into
/// this list.
pub fn actions(board: &Board) -> Vec<Action> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| Action::new(row, col)))
        .filter(|action| board.is_empty(action.row, action.col))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::{Action, Board};
    use crate::moves::actions;

    #[test]
    fn empty_board_has_all_cells_in_row_major_order() {
        let expected: Vec<Action> = vec![
            Action::new(0, 0),
            Action::new(0, 1),
            Action::new(0, 2),
            Action::new(1, 0),
            Action::new(1, 1),
            Action::new(1, 2),
            Action::new(2, 0),
            Action::new(2, 1),
            Action::new(2, 2),
        ];
        assert_eq!(actions(&Board::new()), expected);
    }

    #[test]
    fn full_board_has_no_actions() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(actions(&board).is_empty());
    }

    #[test]
    fn skips_occupied_cells() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            actions(&board),
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }
}
