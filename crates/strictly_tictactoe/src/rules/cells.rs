//! Empty-cell enumeration.

use super::super::{Board, Position};

/// Returns the empty cells in row-major order.
///
/// The order is significant: strategies that scan candidates break
/// ties in favour of the earliest cell returned here.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_empty_board_has_all_cells_in_order() {
        assert_eq!(empty_cells(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_filters_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));

        let cells = empty_cells(&board);
        assert_eq!(cells.len(), 7);
        assert!(!cells.contains(&Position::TopLeft));
        assert!(!cells.contains(&Position::Center));
        assert_eq!(cells[0], Position::TopCenter);
    }

    #[test]
    fn test_full_board_has_none() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert!(empty_cells(&board).is_empty());
    }
}
