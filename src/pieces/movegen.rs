use crate::board::{Board, Occupant};
use crate::square::{Player, Square};

/// (row, col) unit steps along the diagonals.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// (row, col) unit steps along ranks and files.
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// (row, col) knight jumps.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

/// (row, col) steps to the eight neighbouring squares.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Pawn moves in fixed order: capture left, capture right, single step,
/// double step.
pub(super) fn pawn_moves(player: Player, from: Square, board: &Board) -> Vec<Square> {
    let direction = player.pawn_direction();
    let forward = from.offset(direction, 0);
    if !forward.is_on_board() {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(4);

    for dc in [-1, 1] {
        let target = from.offset(direction, dc);
        if target.is_on_board() && board.occupant(target, player) == Occupant::Foe {
            moves.push(target);
        }
    }

    if board.occupant(forward, player) == Occupant::Empty {
        moves.push(forward);

        let double = from.offset(2 * direction, 0);
        if from.row() == player.pawn_start_row()
            && double.is_on_board()
            && board.occupant(double, player) == Occupant::Empty
        {
            moves.push(double);
        }
    }

    moves
}

/// Single jumps by each delta: knight and king.
pub(super) fn leaper_moves(
    deltas: &[(i8, i8)],
    player: Player,
    from: Square,
    board: &Board,
) -> Vec<Square> {
    deltas
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&target| {
            target.is_on_board() && board.occupant(target, player) != Occupant::Friend
        })
        .collect()
}

/// Rays along each direction until the edge or the first piece, which is
/// included only if it belongs to the opponent.
pub(super) fn slider_moves(
    dirs: &[(i8, i8)],
    player: Player,
    from: Square,
    board: &Board,
) -> Vec<Square> {
    let mut moves = Vec::new();

    for &(dr, dc) in dirs {
        let mut target = from.offset(dr, dc);
        while target.is_on_board() {
            match board.occupant(target, player) {
                Occupant::Empty => moves.push(target),
                Occupant::Foe => {
                    moves.push(target);
                    break;
                }
                Occupant::Friend => break,
            }
            target = target.offset(dr, dc);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, PieceKind};
    use test_case::test_case;

    fn board_with(pieces: &[(i8, i8, PieceKind, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, kind, player) in pieces {
            board
                .place(Square::at(row, col), Piece::new(kind, player))
                .expect("test squares should be distinct and on the board");
        }
        board
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test_case(0; "a file")]
    #[test_case(4; "e file")]
    #[test_case(7; "h file")]
    fn test_white_pawn_start_row_single_and_double(col: i8) {
        let board = board_with(&[(1, col, PieceKind::Pawn, Player::White)]);

        let moves = pawn_moves(Player::White, Square::at(1, col), &board);

        assert_eq!(moves, vec![Square::at(2, col), Square::at(3, col)]);
    }

    #[test]
    fn test_black_pawn_start_row_moves_down() {
        let board = board_with(&[(6, 3, PieceKind::Pawn, Player::Black)]);

        let moves = pawn_moves(Player::Black, Square::at(6, 3), &board);

        assert_eq!(moves, vec![Square::at(5, 3), Square::at(4, 3)]);
    }

    #[test]
    fn test_pawn_captures_come_first_in_order() {
        let board = board_with(&[
            (1, 4, PieceKind::Pawn, Player::White),
            (2, 3, PieceKind::Knight, Player::Black),
            (2, 5, PieceKind::Bishop, Player::Black),
        ]);

        let moves = pawn_moves(Player::White, Square::at(1, 4), &board);

        assert_eq!(
            moves,
            vec![
                Square::at(2, 3),
                Square::at(2, 5),
                Square::at(2, 4),
                Square::at(3, 4),
            ]
        );
    }

    #[test]
    fn test_pawn_does_not_capture_own_pieces() {
        let board = board_with(&[
            (3, 4, PieceKind::Pawn, Player::White),
            (4, 3, PieceKind::Knight, Player::White),
            (4, 5, PieceKind::Bishop, Player::White),
        ]);

        let moves = pawn_moves(Player::White, Square::at(3, 4), &board);

        assert_eq!(moves, vec![Square::at(4, 4)]);
    }

    #[test]
    fn test_pawn_blocked_straight_still_captures() {
        let board = board_with(&[
            (1, 4, PieceKind::Pawn, Player::White),
            (2, 4, PieceKind::Pawn, Player::Black),
            (2, 5, PieceKind::Pawn, Player::Black),
        ]);

        let moves = pawn_moves(Player::White, Square::at(1, 4), &board);

        assert_eq!(moves, vec![Square::at(2, 5)]);
    }

    #[test_case(Player::White; "white")]
    #[test_case(Player::Black; "black")]
    fn test_pawn_double_step_needs_empty_destination(player: Player) {
        let start = Square::at(player.pawn_start_row(), 2);
        let single = start.offset(player.pawn_direction(), 0);
        let double = single.offset(player.pawn_direction(), 0);
        let board = board_with(&[
            (start.row(), 2, PieceKind::Pawn, player),
            (double.row(), 2, PieceKind::Rook, player.other()),
        ]);

        let moves = pawn_moves(player, start, &board);

        assert_eq!(moves, vec![single]);
    }

    #[test]
    fn test_pawn_off_start_row_has_no_double_step() {
        let board = board_with(&[(2, 2, PieceKind::Pawn, Player::White)]);

        let moves = pawn_moves(Player::White, Square::at(2, 2), &board);

        assert_eq!(moves, vec![Square::at(3, 2)]);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        let board = board_with(&[
            (0, 3, PieceKind::Pawn, Player::Black),
            (1, 2, PieceKind::Rook, Player::White),
        ]);

        assert!(pawn_moves(Player::Black, Square::at(0, 3), &board).is_empty());
        assert!(pawn_moves(Player::White, Square::at(7, 3), &board).is_empty());
    }

    #[test]
    fn test_pawn_does_not_capture_around_edge() {
        let board = board_with(&[
            (4, 0, PieceKind::Pawn, Player::White),
            (5, 7, PieceKind::Rook, Player::Black),
            (5, 1, PieceKind::Rook, Player::Black),
        ]);

        let moves = pawn_moves(Player::White, Square::at(4, 0), &board);

        assert_eq!(moves, vec![Square::at(5, 1), Square::at(5, 0)]);
    }

    #[test]
    fn test_king_in_centre_has_eight_moves() {
        let board = board_with(&[(4, 4, PieceKind::King, Player::White)]);

        let moves = leaper_moves(&KING_DELTAS, Player::White, Square::at(4, 4), &board);

        assert_eq!(
            sorted(moves),
            vec![
                Square::at(3, 3),
                Square::at(3, 4),
                Square::at(3, 5),
                Square::at(4, 3),
                Square::at(4, 5),
                Square::at(5, 3),
                Square::at(5, 4),
                Square::at(5, 5),
            ]
        );
    }

    #[test_case(0, 0; "a1")]
    #[test_case(0, 7; "h1")]
    #[test_case(7, 0; "a8")]
    #[test_case(7, 7; "h8")]
    fn test_king_in_corner_has_three_moves(row: i8, col: i8) {
        let board = board_with(&[(row, col, PieceKind::King, Player::Black)]);

        let moves = leaper_moves(&KING_DELTAS, Player::Black, Square::at(row, col), &board);

        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|sq| sq.is_on_board()));
    }

    #[test]
    fn test_king_skips_friends_and_takes_foes() {
        let board = board_with(&[
            (4, 4, PieceKind::King, Player::White),
            (5, 4, PieceKind::Pawn, Player::White),
            (3, 3, PieceKind::Pawn, Player::White),
            (4, 5, PieceKind::Rook, Player::Black),
        ]);

        let moves = leaper_moves(&KING_DELTAS, Player::White, Square::at(4, 4), &board);

        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Square::at(5, 4)));
        assert!(!moves.contains(&Square::at(3, 3)));
        assert!(moves.contains(&Square::at(4, 5)));
    }

    #[test_case(4, 4, 8; "centre")]
    #[test_case(0, 0, 2; "corner")]
    #[test_case(0, 1, 3; "beside corner")]
    #[test_case(3, 0, 4; "edge")]
    fn test_knight_move_counts_on_empty_board(row: i8, col: i8, expected: usize) {
        let board = board_with(&[(row, col, PieceKind::Knight, Player::White)]);

        let moves = leaper_moves(&KNIGHT_DELTAS, Player::White, Square::at(row, col), &board);

        assert_eq!(moves.len(), expected);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut pieces = vec![(0, 1, PieceKind::Knight, Player::White)];
        pieces.extend((0..8).map(|c| (1, c, PieceKind::Pawn, Player::White)));
        let board = board_with(&pieces);

        let moves = leaper_moves(&KNIGHT_DELTAS, Player::White, Square::at(0, 1), &board);

        assert_eq!(sorted(moves), vec![Square::at(2, 0), Square::at(2, 2)]);
    }

    #[test]
    fn test_rook_on_empty_board_has_fourteen_moves() {
        let board = board_with(&[(3, 3, PieceKind::Rook, Player::White)]);

        let moves = slider_moves(&ROOK_DIRS, Player::White, Square::at(3, 3), &board);

        assert_eq!(moves.len(), 14);
        assert!(
            moves
                .iter()
                .all(|sq| sq.row() == 3 || sq.col() == 3)
        );
    }

    #[test]
    fn test_rook_stops_at_friend_and_captures_foe() {
        let board = board_with(&[
            (0, 0, PieceKind::Rook, Player::White),
            (0, 3, PieceKind::Knight, Player::White),
            (4, 0, PieceKind::Pawn, Player::Black),
            (6, 0, PieceKind::Pawn, Player::Black),
        ]);

        let moves = slider_moves(&ROOK_DIRS, Player::White, Square::at(0, 0), &board);

        assert_eq!(
            sorted(moves),
            vec![
                Square::at(0, 1),
                Square::at(0, 2),
                Square::at(1, 0),
                Square::at(2, 0),
                Square::at(3, 0),
                Square::at(4, 0),
            ]
        );
    }

    #[test_case(3, 3, 13; "centre")]
    #[test_case(0, 0, 7; "corner")]
    #[test_case(0, 3, 7; "edge")]
    fn test_bishop_move_counts_on_empty_board(row: i8, col: i8, expected: usize) {
        let board = board_with(&[(row, col, PieceKind::Bishop, Player::Black)]);

        let moves = slider_moves(&BISHOP_DIRS, Player::Black, Square::at(row, col), &board);

        assert_eq!(moves.len(), expected);
        assert!(moves.iter().all(|sq| sq.is_on_board()));
    }

    #[test]
    fn test_bishop_blocked_diagonal() {
        let board = board_with(&[
            (2, 2, PieceKind::Bishop, Player::White),
            (3, 3, PieceKind::Pawn, Player::White),
            (1, 1, PieceKind::Pawn, Player::Black),
            (3, 1, PieceKind::Pawn, Player::White),
            (1, 3, PieceKind::Pawn, Player::Black),
        ]);

        let moves = slider_moves(&BISHOP_DIRS, Player::White, Square::at(2, 2), &board);

        assert_eq!(sorted(moves), vec![Square::at(1, 1), Square::at(1, 3)]);
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = board_with(&[
            (3, 4, PieceKind::Queen, Player::White),
            (5, 6, PieceKind::Pawn, Player::Black),
            (3, 1, PieceKind::Pawn, Player::White),
        ]);
        let from = Square::at(3, 4);

        let queen = PieceKind::Queen.moves_from(Player::White, from, &board);
        let mut expected = slider_moves(&BISHOP_DIRS, Player::White, from, &board);
        expected.extend(slider_moves(&ROOK_DIRS, Player::White, from, &board));

        assert_eq!(sorted(queen), sorted(expected));
    }
}
