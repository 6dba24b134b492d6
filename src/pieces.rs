use std::fmt;

use shakmaty::Role;

use crate::board::{Board, BoardError};
use crate::square::{Player, Square};

mod movegen;

pub use movegen::{BISHOP_DIRS, KING_DELTAS, KNIGHT_DELTAS, ROOK_DIRS};

/// The six chess piece types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Squares a piece of this kind owned by `player` could move to from
    /// `from`, given the occupancy of `board`.
    ///
    /// `from` need not actually hold the piece; the board is only consulted
    /// for the candidate squares.
    pub fn moves_from(self, player: Player, from: Square, board: &Board) -> Vec<Square> {
        let moves = match self {
            PieceKind::Pawn => movegen::pawn_moves(player, from, board),
            PieceKind::Knight => movegen::leaper_moves(&KNIGHT_DELTAS, player, from, board),
            PieceKind::Bishop => movegen::slider_moves(&BISHOP_DIRS, player, from, board),
            PieceKind::Rook => movegen::slider_moves(&ROOK_DIRS, player, from, board),
            PieceKind::Queen => {
                let mut moves = movegen::slider_moves(&BISHOP_DIRS, player, from, board);
                moves.extend(movegen::slider_moves(&ROOK_DIRS, player, from, board));
                moves
            }
            PieceKind::King => movegen::leaper_moves(&KING_DELTAS, player, from, board),
        };
        log::trace!("{player} {:?} on {from}: {} moves", self, moves.len());
        moves
    }
}

impl From<Role> for PieceKind {
    fn from(role: Role) -> Self {
        match role {
            Role::Pawn => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn,
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }
}

/// A piece type together with its owner.
///
/// This is a plain value: two white pawns compare equal. Board identity is
/// carried by [`PieceId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self { kind, player }
    }

    /// FEN letter, uppercase for White.
    #[inline]
    pub fn char(self) -> char {
        shakmaty::Piece::from(self).char()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.player, self.kind)
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        Self::new(piece.role.into(), piece.color.into())
    }
}

impl From<Piece> for shakmaty::Piece {
    fn from(piece: Piece) -> Self {
        shakmaty::Piece {
            role: piece.kind.into(),
            color: piece.player.into(),
        }
    }
}

/// Handle to a piece placed on a [`Board`].
///
/// Handles are issued by [`Board::place`] and stay valid until the piece is
/// captured. A handle names the board that issued it and is not found on any
/// other board, clones excepted. The piece's square is never stored in the
/// handle; it is always looked up on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId {
    pub(crate) board: u32,
    pub(crate) index: usize,
}

impl PieceId {
    /// All squares this piece may move to on `board`.
    ///
    /// Fails only if the piece is not on the board.
    pub fn available_moves(self, board: &Board) -> Result<Vec<Square>, BoardError> {
        let from = board.find_piece(self)?;
        let piece = board.piece(self)?;
        Ok(piece.kind.moves_from(piece.player, from, board))
    }

    /// Move this piece to `new_square`, capturing whatever stands there.
    ///
    /// No legality check is made; pass a square from
    /// [`available_moves`](Self::available_moves) for a legal move.
    /// Returns the captured piece, if any.
    pub fn move_to(self, board: &mut Board, new_square: Square) -> Result<Option<Piece>, BoardError> {
        let current = board.find_piece(self)?;
        board.move_piece(current, new_square)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.board, self.index)
    }
}
