use std::sync::atomic::{AtomicU32, Ordering};

use thiserror::Error;

use crate::pieces::{Piece, PieceId};
use crate::square::{BOARD_SIZE, Player, Square};

/// Errors from board lookups and placement.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),
    #[error("square {0} is off the board")]
    OffBoard(Square),
    #[error("square {0} is already occupied")]
    Occupied(Square),
}

/// What stands on a square, from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Friend,
    Foe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    piece: Piece,
    square: Square,
}

/// Source of board ids; each new board draws a fresh one.
static NEXT_BOARD_ID: AtomicU32 = AtomicU32::new(0);

/// Authoritative record of piece placement.
///
/// Pieces live in an arena indexed by [`PieceId`]; each live entry records
/// its square, and the grid records the handle on each square. The two
/// always agree. Captured pieces leave a `None` slot so their handles stay
/// unique and report [`BoardError::PieceNotFound`].
///
/// Every board has its own id, stamped into the handles it issues. A clone
/// keeps the id, so handles carry over to it. Equality compares placement
/// only.
#[derive(Debug, Clone)]
pub struct Board {
    id: u32,
    grid: [[Option<PieceId>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    entries: Vec<Option<Entry>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            id: NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed),
            grid: Default::default(),
            entries: Vec::new(),
        }
    }

    /// Creates the standard starting position.
    pub fn starting_position() -> Self {
        Self::from(&shakmaty::Board::new())
    }

    /// Put a new piece on an empty square and return its handle.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<PieceId, BoardError> {
        let (row, col) = square.index().ok_or(BoardError::OffBoard(square))?;
        if self.grid[row][col].is_some() {
            return Err(BoardError::Occupied(square));
        }

        let id = PieceId {
            board: self.id,
            index: self.entries.len(),
        };
        self.entries.push(Some(Entry { piece, square }));
        self.grid[row][col] = Some(id);
        Ok(id)
    }

    /// Handle of the piece on `square`, if any. Off-board squares are empty.
    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        let (row, col) = square.index()?;
        self.grid[row][col]
    }

    /// The piece on `square`, if any. Off-board squares are empty.
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.piece_id_at(square)
            .and_then(|id| self.entry(id))
            .map(|entry| entry.piece)
    }

    /// The piece behind a handle.
    pub fn piece(&self, id: PieceId) -> Result<Piece, BoardError> {
        self.entry(id)
            .map(|entry| entry.piece)
            .ok_or(BoardError::PieceNotFound(id))
    }

    /// Square currently holding the piece.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, BoardError> {
        match self.entry(id) {
            Some(entry) => Ok(entry.square),
            None => {
                log::warn!("lookup of piece {id}, which is not on the board");
                Err(BoardError::PieceNotFound(id))
            }
        }
    }

    /// Classify `square` relative to `player`.
    pub fn occupant(&self, square: Square, player: Player) -> Occupant {
        match self.get_piece(square) {
            None => Occupant::Empty,
            Some(piece) if piece.player == player => Occupant::Friend,
            Some(_) => Occupant::Foe,
        }
    }

    /// Relocate whatever stands on `from` to `to`, replacing any piece there.
    ///
    /// Does nothing if `from` is empty or off the board. The move is not
    /// checked against the piece's movement rules. Returns the captured
    /// piece, whose handle is retired. Fails if `to` is off the board while
    /// `from` holds a piece; the board is left unchanged in that case.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, BoardError> {
        let Some(id) = self.piece_id_at(from) else {
            return Ok(None);
        };
        let (to_row, to_col) = to.index().ok_or(BoardError::OffBoard(to))?;
        if from == to {
            return Ok(None);
        }

        let occupant = self.grid[to_row][to_col];
        let captured = occupant.and_then(|victim| self.retire(victim));
        if let Some((from_row, from_col)) = from.index() {
            self.grid[from_row][from_col] = None;
        }
        self.grid[to_row][to_col] = Some(id);
        if let Some(Some(entry)) = self.entries.get_mut(id.index) {
            entry.square = to;
        }

        match captured {
            Some(victim) => log::debug!("{from} -> {to}, capturing {victim}"),
            None => log::debug!("{from} -> {to}"),
        }
        Ok(captured)
    }

    /// All pieces on the board with their handles and squares, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let id = PieceId {
                    board: self.id,
                    index,
                };
                entry.as_ref().map(|e| (id, e.piece, e.square))
            })
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this placement as a `shakmaty` board.
    pub fn to_shakmaty(&self) -> shakmaty::Board {
        let mut board = shakmaty::Board::empty();
        for (_, piece, square) in self.pieces() {
            if let Ok(sq) = shakmaty::Square::try_from(square) {
                board.set_piece_at(sq, piece.into());
            }
        }
        board
    }

    /// Live entry behind a handle issued by this board.
    #[inline]
    fn entry(&self, id: PieceId) -> Option<&Entry> {
        if id.board != self.id {
            return None;
        }
        self.entries.get(id.index).and_then(Option::as_ref)
    }

    /// Drop a piece from the arena, returning it.
    fn retire(&mut self, id: PieceId) -> Option<Piece> {
        if id.board != self.id {
            return None;
        }
        self.entries
            .get_mut(id.index)
            .and_then(Option::take)
            .map(|entry| entry.piece)
    }
}

impl From<&shakmaty::Board> for Board {
    /// Pieces are placed rank by rank from a1, so handles follow that order.
    fn from(source: &shakmaty::Board) -> Self {
        let mut board = Board::new();
        for square in Square::all() {
            let Ok(sq) = shakmaty::Square::try_from(square) else {
                continue;
            };
            if let Some(piece) = source.piece_at(sq) {
                board
                    .place(square, piece.into())
                    .expect("each square visited once");
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Board {}
