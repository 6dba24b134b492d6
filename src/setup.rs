use std::str::FromStr;

use shakmaty::fen::{Fen, ParseFenError};
use thiserror::Error;

use crate::board::Board;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Error when building a board from FEN.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] ParseFenError),
}

impl Board {
    /// Build a board from a FEN string.
    ///
    /// Only the piece placement is used; side to move, castling rights and
    /// en passant fields are accepted but ignored.
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        let fen = Fen::from_ascii(fen.trim().as_bytes())?;
        let board = Board::from(&fen.into_setup().board);
        log::debug!("loaded board with {} pieces", board.len());
        Ok(board)
    }

    /// The placement field of this board's FEN, e.g. `8/8/8/8/4P3/8/8/8`.
    pub fn placement_fen(&self) -> String {
        self.to_shakmaty().to_string()
    }
}

impl FromStr for Board {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
