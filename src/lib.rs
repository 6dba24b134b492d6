pub mod board;
pub mod explorer;
pub mod highlight;
pub mod pieces;
pub mod render;
pub mod setup;
pub mod square;

pub use board::{Board, BoardError, Occupant};
pub use pieces::{Piece, PieceId, PieceKind};
pub use square::{Player, Square};

/// Trait for showing a board with highlighted squares to the user.
///
/// Abstracts over output targets so the explorer loop does not depend on
/// the terminal directly.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Draw the board with the given highlights.
    fn show(
        &mut self,
        board: &Board,
        highlights: &highlight::BoardHighlights,
    ) -> Result<(), Self::Error>;
}
