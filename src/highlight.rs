use crate::board::{Board, BoardError};
use crate::pieces::{Piece, PieceId};
use crate::square::Square;

/// Marking of one square while a piece is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareHighlight {
    /// The selected piece stands here
    Origin,
    /// Empty target square
    Destination,
    /// Target square holding this opponent piece
    Capture(Piece),
}

/// A selected piece and the squares it can reach.
///
/// Empty when nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardHighlights {
    selected: Option<(Square, Piece)>,
    targets: Vec<(Square, SquareHighlight)>,
}

impl BoardHighlights {
    /// No selection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            selected: None,
            targets: Vec::new(),
        }
    }

    /// Square and piece of the selection, if any.
    #[inline]
    pub fn selected(&self) -> Option<(Square, Piece)> {
        self.selected
    }

    /// Move targets in generation order.
    #[inline]
    pub fn targets(&self) -> &[(Square, SquareHighlight)] {
        &self.targets
    }

    pub fn get(&self, square: Square) -> Option<SquareHighlight> {
        if self.selected.is_some_and(|(origin, _)| origin == square) {
            return Some(SquareHighlight::Origin);
        }
        self.targets
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, highlight)| *highlight)
    }

    /// Number of highlighted squares, origin included.
    pub fn len(&self) -> usize {
        usize::from(self.selected.is_some()) + self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

/// Select a piece and mark every square it may move to.
pub fn highlight_moves(board: &Board, piece: PieceId) -> Result<BoardHighlights, BoardError> {
    let origin = board.find_piece(piece)?;
    let selected = board.piece(piece)?;
    let targets = piece
        .available_moves(board)?
        .into_iter()
        .map(|to| match board.get_piece(to) {
            Some(victim) if victim.player != selected.player => {
                (to, SquareHighlight::Capture(victim))
            }
            _ => (to, SquareHighlight::Destination),
        })
        .collect();

    Ok(BoardHighlights {
        selected: Some((origin, selected)),
        targets,
    })
}
