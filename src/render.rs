use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::Board;
use crate::highlight::{BoardHighlights, SquareHighlight, highlight_moves};
use crate::square::{BOARD_SIZE, Square};

/// Terminal board display.
///
/// Renders the board as an 8×8 grid of FEN letters with ANSI color-coded
/// backgrounds for highlighted squares.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, highlights: &BoardHighlights) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, highlights)
    }
}

/// Render a board to any writer, rank 8 at the top.
pub fn render_board(
    w: &mut impl Write,
    board: &Board,
    highlights: &BoardHighlights,
) -> Result<(), DisplayError> {
    for row in (0..BOARD_SIZE).rev() {
        write!(w, " {} ", row + 1)?;
        for col in 0..BOARD_SIZE {
            let square = Square::at(row, col);
            let symbol = board.get_piece(square).map_or('·', |piece| piece.char());
            write!(w, "{}", format_square(symbol, highlights.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Wrap a cell symbol in the ANSI background for its highlight.
fn format_square(symbol: char, highlight: Option<SquareHighlight>) -> String {
    match highlight {
        Some(SquareHighlight::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareHighlight::Capture(_)) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareHighlight::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}
