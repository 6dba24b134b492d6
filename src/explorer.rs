use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::BoardDisplay;
use crate::board::{Board, BoardError};
use crate::highlight::{BoardHighlights, highlight_moves};
use crate::setup::{STARTING_FEN, SetupError};
use crate::square::{Square, SquareParseError};

/// One line of explorer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `load <fen>` or `load startpos`
    Load(String),
    /// `m <square>`: show the moves of the piece on a square
    Moves(Square),
    /// `mv <from> <to>`: relocate the piece on `from`
    Move(Square, Square),
    /// `r`
    Reset,
    /// `p`
    Redraw,
    /// `q`
    Quit,
}

/// Error from parsing or running an explorer command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error(transparent)]
    Square(#[from] SquareParseError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no piece on {0}")]
    EmptySquare(Square),
}

impl Command {
    pub fn parse(input: &str) -> Result<Option<Self>, CommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(&name) = parts.first() else {
            return Ok(None);
        };

        let command = match name {
            "load" => {
                if parts.len() < 2 {
                    return Err(CommandError::Usage("load <fen> | load startpos"));
                }
                // FEN contains spaces, so rejoin the rest.
                let fen = parts[1..].join(" ");
                if fen == "startpos" {
                    Command::Load(STARTING_FEN.to_string())
                } else {
                    Command::Load(fen)
                }
            }
            "m" => match parts.as_slice() {
                [_, square] => Command::Moves(square.parse()?),
                _ => return Err(CommandError::Usage("m <square>")),
            },
            "mv" => match parts.as_slice() {
                [_, from, to] => Command::Move(from.parse()?, to.parse()?),
                _ => return Err(CommandError::Usage("mv <from> <to>")),
            },
            "r" => Command::Reset,
            "p" => Command::Redraw,
            "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Board and current highlights of an explorer session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    highlights: BoardHighlights,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            highlights: BoardHighlights::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn highlights(&self) -> &BoardHighlights {
        &self.highlights
    }

    /// Apply a command. Returns `false` once the session should end.
    pub fn apply(&mut self, command: Command) -> Result<bool, CommandError> {
        match command {
            Command::Load(fen) => {
                self.board = Board::from_fen(&fen)?;
                self.highlights = BoardHighlights::new();
            }
            Command::Moves(square) => {
                let id = self
                    .board
                    .piece_id_at(square)
                    .ok_or(CommandError::EmptySquare(square))?;
                self.highlights = highlight_moves(&self.board, id)?;
            }
            Command::Move(from, to) => {
                let id = self
                    .board
                    .piece_id_at(from)
                    .ok_or(CommandError::EmptySquare(from))?;
                id.move_to(&mut self.board, to)?;
                self.highlights = BoardHighlights::new();
            }
            Command::Reset => *self = Session::new(Board::starting_position()),
            Command::Redraw => {}
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Runs the interactive explorer, reading commands from `input`.
///
/// Errors from individual commands are reported on `output` and the loop
/// continues; I/O failures end it.
pub fn run<D: BoardDisplay>(
    session: &mut Session,
    display: &mut D,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        output,
        "Commands: load <fen> | m <square> | mv <from> <to> | r (reset) | p (refresh) | q (quit)"
    )?;
    show(session, display, output)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let result = Command::parse(&line).and_then(|command| match command {
            Some(command) => session.apply(command),
            None => Ok(true),
        });

        match result {
            Ok(true) => show(session, display, output)?,
            Ok(false) => return Ok(()),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn show<D: BoardDisplay>(
    session: &Session,
    display: &mut D,
    output: &mut impl Write,
) -> io::Result<()> {
    if let Err(e) = display.show(session.board(), session.highlights()) {
        log::error!("failed to draw board: {e}");
        writeln!(output, "failed to draw board: {e}")?;
    }
    Ok(())
}
