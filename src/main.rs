use std::io;

use chessington::explorer::{self, Session};
use chessington::render::TerminalDisplay;
use chessington::{Board, setup::STARTING_FEN};

fn main() {
    env_logger::init();

    // Optional initial position as the remaining arguments, e.g. a quoted FEN.
    let fen = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let fen = if fen.is_empty() { STARTING_FEN } else { fen.as_str() };

    let board = match Board::from_fen(fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    log::info!("starting explorer with {}", board.placement_fen());

    let mut session = Session::new(board);
    let mut display = TerminalDisplay::new();
    let stdin = io::stdin();
    if let Err(e) = explorer::run(
        &mut session,
        &mut display,
        &mut stdin.lock(),
        &mut io::stdout(),
    ) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}
