// Simple command-line application to play chess
//
// Moves are entered as a pair of squares, like `e2e4`. Type `moves e2` to list where the piece on
// e2 can go, `undo` to take back the last move. Run with `-v` to see debug logs.

use regicide::{board::PrettyStyle, Coord, Game, GameStatus, Move, MoveOutcome};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn setup_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn show_moves(game: &Game, s: &str) {
    let src = match Coord::from_str(s) {
        Ok(src) => src,
        Err(e) => {
            println!("Bad square: {}", e);
            return;
        }
    };
    let dsts: Vec<_> = game
        .legal_destinations(src)
        .into_iter()
        .map(|c| c.to_string())
        .collect();
    if dsts.is_empty() {
        println!("No moves from {}", src);
    } else {
        println!("{}: {}", src, dsts.join(" "));
    }
}

fn main() {
    let verbose = std::env::args().skip(1).any(|a| a == "-v" || a == "--verbose");
    setup_logger(verbose).unwrap();

    let mut stdin = io::stdin().lock();
    let mut game = Game::initial();

    loop {
        if let GameStatus::Finished { winner } = game.status() {
            println!("{}", game.board().pretty(PrettyStyle::Utf8));
            println!("Game finished: {} wins", winner.name());
            let history: Vec<_> = game.history().map(|m| m.to_string()).collect();
            println!("Moves: {}", history.join(" "));
            break;
        }

        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        print!("{} move ({}): ", game.side().name(), game.len() / 2 + 1);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();

        if let Some(sq) = s.strip_prefix("moves ") {
            show_moves(&game, sq.trim());
            println!();
            continue;
        }
        if s == "undo" {
            match game.undo() {
                Some(mv) => println!("Took back {}", mv),
                None => println!("Nothing to undo"),
            }
            println!();
            continue;
        }

        let mv = match Move::from_str(s) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                println!();
                continue;
            }
        };

        match game.apply_move(mv.src(), mv.dst()) {
            Ok(MoveOutcome::Continue(_)) => {}
            Ok(MoveOutcome::GameOver { winner }) => {
                println!("{} captured the king!", winner.name());
            }
            Err(e) => println!("Bad move: {}", e),
        }

        println!();
    }
}
