#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{
    fmt::Write,
    io::{stdin, stdout},
};

use castellan::{
    board::Board,
    board_display::BoardDisplay,
    color::Color,
    coord::{Coord, ParseCoordError},
    moves::{GameStatus, MoveCodes},
};

/// Splits a four-byte move like `e2e4` into its two squares. Slicing is
/// checked, so input with multibyte characters is an error, not a panic.
fn parse_squares(input: &str) -> Result<(Coord, Coord), ParseCoordError> {
    let from = input.get(0..2).unwrap_or_default().parse()?;
    let to = input.get(2..4).unwrap_or_default().parse()?;
    Ok((from, to))
}

fn main() {
    env_logger::init();
    let mut board = Board::starting_position();
    let mut view = Color::White;
    let mut highlights = MoveCodes::none();
    let mut info = String::new();
    writeln!(&mut info, "{} plays", board.current_player()).unwrap();
    writeln!(&mut info, "type `help` for instructions").unwrap();
    loop {
        print!(
            "{}",
            BoardDisplay {
                board: &board,
                view,
                highlights: &highlights,
                info: &info,
            },
        );
        loop {
            print!("> ");
            {
                use std::io::Write;
                stdout().flush().unwrap();
            }
            let mut input = String::new();
            stdin().read_line(&mut input).unwrap();

            let input = input.trim();
            if input == "help" {
                println!("flip  - flip the board");
                println!("reset - reset to the starting position");
                println!("exit  - exit the game");
                println!("e2    - view valid moves");
                println!("e2e4  - play the move");
                println!("a pawn reaching the far rank becomes a queen");
            } else if input == "reset" {
                board = Board::starting_position();
                highlights = MoveCodes::none();
                info.clear();
                writeln!(&mut info, "{} plays", board.current_player()).unwrap();
            } else if input == "exit" {
                return;
            } else if input == "flip" {
                view = !view;
            } else if let Ok(position) = input.parse() {
                highlights = board.legal_moves(position);
            } else if input.len() == 4 {
                let (from, to) = match parse_squares(input) {
                    Ok(squares) => squares,
                    Err(err) => {
                        eprintln!("Error: {err}");
                        continue;
                    }
                };
                let report = match board.attempt_move(from, to) {
                    Ok(report) => report,
                    Err(err) => {
                        eprintln!("Error: {err}");
                        continue;
                    }
                };
                highlights = MoveCodes::none();
                info.clear();
                if report.needs_promotion {
                    writeln!(&mut info, "the pawn became a queen").unwrap();
                }
                match report.status {
                    GameStatus::None => {
                        writeln!(&mut info, "{} plays", board.current_player()).unwrap();
                    }
                    GameStatus::Check(color) => {
                        writeln!(&mut info, "{color} is in check").unwrap();
                        writeln!(&mut info, "{} plays", board.current_player()).unwrap();
                    }
                    status @ (GameStatus::Checkmate { .. } | GameStatus::Stalemate) => {
                        writeln!(&mut info, "{status}").unwrap();
                        writeln!(&mut info, "type `reset` to play again").unwrap();
                    }
                }
            } else {
                eprintln!("Error: unknown command `{input}`");
                continue;
            }
            break;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::parse_squares;

    #[test]
    fn move_input_parses_both_squares() {
        let (from, to) = parse_squares("e2e4").unwrap();
        assert_eq!(from.to_string(), "e2");
        assert_eq!(to.to_string(), "e4");
    }
    #[test]
    fn move_input_with_multibyte_characters_is_rejected() {
        // four bytes but not four characters; slicing must not panic
        assert!(parse_squares("aé7").is_err());
        assert!(parse_squares("é2e4").is_err());
        assert!(parse_squares("e2é4").is_err());
        assert!(parse_squares("e9e4").is_err());
    }
}
