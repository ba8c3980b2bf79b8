use std::fmt::{self, Display, Formatter};

use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    moves::MoveCodes,
    piece::PieceKind,
};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// Read-only view a renderer needs: the occupant of a square, if any.
pub trait IndexableBoard {
    fn index(&self, position: Coord) -> Option<(Color, PieceKind)>;
}
impl IndexableBoard for Board {
    fn index(&self, position: Coord) -> Option<(Color, PieceKind)> {
        self.piece_at(position).map(|piece| (piece.color, piece.kind))
    }
}
impl IndexableBoard for [Option<(Color, PieceKind)>; 64] {
    fn index(&self, position: Coord) -> Option<(Color, PieceKind)> {
        self[position.index()]
    }
}
impl<T: IndexableBoard + ?Sized> IndexableBoard for &T {
    fn index(&self, position: Coord) -> Option<(Color, PieceKind)> {
        (**self).index(position)
    }
}

/// ANSI terminal rendering of a board. Playable entries of `highlights`
/// light up their target squares.
pub struct BoardDisplay<'a, T> {
    pub board: T,
    pub view: Color,
    pub highlights: &'a MoveCodes,
    pub info: &'a str,
}
impl<T> Display for BoardDisplay<'_, T>
where
    T: IndexableBoard,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for row in 0..8 {
            let row = match self.view {
                Color::White => row,
                Color::Black => 7 - row,
            };
            for column in 0..8 {
                let column = match self.view {
                    Color::White => column,
                    Color::Black => 7 - column,
                };
                let position = Coord::new(row, column);
                let color = if self.highlights[position].is_playable() {
                    HIGHLIGHTED
                } else {
                    match position.color() {
                        Color::White => WHITE,
                        Color::Black => BLACK,
                    }
                };
                let figurine = self
                    .board
                    .index(position)
                    .map(|(color, kind)| kind.figurine(color))
                    .unwrap_or(' ');
                write!(f, "{color}{figurine} {RESET}")?;
            }
            write!(f, "{}", 8 - row)?;
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        match self.view {
            Color::White => write!(f, "a b c d e f g h")?,
            Color::Black => write!(f, "h g f e d c b a")?,
        }
        if let Some(line) = lines.next() {
            write!(f, "   {line}")?;
        }
        writeln!(f)?;
        for line in lines {
            writeln!(f, "                  {line}")?;
        }
        Ok(())
    }
}
