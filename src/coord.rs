use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::NonZero,
    ops::Sub,
    str::FromStr,
};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacters(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidFile(c) => write!(
                f,
                "found `{c}`, characters from `a` to `h` were expected instead"
            )?,
            ParseCoordError::InvalidRank(c) => write!(
                f,
                "found `{c}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacters(len) => write!(
                f,
                "provided string has a length of {len} characters, 2 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

// Bit structure: 10RRRCCC
// R - row, C - column
// first two bits is always `10` for `NonZero` size optimizations
//
// Row 0 is the top of the board (black's home rank, rank 8 in algebraic
// notation), row 7 is white's home rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(NonZero<u8>);

impl Coord {
    pub fn new(row: u8, column: u8) -> Self {
        debug_assert!(row < 8);
        debug_assert!(column < 8);
        let byte = 0b1000_0000 | (row << 3) | column;
        Coord(NonZero::new(byte).unwrap())
    }
    pub fn new_checked(row: u8, column: u8) -> Option<Self> {
        if row >= 8 || column >= 8 {
            None
        } else {
            Some(Self::new(row, column))
        }
    }
    /// Inverse of [`Coord::index`]: `None` outside of `0..64`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 64 {
            None
        } else {
            let row = (index / 8).try_into().unwrap();
            let column = (index % 8).try_into().unwrap();
            Some(Self::new(row, column))
        }
    }
    /// The flat index `row * 8 + column`, in `0..64`.
    pub fn index(self) -> usize {
        self.row() as usize * 8 + self.column() as usize
    }
    pub fn row(self) -> u8 {
        (self.0.get() >> 3) & 0b_111
    }
    pub fn column(self) -> u8 {
        self.0.get() & 0b_111
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new_checked(
            self.row().checked_add_signed(movement.row)?,
            self.column().checked_add_signed(movement.column)?,
        )
    }
    /// Checkerboard color of the square itself.
    pub fn color(self) -> Color {
        match (self.row() + self.column()) % 2 {
            0 => Color::White,
            _ => Color::Black,
        }
    }
    fn from_chars(file: char, rank: char) -> Result<Self, ParseCoordError> {
        let column = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => 7 - (rank as u8 - b'1'),
            _ => return Err(ParseCoordError::InvalidRank(rank)),
        };
        Ok(Coord::new(row, column))
    }
}
pub fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}
pub fn pawn_promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}
/// Row delta of a forward pawn step.
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.column() + b'a') as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacters(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacters(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(file, rank)
    }
}
impl Sub<Self> for Coord {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            row: <i8>::try_from(self.row()).unwrap() - <i8>::try_from(rhs.row()).unwrap(),
            column: <i8>::try_from(self.column()).unwrap() - <i8>::try_from(rhs.column()).unwrap(),
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub column: i8,
}
impl Vector {
    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { row: -2, column: -1 },
        Vector { row: -2, column: 1 },
        Vector { row: 2, column: -1 },
        Vector { row: 2, column: 1 },
        Vector { row: -1, column: -2 },
        Vector { row: -1, column: 2 },
        Vector { row: 1, column: -2 },
        Vector { row: 1, column: 2 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { row: -1, column: -1 },
        Vector { row: -1, column: 0 },
        Vector { row: -1, column: 1 },
        Vector { row: 0, column: -1 },
        Vector { row: 0, column: 1 },
        Vector { row: 1, column: -1 },
        Vector { row: 1, column: 0 },
        Vector { row: 1, column: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { row: -1, column: 0 },
        Vector { row: 1, column: 0 },
        Vector { row: 0, column: -1 },
        Vector { row: 0, column: 1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { row: -1, column: -1 },
        Vector { row: -1, column: 1 },
        Vector { row: 1, column: -1 },
        Vector { row: 1, column: 1 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_advance(color: Color) -> Self {
        Vector {
            row: pawn_direction(color),
            column: 0,
        }
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|column| Vector {
            row: pawn_direction(color),
            column,
        })
    }
    pub fn is_king_step(self) -> bool {
        (-1..=1).contains(&self.row)
            && (-1..=1).contains(&self.column)
            && !(self.row == 0 && self.column == 0)
    }
    /// Whether this offset, taken from a pawn of `color` to a target square,
    /// is one of the pawn's two capture diagonals.
    pub fn is_pawn_attack(self, color: Color) -> bool {
        self.column.unsigned_abs() == 1 && self.row == pawn_direction(color)
    }
}
