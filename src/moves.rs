use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
};

use crate::{color::Color, coord::Coord, piece::PieceKind};

/// Per-target move code as consumed by display layers: `0` unreachable,
/// `1` quiet move, `2` capture, `4` castling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveCode {
    #[default]
    Illegal = 0,
    Quiet = 1,
    Capture = 2,
    Castle = 4,
}
impl MoveCode {
    pub fn is_playable(self) -> bool {
        self != MoveCode::Illegal
    }
}

/// The 64-entry move-code array keyed by target flat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCodes([MoveCode; 64]);

impl Default for MoveCodes {
    fn default() -> Self {
        MoveCodes([MoveCode::default(); 64])
    }
}

impl MoveCodes {
    pub fn none() -> Self {
        MoveCodes::default()
    }
    /// The raw 64-entry array, keyed by target flat index, for consumers
    /// that walk every square rather than the playable targets.
    pub fn as_array(&self) -> &[MoveCode; 64] {
        &self.0
    }
    /// Playable targets, in flat-index order.
    pub fn targets(&self) -> impl Iterator<Item = (Coord, MoveCode)> {
        self.0
            .into_iter()
            .enumerate()
            .filter(|(_, code)| code.is_playable())
            .map(|(index, code)| (Coord::from_index(index).unwrap(), code))
    }
    pub fn is_empty(&self) -> bool {
        self.targets().next().is_none()
    }
}
impl Index<Coord> for MoveCodes {
    type Output = MoveCode;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[index.index()]
    }
}
impl IndexMut<Coord> for MoveCodes {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
    pub color: Color,
    /// 1-based, monotonically increasing over the whole game.
    pub number: u32,
    pub captured: Option<PieceKind>,
}
impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {}{}",
            self.number, self.color, self.piece, self.from, self.to
        )?;
        if let Some(captured) = self.captured {
            write!(f, " takes {captured}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    None,
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}
impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::None => write!(f, "game goes on")?,
            GameStatus::Check(color) => write!(f, "{color} is in check")?,
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins")?,
            GameStatus::Stalemate => write!(f, "stalemate")?,
        }
        Ok(())
    }
}

/// Successful outcome of [`Board::attempt_move`](crate::board::Board::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveReport {
    pub record: MoveRecord,
    /// Status of the opponent after the move.
    pub status: GameStatus,
    /// The moved pawn reached the far rank; it has already been replaced by
    /// a queen by the time the report is returned.
    pub needs_promotion: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidMove {
    NoPiece,
    WrongTurn(Color),
    IllegalTarget,
}
impl Display for InvalidMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::NoPiece => write!(f, "no piece to move")?,
            InvalidMove::WrongTurn(color) => write!(f, "it is {color}'s turn to move")?,
            InvalidMove::IllegalTarget => write!(f, "that move is not allowed")?,
        }
        Ok(())
    }
}
impl Error for InvalidMove {}

/// Construction input held a value outside the piece table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidPattern {
    pub row: u8,
    pub column: u8,
    pub value: u8,
}
impl Display for InvalidPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}` at row {} column {}, pattern values must be below 14",
            self.value, self.row, self.column
        )?;
        Ok(())
    }
}
impl Error for InvalidPattern {}
