use std::fmt::{self, Display, Formatter};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    // discriminants match the external pattern encoding, `value mod 7`
    Pawn = 1,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    /// Decodes `value mod 7` from a pattern grid. `0` is an empty square.
    pub fn from_pattern_code(code: u8) -> Option<Self> {
        let kind = match code {
            1 => PieceKind::Pawn,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Rook,
            5 => PieceKind::Queen,
            6 => PieceKind::King,
            _ => return None,
        };
        Some(kind)
    }
    pub fn figurine(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}

/// A piece as stored on a cell. Position is not duplicated here; the owning
/// cell is authoritative, so captures and promotions cannot leave a stale
/// back-reference behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Tracked for castling; only read for kings and rooks.
    pub has_moved: bool,
    /// Pawn only: open window to be captured en passant.
    pub en_passant: bool,
    /// Pawn only: reached the far rank and awaits replacement.
    pub needs_promotion: bool,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
            en_passant: false,
            needs_promotion: false,
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::piece::PieceKind;

    #[test]
    fn pattern_codes() {
        assert_eq!(PieceKind::from_pattern_code(0), None);
        assert_eq!(PieceKind::from_pattern_code(1), Some(PieceKind::Pawn));
        assert_eq!(PieceKind::from_pattern_code(6), Some(PieceKind::King));
        assert_eq!(PieceKind::from_pattern_code(7), None);
        for code in 1..7 {
            assert_eq!(PieceKind::from_pattern_code(code).unwrap() as u8, code);
        }
    }
}
