use std::array;

use crate::{
    color::Color,
    coord::{Coord, Vector, pawn_home_rank, pawn_promotion_rank},
    moves::{GameStatus, InvalidMove, InvalidPattern, MoveCode, MoveCodes, MoveRecord, MoveReport},
    piece::{Piece, PieceKind},
};

/// The standard starting position in the external pattern encoding:
/// `value mod 7` selects the piece kind, values below 7 are black.
pub const STARTING_PATTERN: [[u8; 8]; 8] = [
    [4, 2, 3, 5, 6, 3, 2, 4],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [11, 9, 10, 12, 13, 10, 9, 11],
];

/// A fixed square of the grid together with its occupant. The cell is the
/// authoritative holder of the piece; there is no reverse reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    coord: Coord,
    piece: Option<Piece>,
}
impl Cell {
    fn empty(coord: Coord) -> Self {
        Cell { coord, piece: None }
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
    /// Checkerboard color, derived from the coordinate parity.
    pub fn color(&self) -> Color {
        self.coord.color()
    }
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; 64],
    current_player: Color,
    move_history: Vec<MoveRecord>,
    move_count: u32,
}
impl Board {
    pub fn starting_position() -> Self {
        Board::from_pattern(&STARTING_PATTERN).unwrap()
    }
    /// Builds a board from an 8×8 pattern grid. Each value encodes a piece
    /// kind via `value mod 7` (`0` leaves the square empty) and a color via
    /// `value < 7` meaning black, white otherwise. Values of 14 and above
    /// are outside the table and rejected up front.
    pub fn from_pattern(pattern: &[[u8; 8]; 8]) -> Result<Self, InvalidPattern> {
        let mut cells = array::from_fn(|index| Cell::empty(Coord::from_index(index).unwrap()));
        for (row, values) in pattern.iter().enumerate() {
            for (column, value) in values.iter().copied().enumerate() {
                let coord = Coord::new(row.try_into().unwrap(), column.try_into().unwrap());
                if value >= 14 {
                    return Err(InvalidPattern {
                        row: coord.row(),
                        column: coord.column(),
                        value,
                    });
                }
                let color = if value < 7 { Color::Black } else { Color::White };
                cells[coord.index()].piece =
                    PieceKind::from_pattern_code(value % 7).map(|kind| Piece::new(color, kind));
            }
        }
        Ok(Board {
            cells,
            current_player: Color::White,
            move_history: Vec::new(),
            move_count: 0,
        })
    }
    pub fn current_player(&self) -> Color {
        self.current_player
    }
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
    /// `None` outside of the grid rather than a panic.
    pub fn cell(&self, row: u8, column: u8) -> Option<&Cell> {
        Coord::new_checked(row, column).map(|coord| &self.cells[coord.index()])
    }
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        Coord::from_index(index).map(|coord| &self.cells[coord.index()])
    }
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[at.index()].piece
    }
    /// Row-major view for display layers; never hands out mutable state.
    pub fn snapshot(&self) -> [Option<(Color, PieceKind)>; 64] {
        array::from_fn(|index| {
            self.cells[index]
                .piece
                .map(|piece| (piece.color, piece.kind))
        })
    }
    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.cells
            .iter()
            .find(|cell| {
                cell.piece
                    .is_some_and(|piece| piece.color == color && piece.kind == PieceKind::King)
            })
            .map(Cell::coord)
    }

    /// Pseudo-legal move codes for the piece on `at`: movement geometry
    /// only, king safety not yet considered. An empty square yields an
    /// all-zero array.
    pub fn pseudo_moves(&self, at: Coord) -> MoveCodes {
        let mut codes = MoveCodes::none();
        let Some(piece) = self.piece_at(at) else {
            return codes;
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_codes(at, piece.color, &mut codes),
            PieceKind::Knight => {
                self.step_codes(at, piece.color, &Vector::KNIGHT_MOVES, &mut codes);
            }
            PieceKind::Bishop => {
                self.ray_codes(at, piece.color, &Vector::BISHOP_DIRECTIONS, &mut codes);
            }
            PieceKind::Rook => {
                self.ray_codes(at, piece.color, &Vector::ROOK_DIRECTIONS, &mut codes);
            }
            PieceKind::Queen => {
                self.ray_codes(at, piece.color, &Vector::QUEEN_DIRECTIONS, &mut codes);
            }
            PieceKind::King => self.king_codes(at, piece, &mut codes),
        }
        codes
    }
    fn step_codes(&self, from: Coord, color: Color, steps: &[Vector], codes: &mut MoveCodes) {
        for target in steps.iter().copied().filter_map(|step| from.move_by(step)) {
            match self.piece_at(target) {
                None => codes[target] = MoveCode::Quiet,
                Some(other) if other.color != color => codes[target] = MoveCode::Capture,
                Some(_) => {}
            }
        }
    }
    fn ray_codes(&self, from: Coord, color: Color, directions: &[Vector], codes: &mut MoveCodes) {
        for direction in directions.iter().copied() {
            let mut target = from;
            while let Some(next) = target.move_by(direction) {
                target = next;
                match self.piece_at(target) {
                    None => codes[target] = MoveCode::Quiet,
                    Some(other) if other.color != color => {
                        codes[target] = MoveCode::Capture;
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
    fn pawn_codes(&self, from: Coord, color: Color, codes: &mut MoveCodes) {
        let advance = Vector::pawn_advance(color);
        if let Some(one) = from.move_by(advance)
            && self.piece_at(one).is_none()
        {
            codes[one] = MoveCode::Quiet;
            if from.row() == pawn_home_rank(color)
                && let Some(two) = one.move_by(advance)
                && self.piece_at(two).is_none()
            {
                codes[two] = MoveCode::Quiet;
            }
        }
        for target in Vector::pawn_attacks(color)
            .into_iter()
            .filter_map(|attack| from.move_by(attack))
        {
            match self.piece_at(target) {
                Some(other) if other.color != color => codes[target] = MoveCode::Capture,
                None => {
                    // en passant: the enemy pawn stands beside us, its
                    // capture window still open
                    let beside = Coord::new(from.row(), target.column());
                    if self.piece_at(beside).is_some_and(|other| {
                        other.color != color && other.kind == PieceKind::Pawn && other.en_passant
                    }) {
                        codes[target] = MoveCode::Capture;
                    }
                }
                Some(_) => {}
            }
        }
    }
    fn king_codes(&self, from: Coord, piece: Piece, codes: &mut MoveCodes) {
        self.step_codes(from, piece.color, &Vector::KING_MOVES, codes);
        // quiet steps onto attacked squares are dropped here already;
        // captures are left for the king-safety probe
        for target in Vector::KING_MOVES
            .iter()
            .copied()
            .filter_map(|step| from.move_by(step))
        {
            if codes[target] == MoveCode::Quiet && self.is_square_attacked(target, piece.color) {
                codes[target] = MoveCode::Illegal;
            }
        }
        if !piece.has_moved && !self.is_square_attacked(from, piece.color) {
            if self.can_castle(from, piece.color, 7, &[5, 6], &[5, 6]) {
                codes[Coord::new(from.row(), 6)] = MoveCode::Castle;
            }
            if self.can_castle(from, piece.color, 0, &[1, 2, 3], &[2, 3]) {
                codes[Coord::new(from.row(), 2)] = MoveCode::Castle;
            }
        }
    }
    fn can_castle(
        &self,
        king_at: Coord,
        color: Color,
        rook_column: u8,
        vacant: &[u8],
        king_path: &[u8],
    ) -> bool {
        let row = king_at.row();
        self.piece_at(Coord::new(row, rook_column))
            .is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
            })
            && vacant
                .iter()
                .all(|&column| self.piece_at(Coord::new(row, column)).is_none())
            && king_path
                .iter()
                .all(|&column| !self.is_square_attacked(Coord::new(row, column), color))
    }
    /// Whether any piece of the opposing color attacks `target`. Opposing
    /// kings are matched by adjacency and opposing pawns by their capture
    /// diagonals; every other kind is asked for its own move codes. The
    /// scan never mutates state and never re-enters king move generation.
    pub fn is_square_attacked(&self, target: Coord, defender: Color) -> bool {
        let attacker = !defender;
        self.cells.iter().any(|cell| {
            let Some(piece) = cell.piece else {
                return false;
            };
            if piece.color != attacker {
                return false;
            }
            match piece.kind {
                PieceKind::King => (target - cell.coord).is_king_step(),
                PieceKind::Pawn => (target - cell.coord).is_pawn_attack(attacker),
                _ => matches!(
                    self.pseudo_moves(cell.coord)[target],
                    MoveCode::Quiet | MoveCode::Capture
                ),
            }
        })
    }

    /// Pseudo-legal moves filtered against king safety: every playable
    /// entry is probed on a throwaway copy of the grid, and zeroed when the
    /// resulting position leaves the mover's own king in check. The live
    /// board never holds the hypothetical position.
    pub fn legal_moves(&self, at: Coord) -> MoveCodes {
        let Some(piece) = self.piece_at(at) else {
            return MoveCodes::none();
        };
        let mut codes = self.pseudo_moves(at);
        let targets: Vec<Coord> = codes.targets().map(|(target, _)| target).collect();
        for target in targets {
            if self.move_exposes_king(at, target, piece.color) {
                codes[target] = MoveCode::Illegal;
            }
        }
        codes
    }
    fn move_exposes_king(&self, from: Coord, to: Coord, color: Color) -> bool {
        let mut probe = Board {
            cells: self.cells,
            current_player: self.current_player,
            move_history: Vec::new(),
            move_count: self.move_count,
        };
        probe.apply_move(from, to);
        probe.is_in_check(color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color))
    }
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.cells.iter().any(|cell| {
            cell.piece.is_some_and(|piece| piece.color == color)
                && !self.legal_moves(cell.coord).is_empty()
        })
    }
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }
    pub fn needs_promotion(&self, at: Coord) -> bool {
        self.piece_at(at)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.needs_promotion)
    }

    /// Validates and plays a move of the current player. Illegal input is a
    /// value, not a panic. On success the opponent's resulting status is
    /// evaluated (checkmate over stalemate over check) and the turn flips.
    /// A pawn reaching the far rank is queened before the report is
    /// returned; [`Board::promote_pawn`] exists for callers resolving the
    /// choice up front.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<MoveReport, InvalidMove> {
        let piece = self.piece_at(from).ok_or(InvalidMove::NoPiece)?;
        if piece.color != self.current_player {
            return Err(InvalidMove::WrongTurn(self.current_player));
        }
        if !self.legal_moves(from)[to].is_playable() {
            return Err(InvalidMove::IllegalTarget);
        }
        // the mover's own capture windows expire now, before the move lands
        self.clear_en_passant_windows(self.current_player);
        let captured = self.apply_move(from, to);
        let needs_promotion = self.needs_promotion(to);
        if needs_promotion {
            let promoted = self.promote_pawn(to, PieceKind::Queen);
            debug_assert!(promoted);
        }
        let record = MoveRecord {
            from,
            to,
            piece: piece.kind,
            color: piece.color,
            number: self.move_count + 1,
            captured,
        };
        self.move_history.push(record);
        self.move_count += 1;
        let opponent = !self.current_player;
        let status = if self.is_checkmate(opponent) {
            GameStatus::Checkmate {
                winner: self.current_player,
            }
        } else if self.is_stalemate(opponent) {
            GameStatus::Stalemate
        } else if self.is_in_check(opponent) {
            GameStatus::Check(opponent)
        } else {
            GameStatus::None
        };
        log::debug!("{record}; {status}");
        self.current_player = opponent;
        Ok(MoveReport {
            record,
            status,
            needs_promotion,
        })
    }
    /// Realizes a move on the grid: relocation, captures including en
    /// passant, the castling compound relocation, and piece bookkeeping.
    /// Returns the captured kind, if any. Callers are responsible for
    /// having validated the move.
    fn apply_move(&mut self, from: Coord, to: Coord) -> Option<PieceKind> {
        let Some(mut piece) = self.piece_at(from) else {
            return None;
        };
        self.cells[from.index()].piece = None;
        // a two-column lateral king move is the castling compound move
        if piece.kind == PieceKind::King
            && from.row() == to.row()
            && (to - from).column.unsigned_abs() == 2
        {
            piece.has_moved = true;
            self.cells[to.index()].piece = Some(piece);
            let (rook_from, rook_to) = if to.column() > from.column() {
                (Coord::new(from.row(), 7), Coord::new(from.row(), 5))
            } else {
                (Coord::new(from.row(), 0), Coord::new(from.row(), 3))
            };
            if let Some(mut rook) = self.piece_at(rook_from) {
                self.cells[rook_from.index()].piece = None;
                rook.has_moved = true;
                self.cells[rook_to.index()].piece = Some(rook);
            }
            return None;
        }
        let mut captured = self.piece_at(to).map(|other| other.kind);
        if piece.kind == PieceKind::Pawn && to.column() != from.column() && captured.is_none() {
            // en passant: the captured pawn is beside the origin, not on
            // the destination
            let victim = Coord::new(from.row(), to.column());
            captured = self.piece_at(victim).map(|other| other.kind);
            self.cells[victim.index()].piece = None;
        }
        if matches!(piece.kind, PieceKind::King | PieceKind::Rook) {
            piece.has_moved = true;
        }
        if piece.kind == PieceKind::Pawn {
            piece.en_passant = (to - from).row.unsigned_abs() == 2;
            if to.row() == pawn_promotion_rank(piece.color) {
                piece.needs_promotion = true;
            }
        }
        self.cells[to.index()].piece = Some(piece);
        captured
    }
    fn clear_en_passant_windows(&mut self, color: Color) {
        for cell in &mut self.cells {
            if let Some(piece) = &mut cell.piece
                && piece.color == color
            {
                piece.en_passant = false;
            }
        }
    }
    /// Replaces the pawn on `at` with a piece of `kind`, preserving color
    /// and square. Rejects empty cells, non-pawn occupants, and kinds
    /// outside the four promotion choices. The promotion rank is not
    /// checked here; move execution enforces it through the pawn's flag.
    pub fn promote_pawn(&mut self, at: Coord, kind: PieceKind) -> bool {
        if !PieceKind::PROMOTION_CHOICES.contains(&kind) {
            return false;
        }
        match self.piece_at(at) {
            Some(pawn) if pawn.kind == PieceKind::Pawn => {
                self.cells[at.index()].piece = Some(Piece {
                    color: pawn.color,
                    kind,
                    has_moved: true,
                    en_passant: false,
                    needs_promotion: false,
                });
                log::debug!("{} pawn on {at} becomes a {kind}", pawn.color);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        board::{Board, STARTING_PATTERN},
        color::Color,
        coord::Coord,
        moves::{GameStatus, InvalidMove, MoveCode, MoveReport},
        piece::PieceKind,
    };

    fn c(s: &str) -> Coord {
        s.parse().unwrap()
    }
    fn play(board: &mut Board, moves: &[&str]) -> MoveReport {
        let mut report = None;
        for movement in moves {
            report = Some(
                board
                    .attempt_move(c(&movement[0..2]), c(&movement[2..4]))
                    .unwrap_or_else(|err| panic!("{movement}: {err}")),
            );
        }
        report.unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.current_player(), Color::White);
        assert_eq!(board.move_count(), 0);
        let king = board.piece_at(c("e1")).unwrap();
        assert_eq!((king.color, king.kind), (Color::White, PieceKind::King));
        let queen = board.piece_at(c("d8")).unwrap();
        assert_eq!((queen.color, queen.kind), (Color::Black, PieceKind::Queen));
        assert_eq!(
            board.snapshot().iter().filter(|piece| piece.is_some()).count(),
            32
        );
        // light square in the corner
        assert_eq!(board.cell(0, 0).unwrap().color(), Color::White);
        assert_eq!(board.cell(8, 0), None);
        assert_eq!(board.cell_at(64), None);
    }
    #[test]
    fn pattern_rejects_values_outside_the_table() {
        let mut pattern = STARTING_PATTERN;
        pattern[3][5] = 14;
        let err = Board::from_pattern(&pattern).unwrap_err();
        assert_eq!((err.row, err.column, err.value), (3, 5, 14));
    }
    #[test]
    fn turn_order_and_bad_input() {
        let mut board = Board::starting_position();
        assert_eq!(
            board.attempt_move(c("e7"), c("e5")),
            Err(InvalidMove::WrongTurn(Color::White))
        );
        assert_eq!(
            board.attempt_move(c("e4"), c("e5")),
            Err(InvalidMove::NoPiece)
        );
        assert_eq!(
            board.attempt_move(c("e2"), c("e5")),
            Err(InvalidMove::IllegalTarget)
        );
        play(&mut board, &["e2e4"]);
        assert_eq!(board.current_player(), Color::Black);
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.move_history().len(), 1);
    }
    #[test]
    fn legal_moves_from_the_start() {
        let board = Board::starting_position();
        let pawn = board.legal_moves(c("e2"));
        assert_eq!(pawn[c("e3")], MoveCode::Quiet);
        assert_eq!(pawn[c("e4")], MoveCode::Quiet);
        assert_eq!(pawn[c("e5")], MoveCode::Illegal);
        assert_eq!(pawn[c("d3")], MoveCode::Illegal);
        // the raw array view agrees with the indexed view
        assert_eq!(
            pawn.as_array().iter().filter(|code| code.is_playable()).count(),
            2
        );
        assert_eq!(pawn.as_array()[c("e3").index()], MoveCode::Quiet);
        let knight = board.legal_moves(c("g1"));
        assert_eq!(knight[c("f3")], MoveCode::Quiet);
        assert_eq!(knight[c("h3")], MoveCode::Quiet);
        assert_eq!(knight[c("e2")], MoveCode::Illegal);
        // sliders and kings are boxed in
        assert!(board.legal_moves(c("a1")).is_empty());
        assert!(board.legal_moves(c("c1")).is_empty());
        assert!(board.legal_moves(c("d1")).is_empty());
        assert!(board.legal_moves(c("e1")).is_empty());
        assert!(board.legal_moves(c("e8")).is_empty());
    }
    #[test]
    fn no_legal_move_exposes_the_own_king() {
        let mut board = Board::starting_position();
        play(&mut board, &["e2e4", "e7e5", "g1f3", "b8c6"]);
        for index in 0..64 {
            let coord = Coord::from_index(index).unwrap();
            if board
                .piece_at(coord)
                .is_none_or(|piece| piece.color != board.current_player())
            {
                continue;
            }
            for (target, _) in board.legal_moves(coord).targets() {
                let mut probe = board.clone();
                probe.attempt_move(coord, target).unwrap();
                assert!(
                    !probe.is_in_check(board.current_player()),
                    "{coord}{target} leaves the king in check"
                );
            }
        }
    }
    #[test]
    fn pinned_knight_has_no_moves() {
        // black rook on the e-file pins the knight in front of the king
        let mut pattern = [[0; 8]; 8];
        pattern[0][4] = 4;
        pattern[0][7] = 6;
        pattern[6][4] = 9;
        pattern[7][4] = 13;
        let board = Board::from_pattern(&pattern).unwrap();
        assert!(!board.pseudo_moves(c("e2")).is_empty());
        assert!(board.legal_moves(c("e2")).is_empty());
    }
    #[test]
    fn capture_gives_check() {
        let mut board = Board::starting_position();
        let report = play(&mut board, &["e2e4", "a7a6", "f1c4", "a6a5", "c4f7"]);
        assert_eq!(report.record.captured, Some(PieceKind::Pawn));
        assert_eq!(report.status, GameStatus::Check(Color::Black));
        assert!(board.is_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
        // the king takes the undefended bishop
        let king = board.legal_moves(c("e8"));
        assert_eq!(king[c("f7")], MoveCode::Capture);
    }
    #[test]
    fn fools_mate() {
        let mut board = Board::starting_position();
        let report = play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(
            report.status,
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(board.is_checkmate(Color::White));
        assert!(board.is_in_check(Color::White));
        assert!(!board.has_any_legal_move(Color::White));
        assert!(!board.is_stalemate(Color::White));
        assert_eq!(
            board.attempt_move(c("e1"), c("f2")),
            Err(InvalidMove::IllegalTarget)
        );
    }
    #[test]
    fn queen_move_delivers_stalemate() {
        // black has a lone king in the corner; the queen slide takes its
        // last squares away without giving check
        let mut pattern = [[0; 8]; 8];
        pattern[0][0] = 6;
        pattern[1][7] = 12;
        pattern[2][1] = 13;
        let mut board = Board::from_pattern(&pattern).unwrap();
        let report = play(&mut board, &["h7c7"]);
        assert_eq!(report.status, GameStatus::Stalemate);
        assert!(board.is_stalemate(Color::Black));
        assert!(!board.is_in_check(Color::Black));
        assert!(!board.has_any_legal_move(Color::Black));
        assert!(!board.is_checkmate(Color::Black));
    }
    #[test]
    fn castling_is_blocked_in_the_starting_position() {
        let board = Board::starting_position();
        for king in [c("e1"), c("e8")] {
            let codes = board.legal_moves(king);
            assert!(codes.is_empty());
            assert_eq!(codes[c("g1")], MoveCode::Illegal);
            assert_eq!(codes[c("c1")], MoveCode::Illegal);
            assert_eq!(codes[c("g8")], MoveCode::Illegal);
            assert_eq!(codes[c("c8")], MoveCode::Illegal);
        }
    }
    #[test]
    fn kingside_castle_relocates_king_and_rook() {
        let mut pattern = STARTING_PATTERN;
        pattern[7][5] = 0;
        pattern[7][6] = 0;
        let mut board = Board::from_pattern(&pattern).unwrap();
        assert_eq!(board.legal_moves(c("e1"))[c("g1")], MoveCode::Castle);
        let report = play(&mut board, &["e1g1"]);
        assert_eq!(report.record.captured, None);
        let king = board.piece_at(c("g1")).unwrap();
        let rook = board.piece_at(c("f1")).unwrap();
        assert_eq!((king.kind, king.has_moved), (PieceKind::King, true));
        assert_eq!((rook.kind, rook.has_moved), (PieceKind::Rook, true));
        assert_eq!(board.piece_at(c("e1")), None);
        assert_eq!(board.piece_at(c("h1")), None);
    }
    #[test]
    fn queenside_castle_relocates_king_and_rook() {
        let mut pattern = STARTING_PATTERN;
        pattern[7][1] = 0;
        pattern[7][2] = 0;
        pattern[7][3] = 0;
        let mut board = Board::from_pattern(&pattern).unwrap();
        assert_eq!(board.legal_moves(c("e1"))[c("c1")], MoveCode::Castle);
        play(&mut board, &["e1c1"]);
        assert_eq!(board.piece_at(c("c1")).unwrap().kind, PieceKind::King);
        assert_eq!(board.piece_at(c("d1")).unwrap().kind, PieceKind::Rook);
        assert_eq!(board.piece_at(c("a1")), None);
        assert_eq!(board.piece_at(c("e1")), None);
    }
    #[test]
    fn castle_is_refused_after_the_king_moved() {
        let mut pattern = STARTING_PATTERN;
        pattern[7][5] = 0;
        pattern[7][6] = 0;
        let mut board = Board::from_pattern(&pattern).unwrap();
        play(&mut board, &["e1f1", "a7a6", "f1e1", "a6a5"]);
        assert_eq!(board.legal_moves(c("e1"))[c("g1")], MoveCode::Illegal);
    }
    #[test]
    fn castle_is_refused_through_an_attacked_square() {
        // black rook takes the f1 crossing square; the queenside path is
        // untouched
        let mut pattern = [[0; 8]; 8];
        pattern[0][4] = 6;
        pattern[0][5] = 4;
        pattern[7][4] = 13;
        pattern[7][7] = 11;
        pattern[7][0] = 11;
        let board = Board::from_pattern(&pattern).unwrap();
        let codes = board.legal_moves(c("e1"));
        assert_eq!(codes[c("g1")], MoveCode::Illegal);
        assert_eq!(codes[c("c1")], MoveCode::Castle);
    }
    #[test]
    fn queenside_castle_ignores_an_attack_on_the_rook_path() {
        // b1 is attacked but the king never crosses it
        let mut pattern = [[0; 8]; 8];
        pattern[0][1] = 4;
        pattern[0][7] = 6;
        pattern[7][0] = 11;
        pattern[7][4] = 13;
        let board = Board::from_pattern(&pattern).unwrap();
        assert_eq!(board.legal_moves(c("e1"))[c("c1")], MoveCode::Castle);
    }
    #[test]
    fn en_passant_capture() {
        let mut board = Board::starting_position();
        play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(board.legal_moves(c("e5"))[c("d6")], MoveCode::Capture);
        let report = play(&mut board, &["e5d6"]);
        assert_eq!(report.record.captured, Some(PieceKind::Pawn));
        assert_eq!(board.piece_at(c("d5")), None);
        assert_eq!(board.piece_at(c("d6")).unwrap().kind, PieceKind::Pawn);
    }
    #[test]
    fn en_passant_window_lasts_one_reply() {
        let mut board = Board::starting_position();
        play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert!(board.piece_at(c("d5")).unwrap().en_passant);
        play(&mut board, &["h2h3", "a6a5"]);
        assert!(!board.piece_at(c("d5")).unwrap().en_passant);
        assert_eq!(board.legal_moves(c("e5"))[c("d6")], MoveCode::Illegal);
    }
    #[test]
    fn reaching_the_far_rank_queens_by_default() {
        let mut pattern = [[0; 8]; 8];
        pattern[1][0] = 8;
        pattern[3][4] = 6;
        pattern[7][4] = 13;
        let mut board = Board::from_pattern(&pattern).unwrap();
        let report = play(&mut board, &["a7a8"]);
        assert!(report.needs_promotion);
        let piece = board.piece_at(c("a8")).unwrap();
        assert_eq!((piece.color, piece.kind), (Color::White, PieceKind::Queen));
        // the new piece moves as a queen
        let codes = board.legal_moves(c("a8"));
        assert_eq!(codes[c("a1")], MoveCode::Quiet);
        assert_eq!(codes[c("h8")], MoveCode::Quiet);
        assert_eq!(codes[c("b7")], MoveCode::Quiet);
    }
    #[test]
    fn promote_pawn_replaces_in_place() {
        let mut board = Board::starting_position();
        assert!(board.promote_pawn(c("a2"), PieceKind::Knight));
        let piece = board.piece_at(c("a2")).unwrap();
        assert_eq!((piece.color, piece.kind), (Color::White, PieceKind::Knight));
        let codes = board.legal_moves(c("a2"));
        assert_eq!(codes[c("b4")], MoveCode::Quiet);
        assert_eq!(codes[c("c3")], MoveCode::Quiet);
        assert_eq!(codes[c("a3")], MoveCode::Illegal);
        assert!(board.promote_pawn(c("e7"), PieceKind::Queen));
        assert_eq!(board.piece_at(c("e7")).unwrap().color, Color::Black);
    }
    #[test]
    fn promote_pawn_rejects_bad_input() {
        let mut board = Board::starting_position();
        assert!(!board.promote_pawn(c("e1"), PieceKind::Queen));
        assert!(!board.promote_pawn(c("e4"), PieceKind::Queen));
        assert!(!board.promote_pawn(c("e2"), PieceKind::Pawn));
        assert!(!board.promote_pawn(c("e2"), PieceKind::King));
        assert_eq!(board.piece_at(c("e2")).unwrap().kind, PieceKind::Pawn);
    }
}
