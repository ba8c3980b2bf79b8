#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

//! A chess rules engine. [`board::Board`] owns the 8×8 grid, enforces turn
//! order, generates legal moves per piece as 64-entry move-code arrays,
//! detects check, checkmate, and stalemate, and executes castling, pawn
//! promotion, and en passant. Rendering is an external concern: display
//! layers read [`board::Board::snapshot`] and the move-code arrays, and
//! drive the game through [`board::Board::attempt_move`] and
//! [`board::Board::promote_pawn`] only.

pub mod board;
pub mod board_display;
pub mod color;
pub mod coord;
pub mod moves;
pub mod piece;
