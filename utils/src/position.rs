use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, Square};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::board::has_insufficient_material;
use crate::error::PositionError;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// A board configuration plus side to move, backed by a stack of boards.
///
/// The top of the stack is the current board. Search code descends with
/// [`Position::make_move`], which hands out a [`MoveGuard`]; the move is taken
/// back when the guard goes out of scope, so the stack always unwinds in the
/// same order it was built.
#[derive(Clone)]
pub struct Position {
    stack: Vec<Board>,
}

impl Position {
    pub fn new(board: Board) -> Self {
        let mut stack = Vec::with_capacity(64);
        stack.push(board);
        Self { stack }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Board::from_str(fen)
            .map(Self::new)
            .map_err(|e| PositionError::InvalidFen {
                fen: fen.to_string(),
                reason: e.to_string(),
            })
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        // The root board is never popped.
        &self.stack[self.stack.len() - 1]
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board().side_to_move()
    }

    pub fn fen(&self) -> String {
        self.board().to_string()
    }

    /// Number of moves applied on top of the board this position was built from.
    #[inline(always)]
    pub fn ply(&self) -> usize {
        self.stack.len() - 1
    }

    /// Cache key derived from placement, side to move, castling rights and
    /// en-passant square.
    ///
    /// Move clocks and repetition history are not part of the key, so it is
    /// only meant for memoizing static evaluations.
    #[inline(always)]
    pub fn fingerprint(&self) -> u64 {
        self.board().get_hash()
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(self.board()).collect()
    }

    /// Number of legal moves for the side to move.
    #[inline(always)]
    pub fn mobility(&self) -> usize {
        MoveGen::new_legal(self.board()).len()
    }

    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        let board = self.board();
        match board.status() {
            BoardStatus::Checkmate => Some(match board.side_to_move() {
                Color::White => Outcome::BlackWins,
                Color::Black => Outcome::WhiteWins,
            }),
            BoardStatus::Stalemate => Some(Outcome::Draw),
            BoardStatus::Ongoing if has_insufficient_material(board) => Some(Outcome::Draw),
            BoardStatus::Ongoing => None,
        }
    }

    /// Every occupied square with the piece and its owner.
    pub fn piece_map(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        let board = self.board();
        (*board.combined()).filter_map(move |sq| Some((sq, board.piece_on(sq)?, board.color_on(sq)?)))
    }

    /// Applies `mv` for the lifetime of the returned guard.
    pub fn make_move(&mut self, mv: ChessMove) -> Result<MoveGuard<'_>, PositionError> {
        let depth = self.stack.len();
        self.push(mv)?;
        Ok(MoveGuard {
            position: self,
            depth,
        })
    }

    /// Applies `mv` permanently, advancing the game.
    pub fn play(&mut self, mv: ChessMove) -> Result<(), PositionError> {
        self.push(mv)
    }

    /// Resolves a move in long algebraic notation (`e2e4`, `e7e8q`).
    pub fn parse_move(&self, text: &str) -> Result<ChessMove, PositionError> {
        let wanted = text.trim().to_ascii_lowercase();
        MoveGen::new_legal(self.board())
            .find(|mv| mv.to_string() == wanted)
            .ok_or_else(|| PositionError::UnknownMove {
                text: text.to_string(),
                fen: self.fen(),
            })
    }

    fn push(&mut self, mv: ChessMove) -> Result<(), PositionError> {
        let board = self.board();
        if !board.legal(mv) {
            return Err(PositionError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            });
        }

        let next = board.make_move_new(mv);
        self.stack.push(next);
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

/// Scoped move application. Dereferences to the position with the move
/// applied; dropping the guard restores the position it was created from.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
    depth: usize,
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        // No-op if the stack was already cut below `depth` through the guard.
        self.position.stack.truncate(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(text: &str, position: &Position) -> ChessMove {
        position.parse_move(text).unwrap()
    }

    #[test]
    fn test_start_position() {
        let position = Position::default();
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.mobility(), 20);
        assert_eq!(position.piece_map().count(), 32);
        assert!(!position.is_terminal());
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut position = Position::default();
        let root_fen = position.fen();
        let root_key = position.fingerprint();

        {
            let e4 = mv("e2e4", &position);
            let mut child = position.make_move(e4).unwrap();
            assert_eq!(child.side_to_move(), Color::Black);
            assert_eq!(child.ply(), 1);

            let e5 = mv("e7e5", &child);
            let grandchild = child.make_move(e5).unwrap();
            assert_eq!(grandchild.ply(), 2);
        }

        assert_eq!(position.fen(), root_fen);
        assert_eq!(position.fingerprint(), root_key);
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn descend(position: &mut Position, plies: usize) -> Result<(), PositionError> {
            if plies == 0 {
                return Err(PositionError::UnknownMove {
                    text: "stop".to_string(),
                    fen: position.fen(),
                });
            }
            let first = position.legal_moves()[0];
            let mut child = position.make_move(first)?;
            descend(&mut child, plies - 1)
        }

        let mut position = Position::default();
        let root_fen = position.fen();
        assert!(descend(&mut position, 4).is_err());
        assert_eq!(position.fen(), root_fen);
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn test_guard_survives_replaced_position() {
        let mut position = Position::default();
        {
            let e4 = mv("e2e4", &position);
            let mut child = position.make_move(e4).unwrap();
            *child = Position::default();
            assert_eq!(child.ply(), 0);
        }
        assert_eq!(position.ply(), 0);
        assert_eq!(position.fen(), Position::default().fen());
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut position = Position::default();
        let illegal = ChessMove::new(Square::E2, Square::E5, None);
        assert!(matches!(
            position.make_move(illegal),
            Err(PositionError::IllegalMove { .. })
        ));
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn test_parse_unknown_move() {
        let position = Position::default();
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(PositionError::UnknownMove { .. })
        ));
    }

    #[test]
    fn test_invalid_fen() {
        assert!(matches!(
            Position::from_fen("not a fen"),
            Err(PositionError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_fingerprint_is_transposition_stable() {
        let mut a = Position::default();
        for text in ["g1f3", "g8f6", "b1c3"] {
            let m = mv(text, &a);
            a.play(m).unwrap();
        }

        let mut b = Position::default();
        for text in ["b1c3", "g8f6", "g1f3"] {
            let m = mv(text, &b);
            b.play(m).unwrap();
        }

        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_fingerprint_includes_side_to_move() {
        let white = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let black = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(white.fingerprint(), black.fingerprint());
    }

    #[test]
    fn test_checkmate_outcome() {
        // Fool's mate, White to move and mated
        let position =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(position.is_terminal());
        assert_eq!(position.outcome(), Some(Outcome::BlackWins));
    }

    #[test]
    fn test_stalemate_and_dead_material_are_draws() {
        let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stalemate.outcome(), Some(Outcome::Draw));

        let bare_kings = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(bare_kings.outcome(), Some(Outcome::Draw));
    }
}
