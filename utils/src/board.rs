use chess::{BitBoard, Board, Color, Piece, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Checks if neither side can ever deliver mate.
///
/// Dead positions:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - K+B vs K+B with same-colored bishops
#[inline(always)]
pub fn has_insufficient_material(board: &Board) -> bool {
    let pawns = board.pieces(Piece::Pawn);
    let rooks = board.pieces(Piece::Rook);
    let queens = board.pieces(Piece::Queen);

    if (pawns | rooks | queens) != EMPTY {
        return false;
    }

    let white = board.color_combined(Color::White);
    let black = board.color_combined(Color::Black);
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);

    let white_knights = (white & knights).popcnt();
    let black_knights = (black & knights).popcnt();
    let white_bishops = (white & bishops).popcnt();
    let black_bishops = (black & bishops).popcnt();

    let white_minors = white_knights + white_bishops;
    let black_minors = black_knights + black_bishops;

    // K vs K, K+minor vs K
    if white_minors + black_minors <= 1 {
        return true;
    }

    // K+B vs K+B with bishops on same color squares
    if white_bishops == 1 && black_bishops == 1 && white_minors == 1 && black_minors == 1 {
        let light_squares = BitBoard(LIGHT_SQUARES_MASK);
        let white_on_light = (white & bishops & light_squares) != EMPTY;
        let black_on_light = (black & bishops & light_squares) != EMPTY;

        return white_on_light == black_on_light;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).unwrap()
    }

    #[test]
    fn test_insufficient_material_k_vs_k() {
        assert!(has_insufficient_material(&board(
            "k7/8/8/8/8/8/8/K7 w - - 0 1"
        )));
    }

    #[test]
    fn test_insufficient_material_kn_vs_k() {
        assert!(has_insufficient_material(&board(
            "k7/8/8/8/8/8/8/KN6 w - - 0 1"
        )));
        assert!(has_insufficient_material(&board(
            "kn6/8/8/8/8/8/8/K7 w - - 0 1"
        )));
    }

    #[test]
    fn test_insufficient_material_same_colored_bishops() {
        // c8 and f1 are both light squares
        assert!(has_insufficient_material(&board(
            "k1b5/8/8/8/8/8/8/K4B2 w - - 0 1"
        )));
        // c8 light, c1 dark
        assert!(!has_insufficient_material(&board(
            "k1b5/8/8/8/8/8/8/K1B5 w - - 0 1"
        )));
    }

    #[test]
    fn test_sufficient_material_two_knights() {
        assert!(!has_insufficient_material(&board(
            "k7/8/8/8/8/8/8/KNN5 w - - 0 1"
        )));
    }

    #[test]
    fn test_sufficient_material_with_pawn_or_rook() {
        assert!(!has_insufficient_material(&board(
            "k7/p7/8/8/8/8/8/K7 w - - 0 1"
        )));
        assert!(!has_insufficient_material(&board(
            "k7/8/8/8/8/8/8/KR6 w - - 0 1"
        )));
    }
}
