//! Pseudo-legal move generation tests.

use super::{as_set, sq, squares};
use crate::board::{Board, BoardBuilder, Color, PieceKind};

#[test]
fn test_knight_from_start() {
    let board = Board::new();
    let moves = board.pseudo_legal_moves(Color::White, PieceKind::Knight, sq("b1"), None);
    assert_eq!(as_set(moves), squares(&["a3", "c3"]));
}

#[test]
fn test_pawn_single_and_double_step_from_start() {
    let board = Board::new();
    let moves = board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e2"), None);
    assert_eq!(as_set(moves), squares(&["e3", "e4"]));

    let moves = board.pseudo_legal_moves(Color::Black, PieceKind::Pawn, sq("d7"), None);
    assert_eq!(as_set(moves), squares(&["d6", "d5"]));
}

#[test]
fn test_blocked_sliders_in_start_position() {
    let board = Board::new();
    for (square, kind) in [
        ("a1", PieceKind::Rook),
        ("c1", PieceKind::Bishop),
        ("d1", PieceKind::Queen),
    ] {
        let moves = board.pseudo_legal_moves(Color::White, kind, sq(square), None);
        assert!(moves.is_empty(), "{kind} on {square} should be blocked");
    }
}

#[test]
fn test_rook_on_open_board() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Rook)
        .build();
    let moves = board.pseudo_legal_moves(Color::White, PieceKind::Rook, sq("d4"), None);
    assert_eq!(moves.len(), 14);
}

#[test]
fn test_queen_on_open_board() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Queen)
        .build();
    let moves = board.pseudo_legal_moves(Color::White, PieceKind::Queen, sq("d4"), None);
    assert_eq!(moves.len(), 27);
}

#[test]
fn test_bishop_stops_at_own_and_captures_enemy() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Bishop)
        .piece(sq("f6"), Color::White, PieceKind::Knight)
        .piece(sq("b2"), Color::Black, PieceKind::Pawn)
        .build();
    let moves = board.pseudo_legal_moves(Color::White, PieceKind::Bishop, sq("d4"), None);
    assert_eq!(
        as_set(moves),
        squares(&["e5", "c3", "b2", "c5", "b6", "a7", "e3", "f2", "g1"])
    );
}

#[test]
fn test_knight_captures_enemy_not_own() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::Black, PieceKind::Knight)
        .piece(sq("f6"), Color::Black, PieceKind::Pawn)
        .piece(sq("d2"), Color::White, PieceKind::Pawn)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::Black, PieceKind::Knight, sq("e4"), None));
    assert!(moves.contains(&sq("d2")));
    assert!(!moves.contains(&sq("f6")));
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_pawn_blocked() {
    let blocked = BoardBuilder::new()
        .piece(sq("e2"), Color::White, PieceKind::Pawn)
        .piece(sq("e3"), Color::Black, PieceKind::Knight)
        .build();
    assert!(blocked
        .pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e2"), None)
        .is_empty());

    let far_blocked = BoardBuilder::new()
        .piece(sq("e2"), Color::White, PieceKind::Pawn)
        .piece(sq("e4"), Color::Black, PieceKind::Knight)
        .build();
    assert_eq!(
        as_set(far_blocked.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e2"), None)),
        squares(&["e3"])
    );
}

#[test]
fn test_moved_pawn_has_no_double_step() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e3"), Color::White, PieceKind::Pawn, 1)
        .build();
    assert_eq!(
        as_set(board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e3"), None)),
        squares(&["e4"])
    );
}

#[test]
fn test_pawn_diagonal_captures_only_enemies() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e4"), Color::White, PieceKind::Pawn, 1)
        .piece(sq("e5"), Color::Black, PieceKind::Pawn)
        .piece(sq("d5"), Color::Black, PieceKind::Bishop)
        .piece(sq("f5"), Color::White, PieceKind::Knight)
        .build();
    assert_eq!(
        as_set(board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e4"), None)),
        squares(&["d5"])
    );
}

#[test]
fn test_en_passant_destination() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e5"), Color::White, PieceKind::Pawn, 2)
        .moved_piece(sq("d5"), Color::Black, PieceKind::Pawn, 1)
        .build();
    assert_eq!(
        as_set(board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e5"), Some(sq("d6")))),
        squares(&["e6", "d6"])
    );
    assert_eq!(
        as_set(board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e5"), None)),
        squares(&["e6"])
    );
    // A target that is not one diagonal step ahead is ignored.
    assert_eq!(
        as_set(board.pseudo_legal_moves(Color::White, PieceKind::Pawn, sq("e5"), Some(sq("a6")))),
        squares(&["e6"])
    );
}

fn castling_board() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
}

#[test]
fn test_castling_both_sides() {
    let board = castling_board().build();
    let moves = as_set(board.pseudo_legal_moves(Color::White, PieceKind::King, sq("e1"), None));
    assert!(moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));
}

#[test]
fn test_castling_requires_unmoved_rook_and_king() {
    let board = castling_board()
        .moved_piece(sq("h1"), Color::White, PieceKind::Rook, 2)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::White, PieceKind::King, sq("e1"), None));
    assert!(!moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));

    let board = castling_board()
        .moved_piece(sq("e1"), Color::White, PieceKind::King, 2)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::White, PieceKind::King, sq("e1"), None));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_castling_requires_empty_squares_between() {
    let board = castling_board()
        .piece(sq("f1"), Color::White, PieceKind::Bishop)
        .piece(sq("b1"), Color::White, PieceKind::Knight)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::White, PieceKind::King, sq("e1"), None));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_castling_requires_own_rook() {
    let board = castling_board()
        .piece(sq("h1"), Color::Black, PieceKind::Rook)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::White, PieceKind::King, sq("e1"), None));
    assert!(!moves.contains(&sq("g1")));
}

#[test]
fn test_black_castling() {
    let board = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::Rook)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .build();
    let moves = as_set(board.pseudo_legal_moves(Color::Black, PieceKind::King, sq("e8"), None));
    assert!(moves.contains(&sq("g8")));
    assert!(!moves.contains(&sq("c8")));
}

#[test]
fn test_square_reachable() {
    let board = Board::new();
    assert!(board.is_square_reachable(sq("f3"), Color::White, None));
    assert!(!board.is_square_reachable(sq("e5"), Color::White, None));
    assert!(board.is_square_reachable(sq("f6"), Color::Black, None));
}

#[test]
fn test_reachable_counts_pawn_pushes() {
    // A pawn push reaches e3 without attacking it; only occupied squares
    // give an attack answer.
    let board = Board::new();
    assert!(board.is_square_reachable(sq("e3"), Color::White, None));
    assert!(!board.is_square_reachable(sq("d5"), Color::White, None));

    let board = BoardBuilder::new()
        .moved_piece(sq("e4"), Color::White, PieceKind::Pawn, 1)
        .piece(sq("d5"), Color::Black, PieceKind::King)
        .piece(sq("e5"), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.is_square_reachable(sq("d5"), Color::White, None));
    assert!(!board.is_square_reachable(sq("e5"), Color::White, None));
}
