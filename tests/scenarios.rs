use std::collections::BTreeSet;
use std::sync::Arc;

use chess_referee::board::{Board, BoardBuilder, Color, PieceInstance, PieceKind, Square};
use chess_referee::game::{GameController, GameId, GameState, GameStatus, MemoryStore, Winner};
use chess_referee::move_cache::{CacheConfig, MoveCache};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn controller() -> GameController<MemoryStore> {
    GameController::new(
        MemoryStore::new(),
        Arc::new(MoveCache::new(CacheConfig::default())),
    )
}

fn play(ctl: &GameController<MemoryStore>, id: GameId, moves: &[(&str, &str)]) -> GameState {
    let mut state = ctl.game(id).unwrap();
    for (from, to) in moves {
        state = ctl
            .apply_move(id, sq(from), sq(to))
            .unwrap_or_else(|err| panic!("{from}-{to} rejected: {err}"));
    }
    state
}

#[test]
fn scenario_pawn_double_step() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    let state = ctl.apply_move(game.id, sq("e2"), sq("e4")).unwrap();

    assert!(state.board.is_empty(Square::new(6, 4).unwrap()));
    assert_eq!(
        state.board.piece_at(Square::new(4, 4).unwrap()),
        Some(PieceInstance::new(Color::White, PieceKind::Pawn).with_move_count(1))
    );
    assert_eq!(state.en_passant, Square::new(5, 4));
    assert_eq!(state.turn, Color::Black);
    assert_eq!(state.last_move().unwrap().notation, "e4");
}

#[test]
fn scenario_scholars_mate() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    let state = play(
        &ctl,
        game.id,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );

    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.winner, Some(Winner::White));
    assert_eq!(state.last_move().unwrap().notation, "Qxf7#");
    assert_eq!(state.in_check_square(), Some(sq("e8")));

    let notations: Vec<_> = state.move_history.iter().map(|m| m.notation.as_str()).collect();
    assert_eq!(notations, ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]);

    let taken: Vec<_> = state.captured_by(Color::White).map(|p| p.kind).collect();
    assert_eq!(taken, [PieceKind::Pawn]);
}

#[test]
fn scenario_kingside_castling() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    play(
        &ctl,
        game.id,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
        ],
    );

    let king_moves = ctl.legal_moves_at(game.id, sq("e1")).unwrap();
    assert!(king_moves.contains(&sq("g1")));

    let state = ctl.apply_move(game.id, sq("e1"), sq("g1")).unwrap();
    assert_eq!(state.board.kind_of(sq("g1")), Some(PieceKind::King));
    assert_eq!(
        state.board.piece_at(sq("f1")),
        Some(PieceInstance::new(Color::White, PieceKind::Rook).with_move_count(1))
    );
    assert!(state.board.is_empty(sq("e1")));
    assert!(state.board.is_empty(sq("h1")));
    assert_eq!(state.last_move().unwrap().notation, "O-O");
}

#[test]
fn scenario_en_passant_capture() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    play(
        &ctl,
        game.id,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );
    assert_eq!(ctl.game(game.id).unwrap().en_passant, Some(sq("d6")));
    assert!(ctl.legal_moves_at(game.id, sq("e5")).unwrap().contains(&sq("d6")));

    let state = ctl.apply_move(game.id, sq("e5"), sq("d6")).unwrap();
    assert!(state.board.is_empty(sq("d5")));
    assert_eq!(state.board.color_of(sq("d6")), Some(Color::White));
    assert_eq!(state.en_passant, None);

    let record = state.last_move().unwrap();
    assert_eq!(record.notation, "exd6");
    assert_eq!(
        record.captured.map(|p| (p.color, p.kind)),
        Some((Color::Black, PieceKind::Pawn))
    );
    assert_eq!(state.captured.len(), 1);
}

#[test]
fn scenario_en_passant_window_closes() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    play(
        &ctl,
        game.id,
        &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("h2", "h3"),
            ("a6", "a5"),
        ],
    );

    let moves = ctl.legal_moves_at(game.id, sq("e5")).unwrap();
    assert!(!moves.contains(&sq("d6")));
    assert!(ctl.apply_move(game.id, sq("e5"), sq("d6")).is_err());
}

#[test]
fn scenario_stalemate_from_constructed_position() {
    let ctl = controller();
    let board = BoardBuilder::new()
        .moved_piece(sq("g6"), Color::White, PieceKind::King, 5)
        .moved_piece(sq("e7"), Color::White, PieceKind::Queen, 4)
        .moved_piece(sq("h8"), Color::Black, PieceKind::King, 2)
        .build();
    let game = ctl.create_game_from(board, Color::White).unwrap();
    assert_eq!(game.status, GameStatus::InProgress);

    let state = ctl.apply_move(game.id, sq("e7"), sq("f7")).unwrap();
    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.winner, Some(Winner::Stalemate));
    assert_eq!(state.in_check_square(), None);
    assert_eq!(state.last_move().unwrap().notation, "Qf7");

    assert!(ctl.apply_move(game.id, sq("h8"), sq("h7")).is_err());
}

#[test]
fn scenario_legal_moves_are_deterministic() {
    let ctl = controller();
    let game = ctl.create_game().unwrap();
    play(&ctl, game.id, &[("e2", "e4"), ("e7", "e5")]);

    for square in ["d1", "f1", "g1", "e1", "a2"] {
        let first: BTreeSet<_> = ctl.legal_moves_at(game.id, sq(square)).unwrap().into_iter().collect();
        let second: BTreeSet<_> = ctl.legal_moves_at(game.id, sq(square)).unwrap().into_iter().collect();
        ctl.cache().clear();
        let uncached: BTreeSet<_> = ctl.legal_moves_at(game.id, sq(square)).unwrap().into_iter().collect();
        assert_eq!(first, second, "{square}");
        assert_eq!(first, uncached, "{square}");
    }
}

#[test]
fn promotion_waits_for_piece_choice() {
    let ctl = controller();
    let board = BoardBuilder::new()
        .moved_piece(sq("b2"), Color::Black, PieceKind::Pawn, 5)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .moved_piece(sq("h1"), Color::White, PieceKind::King, 1)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    let game = ctl.create_game_from(board, Color::Black).unwrap();

    let pending = ctl.apply_move(game.id, sq("b2"), sq("a1")).unwrap();
    assert_eq!(pending.status, GameStatus::AwaitingPromotion);
    assert_eq!(pending.turn, Color::Black);
    let promotion = pending.pending_promotion.unwrap();
    assert_eq!((promotion.from, promotion.to), (sq("b2"), sq("a1")));
    assert!(promotion.is_capture);
    assert_eq!(pending.board.kind_of(sq("a1")), Some(PieceKind::Pawn));
    assert_eq!(pending.move_history.len(), 1);

    let resolved = ctl.resolve_promotion(game.id, PieceKind::Queen).unwrap();
    assert_eq!(resolved.status, GameStatus::InProgress);
    assert_eq!(resolved.turn, Color::White);
    assert_eq!(resolved.pending_promotion, None);
    assert_eq!(resolved.move_history.len(), 1);
    assert_eq!(resolved.last_move().unwrap().notation, "bxa1=Q+");
    assert_eq!(resolved.in_check_square(), Some(sq("h1")));
    assert_eq!(
        resolved.board.piece_at(sq("a1")),
        Some(PieceInstance::new(Color::Black, PieceKind::Queen).with_move_count(6))
    );

    let taken: Vec<_> = resolved.captured_by(Color::Black).map(|p| p.kind).collect();
    assert_eq!(taken, [PieceKind::Rook]);
}

#[test]
fn promotion_can_deliver_mate() {
    let ctl = controller();
    let board = Board::from_placement("7k/P7/6K1/8/8/8/8/8").unwrap();
    let game = ctl.create_game_from(board, Color::White).unwrap();

    ctl.apply_move(game.id, sq("a7"), sq("a8")).unwrap();
    let state = ctl.resolve_promotion(game.id, PieceKind::Queen).unwrap();
    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.winner, Some(Winner::White));
    assert_eq!(state.last_move().unwrap().notation, "a8=Q#");
}
