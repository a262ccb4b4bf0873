//! Game state controller.
//!
//! Every mutating operation runs validate, compute, commit: the current
//! snapshot is loaded, the request is validated against it, a successor
//! snapshot is computed in memory and the store commits it in one step. A
//! commit that loses a race against another writer is retried from a fresh
//! read.

use std::sync::Arc;

use log::{debug, error, info, warn};

use super::{
    GameError, GameId, GameState, GameStatus, GameStore, MoveRecord, PendingPromotion, StoreError,
    Winner,
};
use crate::board::{
    encode, Board, Color, MoveFlags, NotatedMove, PieceInstance, PieceKind, PositionStatus, Square,
};
use crate::move_cache::{Fingerprint, MoveCache};

/// Default number of commit attempts before a version conflict is reported.
pub const DEFAULT_MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Controller tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Total commits tried per operation when other writers interleave.
    pub max_commit_attempts: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            max_commit_attempts: DEFAULT_MAX_COMMIT_ATTEMPTS,
        }
    }
}

/// Applies moves and promotions to stored games.
pub struct GameController<S> {
    store: S,
    cache: Arc<MoveCache>,
    config: ControllerConfig,
}

impl<S: GameStore> GameController<S> {
    /// Create a controller over `store`, sharing `cache` with any other
    /// controllers it was handed to.
    #[must_use]
    pub fn new(store: S, cache: Arc<MoveCache>) -> Self {
        GameController::with_config(store, cache, ControllerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: S, cache: Arc<MoveCache>, config: ControllerConfig) -> Self {
        GameController {
            store,
            cache,
            config,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<MoveCache> {
        &self.cache
    }

    #[must_use]
    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Start a game from the standard initial position.
    pub fn create_game(&self) -> Result<GameState, GameError> {
        self.create_game_from(Board::new(), Color::White)
    }

    /// Start a game from an arbitrary position with `turn` to move.
    ///
    /// A position in which `turn` is already checkmated or stalemated is
    /// stored as completed.
    pub fn create_game_from(&self, board: Board, turn: Color) -> Result<GameState, GameError> {
        let id = self.store.allocate_id()?;
        let mut state = GameState::from_position(id, board, turn);
        let status = state.board.position_status(turn, None);
        conclude(&mut state, status, turn.opponent());

        self.store.insert(state.clone()).map_err(|err| {
            error!("failed to store new game {id}: {err}");
            GameError::from(err)
        })?;
        info!("created game {id} with {turn} to move");
        if state.status == GameStatus::Completed {
            log_game_end(&state);
        }
        Ok(state)
    }

    /// Fetch the current snapshot of a game.
    pub fn game(&self, id: GameId) -> Result<GameState, GameError> {
        Ok(self.store.load(id)?)
    }

    /// Legal destinations for the piece on `square`.
    pub fn legal_moves_at(&self, id: GameId, square: Square) -> Result<Vec<Square>, GameError> {
        let state = self.game(id)?;
        self.legal_moves_in(&state, square)
    }

    /// Move the piece on `from` to `to`.
    ///
    /// A pawn reaching its last row leaves the game awaiting promotion with
    /// the turn unchanged; [`resolve_promotion`](Self::resolve_promotion)
    /// completes the move.
    pub fn apply_move(&self, id: GameId, from: Square, to: Square) -> Result<GameState, GameError> {
        let committed = self.transact(id, |current| self.next_after_move(current, from, to))?;
        if let Some(record) = committed.last_move() {
            debug!(
                "game {id}: {} {from}-{to} ({})",
                record.piece, record.notation
            );
        }
        if committed.status == GameStatus::Completed {
            log_game_end(&committed);
        }
        Ok(committed)
    }

    /// Replace the pending promotion pawn with `kind` and finish the move.
    pub fn resolve_promotion(&self, id: GameId, kind: PieceKind) -> Result<GameState, GameError> {
        let committed = self.transact(id, |current| next_after_promotion(current, kind))?;
        debug!("game {id}: promoted to {kind}");
        if committed.status == GameStatus::Completed {
            log_game_end(&committed);
        }
        Ok(committed)
    }

    /// End a non-terminal game without a winner.
    pub fn abort(&self, id: GameId) -> Result<GameState, GameError> {
        let committed = self.transact(id, |current| {
            if current.is_terminal() {
                return Err(GameError::NotInProgress {
                    status: current.status,
                });
            }
            let mut next = current.clone();
            next.status = GameStatus::Aborted;
            next.pending_promotion = None;
            Ok(next)
        })?;
        log_game_end(&committed);
        Ok(committed)
    }

    fn legal_moves_in(&self, state: &GameState, square: Square) -> Result<Vec<Square>, GameError> {
        if state.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress {
                status: state.status,
            });
        }
        let piece = state
            .board
            .piece_at(square)
            .ok_or(GameError::NoPieceAtSquare { square })?;
        if piece.color != state.turn {
            return Err(GameError::NotPlayersTurn {
                square,
                turn: state.turn,
            });
        }

        let key = Fingerprint::new(state.id, square, state.turn, state.en_passant, &state.board);
        Ok(self.cache.get_or_insert_with(key, || {
            state
                .board
                .legal_moves(piece.color, piece.kind, square, state.en_passant)
        }))
    }

    fn next_after_move(
        &self,
        current: &GameState,
        from: Square,
        to: Square,
    ) -> Result<GameState, GameError> {
        if !self.legal_moves_in(current, from)?.contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }
        let piece = current
            .board
            .piece_at(from)
            .ok_or(GameError::NoPieceAtSquare { square: from })?;
        let sim = current
            .board
            .simulate(from, to, piece.kind, current.en_passant)
            .ok_or(GameError::NoPieceAtSquare { square: from })?;

        let mv = NotatedMove {
            kind: piece.kind,
            from,
            to,
        };
        let mut flags = MoveFlags::from_simulation(&sim);

        let mut next = current.clone();
        next.board = sim.board;
        next.en_passant = sim.en_passant;
        next.captured.extend(sim.captured);

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            // Turn stays with the mover; notation is finished on resolution.
            next.status = GameStatus::AwaitingPromotion;
            next.pending_promotion = Some(PendingPromotion {
                from,
                to,
                is_capture: sim.captured.is_some(),
            });
        } else {
            let opponent = piece.color.opponent();
            let status = next.board.position_status(opponent, next.en_passant);
            flags = flags.with_status(status);
            next.turn = opponent;
            conclude(&mut next, status, piece.color);
        }

        next.move_history.push(MoveRecord {
            piece: piece.descriptor(),
            from,
            to,
            notation: encode(&mv, &flags),
            captured: sim.captured,
        });
        Ok(next)
    }

    /// Load, compute and commit, retrying on version conflicts.
    fn transact<F>(&self, id: GameId, mut step: F) -> Result<GameState, GameError>
    where
        F: FnMut(&GameState) -> Result<GameState, GameError>,
    {
        let max_attempts = self.config.max_commit_attempts.max(1);
        let mut attempt = 1;
        loop {
            let current = self.game(id)?;
            let next = step(&current)?;
            match self.store.commit(next) {
                Ok(committed) => return Ok(committed),
                Err(StoreError::VersionConflict { expected, found }) if attempt < max_attempts => {
                    warn!(
                        "game {id}: commit of version {expected} lost to version {found}, \
                         retrying (attempt {attempt}/{max_attempts})"
                    );
                    attempt += 1;
                }
                Err(err) => {
                    error!("game {id}: commit failed after {attempt} attempt(s): {err}");
                    return Err(err.into());
                }
            }
        }
    }
}

fn next_after_promotion(current: &GameState, kind: PieceKind) -> Result<GameState, GameError> {
    let pending = match (current.status, current.pending_promotion) {
        (GameStatus::AwaitingPromotion, Some(pending)) => pending,
        (status, _) => return Err(GameError::NotAwaitingPromotion { status }),
    };
    if !kind.is_promotion_choice() {
        return Err(GameError::InvalidPromotionPiece { kind });
    }
    let pawn = current
        .board
        .piece_at(pending.to)
        .filter(|p| p.kind == PieceKind::Pawn && p.color == current.turn)
        .ok_or(GameError::PawnNotAtPromotionSquare { square: pending.to })?;

    let mut next = current.clone();
    next.board.set_piece(
        pending.to,
        PieceInstance::new(pawn.color, kind).with_move_count(pawn.move_count),
    );

    let opponent = pawn.color.opponent();
    let status = next.board.position_status(opponent, None);
    let flags = MoveFlags {
        is_capture: pending.is_capture,
        ..MoveFlags::default()
    }
    .with_promotion(kind)
    .with_status(status);
    let notation = encode(
        &NotatedMove {
            kind: PieceKind::Pawn,
            from: pending.from,
            to: pending.to,
        },
        &flags,
    );
    if let Some(record) = next.move_history.last_mut() {
        record.notation = notation;
    }

    next.turn = opponent;
    next.en_passant = None;
    next.pending_promotion = None;
    next.status = GameStatus::InProgress;
    conclude(&mut next, status, pawn.color);
    Ok(next)
}

/// Mark the game completed if `status` (of the side now to move) ends it.
fn conclude(state: &mut GameState, status: PositionStatus, mover: Color) {
    match status {
        PositionStatus::Checkmate => {
            state.status = GameStatus::Completed;
            state.winner = Some(Winner::from(mover));
        }
        PositionStatus::Stalemate => {
            state.status = GameStatus::Completed;
            state.winner = Some(Winner::Stalemate);
        }
        PositionStatus::Normal | PositionStatus::Check => {}
    }
}

fn log_game_end(state: &GameState) {
    match (state.status, state.winner) {
        (GameStatus::Aborted, _) => info!("game {} aborted", state.id),
        (_, Some(Winner::Stalemate)) => info!("game {} drawn by stalemate", state.id),
        (_, Some(winner)) => info!("game {} won by {winner}", state.id),
        (_, None) => {}
    }
}
