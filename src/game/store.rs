//! Persistence seam for game snapshots.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{GameId, GameState, StoreError};

/// Atomic storage of whole game snapshots.
///
/// Every call is all-or-nothing: a failed `commit` leaves the stored snapshot
/// exactly as it was.
pub trait GameStore: Send + Sync {
    /// Reserve a fresh game id.
    fn allocate_id(&self) -> Result<GameId, StoreError>;

    /// Store a new game.
    fn insert(&self, state: GameState) -> Result<(), StoreError>;

    /// Fetch the current snapshot of a game.
    fn load(&self, id: GameId) -> Result<GameState, StoreError>;

    /// Replace the stored snapshot with `next`.
    ///
    /// `next.version` must be the version of the snapshot it was derived
    /// from. The commit fails with `VersionConflict` if the stored version
    /// differs; otherwise the stored version becomes `next.version + 1` and
    /// the committed snapshot is returned.
    fn commit(&self, next: GameState) -> Result<GameState, StoreError>;
}

impl<S: GameStore + ?Sized> GameStore for Arc<S> {
    fn allocate_id(&self) -> Result<GameId, StoreError> {
        (**self).allocate_id()
    }

    fn insert(&self, state: GameState) -> Result<(), StoreError> {
        (**self).insert(state)
    }

    fn load(&self, id: GameId) -> Result<GameState, StoreError> {
        (**self).load(id)
    }

    fn commit(&self, next: GameState) -> Result<GameState, StoreError> {
        (**self).commit(next)
    }
}

/// In-process store backed by a single mutex-guarded map.
#[derive(Default)]
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, GameState>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl GameStore for MemoryStore {
    fn allocate_id(&self) -> Result<GameId, StoreError> {
        Ok(GameId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1))
    }

    fn insert(&self, state: GameState) -> Result<(), StoreError> {
        self.games.lock().insert(state.id, state);
        Ok(())
    }

    fn load(&self, id: GameId) -> Result<GameState, StoreError> {
        self.games
            .lock()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn commit(&self, mut next: GameState) -> Result<GameState, StoreError> {
        let mut games = self.games.lock();
        let stored = games
            .get_mut(&next.id)
            .ok_or(StoreError::NotFound { id: next.id })?;
        if stored.version != next.version {
            return Err(StoreError::VersionConflict {
                expected: next.version,
                found: stored.version,
            });
        }
        next.version += 1;
        *stored = next.clone();
        Ok(next)
    }
}
