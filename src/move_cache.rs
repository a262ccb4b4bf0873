//! Bounded cache of legal-move queries.
//!
//! Entries are keyed by a [`Fingerprint`] that embeds the full board, so a
//! position that changed can never be answered from a stale entry; no explicit
//! invalidation is needed when a game advances.
//!
//! The cache is shared by every game and every request. All mutation (insert,
//! eviction, promote-on-read) happens inside a single `parking_lot::Mutex`
//! critical section. Stored move lists are immutable once written.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use parking_lot::Mutex;

use crate::board::{Board, Color, Square};
use crate::game::GameId;

/// Default maximum number of cached queries.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Default lifetime of a cached query.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Identifies one legal-move query against one position of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub game_id: GameId,
    pub square: Square,
    pub turn: Color,
    pub en_passant: Option<Square>,
    pub board: Board,
}

impl Fingerprint {
    #[must_use]
    pub fn new(
        game_id: GameId,
        square: Square,
        turn: Color,
        en_passant: Option<Square>,
        board: &Board,
    ) -> Self {
        Fingerprint {
            game_id,
            square,
            turn,
            en_passant,
            board: board.clone(),
        }
    }
}

/// Cache sizing and expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries. Zero disables caching.
    pub capacity: usize,
    /// Lifetime of an entry from insertion. `None` keeps entries until evicted.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            capacity: DEFAULT_CAPACITY,
            ttl: Some(DEFAULT_TTL),
        }
    }
}

/// Counters accumulated since construction or the last `clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped to stay within capacity.
    pub evictions: u64,
    /// Entries dropped because they outlived the TTL.
    pub expirations: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

struct Entry {
    moves: Vec<Square>,
    expires_at: Option<Instant>,
    /// Position in the recency order; larger is more recent.
    tick: u64,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Default)]
struct Inner {
    entries: HashMap<Arc<Fingerprint>, Entry>,
    order: BTreeMap<u64, Arc<Fingerprint>>,
    next_tick: u64,
    stats: CacheStats,
}

impl Inner {
    fn bump_tick(&mut self) -> u64 {
        self.next_tick += 1;
        self.next_tick
    }

    fn remove(&mut self, key: &Fingerprint) -> Option<Entry> {
        let entry = self.entries.remove(key)?;
        self.order.remove(&entry.tick);
        Some(entry)
    }

    /// Drop least recently used entries until at most `capacity` remain.
    fn shrink_to(&mut self, capacity: usize) {
        while self.entries.len() > capacity {
            let Some((_, key)) = self.order.pop_first() else {
                break;
            };
            self.entries.remove(&*key);
            self.stats.evictions += 1;
            debug!(
                "move cache evicted {} query for game {}",
                key.square, key.game_id
            );
        }
    }
}

/// LRU cache of legal destination squares with per-entry expiry.
pub struct MoveCache {
    config: CacheConfig,
    inner: Mutex<Inner>,
}

impl MoveCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        MoveCache {
            config,
            inner: Mutex::new(Inner::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Look up a query. A hit moves the entry to the most recently used
    /// position; an expired entry is removed and reported as a miss.
    #[must_use]
    pub fn get(&self, key: &Fingerprint) -> Option<Vec<Square>> {
        let now = Instant::now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let expired = match inner.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                inner.stats.misses += 1;
                trace!("move cache miss for {} in game {}", key.square, key.game_id);
                return None;
            }
        };
        if expired {
            inner.remove(key);
            inner.stats.expirations += 1;
            inner.stats.misses += 1;
            trace!("move cache expired {} in game {}", key.square, key.game_id);
            return None;
        }

        let tick = inner.bump_tick();
        let entry = inner.entries.get_mut(key)?;
        let previous = std::mem::replace(&mut entry.tick, tick);
        let moves = entry.moves.clone();
        if let Some(shared_key) = inner.order.remove(&previous) {
            inner.order.insert(tick, shared_key);
        }
        inner.stats.hits += 1;
        trace!("move cache hit for {} in game {}", key.square, key.game_id);
        Some(moves)
    }

    /// Store a query result, evicting the least recently used entries when
    /// the cache is over capacity.
    pub fn insert(&self, key: Fingerprint, moves: Vec<Square>) {
        if self.config.capacity == 0 {
            return;
        }
        let expires_at = self.config.ttl.map(|ttl| Instant::now() + ttl);
        let mut inner = self.inner.lock();

        inner.remove(&key);
        let tick = inner.bump_tick();
        let key = Arc::new(key);
        inner.order.insert(tick, Arc::clone(&key));
        inner.entries.insert(
            key,
            Entry {
                moves,
                expires_at,
                tick,
            },
        );
        inner.shrink_to(self.config.capacity);
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs outside the lock, so concurrent misses on the same key
    /// may both compute; the results are identical and the later insert wins.
    pub fn get_or_insert_with<F>(&self, key: Fingerprint, compute: F) -> Vec<Square>
    where
        F: FnOnce() -> Vec<Square>,
    {
        if let Some(moves) = self.get(&key) {
            return moves;
        }
        let moves = compute();
        self.insert(key, moves.clone());
        moves
    }

    /// Remove every entry and reset the counters.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        *inner = Inner::default();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }
}

impl Default for MoveCache {
    fn default() -> Self {
        MoveCache::new(CacheConfig::default())
    }
}
