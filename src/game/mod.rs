//! Persistent games and the controller that advances them.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use chess_referee::game::{GameController, GameStatus, MemoryStore};
//! use chess_referee::move_cache::MoveCache;
//!
//! let controller = GameController::new(MemoryStore::new(), Arc::new(MoveCache::default()));
//! let game = controller.create_game().unwrap();
//! let after = controller
//!     .apply_move(game.id, "e2".parse().unwrap(), "e4".parse().unwrap())
//!     .unwrap();
//! assert_eq!(after.status, GameStatus::InProgress);
//! assert_eq!(after.last_move().unwrap().notation, "e4");
//! ```

mod controller;
mod error;
mod state;
mod store;

pub use controller::{ControllerConfig, GameController, DEFAULT_MAX_COMMIT_ATTEMPTS};
pub use error::{GameError, StoreError};
pub use state::{GameId, GameState, GameStatus, MoveRecord, PendingPromotion, Winner};
pub use store::{GameStore, MemoryStore};
