pub mod board;
pub mod game;
pub mod move_cache;

pub use board::{Board, Color, PieceInstance, PieceKind, Square};
pub use game::{GameController, GameError, GameId, GameState, GameStatus, MemoryStore, Winner};
pub use move_cache::{CacheConfig, MoveCache};
