//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Comprehensive unit tests for every action and refusal
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//! - **Fast**: Zero-allocation action and snapshot paths
//!
//! # Module Structure
//!
//! - [`queue`]: circular next-piece queue (fixed slots, one kept free)
//! - [`stack`]: bounded reserve stack for held pieces
//! - [`rng`]: seeded piece factory with monotonically increasing ids
//! - [`game_state`]: both containers plus the five player actions
//! - [`outcome`]: action reports and refusal reasons
//! - [`snapshot`]: flat render view of the game state
//!
//! # Game Rules
//!
//! - The queue holds upcoming pieces in arrival order and stays full in the
//!   steady state: every successful take from the front enqueues one fresh
//!   piece at the back.
//! - The reserve stack holds up to three set-aside pieces, last in first out.
//! - Actions check their preconditions first; a refused action reports why
//!   and changes nothing.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::GameState;
//! use tetris_stack_types::GameAction;
//!
//! // Create a game and fill the queue
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Set a piece aside, then swap it back to the front
//! game.apply_action(GameAction::Reserve).unwrap();
//! game.apply_action(GameAction::SwapSingle).unwrap();
//!
//! assert!(game.queue().is_full());
//! assert_eq!(game.stack().len(), 1);
//! ```
//!
//! # Concurrency
//!
//! All operations take `&mut self` and run to completion before returning.
//! The types carry no internal synchronization; wrap [`GameState`] in a lock
//! if it must ever be shared.

pub mod game_state;
pub mod outcome;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use outcome::{ActionError, ActionOutcome};
pub use queue::NextQueue;
pub use rng::{PieceFactory, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::ReserveStack;
