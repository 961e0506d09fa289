//! A small and simple tic-tac-toe engine built on exhaustive minimax search.
//!
//! Given a 3×3 board, the engine works out whose turn it is, lists the legal moves, scores
//! finished positions and searches the complete game tree to find an optimal move. A difficulty
//! layer sometimes replaces that move with a uniformly random legal one, using a random source
//! injected by the caller so that games can be replayed exactly.
//!
//! # Example
//!
//! ```rust
//! use ttt_minimax::board::Action;
//! use ttt_minimax::difficulty::Difficulty;
//! use ttt_minimax::engine::Engine;
//! use ttt_minimax::random::CustomNumberGenerator;
//!
//! // Create a new game where the computer plays as well as it can
//! let mut engine = Engine::builder()
//!     .with_difficulty(Difficulty::Hard)
//!     .build();
//!
//! // The human opens in the center
//! engine.apply_move(Action::new(1, 1)).unwrap();
//!
//! // Let the computer answer
//! let mut rng = CustomNumberGenerator::default();
//! let reply = engine.play_computer_move(&mut rng).unwrap();
//!
//! println!("The computer played {reply}");
//! println!("{}", engine.board());
//! ```

/// Board, cell and action types, and the operations that derive turns and apply moves.
pub mod board;
/// Random move substitution on top of minimax, driven by a difficulty level.
pub mod difficulty;
/// The contract surface used by a front end: one game, one difficulty.
pub mod engine;
/// The crate's error type.
pub mod error;
/// Exhaustive minimax search over the game tree.
pub mod minimax;
/// Legal move generation.
pub mod moves;
/// Win detection, utility and terminal-state checks.
pub mod outcome;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::{Error, Result};
