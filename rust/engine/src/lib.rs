//! # noughts-engine: Tic-Tac-Toe Rules Engine Core
//!
//! A pure, synchronous rules engine for two-player tic-tac-toe.
//! Provides board state management, move legality, terminal-state
//! detection, and session score tracking. No I/O, no clock, no
//! randomness: every operation is immediate and total over its
//! documented input domain.
//!
//! ## Core Modules
//!
//! - [`cell`] - Marker symbols and the one-shot-write cell
//! - [`board`] - The fixed 3x3 grid, placement, and terminal-state evaluation
//! - [`player`] - Player records (name, marker, session win count)
//! - [`game`] - The [`game::GameController`] state machine driving a session
//! - [`errors`] - Error types for rejected operations
//!
//! ## Quick Start
//!
//! ```rust
//! use noughts_engine::game::{GameController, RoundOutcome};
//!
//! let mut game = GameController::new();
//!
//! // Player one (X) takes the center, player two (O) answers.
//! assert_eq!(game.play_round(1, 1).unwrap(), RoundOutcome::Continued);
//! assert_eq!(game.play_round(0, 0).unwrap(), RoundOutcome::Continued);
//! assert_eq!(game.active_player().name(), "Player One");
//! ```
//!
//! ## Rejected Operations
//!
//! Placing on an occupied cell, moving after the game is over, and
//! out-of-range coordinates are all reported as [`errors::GameError`]
//! values that leave the prior state fully intact:
//!
//! ```rust
//! use noughts_engine::game::GameController;
//! use noughts_engine::errors::GameError;
//!
//! let mut game = GameController::new();
//! game.play_round(0, 0).unwrap();
//!
//! let rejected = game.play_round(0, 0);
//! assert_eq!(rejected, Err(GameError::CellOccupied { row: 0, col: 0 }));
//! ```
//!
//! ## Session Scores
//!
//! Win counts accumulate across rounds of one session and survive
//! [`game::GameController::reset_game`], which only clears the board,
//! turn order, and result message.

pub mod board;
pub mod cell;
pub mod errors;
pub mod game;
pub mod player;
