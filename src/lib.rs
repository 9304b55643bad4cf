#![warn(missing_docs)]

//! # `hashi`
//!
//! A board engine for [Hashiwokakero](https://en.wikipedia.org/wiki/Hashiwokakero), also published as "Bridges".
//! Islands carry a number; the player joins islands sharing a row or column with single or double bridges
//! until every island has exactly as many bridges as its number. Bridges never cross, and at most two join any pair of islands.
//!
//! Begin by building a board with a [`BoardBuilder`](builder::BoardBuilder), or load one with the [`loader`] module.
//! The resulting [`Board`] owns the grid and exposes the player's actions:
//! [`toggle_bridge`](Board::toggle_bridge), [`undo`](Board::undo), [`reset`](Board::reset) and
//! [`replay_solution`](Board::replay_solution), along with the queries a renderer needs to draw it.
//!
//! # Internals
//! The board is a row-major [`ndarray::Array2`] of [`Cell`]s. There is no separate list of bridges:
//! a bridge is the run of identical bridge cells strictly between its two islands.
//! Every mutation is checked by [`Board::validate_bridge`] first, so a request either applies in full or changes nothing.

pub use board::{Board, Click, IslandStatus, Replay};
pub use bridge::{BridgeChange, BridgeStatus, Solution, Span};
pub use builder::BoardBuilder;
pub use cell::{BridgeWidth, Cell};
pub use error::{BoardError, LoadError};
pub use history::UndoHistory;
pub use location::{Dimension, Location};
pub use shape::{Orientation, SquareStep};

pub(crate) mod board;
pub(crate) mod bridge;
pub(crate) mod cell;
pub(crate) mod history;
pub(crate) mod location;
pub(crate) mod shape;
pub(crate) mod error;
pub mod builder;
pub mod config;
pub mod loader;
