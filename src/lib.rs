//! # Gomoku
//!
//! Rules engine for Gomoku (five in a row) on a configurable square board,
//! with a plain-text console front end.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, turn controller
//! - [`ui`] — Text rendering, move parsing and the interactive console loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
