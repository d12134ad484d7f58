//! Core of a color-recall game.
//!
//! A target color is shown for a few ticks, hidden, and the player types a
//! hex guess. Each guess scores 0-10 by Euclidean distance in RGB space; a
//! session is a fixed number of rounds.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod report;
pub mod round;
pub mod scoring;
pub mod session;
