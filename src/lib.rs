//! RobotWarz: a turn-based robot combat simulator on a hazard-strewn grid.

pub mod board;
pub mod bots;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod logging;
pub mod presenter;
pub mod robot;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use game::{Game, GamePhase, Outcome};
