//! Notable things that happen during a turn, queued by the resolvers and
//! drained by the game into the presenter.

use crate::types::{Position, Weapon};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted { robot: String, symbol: char },
    RadarSwept { robot: String, direction: i32, found: usize },
    // Movement
    Stuck { robot: String },
    InvalidDirection { robot: String, direction: i32 },
    StayedPut { robot: String },
    Blocked { robot: String, at: Position },
    FellIntoPit { robot: String, at: Position },
    WalkedThroughFlames { robot: String, at: Position },
    MoveEnded { robot: String, at: Position },
    // Combat
    ShotOutOfBounds { robot: String, target: Position },
    Fired { robot: String, weapon: Weapon, target: Position },
    NoLineOfFire { robot: String },
    OutOfGrenades { robot: String },
    HammerOutOfReach { robot: String, target: Position },
    NothingToHammer { robot: String, target: Position },
    Damaged { robot: String, amount: i32, health_before: i32, health_after: i32 },
    Destroyed { robot: String },
}

impl GameEvent {
    /// True for events that reject a strategy's request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameEvent::Stuck { .. }
                | GameEvent::InvalidDirection { .. }
                | GameEvent::ShotOutOfBounds { .. }
                | GameEvent::NoLineOfFire { .. }
                | GameEvent::OutOfGrenades { .. }
                | GameEvent::HammerOutOfReach { .. }
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnStarted { robot, symbol } => write!(f, "{robot} {symbol} begins turn."),
            GameEvent::RadarSwept { found: 0, .. } => write!(f, "  radar found nothing."),
            GameEvent::RadarSwept { direction, found, .. } => {
                write!(f, "  radar (direction {direction}) found {found} objects.")
            }
            GameEvent::Stuck { robot } => write!(f, "  {robot} is stuck and cannot move."),
            GameEvent::InvalidDirection { direction, .. } => {
                write!(f, "  invalid move direction {direction}.")
            }
            GameEvent::StayedPut { robot } => write!(f, "  {robot} chose not to move."),
            GameEvent::Blocked { robot, at } => write!(f, "  {robot} is blocked at {at}."),
            GameEvent::FellIntoPit { robot, at } => {
                write!(f, "  {robot} fell into a pit at {at}.")
            }
            GameEvent::WalkedThroughFlames { robot, at } => {
                write!(f, "  {robot} moves through flames at {at}.")
            }
            GameEvent::MoveEnded { robot, at } => write!(f, "  {robot} ends move at {at}."),
            GameEvent::ShotOutOfBounds { target, .. } => {
                write!(f, "  Shot location {target} is out of bounds; ignoring.")
            }
            GameEvent::Fired { robot, weapon, target } => {
                write!(f, "  {robot} fires {weapon} at {target}.")
            }
            GameEvent::NoLineOfFire { robot } => {
                write!(f, "  {robot} aimed at its own cell; nothing happens.")
            }
            GameEvent::OutOfGrenades { robot } => write!(f, "  {robot} has no grenades left!"),
            GameEvent::HammerOutOfReach { target, .. } => {
                write!(f, "  Hammer target {target} not adjacent.")
            }
            GameEvent::NothingToHammer { .. } => write!(f, "  Nothing there to hammer."),
            GameEvent::Damaged {
                robot,
                amount,
                health_before,
                health_after,
            } => write!(
                f,
                "  {robot} takes {amount} damage (health {health_before} -> {health_after})."
            ),
            GameEvent::Destroyed { robot } => write!(f, "  {robot} is destroyed!"),
        }
    }
}
