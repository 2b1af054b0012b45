//! Bundled robot strategies and the registry that hands them to a game.

mod bomber;
mod perimeter_flame;
mod sweeper;
mod tank_buddy;

pub use bomber::Bomber;
pub use perimeter_flame::PerimeterFlame;
pub use sweeper::Sweeper;
pub use tank_buddy::TankBuddy;

use crate::robot::Strategy;
use crate::types::Position;
use clap::ValueEnum;

/// Supplies the roster for a game, in turn order.
pub trait BehaviorProvider {
    fn strategies(&mut self) -> Vec<Box<dyn Strategy>>;
}

/// The bundled strategies, selectable by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    Sweeper,
    Bomber,
    TankBuddy,
    PerimeterFlame,
}

impl BotKind {
    pub const ALL: [BotKind; 4] = [
        BotKind::Sweeper,
        BotKind::Bomber,
        BotKind::TankBuddy,
        BotKind::PerimeterFlame,
    ];

    /// Builds a fresh strategy. `seed` only matters for bots that wander.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            BotKind::Sweeper => Box::new(Sweeper::new()),
            BotKind::Bomber => Box::new(Bomber::new(seed)),
            BotKind::TankBuddy => Box::new(TankBuddy::new()),
            BotKind::PerimeterFlame => Box::new(PerimeterFlame::new()),
        }
    }
}

/// Static registry of bundled bots.
#[derive(Debug, Clone)]
pub struct Registry {
    seed: u64,
    kinds: Vec<BotKind>,
}

impl Registry {
    pub fn new(seed: u64, kinds: Vec<BotKind>) -> Self {
        Registry { seed, kinds }
    }

    /// One of each bundled bot.
    pub fn all(seed: u64) -> Self {
        Registry::new(seed, BotKind::ALL.to_vec())
    }
}

impl BehaviorProvider for Registry {
    fn strategies(&mut self) -> Vec<Box<dyn Strategy>> {
        self.kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| kind.build(self.seed.wrapping_add(i as u64)))
            .collect()
    }
}

/// Single orthogonal step from `from` towards `target`, preferring the
/// axis with the larger gap (rows on ties). Returns 0 when already there.
pub(crate) fn orthogonal_step(from: Position, target: Position) -> i32 {
    let dr = (target.row - from.row).signum();
    let dc = (target.col - from.col).signum();
    let vertical_first = (target.row - from.row).abs() >= (target.col - from.col).abs();

    let vertical = match dr {
        1 => Some(5),
        -1 => Some(1),
        _ => None,
    };
    let horizontal = match dc {
        1 => Some(3),
        -1 => Some(7),
        _ => None,
    };
    let choice = if vertical_first {
        vertical.or(horizontal)
    } else {
        horizontal.or(vertical)
    };
    choice.unwrap_or(0)
}
