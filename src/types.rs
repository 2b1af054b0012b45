//! Shared value types: board positions, terrain, radar objects and weapons.

use crate::config;
use std::fmt;

/// A cell coordinate on the board. Signed so that strategies can name
/// off-board targets, which the engine then rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns the position shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// King-move distance between two cells.
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Static terrain of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terrain {
    #[default]
    Empty,
    Mound,
    Pit,
    Flame,
}

impl Terrain {
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Empty => '.',
            Terrain::Mound => 'M',
            Terrain::Pit => 'P',
            Terrain::Flame => 'F',
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Terrain::Empty)
    }
}

/// What a radar sweep saw in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarKind {
    LiveRobot,
    DeadRobot,
    Mound,
    Pit,
    Flame,
}

impl RadarKind {
    pub const fn symbol(self) -> char {
        match self {
            RadarKind::LiveRobot => 'R',
            RadarKind::DeadRobot => 'X',
            RadarKind::Mound => 'M',
            RadarKind::Pit => 'P',
            RadarKind::Flame => 'F',
        }
    }

    /// Maps non-empty terrain onto its radar kind.
    pub const fn from_terrain(terrain: Terrain) -> Option<Self> {
        match terrain {
            Terrain::Empty => None,
            Terrain::Mound => Some(RadarKind::Mound),
            Terrain::Pit => Some(RadarKind::Pit),
            Terrain::Flame => Some(RadarKind::Flame),
        }
    }
}

/// A single radar observation at absolute board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadarObj {
    pub kind: RadarKind,
    pub row: i32,
    pub col: i32,
}

impl RadarObj {
    pub const fn new(kind: RadarKind, row: i32, col: i32) -> Self {
        RadarObj { kind, row, col }
    }

    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Inclusive damage range rolled by a weapon or hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

impl DamageRange {
    pub const fn new(min: i32, max: i32) -> Self {
        DamageRange { min, max }
    }
}

/// Weapon fitted to a robot at creation; never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weapon {
    Railgun,
    Flamethrower,
    Grenade,
    Hammer,
}

impl Weapon {
    pub const fn damage(self) -> DamageRange {
        match self {
            Weapon::Railgun => config::RAILGUN_DAMAGE,
            Weapon::Flamethrower => config::FLAMETHROWER_DAMAGE,
            Weapon::Grenade => config::GRENADE_DAMAGE,
            Weapon::Hammer => config::HAMMER_DAMAGE,
        }
    }

    /// Grenade ammo a freshly built robot carries.
    pub const fn starting_ammo(self) -> i32 {
        match self {
            Weapon::Grenade => config::GRENADE_AMMO,
            _ => 0,
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weapon::Railgun => "railgun",
            Weapon::Flamethrower => "flamethrower",
            Weapon::Grenade => "grenade",
            Weapon::Hammer => "hammer",
        };
        f.write_str(name)
    }
}
