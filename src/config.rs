//! Configuration constants and the run configuration for the arena.

use crate::error::ConfigError;
use crate::types::DamageRange;
use std::path::Path;
use std::str::FromStr;

// Board
pub const DEFAULT_ROWS: i32 = 20;
pub const DEFAULT_COLS: i32 = 20;
pub const MIN_BOARD_DIM: i32 = 10; // Smaller boards are raised to this
pub const MAX_BOARD_DIM: i32 = 1000; // Larger boards are cut down to this
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";
pub const DEFAULT_MOUNDS: usize = 10;
pub const DEFAULT_PITS: usize = 5;
pub const DEFAULT_FLAMES: usize = 5;

// Game rules
pub const MAX_ROUNDS: u32 = 99; // Rounds before an undecided finish
pub const INITIAL_HEALTH: i32 = 100;
pub const GRENADE_AMMO: i32 = 10;

// Loadout limits for move speed and armor
pub const MIN_STAT: i32 = 2;
pub const MAX_STAT: i32 = 5;
pub const STAT_BUDGET: i32 = 7; // move + armor

// Damage
pub const RAILGUN_DAMAGE: DamageRange = DamageRange::new(10, 20);
pub const FLAMETHROWER_DAMAGE: DamageRange = DamageRange::new(30, 50);
pub const GRENADE_DAMAGE: DamageRange = DamageRange::new(10, 40);
pub const HAMMER_DAMAGE: DamageRange = DamageRange::new(50, 60);
pub const FLAME_HAZARD_DAMAGE: DamageRange = DamageRange::new(30, 50);
pub const ARMOR_REDUCTION_PER_POINT: f64 = 0.1;
pub const MAX_ARMOR_REDUCTION: f64 = 0.9;

// Weapon geometry
pub const FLAMETHROWER_REACH: usize = 4; // Steps along the firing line
pub const HAMMER_REACH: i32 = 1; // Chebyshev distance

// Display symbols handed out to robots that bring none of their own
pub const ROBOT_SYMBOLS: [char; 10] = ['!', '@', '#', '$', '%', '&', '*', '+', '?', '~'];

/// How many of each hazard to scatter over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardCounts {
    pub mounds: usize,
    pub pits: usize,
    pub flames: usize,
}

impl HazardCounts {
    pub fn total(&self) -> usize {
        self.mounds + self.pits + self.flames
    }
}

impl Default for HazardCounts {
    fn default() -> Self {
        HazardCounts {
            mounds: DEFAULT_MOUNDS,
            pits: DEFAULT_PITS,
            flames: DEFAULT_FLAMES,
        }
    }
}

/// Parameters for a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    pub rows: i32,
    pub cols: i32,
    pub hazards: HazardCounts,
    pub max_rounds: u32,
    /// Show the full board every round instead of only at debug level.
    pub watch_live: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            hazards: HazardCounts::default(),
            max_rounds: MAX_ROUNDS,
            watch_live: false,
        }
    }
}

impl ArenaConfig {
    /// Returns a copy with the board size forced into the allowed range.
    pub fn sanitized(mut self) -> Self {
        let rows = self.rows.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let cols = self.cols.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        if (rows, cols) != (self.rows, self.cols) {
            log::warn!(
                "Board {}x{} is outside {}..={} per side; using {}x{}",
                self.rows,
                self.cols,
                MIN_BOARD_DIM,
                MAX_BOARD_DIM,
                rows,
                cols
            );
        }
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config: ArenaConfig = content.parse()?;
                log::info!(
                    "Loaded config: {}x{}, Mounds={}, Pits={}, Flames={}, Rounds={}",
                    config.rows,
                    config.cols,
                    config.hazards.mounds,
                    config.hazards.pits,
                    config.hazards.flames,
                    config.max_rounds
                );
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Config file '{}' not found. Using default settings.",
                    path.display()
                );
                Ok(ArenaConfig::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

/// Parses the whitespace separated format
/// `rows cols mounds pits flames max_rounds watch_live`.
/// Trailing fields may be omitted and keep their defaults.
impl FromStr for ArenaConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELDS: [&str; 7] = [
            "rows",
            "cols",
            "mounds",
            "pits",
            "flames",
            "max_rounds",
            "watch_live",
        ];

        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() > FIELDS.len() {
            return Err(ConfigError::TooManyFields(tokens.len()));
        }

        let mut values = Vec::with_capacity(tokens.len());
        for (field, token) in FIELDS.iter().zip(&tokens) {
            let value = token.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                field: *field,
                value: token.to_string(),
            })?;
            if value < 0 {
                return Err(ConfigError::InvalidValue {
                    field: *field,
                    value: token.to_string(),
                });
            }
            values.push(value);
        }

        let mut config = ArenaConfig::default();
        let get = |i: usize| values.get(i).copied();
        if let Some(v) = get(0) {
            config.rows = v.min(i32::MAX as i64) as i32;
        }
        if let Some(v) = get(1) {
            config.cols = v.min(i32::MAX as i64) as i32;
        }
        if let Some(v) = get(2) {
            config.hazards.mounds = v as usize;
        }
        if let Some(v) = get(3) {
            config.hazards.pits = v as usize;
        }
        if let Some(v) = get(4) {
            config.hazards.flames = v as usize;
        }
        if let Some(v) = get(5) {
            config.max_rounds = v.min(u32::MAX as i64) as u32;
        }
        if let Some(v) = get(6) {
            config.watch_live = v != 0;
        }
        Ok(config.sanitized())
    }
}
