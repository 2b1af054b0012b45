use crate::config;
use crate::types::{Position, RadarObj, Weapon};
use std::fmt;

/// Pluggable decision logic for a robot.
///
/// The engine calls the turn methods once per turn, in order:
/// [`radar_direction`](Strategy::radar_direction), then
/// [`process_radar_results`](Strategy::process_radar_results), then
/// [`shot_location`](Strategy::shot_location) and, only if that returns
/// `None`, [`move_direction`](Strategy::move_direction).
///
/// Strategies never touch engine state. They read a [`RobotView`]
/// snapshot and answer with plain values which the engine validates.
pub trait Strategy: fmt::Debug {
    fn name(&self) -> &str;

    /// Display symbol; `None` lets the arena assign one.
    fn symbol(&self) -> Option<char> {
        None
    }

    fn weapon(&self) -> Weapon;

    fn move_speed(&self) -> i32;

    fn armor(&self) -> i32;

    /// Direction code 0..=8 to sweep. Anything else is treated as 0.
    fn radar_direction(&mut self, view: &RobotView) -> i32;

    fn process_radar_results(&mut self, view: &RobotView, results: &[RadarObj]);

    /// Where to fire this turn, if at all.
    fn shot_location(&mut self, view: &RobotView) -> Option<Position>;

    /// `(direction code, distance)` to move when not firing.
    fn move_direction(&mut self, view: &RobotView) -> (i32, i32);
}

/// Read-only snapshot of a robot handed to its strategy each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotView {
    pub position: Position,
    pub move_speed: i32,
    pub armor: i32,
    pub weapon: Weapon,
    pub grenades: i32,
    pub health: i32,
    pub board_rows: i32,
    pub board_cols: i32,
}

// Represents a robot in the arena
#[derive(Debug)]
pub struct Robot {
    pub id: usize, // Registration index, also the turn order
    pub name: String,
    pub symbol: char,
    pub(crate) position: Position,
    pub(crate) health: i32,
    pub(crate) armor: i32,
    pub(crate) move_speed: i32,
    pub(crate) weapon: Weapon,
    pub(crate) grenades: i32,
    pub(crate) alive: bool,
    pub(crate) strategy: Box<dyn Strategy>,
}

impl Robot {
    /// Builds a robot from its strategy's loadout.
    ///
    /// Move speed and armor are clamped into the allowed stat range; a
    /// loadout that misses the stat budget is accepted with a warning.
    pub fn new(id: usize, symbol: char, strategy: Box<dyn Strategy>, position: Position) -> Self {
        let name = match strategy.name() {
            "" => format!("Robot{}", id + 1),
            name => name.to_string(),
        };
        let move_speed = strategy.move_speed().clamp(config::MIN_STAT, config::MAX_STAT);
        let armor = strategy.armor().clamp(config::MIN_STAT, config::MAX_STAT);
        if move_speed != strategy.move_speed() || armor != strategy.armor() {
            log::warn!(
                "{} requested move {} / armor {}; clamped to {} / {}",
                name,
                strategy.move_speed(),
                strategy.armor(),
                move_speed,
                armor
            );
        }
        if move_speed + armor != config::STAT_BUDGET {
            log::warn!(
                "{} spends {} stat points instead of {}",
                name,
                move_speed + armor,
                config::STAT_BUDGET
            );
        }
        let weapon = strategy.weapon();

        Robot {
            id,
            name,
            symbol,
            position,
            health: config::INITIAL_HEALTH,
            armor,
            move_speed,
            weapon,
            grenades: weapon.starting_ammo(),
            alive: true,
            strategy,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn move_speed(&self) -> i32 {
        self.move_speed
    }

    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    pub fn grenades(&self) -> i32 {
        self.grenades
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Still in the fight: alive with health left.
    pub fn is_active(&self) -> bool {
        self.alive && self.health > 0
    }

    pub fn view(&self, board_rows: i32, board_cols: i32) -> RobotView {
        RobotView {
            position: self.position,
            move_speed: self.move_speed,
            armor: self.armor,
            weapon: self.weapon,
            grenades: self.grenades,
            health: self.health,
            board_rows,
            board_cols,
        }
    }

    /// Subtracts health, floored at zero. Returns the new health.
    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount.max(0)).max(0);
        self.health
    }

    pub(crate) fn reduce_armor(&mut self, amount: i32) {
        self.armor = (self.armor - amount).max(0);
    }

    pub(crate) fn decrement_grenades(&mut self) {
        self.grenades = (self.grenades - 1).max(0);
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Pit effect: the robot never moves again.
    pub(crate) fn disable_movement(&mut self) {
        self.move_speed = 0;
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }

    /// One-line status for board listings
    pub fn stats_line(&self) -> String {
        let mut line = format!(
            "{} {} ({},{}) Health: {} Armor: {} Move: {} Weapon: {}",
            self.symbol,
            self.name,
            self.position.row,
            self.position.col,
            self.health,
            self.armor,
            self.move_speed,
            self.weapon
        );
        if self.weapon == Weapon::Grenade {
            line.push_str(&format!(" Grenades: {}", self.grenades));
        }
        if !self.alive {
            line.push_str("  (DEAD)");
        }
        line
    }
}
