// Scripted strategy and roster helpers shared by unit tests

use crate::board::Board;
use crate::robot::{Robot, RobotView, Strategy};
use crate::types::{Position, RadarObj, Weapon};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Plays back queued answers. Falls back to "hold fire, stay put".
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    name: String,
    weapon: Weapon,
    move_speed: i32,
    armor: i32,
    radar: i32,
    shots: VecDeque<Option<Position>>,
    moves: VecDeque<(i32, i32)>,
    pub seen: Rc<RefCell<Vec<Vec<RadarObj>>>>,
}

impl Scripted {
    pub fn new(weapon: Weapon, move_speed: i32, armor: i32) -> Self {
        Scripted {
            name: "Scripted".to_string(),
            weapon,
            move_speed,
            armor,
            radar: 0,
            shots: VecDeque::new(),
            moves: VecDeque::new(),
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn radar(mut self, direction: i32) -> Self {
        self.radar = direction;
        self
    }

    pub fn shoot(mut self, target: Position) -> Self {
        self.shots.push_back(Some(target));
        self
    }

    /// Queues a move; the shot slot for that turn stays empty.
    pub fn walk(mut self, direction: i32, distance: i32) -> Self {
        self.shots.push_back(None);
        self.moves.push_back((direction, distance));
        self
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn weapon(&self) -> Weapon {
        self.weapon
    }

    fn move_speed(&self) -> i32 {
        self.move_speed
    }

    fn armor(&self) -> i32 {
        self.armor
    }

    fn radar_direction(&mut self, _view: &RobotView) -> i32 {
        self.radar
    }

    fn process_radar_results(&mut self, _view: &RobotView, results: &[RadarObj]) {
        self.seen.borrow_mut().push(results.to_vec());
    }

    fn shot_location(&mut self, _view: &RobotView) -> Option<Position> {
        self.shots.pop_front().flatten()
    }

    fn move_direction(&mut self, _view: &RobotView) -> (i32, i32) {
        self.moves.pop_front().unwrap_or((0, 0))
    }
}

/// Robot with the given loadout at `(row, col)`, named after its symbol.
pub(crate) fn robot(id: usize, weapon: Weapon, row: i32, col: i32) -> Robot {
    let symbol = char::from(b'A' + id as u8);
    Robot::new(
        id,
        symbol,
        Box::new(Scripted::new(weapon, 3, 4).named(&symbol.to_string())),
        Position::new(row, col),
    )
}

/// Same as [`robot`] but with armor stripped so damage rolls land unreduced.
pub(crate) fn bare_robot(id: usize, weapon: Weapon, row: i32, col: i32) -> Robot {
    let mut robot = robot(id, weapon, row, col);
    robot.armor = 0;
    robot
}

pub(crate) fn empty_board() -> Board {
    Board::new(20, 20)
}
