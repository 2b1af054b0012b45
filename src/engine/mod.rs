// Engine entry point: radar, movement and combat resolution

pub mod combat;
pub mod damage;
pub mod movement;
pub mod radar;

use crate::board::Board;
use crate::robot::Robot;
use crate::types::{Position, RadarKind};

pub use combat::resolve_shot;
pub use damage::apply_damage;
pub use movement::resolve_move;
pub use radar::scan;

/// Index of the robot (alive or dead) standing on `pos`.
pub fn robot_at(robots: &[Robot], pos: Position) -> Option<usize> {
    robots.iter().position(|robot| robot.position == pos)
}

/// What occupies a cell. Robots take precedence over terrain.
pub fn cell_contents(board: &Board, robots: &[Robot], pos: Position) -> Option<RadarKind> {
    match robot_at(robots, pos) {
        Some(idx) if robots[idx].alive => Some(RadarKind::LiveRobot),
        Some(_) => Some(RadarKind::DeadRobot),
        None => RadarKind::from_terrain(board.terrain_at(pos)),
    }
}
