use super::orthogonal_step;
use crate::robot::{RobotView, Strategy};
use crate::types::{Position, RadarKind, RadarObj, Weapon};

/// Heavily armored hammer bot. Scans its neighbourhood, closes in on the
/// nearest robot and swings once it is adjacent.
#[derive(Debug, Clone, Default)]
pub struct TankBuddy {
    target: Option<Position>,
}

impl TankBuddy {
    pub fn new() -> Self {
        TankBuddy::default()
    }
}

fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

impl Strategy for TankBuddy {
    fn name(&self) -> &str {
        "TankBuddy"
    }

    fn symbol(&self) -> Option<char> {
        Some('T')
    }

    fn weapon(&self) -> Weapon {
        Weapon::Hammer
    }

    fn move_speed(&self) -> i32 {
        2
    }

    fn armor(&self) -> i32 {
        5
    }

    fn radar_direction(&mut self, _view: &RobotView) -> i32 {
        0
    }

    fn process_radar_results(&mut self, view: &RobotView, results: &[RadarObj]) {
        // min_by_key keeps the first of equally close robots
        self.target = results
            .iter()
            .filter(|obj| obj.kind == RadarKind::LiveRobot)
            .map(RadarObj::position)
            .min_by_key(|pos| manhattan(view.position, *pos));
    }

    fn shot_location(&mut self, view: &RobotView) -> Option<Position> {
        self.target
            .filter(|target| view.position.chebyshev(*target) <= 1)
    }

    fn move_direction(&mut self, view: &RobotView) -> (i32, i32) {
        if view.move_speed <= 0 {
            return (0, 0);
        }
        match self.target {
            None if view.position.row < view.board_rows / 2 => (5, 1),
            None => (1, 1),
            Some(target) => match orthogonal_step(view.position, target) {
                0 => (0, 0),
                direction => (direction, 1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(row: i32, col: i32) -> RobotView {
        RobotView {
            position: Position::new(row, col),
            move_speed: 2,
            armor: 5,
            weapon: Weapon::Hammer,
            grenades: 0,
            health: 100,
            board_rows: 20,
            board_cols: 20,
        }
    }

    #[test]
    fn test_targets_nearest_robot() {
        let mut bot = TankBuddy::new();
        let view = view_at(10, 10);
        bot.process_radar_results(
            &view,
            &[
                RadarObj::new(RadarKind::LiveRobot, 13, 10),
                RadarObj::new(RadarKind::LiveRobot, 11, 11),
                RadarObj::new(RadarKind::DeadRobot, 10, 11),
            ],
        );
        assert_eq!(bot.shot_location(&view), Some(Position::new(11, 11)));
    }

    #[test]
    fn test_holds_swing_until_adjacent() {
        let mut bot = TankBuddy::new();
        let view = view_at(10, 10);
        bot.process_radar_results(&view, &[RadarObj::new(RadarKind::LiveRobot, 10, 13)]);
        assert_eq!(bot.shot_location(&view), None);
        assert_eq!(bot.move_direction(&view), (3, 1));
    }

    #[test]
    fn test_wanders_towards_middle_rows_without_target() {
        let mut bot = TankBuddy::new();
        bot.process_radar_results(&view_at(3, 3), &[]);
        assert_eq!(bot.move_direction(&view_at(3, 3)), (5, 1));
        assert_eq!(bot.move_direction(&view_at(15, 3)), (1, 1));
    }
}
