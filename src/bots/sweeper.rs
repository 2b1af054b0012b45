use crate::robot::{RobotView, Strategy};
use crate::types::{Position, RadarKind, RadarObj, Weapon};

const EAST: i32 = 3;
const WEST: i32 = 7;

/// Railgun patrol that sweeps its radar east and west along its row and
/// fires at the first live robot it sees.
#[derive(Debug, Clone)]
pub struct Sweeper {
    radar: i32,
    target: Option<Position>,
}

impl Sweeper {
    pub fn new() -> Self {
        Sweeper {
            radar: EAST,
            target: None,
        }
    }
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Sweeper {
    fn name(&self) -> &str {
        "Sweeper"
    }

    fn symbol(&self) -> Option<char> {
        Some('S')
    }

    fn weapon(&self) -> Weapon {
        Weapon::Railgun
    }

    fn move_speed(&self) -> i32 {
        4
    }

    fn armor(&self) -> i32 {
        3
    }

    fn radar_direction(&mut self, _view: &RobotView) -> i32 {
        let direction = self.radar;
        self.radar = if self.radar == EAST { WEST } else { EAST };
        direction
    }

    fn process_radar_results(&mut self, _view: &RobotView, results: &[RadarObj]) {
        self.target = results
            .iter()
            .find(|obj| obj.kind == RadarKind::LiveRobot)
            .map(RadarObj::position);
    }

    fn shot_location(&mut self, _view: &RobotView) -> Option<Position> {
        // One shot per sighting; the next sweep has to find it again
        self.target.take()
    }

    fn move_direction(&mut self, view: &RobotView) -> (i32, i32) {
        if view.move_speed <= 0 {
            return (0, 0);
        }
        let col = view.position.col;
        let direction = if col <= 1 {
            EAST
        } else if col >= view.board_cols - 2 {
            WEST
        } else {
            self.radar
        };
        (direction, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(row: i32, col: i32) -> RobotView {
        RobotView {
            position: Position::new(row, col),
            move_speed: 4,
            armor: 3,
            weapon: Weapon::Railgun,
            grenades: 0,
            health: 100,
            board_rows: 20,
            board_cols: 20,
        }
    }

    #[test]
    fn test_radar_alternates_east_west() {
        let mut bot = Sweeper::new();
        let view = view_at(5, 5);
        let sweeps: Vec<i32> = (0..4).map(|_| bot.radar_direction(&view)).collect();
        assert_eq!(sweeps, vec![EAST, WEST, EAST, WEST]);
    }

    #[test]
    fn test_fires_once_at_first_live_robot() {
        let mut bot = Sweeper::new();
        let view = view_at(5, 5);
        bot.process_radar_results(
            &view,
            &[
                RadarObj::new(RadarKind::Mound, 5, 6),
                RadarObj::new(RadarKind::DeadRobot, 5, 7),
                RadarObj::new(RadarKind::LiveRobot, 5, 9),
                RadarObj::new(RadarKind::LiveRobot, 5, 12),
            ],
        );
        assert_eq!(bot.shot_location(&view), Some(Position::new(5, 9)));
        assert_eq!(bot.shot_location(&view), None);
    }

    #[test]
    fn test_patrol_turns_at_edges() {
        let mut bot = Sweeper::new();
        assert_eq!(bot.move_direction(&view_at(3, 1)), (EAST, 1));
        assert_eq!(bot.move_direction(&view_at(3, 18)), (WEST, 1));
        // Mid-board it follows the next radar sweep
        bot.radar_direction(&view_at(3, 9));
        assert_eq!(bot.move_direction(&view_at(3, 9)), (WEST, 1));
    }
}
