use crate::config::FLAMETHROWER_REACH;
use crate::robot::{RobotView, Strategy};
use crate::types::{Position, RadarKind, RadarObj, Weapon};
use std::collections::HashSet;

/// Flamethrower bot that rotates its radar through every compass point,
/// patrols the board edge clockwise and torches anything within reach.
///
/// Once a target is in range the radar stays locked on that heading.
/// Hazards seen on radar are remembered and avoided when closing in.
#[derive(Debug, Clone)]
pub struct PerimeterFlame {
    radar: i32,
    locked: bool,
    target: Option<Position>,
    hazards: HashSet<Position>,
}

impl PerimeterFlame {
    pub fn new() -> Self {
        PerimeterFlame {
            radar: 1,
            locked: false,
            target: None,
            hazards: HashSet::new(),
        }
    }

    fn reach() -> i32 {
        FLAMETHROWER_REACH as i32
    }

    fn passable(&self, pos: Position) -> bool {
        !self.hazards.contains(&pos)
    }

    /// Clockwise walk along the edge, or the shortest run to reach it.
    fn patrol(&self, view: &RobotView) -> (i32, i32) {
        let Position { row, col } = view.position;
        let last_row = view.board_rows - 1;
        let last_col = view.board_cols - 1;
        let speed = view.move_speed;

        if row == 0 && col < last_col {
            (3, (last_col - col).min(speed))
        } else if col == last_col && row < last_row {
            (5, (last_row - row).min(speed))
        } else if row == last_row && col > 0 {
            (7, col.min(speed))
        } else if col == 0 && row > 0 {
            (1, row.min(speed))
        } else {
            // Nearest edge wins; ties keep the earlier of up, down, left, right
            let (direction, gap) = [(1, row), (5, last_row - row), (7, col), (3, last_col - col)]
                .into_iter()
                .fold((1, row), |best, candidate| {
                    if candidate.1 < best.1 { candidate } else { best }
                });
            if gap > 0 { (direction, gap.min(speed)) } else { (0, 0) }
        }
    }
}

impl Default for PerimeterFlame {
    fn default() -> Self {
        Self::new()
    }
}

fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

impl Strategy for PerimeterFlame {
    fn name(&self) -> &str {
        "PerimeterFlame"
    }

    fn weapon(&self) -> Weapon {
        Weapon::Flamethrower
    }

    fn move_speed(&self) -> i32 {
        3
    }

    fn armor(&self) -> i32 {
        4
    }

    fn radar_direction(&mut self, _view: &RobotView) -> i32 {
        let direction = self.radar;
        if !(self.locked && self.target.is_some()) {
            self.radar = self.radar % 8 + 1;
        }
        direction
    }

    fn process_radar_results(&mut self, view: &RobotView, results: &[RadarObj]) {
        self.hazards.extend(
            results
                .iter()
                .filter(|obj| matches!(obj.kind, RadarKind::Mound | RadarKind::Pit | RadarKind::Flame))
                .map(RadarObj::position),
        );

        self.target = results
            .iter()
            .filter(|obj| obj.kind == RadarKind::LiveRobot)
            .map(RadarObj::position)
            .filter(|pos| manhattan(view.position, *pos) <= Self::reach())
            .min_by_key(|pos| manhattan(view.position, *pos));
        self.locked = self.target.is_some();
    }

    fn shot_location(&mut self, view: &RobotView) -> Option<Position> {
        let target = self.target?;
        if manhattan(view.position, target) <= Self::reach() {
            Some(target)
        } else {
            self.target = None;
            self.locked = false;
            None
        }
    }

    fn move_direction(&mut self, view: &RobotView) -> (i32, i32) {
        let Some(target) = self.target else {
            return self.patrol(view);
        };
        let here = view.position;
        let row_step = (target.row - here.row).signum();
        let col_step = (target.col - here.col).signum();

        if row_step != 0 && self.passable(here.offset(row_step, 0)) {
            (if row_step > 0 { 5 } else { 1 }, 1)
        } else if col_step != 0 && self.passable(here.offset(0, col_step)) {
            (if col_step > 0 { 3 } else { 7 }, 1)
        } else {
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(row: i32, col: i32) -> RobotView {
        RobotView {
            position: Position::new(row, col),
            move_speed: 3,
            armor: 4,
            weapon: Weapon::Flamethrower,
            grenades: 0,
            health: 100,
            board_rows: 20,
            board_cols: 20,
        }
    }

    #[test]
    fn test_radar_rotates_until_locked() {
        let mut bot = PerimeterFlame::new();
        let view = view_at(10, 10);
        let sweeps: Vec<i32> = (0..9).map(|_| bot.radar_direction(&view)).collect();
        assert_eq!(sweeps, vec![1, 2, 3, 4, 5, 6, 7, 8, 1]);

        bot.process_radar_results(&view, &[RadarObj::new(RadarKind::LiveRobot, 8, 10)]);
        assert_eq!(bot.radar_direction(&view), 2);
        assert_eq!(bot.radar_direction(&view), 2);
    }

    #[test]
    fn test_fires_only_within_reach() {
        let mut bot = PerimeterFlame::new();
        let view = view_at(10, 10);
        bot.process_radar_results(
            &view,
            &[
                RadarObj::new(RadarKind::LiveRobot, 2, 10),
                RadarObj::new(RadarKind::LiveRobot, 7, 11),
            ],
        );
        assert_eq!(bot.shot_location(&view), Some(Position::new(7, 11)));

        bot.process_radar_results(&view, &[RadarObj::new(RadarKind::LiveRobot, 2, 10)]);
        assert_eq!(bot.shot_location(&view), None);
    }

    #[test]
    fn test_patrols_edges_clockwise() {
        let mut bot = PerimeterFlame::new();
        bot.process_radar_results(&view_at(0, 0), &[]);
        assert_eq!(bot.move_direction(&view_at(0, 5)), (3, 3));
        assert_eq!(bot.move_direction(&view_at(0, 18)), (3, 1));
        assert_eq!(bot.move_direction(&view_at(4, 19)), (5, 3));
        assert_eq!(bot.move_direction(&view_at(19, 2)), (7, 2));
        assert_eq!(bot.move_direction(&view_at(6, 0)), (1, 3));
    }

    #[test]
    fn test_heads_for_nearest_edge_from_inside() {
        let mut bot = PerimeterFlame::new();
        assert_eq!(bot.move_direction(&view_at(2, 10)), (1, 2));
        assert_eq!(bot.move_direction(&view_at(10, 17)), (3, 2));
        assert_eq!(bot.move_direction(&view_at(16, 8)), (5, 3));
    }

    #[test]
    fn test_closes_in_around_remembered_hazards() {
        let mut bot = PerimeterFlame::new();
        let view = view_at(10, 10);
        bot.process_radar_results(
            &view,
            &[
                RadarObj::new(RadarKind::Pit, 9, 10),
                RadarObj::new(RadarKind::LiveRobot, 8, 12),
            ],
        );
        assert_eq!(bot.move_direction(&view), (3, 1));
    }
}
