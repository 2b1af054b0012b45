use super::orthogonal_step;
use crate::robot::{RobotView, Strategy};
use crate::types::{Position, RadarKind, RadarObj, Weapon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grenadier that lobs at the centre of whatever robots crowd around it
/// and wanders at random when alone.
#[derive(Debug, Clone)]
pub struct Bomber {
    target: Option<Position>,
    rng: StdRng,
}

impl Bomber {
    pub fn new(seed: u64) -> Self {
        Bomber {
            target: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for Bomber {
    fn name(&self) -> &str {
        "Bomber"
    }

    fn symbol(&self) -> Option<char> {
        Some('B')
    }

    fn weapon(&self) -> Weapon {
        Weapon::Grenade
    }

    fn move_speed(&self) -> i32 {
        3
    }

    fn armor(&self) -> i32 {
        3
    }

    fn radar_direction(&mut self, _view: &RobotView) -> i32 {
        0
    }

    fn process_radar_results(&mut self, _view: &RobotView, results: &[RadarObj]) {
        let robots: Vec<Position> = results
            .iter()
            .filter(|obj| obj.kind == RadarKind::LiveRobot)
            .map(RadarObj::position)
            .collect();
        self.target = if robots.is_empty() {
            None
        } else {
            let count = robots.len() as i32;
            let rows: i32 = robots.iter().map(|p| p.row).sum();
            let cols: i32 = robots.iter().map(|p| p.col).sum();
            Some(Position::new(rows / count, cols / count))
        };
    }

    fn shot_location(&mut self, view: &RobotView) -> Option<Position> {
        if view.grenades <= 0 {
            return None;
        }
        self.target
    }

    fn move_direction(&mut self, view: &RobotView) -> (i32, i32) {
        if view.move_speed <= 0 {
            return (0, 0);
        }
        match self.target {
            None => (self.rng.gen_range(1..=8), 1),
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

    fn view_with_ammo(grenades: i32) -> RobotView {
        RobotView {
            position: Position::new(10, 10),
            move_speed: 3,
            armor: 3,
            weapon: Weapon::Grenade,
            grenades,
            health: 100,
            board_rows: 20,
            board_cols: 20,
        }
    }

    #[test]
    fn test_aims_at_cluster_centre() {
        let mut bot = Bomber::new(1);
        let view = view_with_ammo(10);
        bot.process_radar_results(
            &view,
            &[
                RadarObj::new(RadarKind::LiveRobot, 9, 9),
                RadarObj::new(RadarKind::LiveRobot, 11, 10),
                RadarObj::new(RadarKind::Pit, 9, 11),
            ],
        );
        assert_eq!(bot.shot_location(&view), Some(Position::new(10, 9)));
    }

    #[test]
    fn test_holds_fire_when_out_of_grenades() {
        let mut bot = Bomber::new(1);
        let view = view_with_ammo(0);
        bot.process_radar_results(&view, &[RadarObj::new(RadarKind::LiveRobot, 9, 9)]);
        assert_eq!(bot.shot_location(&view), None);
        assert_eq!(bot.move_direction(&view), (1, 1));
    }

    #[test]
    fn test_wanders_one_step_in_a_valid_direction() {
        let mut bot = Bomber::new(99);
        let view = view_with_ammo(10);
        bot.process_radar_results(&view, &[]);
        for _ in 0..50 {
            let (direction, distance) = bot.move_direction(&view);
            assert!((1..=8).contains(&direction));
            assert_eq!(distance, 1);
        }
    }

    #[test]
    fn test_same_seed_wanders_the_same_way() {
        let view = view_with_ammo(10);
        let mut a = Bomber::new(5);
        let mut b = Bomber::new(5);
        let walk_a: Vec<_> = (0..10).map(|_| a.move_direction(&view)).collect();
        let walk_b: Vec<_> = (0..10).map(|_| b.move_direction(&view)).collect();
        assert_eq!(walk_a, walk_b);
    }
}
