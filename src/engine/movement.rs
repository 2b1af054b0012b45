use crate::board::Board;
use crate::config::FLAME_HAZARD_DAMAGE;
use crate::engine::{apply_damage, cell_contents};
use crate::events::GameEvent;
use crate::robot::Robot;
use crate::types::{RadarKind, Terrain};
use crate::utils::{LinePath, clamp_to_board, direction_vector};
use rand::Rng;
use std::collections::VecDeque;

/// Moves robot `mover` up to `distance` cells in compass `direction`.
///
/// The distance is capped by the robot's speed and the destination is
/// clipped to the board. The robot then walks the interpolated line cell
/// by cell: robots (alive or dead) and mounds stop it short, a pit swallows
/// it and ends the move for good, and flames burn it without stopping it
/// unless the burn is fatal. Bad requests are reported and ignored.
pub fn resolve_move<R: Rng + ?Sized>(
    board: &Board,
    robots: &mut [Robot],
    mover: usize,
    direction: i32,
    distance: i32,
    rng: &mut R,
    events: &mut VecDeque<GameEvent>,
) {
    let name = robots[mover].name.clone();
    let speed = robots[mover].move_speed;
    if speed <= 0 {
        events.push_back(GameEvent::Stuck { robot: name });
        return;
    }
    let Some((dr, dc)) = direction_vector(direction) else {
        events.push_back(GameEvent::InvalidDirection {
            robot: name,
            direction,
        });
        return;
    };
    if distance <= 0 {
        events.push_back(GameEvent::StayedPut { robot: name });
        return;
    }

    let distance = distance.min(speed);
    let start = robots[mover].position;
    let destination = clamp_to_board(
        start.offset(dr * distance, dc * distance),
        board.rows(),
        board.cols(),
    );
    crate::debug_move!(
        robots[mover].id,
        "{} heads {} from {} towards {}",
        name,
        direction,
        start,
        destination
    );

    if let Some(path) = LinePath::between(start, destination) {
        for cell in path {
            if !board.in_bounds(cell) {
                break;
            }
            match cell_contents(board, robots, cell) {
                Some(RadarKind::LiveRobot | RadarKind::DeadRobot | RadarKind::Mound) => {
                    events.push_back(GameEvent::Blocked {
                        robot: name.clone(),
                        at: cell,
                    });
                    break;
                }
                _ => {}
            }

            let robot = &mut robots[mover];
            robot.move_to(cell);
            match board.terrain_at(cell) {
                Terrain::Pit => {
                    robot.disable_movement();
                    events.push_back(GameEvent::FellIntoPit {
                        robot: name,
                        at: cell,
                    });
                    return;
                }
                Terrain::Flame => {
                    events.push_back(GameEvent::WalkedThroughFlames {
                        robot: name.clone(),
                        at: cell,
                    });
                    apply_damage(robot, FLAME_HAZARD_DAMAGE, rng, events);
                    if !robot.alive {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    events.push_back(GameEvent::MoveEnded {
        robot: name,
        at: robots[mover].position,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bare_robot, empty_board, robot};
    use crate::types::{Position, Weapon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walk(board: &Board, robots: &mut [Robot], direction: i32, distance: i32) -> Vec<GameEvent> {
        let mut rng = StdRng::seed_from_u64(17);
        let mut events = VecDeque::new();
        resolve_move(board, robots, 0, direction, distance, &mut rng, &mut events);
        events.into_iter().collect()
    }

    #[test]
    fn test_moves_full_distance_on_open_ground() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)]; // speed 3
        walk(&board, &mut robots, 3, 3);
        assert_eq!(robots[0].position(), Position::new(10, 13));
        walk(&board, &mut robots, 8, 2);
        assert_eq!(robots[0].position(), Position::new(8, 11));
    }

    #[test]
    fn test_distance_capped_by_speed() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)];
        walk(&board, &mut robots, 5, 10);
        assert_eq!(robots[0].position(), Position::new(13, 10));
    }

    #[test]
    fn test_destination_clipped_to_board_edge() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 1, 18)];
        let events = walk(&board, &mut robots, 2, 3);
        // NE from (1,18): raw target (-2,21) clips to (0,19)
        assert_eq!(robots[0].position(), Position::new(0, 19));
        assert!(matches!(events.last(), Some(GameEvent::MoveEnded { .. })));

        let events = walk(&board, &mut robots, 1, 3);
        assert_eq!(robots[0].position(), Position::new(0, 19));
        assert_eq!(
            events,
            vec![GameEvent::MoveEnded {
                robot: "A".to_string(),
                at: Position::new(0, 19)
            }]
        );
    }

    #[test]
    fn test_bad_requests_are_no_ops() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)];
        let events = walk(&board, &mut robots, 0, 3);
        assert!(matches!(events[..], [GameEvent::InvalidDirection { direction: 0, .. }]));
        let events = walk(&board, &mut robots, 9, 3);
        assert!(matches!(events[..], [GameEvent::InvalidDirection { direction: 9, .. }]));
        let events = walk(&board, &mut robots, 3, -2);
        assert!(matches!(events[..], [GameEvent::StayedPut { .. }]));
        let events = walk(&board, &mut robots, 3, 0);
        assert!(matches!(events[..], [GameEvent::StayedPut { .. }]));
        assert_eq!(robots[0].position(), Position::new(10, 10));
    }

    #[test]
    fn test_stuck_robot_cannot_move() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)];
        robots[0].disable_movement();
        let events = walk(&board, &mut robots, 3, 1);
        assert!(matches!(events[..], [GameEvent::Stuck { .. }]));
        assert_eq!(robots[0].position(), Position::new(10, 10));
    }

    #[test]
    fn test_mound_stops_robot_short() {
        let mut board = empty_board();
        board.set_terrain(Position::new(10, 12), Terrain::Mound);
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)];
        walk(&board, &mut robots, 3, 3);
        assert_eq!(robots[0].position(), Position::new(10, 11));
    }

    #[test]
    fn test_blocked_on_first_step_stays_put() {
        let board = empty_board();
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10), robot(1, Weapon::Hammer, 11, 10)];
        robots[1].mark_dead();
        let events = walk(&board, &mut robots, 5, 3);
        assert_eq!(robots[0].position(), Position::new(10, 10));
        assert!(events.contains(&GameEvent::Blocked {
            robot: "A".to_string(),
            at: Position::new(11, 10)
        }));
    }

    #[test]
    fn test_pit_swallows_robot_and_ends_move() {
        let mut board = empty_board();
        board.set_terrain(Position::new(8, 10), Terrain::Pit);
        let mut robots = vec![robot(0, Weapon::Railgun, 10, 10)];
        let events = walk(&board, &mut robots, 1, 3);
        assert_eq!(robots[0].position(), Position::new(8, 10));
        assert_eq!(robots[0].move_speed(), 0);
        assert!(matches!(events.last(), Some(GameEvent::FellIntoPit { .. })));

        let events = walk(&board, &mut robots, 1, 1);
        assert!(matches!(events[..], [GameEvent::Stuck { .. }]));
    }

    #[test]
    fn test_flames_burn_once_and_robot_keeps_going() {
        let mut board = empty_board();
        board.set_terrain(Position::new(10, 12), Terrain::Flame);
        let mut robots = vec![bare_robot(0, Weapon::Railgun, 10, 10), robot(1, Weapon::Hammer, 2, 2)];
        let events = walk(&board, &mut robots, 3, 3);

        assert_eq!(robots[0].position(), Position::new(10, 13));
        let burns = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Damaged { .. }))
            .count();
        assert_eq!(burns, 1);
        let lost = 100 - robots[0].health();
        assert!((30..=50).contains(&lost), "flame damage {} out of range", lost);
        assert_eq!(robots[1].health(), 100);
    }

    #[test]
    fn test_fatal_flames_end_the_move() {
        let mut board = empty_board();
        board.set_terrain(Position::new(10, 11), Terrain::Flame);
        let mut robots = vec![bare_robot(0, Weapon::Railgun, 10, 10)];
        robots[0].health = 5;
        let events = walk(&board, &mut robots, 3, 3);
        assert_eq!(robots[0].position(), Position::new(10, 11));
        assert!(!robots[0].is_alive());
        assert!(matches!(events.last(), Some(GameEvent::Destroyed { .. })));
    }
}
