use crate::board::Board;
use crate::config::{FLAMETHROWER_REACH, HAMMER_REACH};
use crate::engine::{apply_damage, robot_at};
use crate::events::GameEvent;
use crate::robot::Robot;
use crate::types::{Position, Weapon};
use crate::utils::LinePath;
use rand::Rng;
use std::collections::VecDeque;

/// Fires `shooter`'s weapon at `target`.
///
/// Off-board targets are ignored. Each weapon then picks its victims:
/// the railgun pierces everything on the line through the target to the
/// board edge, the flamethrower scorches a three-wide band for a few
/// steps, a grenade bursts over the 3x3 block around the target and the
/// hammer only reaches an adjacent cell. The shooter is never hurt by its
/// own shot.
pub fn resolve_shot<R: Rng + ?Sized>(
    board: &Board,
    robots: &mut [Robot],
    shooter: usize,
    target: Position,
    rng: &mut R,
    events: &mut VecDeque<GameEvent>,
) {
    let name = robots[shooter].name.clone();
    if !board.in_bounds(target) {
        events.push_back(GameEvent::ShotOutOfBounds {
            robot: name,
            target,
        });
        return;
    }

    let weapon = robots[shooter].weapon;
    if weapon == Weapon::Grenade && robots[shooter].grenades <= 0 {
        events.push_back(GameEvent::OutOfGrenades { robot: name });
        return;
    }
    events.push_back(GameEvent::Fired {
        robot: name.clone(),
        weapon,
        target,
    });
    crate::debug_weapon!(robots[shooter].id, "{} fires {} at {}", name, weapon, target);

    let origin = robots[shooter].position;
    match weapon {
        Weapon::Railgun => {
            let Some(beam) = LinePath::new(origin, target) else {
                events.push_back(GameEvent::NoLineOfFire { robot: name });
                return;
            };
            for cell in beam.take_while(|cell| board.in_bounds(*cell)) {
                hit_cell(robots, shooter, cell, weapon, rng, events);
            }
        }
        Weapon::Flamethrower => {
            let Some(path) = LinePath::new(origin, target) else {
                events.push_back(GameEvent::NoLineOfFire { robot: name });
                return;
            };
            // Band runs across the dominant axis of the shot
            let across_columns = (target.row - origin.row).abs() >= (target.col - origin.col).abs();
            for cell in path
                .limited(FLAMETHROWER_REACH)
                .take_while(|cell| board.in_bounds(*cell))
            {
                for offset in -1..=1 {
                    let scorched = if across_columns {
                        cell.offset(0, offset)
                    } else {
                        cell.offset(offset, 0)
                    };
                    if board.in_bounds(scorched) {
                        hit_cell(robots, shooter, scorched, weapon, rng, events);
                    }
                }
            }
        }
        Weapon::Grenade => {
            robots[shooter].decrement_grenades();
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let cell = target.offset(dr, dc);
                    if board.in_bounds(cell) {
                        hit_cell(robots, shooter, cell, weapon, rng, events);
                    }
                }
            }
        }
        Weapon::Hammer => {
            if origin.chebyshev(target) > HAMMER_REACH {
                events.push_back(GameEvent::HammerOutOfReach {
                    robot: name,
                    target,
                });
            } else if !hit_cell(robots, shooter, target, weapon, rng, events) {
                events.push_back(GameEvent::NothingToHammer {
                    robot: name,
                    target,
                });
            }
        }
    }
}

/// Damages the live robot on `cell` unless it is the shooter.
/// Returns whether anything was hit.
fn hit_cell<R: Rng + ?Sized>(
    robots: &mut [Robot],
    shooter: usize,
    cell: Position,
    weapon: Weapon,
    rng: &mut R,
    events: &mut VecDeque<GameEvent>,
) -> bool {
    match robot_at(robots, cell) {
        Some(idx) if idx != shooter && robots[idx].alive => {
            apply_damage(&mut robots[idx], weapon.damage(), rng, events);
            true
        }
        _ => false,
    }
}
