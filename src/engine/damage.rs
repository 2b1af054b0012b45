use crate::config::{ARMOR_REDUCTION_PER_POINT, MAX_ARMOR_REDUCTION};
use crate::events::GameEvent;
use crate::robot::Robot;
use crate::types::DamageRange;
use rand::Rng;
use std::collections::VecDeque;

/// Fraction of incoming damage absorbed by `armor` points.
pub fn armor_reduction(armor: i32) -> f64 {
    (ARMOR_REDUCTION_PER_POINT * armor.max(0) as f64).min(MAX_ARMOR_REDUCTION)
}

/// Damage left after armor, rounded half away from zero and never negative.
pub fn mitigate(base: i32, armor: i32) -> i32 {
    let reduced = (base as f64 * (1.0 - armor_reduction(armor))).round() as i32;
    reduced.max(0)
}

/// Rolls `range`, mitigates it by the target's armor and applies the hit.
///
/// Every hit on a live robot wears one point of armor off, even when the
/// mitigated damage is zero. A robot brought to zero health is marked dead.
/// Dead robots ignore further hits. Returns the damage dealt.
pub fn apply_damage<R: Rng + ?Sized>(
    target: &mut Robot,
    range: DamageRange,
    rng: &mut R,
    events: &mut VecDeque<GameEvent>,
) -> Option<i32> {
    if !target.alive {
        return None;
    }

    let base = if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    };
    let amount = mitigate(base, target.armor);

    let before = target.health;
    target.reduce_armor(1);
    let after = target.take_damage(amount);
    crate::debug_weapon!(
        target.id,
        "{} rolled {} vs armor, takes {} ({} -> {})",
        target.name,
        base,
        amount,
        before,
        after
    );
    events.push_back(GameEvent::Damaged {
        robot: target.name.clone(),
        amount,
        health_before: before,
        health_after: after,
    });

    if after <= 0 {
        target.mark_dead();
        events.push_back(GameEvent::Destroyed {
            robot: target.name.clone(),
        });
    }
    Some(amount)
}
