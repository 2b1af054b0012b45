use crate::board::Board;
use crate::engine::cell_contents;
use crate::robot::Robot;
use crate::types::{Position, RadarObj};
use crate::utils::direction_vector;

/// Sweeps the radar from `origin`.
///
/// Direction 0 (and any code outside 1..=8) looks at the eight
/// neighbouring cells. A compass direction walks outward until the beam
/// leaves the board. North/south beams probe a three-cell strip across the
/// columns at every step and east/west beams a strip across the rows;
/// diagonal beams only probe the cell on the line itself.
///
/// Results come back in scan order, one per non-empty cell. The origin is
/// never reported.
pub fn scan(board: &Board, robots: &[Robot], origin: Position, direction: i32) -> Vec<RadarObj> {
    let mut results = Vec::new();
    let mut probe = |pos: Position| {
        if pos == origin || !board.in_bounds(pos) {
            return;
        }
        if let Some(kind) = cell_contents(board, robots, pos) {
            results.push(RadarObj::new(kind, pos.row, pos.col));
        }
    };

    let Some((dr, dc)) = direction_vector(direction) else {
        for dr in -1..=1 {
            for dc in -1..=1 {
                probe(origin.offset(dr, dc));
            }
        }
        return results;
    };

    let mut step = 1;
    loop {
        let base = origin.offset(dr * step, dc * step);
        if !board.in_bounds(base) {
            break;
        }
        if dc == 0 {
            for offset in -1..=1 {
                probe(base.offset(0, offset));
            }
        } else if dr == 0 {
            for offset in -1..=1 {
                probe(base.offset(offset, 0));
            }
        } else {
            probe(base);
        }
        step += 1;
    }
    results
}
