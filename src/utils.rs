use crate::types::Position;

/// Row/column deltas indexed by direction code. Code 0 is "here";
/// 1..=8 run clockwise from north.
pub const DIRECTIONS: [(i32, i32); 9] = [
    (0, 0),   // 0: local
    (-1, 0),  // 1: N
    (-1, 1),  // 2: NE
    (0, 1),   // 3: E
    (1, 1),   // 4: SE
    (1, 0),   // 5: S
    (1, -1),  // 6: SW
    (0, -1),  // 7: W
    (-1, -1), // 8: NW
];

/// Unit vector for a compass direction code, `None` outside 1..=8.
pub fn direction_vector(code: i32) -> Option<(i32, i32)> {
    if (1..=8).contains(&code) {
        Some(DIRECTIONS[code as usize])
    } else {
        None
    }
}

/// Bounds check against a `rows x cols` grid
pub fn in_bounds(pos: Position, rows: i32, cols: i32) -> bool {
    pos.row >= 0 && pos.row < rows && pos.col >= 0 && pos.col < cols
}

/// Clamp a position onto a `rows x cols` grid
pub fn clamp_to_board(pos: Position, rows: i32, cols: i32) -> Position {
    Position {
        row: pos.row.clamp(0, rows - 1),
        col: pos.col.clamp(0, cols - 1),
    }
}

/// Walks the integer cells of a straight line from `from` towards `to`.
///
/// The line is split into `max(|dr|, |dc|)` equal increments. Each step
/// advances the fractional cursor and rounds it to the nearest cell
/// (half away from zero). A step landing on the cell just yielded is
/// skipped but still counts against the step limit. The origin cell is
/// never yielded.
///
/// Unlimited paths keep going past `to` in the same direction, so
/// callers bound them with [`LinePath::limited`] or `take_while`.
#[derive(Debug, Clone)]
pub struct LinePath {
    row: f64,
    col: f64,
    row_inc: f64,
    col_inc: f64,
    last: Position,
    taken: usize,
    limit: Option<usize>,
}

impl LinePath {
    /// Returns `None` when `from == to`, as there is no direction to walk.
    pub fn new(from: Position, to: Position) -> Option<Self> {
        let steps = line_steps(from, to);
        if steps == 0 {
            return None;
        }
        let delta_r = (to.row - from.row) as f64;
        let delta_c = (to.col - from.col) as f64;
        Some(LinePath {
            row: from.row as f64,
            col: from.col as f64,
            row_inc: delta_r / steps as f64,
            col_inc: delta_c / steps as f64,
            last: from,
            taken: 0,
            limit: None,
        })
    }

    /// The path from `from` that stops exactly at `to`.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let steps = line_steps(from, to) as usize;
        Self::new(from, to).map(|path| path.limited(steps))
    }

    /// Caps the number of steps taken, skipped duplicates included.
    pub fn limited(mut self, steps: usize) -> Self {
        self.limit = Some(steps);
        self
    }
}

impl Iterator for LinePath {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            if self.limit.is_some_and(|limit| self.taken >= limit) {
                return None;
            }
            self.taken += 1;
            self.row += self.row_inc;
            self.col += self.col_inc;

            let cell = Position::new(self.row.round() as i32, self.col.round() as i32);
            if cell == self.last {
                continue;
            }
            self.last = cell;
            return Some(cell);
        }
    }
}

/// Number of interpolation steps between two cells.
pub fn line_steps(from: Position, to: Position) -> i32 {
    (to.row - from.row).abs().max((to.col - from.col).abs())
}
