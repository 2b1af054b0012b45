use crate::board::Board;
use crate::events::GameEvent;
use crate::game::Outcome;
use crate::robot::Robot;
use crate::types::{Position, RadarKind};
use log::{Level, info, log};

/// Read-only view of the arena handed to presenters each round.
#[derive(Debug, Clone, Copy)]
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub robots: &'a [Robot],
}

impl BoardSnapshot<'_> {
    /// Text rendering: column header, one line per row (robots drawn as
    /// `R<symbol>` or `X<symbol>` when dead), then a stats line per robot.
    pub fn render(&self) -> String {
        let mut out = String::from("    ");
        for col in 0..self.board.cols() {
            out.push_str(&format!("{:>2} ", col));
        }
        out.push('\n');

        for row in 0..self.board.rows() {
            out.push_str(&format!("{:>2} ", row));
            for col in 0..self.board.cols() {
                let pos = Position::new(row, col);
                match self.robots.iter().find(|r| r.position() == pos) {
                    Some(robot) => {
                        let kind = if robot.is_alive() {
                            RadarKind::LiveRobot
                        } else {
                            RadarKind::DeadRobot
                        };
                        out.push_str(&format!("{}{} ", kind.symbol(), robot.symbol));
                    }
                    None => out.push_str(&format!(" {} ", self.board.terrain_at(pos).symbol())),
                }
            }
            out.push('\n');
        }

        for robot in self.robots {
            out.push('\n');
            out.push_str(&robot.stats_line());
        }
        out
    }
}

/// Receives notifications from a running game. Purely observational.
pub trait Presenter {
    fn round_started(&mut self, round: u32, snapshot: BoardSnapshot<'_>);

    fn event(&mut self, event: &GameEvent);

    fn finished(&mut self, outcome: &Outcome, snapshot: BoardSnapshot<'_>);
}

/// Writes everything through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter {
    watch_live: bool,
}

impl LogPresenter {
    pub fn new(watch_live: bool) -> Self {
        LogPresenter { watch_live }
    }

    fn board_level(&self) -> Level {
        if self.watch_live { Level::Info } else { Level::Debug }
    }
}

/// Rejected requests stand out as warnings; sweeps and bumps are chatter.
fn event_level(event: &GameEvent) -> Level {
    match event {
        _ if event.is_rejection() => Level::Warn,
        GameEvent::RadarSwept { .. } | GameEvent::Blocked { .. } => Level::Debug,
        _ => Level::Info,
    }
}

impl Presenter for LogPresenter {
    fn round_started(&mut self, round: u32, snapshot: BoardSnapshot<'_>) {
        info!(target: "arena", "=========== starting Round {} ===========", round);
        log!(target: "arena", self.board_level(), "\n{}", snapshot.render());
    }

    fn event(&mut self, event: &GameEvent) {
        log!(target: "arena", event_level(event), "{}", event);
    }

    fn finished(&mut self, outcome: &Outcome, snapshot: BoardSnapshot<'_>) {
        info!(target: "arena", "\n{}", snapshot.render());
        info!(target: "arena", "{}", outcome);
    }
}

/// Keeps every event it is shown, for inspection after a run.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub rounds: u32,
    pub events: Vec<GameEvent>,
    pub outcome: Option<Outcome>,
}

impl Presenter for EventLog {
    fn round_started(&mut self, _round: u32, _snapshot: BoardSnapshot<'_>) {
        self.rounds += 1;
    }

    fn event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn finished(&mut self, outcome: &Outcome, _snapshot: BoardSnapshot<'_>) {
        self.outcome = Some(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::robot;
    use crate::types::{Terrain, Weapon};

    #[test]
    fn test_event_levels() {
        let rejected = GameEvent::OutOfGrenades { robot: "B".into() };
        let sweep = GameEvent::RadarSwept {
            robot: "B".into(),
            direction: 3,
            found: 0,
        };
        let fired = GameEvent::Fired {
            robot: "B".into(),
            weapon: Weapon::Grenade,
            target: Position::new(1, 1),
        };
        assert_eq!(event_level(&rejected), Level::Warn);
        assert_eq!(event_level(&sweep), Level::Debug);
        assert_eq!(event_level(&fired), Level::Info);
    }

    #[test]
    fn test_render_marks_robots_and_terrain() {
        let mut board = Board::new(10, 10);
        board.set_terrain(Position::new(0, 1), Terrain::Mound);
        let mut robots = vec![robot(0, Weapon::Railgun, 0, 0), robot(1, Weapon::Hammer, 0, 2)];
        robots[1].mark_dead();

        let text = BoardSnapshot {
            board: &board,
            robots: &robots,
        }
        .render();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("     0  1  2"));
        assert!(lines[1].starts_with(" 0 RA  M XB  . "), "got {:?}", lines[1]);
        assert_eq!(lines.len(), 1 + 10 + 2 * 2);
        assert!(text.contains("(DEAD)"));
    }
}
