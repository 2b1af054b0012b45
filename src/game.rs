use crate::board::Board;
use crate::config::{self, ArenaConfig};
use crate::engine::{self, radar};
use crate::error::SetupError;
use crate::events::GameEvent;
use crate::presenter::{BoardSnapshot, Presenter};
use crate::robot::{Robot, Strategy};
use crate::types::Position;
use log::{info, warn};
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::fmt;

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner { id: usize, name: String },
    /// Nobody survived
    Draw,
    /// Rounds ran out with several robots still standing
    Undecided { survivors: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { name, .. } => write!(f, "Winner: {}!", name),
            Outcome::Draw => write!(f, "Nobody survived. It's a draw."),
            Outcome::Undecided { survivors } => write!(
                f,
                "Reached max rounds with {} robots alive.",
                survivors
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Running,
    Finished(Outcome),
}

/// The Game struct owns the board, the robot roster and the random stream,
/// and drives rounds until a winner emerges or the rounds run out.
#[derive(Debug)]
pub struct Game {
    pub board: Board,
    pub robots: Vec<Robot>,
    pub current_round: u32,
    pub max_rounds: u32,
    phase: GamePhase,
    rng: StdRng,
    events: VecDeque<GameEvent>,
    next_symbol: usize,
}

impl Game {
    /// Builds the arena: sanitized board, hazards, then every strategy
    /// placed on a random free cell in the order given.
    pub fn new(
        config: &ArenaConfig,
        strategies: Vec<Box<dyn Strategy>>,
        mut rng: StdRng,
    ) -> Result<Self, SetupError> {
        if strategies.is_empty() {
            return Err(SetupError::NoRobots);
        }
        let config = config.sanitized();
        let mut board = Board::new(config.rows, config.cols);
        info!("Arena created with {}x{} grid.", board.rows(), board.cols());
        board.place_hazards(config.hazards, &mut rng)?;

        let mut game = Game::with_board(board, config.max_rounds, rng);
        for strategy in strategies {
            game.add_robot(strategy)?;
        }
        info!("Loaded {} robots.", game.robots.len());
        Ok(game)
    }

    /// A game over a prepared board with an empty roster.
    pub fn with_board(board: Board, max_rounds: u32, rng: StdRng) -> Self {
        Game {
            board,
            robots: Vec::new(),
            current_round: 0,
            max_rounds,
            phase: GamePhase::Setup,
            rng,
            events: VecDeque::new(),
            next_symbol: 0,
        }
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Registers a robot on a random empty, unoccupied cell.
    pub fn add_robot(&mut self, strategy: Box<dyn Strategy>) -> Result<usize, SetupError> {
        let occupied: Vec<Position> = self.robots.iter().map(|r| r.position()).collect();
        let Some(pos) = self.board.random_free_cell(&mut self.rng, &occupied) else {
            return Err(SetupError::NoFreeCell(strategy.name().to_string()));
        };
        Ok(self.register(strategy, pos))
    }

    /// Registers a robot on a chosen cell, which must be empty and free.
    pub fn add_robot_at(
        &mut self,
        strategy: Box<dyn Strategy>,
        pos: Position,
    ) -> Result<usize, SetupError> {
        let free = self.board.in_bounds(pos)
            && self.board.terrain_at(pos).is_empty()
            && engine::robot_at(&self.robots, pos).is_none();
        if !free {
            return Err(SetupError::CellUnavailable {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(self.register(strategy, pos))
    }

    fn register(&mut self, strategy: Box<dyn Strategy>, pos: Position) -> usize {
        let id = self.robots.len();
        // The pool advances for every robot, even those bringing a symbol
        let pooled = config::ROBOT_SYMBOLS.get(self.next_symbol).copied();
        self.next_symbol += 1;
        let symbol = strategy
            .symbol()
            .or(pooled)
            .or_else(|| strategy.name().chars().next())
            .unwrap_or('?');

        let robot = Robot::new(id, symbol, strategy, pos);
        info!("Loaded robot: {} at {}", robot.name, pos);
        self.robots.push(robot);
        id
    }

    /// Plays rounds until the game finishes and returns the outcome.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> Outcome {
        if let GamePhase::Finished(outcome) = &self.phase {
            return outcome.clone();
        }
        self.phase = GamePhase::Running;
        info!("Starting RobotWarz simulation...");

        while self.current_round < self.max_rounds {
            if let Some(outcome) = self.play_round(presenter) {
                return self.finish(outcome, presenter);
            }
        }
        let survivors = self.survivors().count();
        self.finish(Outcome::Undecided { survivors }, presenter)
    }

    fn finish(&mut self, outcome: Outcome, presenter: &mut dyn Presenter) -> Outcome {
        presenter.finished(
            &outcome,
            BoardSnapshot {
                board: &self.board,
                robots: &self.robots,
            },
        );
        self.phase = GamePhase::Finished(outcome.clone());
        outcome
    }

    /// One full pass over the roster, then a win check.
    pub fn play_round(&mut self, presenter: &mut dyn Presenter) -> Option<Outcome> {
        let round = self.current_round;
        presenter.round_started(
            round,
            BoardSnapshot {
                board: &self.board,
                robots: &self.robots,
            },
        );

        for idx in 0..self.robots.len() {
            if !self.robots[idx].is_active() {
                self.robots[idx].mark_dead();
                continue;
            }
            self.take_turn(idx);
            for event in self.events.drain(..) {
                presenter.event(&event);
            }
        }

        self.current_round += 1;
        self.check_for_winner()
    }

    /// Radar, decide, then shoot or move.
    fn take_turn(&mut self, idx: usize) {
        let (rows, cols) = (self.board.rows(), self.board.cols());
        let robot = &mut self.robots[idx];
        self.events.push_back(GameEvent::TurnStarted {
            robot: robot.name.clone(),
            symbol: robot.symbol,
        });
        crate::debug_robot!(robot.id, "Round {} turn for {}", self.current_round, robot.name);

        let view = robot.view(rows, cols);
        let mut direction = robot.strategy.radar_direction(&view);
        if !(0..=8).contains(&direction) {
            warn!("{} asked for radar direction {}; using 0", robot.name, direction);
            direction = 0;
        }

        let origin = robot.position();
        let results = radar::scan(&self.board, &self.robots, origin, direction);
        crate::debug_radar!(idx, "direction {} found {:?}", direction, results);

        let robot = &mut self.robots[idx];
        self.events.push_back(GameEvent::RadarSwept {
            robot: robot.name.clone(),
            direction,
            found: results.len(),
        });
        robot.strategy.process_radar_results(&view, &results);

        let view = robot.view(rows, cols);
        if let Some(target) = robot.strategy.shot_location(&view) {
            engine::resolve_shot(
                &self.board,
                &mut self.robots,
                idx,
                target,
                &mut self.rng,
                &mut self.events,
            );
        } else {
            let (move_dir, move_dist) = robot.strategy.move_direction(&view);
            engine::resolve_move(
                &self.board,
                &mut self.robots,
                idx,
                move_dir,
                move_dist,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    fn survivors(&self) -> impl Iterator<Item = &Robot> {
        self.robots.iter().filter(|r| r.is_active())
    }

    /// `Some` once at most one robot is left standing.
    pub fn check_for_winner(&self) -> Option<Outcome> {
        let mut survivors = self.survivors();
        match (survivors.next(), survivors.next()) {
            (None, _) => Some(Outcome::Draw),
            (Some(last), None) => Some(Outcome::Winner {
                id: last.id,
                name: last.name.clone(),
            }),
            _ => None,
        }
    }
}
