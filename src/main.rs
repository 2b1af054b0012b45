use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use robotwarz::bots::{BehaviorProvider, BotKind, Registry};
use robotwarz::config::{self, ArenaConfig};
use robotwarz::game::Game;
use robotwarz::logging;
use robotwarz::presenter::LogPresenter;
use std::path::PathBuf;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file holding `rows cols mounds pits flames max_rounds watch_live`.
    /// A missing file means default settings.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    rows: Option<i32>,

    #[arg(long)]
    cols: Option<i32>,

    #[arg(long)]
    mounds: Option<usize>,

    #[arg(long)]
    pits: Option<usize>,

    #[arg(long)]
    flames: Option<usize>,

    /// Maximum number of rounds to simulate.
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for the arena and the bots; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log the full board every round.
    #[arg(long)]
    watch: bool,

    /// Bots to field, in turn order (defaults to one of each).
    #[arg(long, value_enum, value_delimiter = ',')]
    robots: Vec<BotKind>,

    /// Debug filter to specify log topics (e.g., "arena,radar,move,weapon,robot")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn arena_config(&self) -> Result<ArenaConfig, robotwarz::error::ConfigError> {
        let mut config = ArenaConfig::load(&self.config)?;
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(mounds) = self.mounds {
            config.hazards.mounds = mounds;
        }
        if let Some(pits) = self.pits {
            config.hazards.pits = pits;
        }
        if let Some(flames) = self.flames {
            config.hazards.flames = flames;
        }
        if let Some(rounds) = self.rounds {
            config.max_rounds = rounds;
        }
        config.watch_live |= self.watch;
        Ok(config)
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level), args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    let config = match args.arena_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let kinds = if args.robots.is_empty() {
        BotKind::ALL.to_vec()
    } else {
        args.robots.clone()
    };
    let mut registry = Registry::new(seed, kinds);

    let mut game = match Game::new(&config, registry.strategies(), StdRng::seed_from_u64(seed)) {
        Ok(game) => game,
        Err(e) => {
            error!("Setup failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut presenter = LogPresenter::new(config.watch_live);
    let outcome = game.run(&mut presenter);
    info!("Finished after {} rounds: {}", game.current_round, outcome);
}
