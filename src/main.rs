use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use autopilot_snake::config::GameConfig;
use autopilot_snake::error::AppError;
use autopilot_snake::game::GameState;
use autopilot_snake::headless::{self, DEFAULT_MAX_TICKS};
use autopilot_snake::input::InputHandler;
use autopilot_snake::logging;
use autopilot_snake::scheduler::{CommandQueue, TickClock};
use autopilot_snake::terminal_runtime::TerminalSession;
use clap::Parser;

/// Input poll timeout; also the redraw cadence between ticks.
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Apples kept on the board.
    #[arg(long)]
    apples: Option<usize>,

    /// Starting snake length.
    #[arg(long = "initial-length")]
    initial_length: Option<usize>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for apple placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the autopilot steering.
    #[arg(long)]
    autopilot: bool,

    /// Run one autopilot round without a terminal and print a JSON summary.
    #[arg(long)]
    headless: bool,

    /// Tick budget for `--headless`.
    #[arg(long = "max-ticks", default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Append logs to this file in interactive mode.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(apples) = self.apples {
            config.apple_count = apples;
        }
        if let Some(initial_length) = self.initial_length {
            config.initial_length = initial_length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("autopilot-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if cli.headless {
        logging::init_stderr();
    } else if let Some(path) = &cli.log_file {
        logging::init_file(path)?;
    }

    let config = cli.game_config()?;

    if cli.headless {
        let seed = cli.seed.unwrap_or_else(rand::random);
        let summary = headless::run(config, seed, cli.max_ticks);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    state.autopilot = cli.autopilot;

    play(state)
}

fn play(mut state: GameState) -> Result<(), AppError> {
    let config = *state.config();
    let mut session = TerminalSession::enter(config.cell_columns)?;
    let mut input = InputHandler::new(FRAME_POLL);
    let mut queue = CommandQueue::new();
    let mut clock = TickClock::new(Duration::from_millis(config.tick_interval_ms), Instant::now());

    tracing::info!(?config, "interactive session started");

    loop {
        session.draw(&state.snapshot())?;

        if let Some(command) = input.poll_input()? {
            queue.push(command);
        }

        if queue.drain_into(&mut state) {
            break;
        }

        let now = Instant::now();
        if clock.is_due(now) {
            state.tick();
            clock.mark(now);
        }
    }

    tracing::info!(score = state.score, "interactive session ended");
    Ok(())
}
