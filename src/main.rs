//! Rubik's cube command line
//!
//! Drives a headless [`Session`]: queues moves, plays every animation step
//! out with `tick`, and prints the resulting faces.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};

use rubik::session::{DEFAULT_SIZE, DEFAULT_STEP_COUNT};
use rubik::{CubeState, Result, Session, SessionConfig};

/// Nominal frame length reported to `tick`.
const FRAME: Duration = Duration::from_millis(16);

/// Scrambles, replays and prints N×N×N cubes.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scramble a cube and print its faces.
    Scramble(ScrambleArgs),
    /// Scramble a cube, undo every move and check that it is solved again.
    Roundtrip(ScrambleArgs),
    /// Print the faces of a solved cube.
    Show {
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
}

#[derive(Args, Clone, Copy)]
struct ScrambleArgs {
    /// Pieces along each edge.
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Number of random moves.
    #[arg(short, long, default_value_t = 20)]
    count: usize,
    /// Seed for the move generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Animation steps per quarter turn.
    #[arg(long, default_value_t = DEFAULT_STEP_COUNT)]
    steps: u32,
}

impl Default for ScrambleArgs {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            count: 20,
            seed: 0,
            steps: DEFAULT_STEP_COUNT,
        }
    }
}

impl ScrambleArgs {
    fn session(self) -> Result<Session> {
        Session::new(SessionConfig {
            size: self.size,
            step_count: self.steps,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let result = match cli.command {
        Some(Command::Scramble(args)) => run_scramble(args),
        Some(Command::Roundtrip(args)) => run_roundtrip(args),
        Some(Command::Show { size }) => run_show(size),
        None => run_scramble(ScrambleArgs::default()),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Ticks until the session has nothing left to animate. Returns the number
/// of frames that needed a redraw.
fn play_out(session: &mut Session) -> Result<u64> {
    let mut frames = 0;
    while session.tick(FRAME * frames as u32)? {
        frames += 1;
    }
    Ok(frames)
}

fn run_scramble(args: ScrambleArgs) -> Result<String> {
    let mut session = args.session()?;
    let moves = session.enqueue_randomized(args.count, args.seed)?;
    let frames = play_out(&mut session)?;
    info!("played {} moves in {frames} frames", moves.len());

    let mut output = String::new();
    for rotation in &moves {
        output.push_str(&format!("{rotation}\n"));
    }
    output.push('\n');
    output.push_str(&session.state().format_faces());
    Ok(output)
}

fn run_roundtrip(args: ScrambleArgs) -> Result<String> {
    let mut session = args.session()?;
    session.enqueue_randomized(args.count, args.seed)?;
    play_out(&mut session)?;
    let scrambled = !session.state().is_solved();

    session.toggle_undo_mode();
    let frames = play_out(&mut session)?;
    info!("undo took {frames} frames");

    let restored = session.state() == &CubeState::solved(args.size)?;
    Ok(format!(
        "scrambled: {scrambled}\nrestored: {restored}\n"
    ))
}

fn run_show(size: usize) -> Result<String> {
    Ok(CubeState::solved(size)?.format_faces())
}
