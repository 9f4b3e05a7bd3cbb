//! Maze solver CLI
//!
//! Generates a maze sized for the chosen search (or loads one from a text
//! file), runs the search and prints the traced solution as JSON: every
//! intermediate grid, the path, its endpoints, its cost and a status
//! message.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mazer_core::{Grid, GridError, Point};
use mazer_gen::{MazeConfig, MazeKind, MazeSize};
use mazer_paths::{Algorithm, SearchError, Solution, Solver};

/// Solves a generated maze with BFS, DFS, Dijkstra or A* and prints the
/// traced solution as JSON.
#[derive(Parser, Debug)]
#[command(name = "mazer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search to run: bfs, dfs, dijkstra or astar.
    algorithm: Algorithm,

    /// Maze size tier: small, medium or large.
    #[arg(short, long, default_value_t = MazeSize::Small)]
    size: MazeSize,

    /// Seed for a reproducible maze.
    #[arg(long)]
    seed: Option<u64>,

    /// A* start as ROW,COL (defaults to the top-left corner).
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    start: Option<Point>,

    /// A* end as ROW,COL (defaults to the bottom-right corner).
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    end: Option<Point>,

    /// Solve the maze in FILE instead of generating one.
    #[arg(short, long, value_name = "FILE")]
    maze: Option<PathBuf>,

    /// Log generation and search details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Parse `ROW,COL`, spaces allowed around either number.
fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let num = |t: &str| {
        t.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate \u{201c}{}\u{201d}: {e}", t.trim()))
    };
    Ok(Point::new(num(row)?, num(col)?))
}

#[derive(Debug)]
enum CliError {
    Io { path: PathBuf, err: std::io::Error },
    Grid(GridError),
    Search(SearchError),
    Json(serde_json::Error),
}

impl CliError {
    /// Bad input is a usage error (2), anything else a failure (1).
    fn status(&self) -> u8 {
        match self {
            Self::Grid(_) | Self::Search(_) => 2,
            Self::Io { .. } | Self::Json(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, err } => write!(f, "{}: {err}", path.display()),
            Self::Grid(e) => write!(f, "invalid maze: {e}"),
            Self::Search(e) => e.fmt(f),
            Self::Json(e) => write!(f, "encoding solution: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.status())
        }
    }
}

/// `--verbose` logs at debug level, otherwise `RUST_LOG` or warnings only.
/// Records from the `log` facade used by the library crates are forwarded.
fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Build or load the maze, solve it and encode the solution.
fn run(cli: &Cli) -> Result<String, CliError> {
    if cli.algorithm != Algorithm::AStar && (cli.start.is_some() || cli.end.is_some()) {
        log::warn!("--start and --end only apply to astar, ignoring them");
    }

    let solution = match &cli.maze {
        Some(path) => solve_file(cli, path)?,
        None => solve_generated(cli)?,
    };
    log::debug!(
        "{}: {} frames, {} path cells, cost {:?}",
        solution.algorithm,
        solution.trace.len(),
        solution.path.len(),
        solution.cost
    );
    Ok(serde_json::to_string_pretty(&solution)?)
}

fn solve_file(cli: &Cli, path: &Path) -> Result<Solution, CliError> {
    let text = std::fs::read_to_string(path).map_err(|err| CliError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let grid = Grid::parse(&text)?;
    log::debug!("loaded {}x{} maze from {}", grid.rows(), grid.cols(), path.display());

    let mut solver = Solver::new();
    match (cli.algorithm, cli.start, cli.end) {
        (Algorithm::AStar, Some(start), Some(end)) => Ok(solver.astar(&grid, start, end)?),
        (Algorithm::AStar, Some(_), None) | (Algorithm::AStar, None, Some(_)) => {
            log::warn!(
                "astar on a maze file needs both --start and --end, using the file's S and E"
            );
            Ok(solver.solve(Algorithm::AStar, &grid)?)
        }
        (alg, ..) => Ok(solver.solve(alg, &grid)?),
    }
}

fn solve_generated(cli: &Cli) -> Result<Solution, CliError> {
    let config = MazeConfig {
        seed: cli.seed,
        ..MazeConfig::sized(cli.size)
    };
    let mut mg = config.maze_gen();
    let mut solver = Solver::new();

    match MazeKind::for_algorithm(cli.algorithm, cli.size) {
        MazeKind::Open { start, end } => {
            let start = cli.start.unwrap_or(start);
            let end = cli.end.unwrap_or(end);
            let grid = mg.open_weighted(cli.size, start, end);
            Ok(solver.astar(&grid, start, end)?)
        }
        kind => {
            let grid = mg.generate(kind, cli.size);
            Ok(solver.solve(cli.algorithm, &grid)?)
        }
    }
}
