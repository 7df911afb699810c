//! Shared pieces of the `boxnav` command-line demo: a built-in sample mesh,
//! argument parsing, mesh loading and logger setup.

use std::fmt::Write as _;
use std::path::PathBuf;

use boxnav_core::{Mesh, NavBox, Point};
use boxnav_paths::{BoxPaths, SearchResult, Strategy};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Errors surfaced by the demo binary.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing mesh {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which strategies a run should execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    Bfs,
    Dijkstra,
    #[value(name = "astar")]
    AStar,
    Bidirectional,
    /// Every strategy, one after another.
    All,
}

impl Selection {
    /// Strategies to run, in order.
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            Selection::Bfs => vec![Strategy::Bfs],
            Selection::Dijkstra => vec![Strategy::Dijkstra],
            Selection::AStar => vec![Strategy::AStar],
            Selection::Bidirectional => vec![Strategy::Bidirectional],
            Selection::All => Strategy::ALL.to_vec(),
        }
    }
}

/// Find a path between two points of a box mesh.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "boxnav", version, about, long_about = None)]
pub struct Args {
    /// Mesh file (`{"boxes": [...], "adj": [...]}`); the built-in sample
    /// mesh is used when omitted
    #[arg(short, long)]
    pub mesh: Option<PathBuf>,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Selection::AStar)]
    pub strategy: Selection,

    /// Source x
    #[arg(allow_negative_numbers = true)]
    pub sx: f64,
    /// Source y
    #[arg(allow_negative_numbers = true)]
    pub sy: f64,
    /// Destination x
    #[arg(allow_negative_numbers = true)]
    pub dx: f64,
    /// Destination y
    #[arg(allow_negative_numbers = true)]
    pub dy: f64,
}

impl Args {
    pub fn source(&self) -> Point {
        Point::new(self.sx, self.sy)
    }

    pub fn destination(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

/// A straight corridor of narrow boxes from (0..10) to (40..50) along
/// y = 0..10, plus a loop of three large boxes over the top that uses fewer
/// boxes but is much longer.
pub fn sample_mesh() -> Mesh {
    let mut boxes = vec![NavBox::new(0.0, 10.0, 0.0, 10.0)];
    for i in 0..6 {
        let x = 10.0 + i as f64 * 5.0;
        boxes.push(NavBox::new(x, x + 5.0, 0.0, 10.0));
    }
    boxes.push(NavBox::new(40.0, 50.0, 0.0, 10.0));
    boxes.push(NavBox::new(0.0, 10.0, 10.0, 50.0));
    boxes.push(NavBox::new(0.0, 50.0, 50.0, 60.0));
    boxes.push(NavBox::new(40.0, 50.0, 10.0, 50.0));
    let mut edges: Vec<(usize, usize)> = (0..7).map(|i| (i, i + 1)).collect();
    edges.extend([(0, 8), (8, 9), (9, 10), (10, 7)]);
    Mesh::from_edges(boxes, &edges)
}

/// Load a mesh from JSON (`{"boxes": [...], "adj": [...]}`).
pub fn load_mesh(path: &std::path::Path) -> Result<Mesh, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DemoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Run every selected strategy and render a plain-text report.
pub fn run(args: &Args, mesh: &Mesh) -> String {
    mesh.log_contents();
    let paths = BoxPaths::new(mesh);
    let mut out = String::new();
    for strategy in args.strategy.strategies() {
        let res = paths.search(strategy, args.source(), args.destination());
        report(&mut out, strategy, &res);
    }
    out
}

fn report(out: &mut String, strategy: Strategy, res: &SearchResult) {
    match &res.path {
        Ok(path) => {
            let pts: Vec<String> = path.iter().map(Point::to_string).collect();
            let _ = writeln!(
                out,
                "{strategy}: length {:.3}, {} boxes explored\n  {}",
                res.length().unwrap_or_default(),
                res.explored.len(),
                pts.join(" -> ")
            );
        }
        Err(e) => {
            let _ = writeln!(
                out,
                "{strategy}: {e} ({} boxes explored)",
                res.explored.len()
            );
        }
    }
}

/// `env_logger` builder with its filter taken from `BOXNAV_LOG` (default
/// `warn`).
pub fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BOXNAV_LOG", "warn"))
}

/// Install the logger for the `log` calls in the library crates.
pub fn init_logging() {
    logger_builder().init();
}
