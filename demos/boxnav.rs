//! Command-line path queries against a box mesh.
//!
//! Run: cargo run --bin boxnav -- --strategy all 5 5 45 5

use boxnav_demos::{Args, DemoError, init_logging, load_mesh, run, sample_mesh};
use clap::Parser;

fn main() {
    init_logging();
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), DemoError> {
    let args = Args::parse();
    let mesh = match &args.mesh {
        Some(path) => load_mesh(path)?,
        None => sample_mesh(),
    };
    print!("{}", run(&args, &mesh));
    Ok(())
}
