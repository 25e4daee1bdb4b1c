#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use csv::Writer;
use edmonds_karp::{edmonds_karp, parse_network, MaxFlowSolution};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Maximum flow and minimum cut of a capacity matrix, from node 0 to the last node.
#[derive(Parser, Debug)]
#[command(name = "edmonds-karp-cli", version)]
struct Args {
    /// Network file: the node count m on the first line, then m rows of m capacities
    input: PathBuf,

    /// Where to write the result (stdout if omitted)
    output: Option<PathBuf>,

    /// Also write every edge carrying flow to this CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Verify the solution (capacities, conservation, cut) before writing it
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

// Function to write the edges that carry flow
fn write_csv(solution: &MaxFlowSolution<i64>, filepath: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for edge in solution.flow_edges() {
        wtr.serialize(edge)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_result(
    solution: &MaxFlowSolution<i64>,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => fs::write(path, solution.to_string())?,
        None => io::stdout().lock().write_all(solution.to_string().as_bytes())?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let input = fs::read_to_string(&args.input)?;
    let network = parse_network::<i64>(&input).map_err(|e| e.to_string())?;
    log::info!(
        "read {} nodes from {}",
        network.node_count(),
        args.input.display()
    );

    let solution = edmonds_karp(&network).map_err(|e| e.to_string())?;
    if args.check {
        solution.check(&network).map_err(|e| e.to_string())?;
        log::info!("solution verified");
    }

    write_result(&solution, args.output.as_deref())?;
    if let Some(path) = &args.csv {
        write_csv(&solution, path)?;
    }

    Ok(())
}
