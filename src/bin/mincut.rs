//! Command-line front end: reads a `V E [trials]` edge list and prints the cut.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;

use mincut::graph::{
    Contraction, DuplicateEdges, Karger, KargerConfig, Selection, StoerWagner,
};
use mincut::io::{format_result, parse_graph_with, ParseOptions};
use mincut::MinCut;

#[derive(Parser)]
#[command(name = "mincut")]
#[command(about = "Minimum edge cut of a weighted undirected graph", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::StoerWagner)]
    algorithm: Algorithm,

    /// Number of Karger trials; overrides the count in the input header
    #[arg(short, long)]
    trials: Option<usize>,

    /// Seed for reproducible Karger runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run Karger trials on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Append the elapsed seconds to the result line
    #[arg(long)]
    time: bool,

    /// How repeated (src, dst) pairs are combined
    #[arg(long, value_enum, default_value_t = Duplicates::Overwrite)]
    duplicates: Duplicates,

    /// Print the vertices on one side of the cut on a second line
    #[arg(long)]
    partition: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Exact, linear-scan selection
    StoerWagner,
    /// Exact, priority-queue selection
    StoerWagnerPq,
    /// Randomized, rejection sampling
    Karger,
    /// Randomized, pre-shuffled edge scan
    KargerShuffled,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Duplicates {
    Overwrite,
    Sum,
}

impl From<Duplicates> for DuplicateEdges {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::Overwrite => DuplicateEdges::Overwrite,
            Duplicates::Sum => DuplicateEdges::Sum,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let options = ParseOptions {
        duplicates: cli.duplicates.into(),
    };
    let input = parse_graph_with(&text, options)?;
    info!(
        "loaded graph with {} vertices and {} edges",
        input.graph.size(),
        input.graph.edge_count()
    );

    let start = Instant::now();
    let cut: MinCut = match cli.algorithm {
        Algorithm::StoerWagner => StoerWagner::new(Selection::LinearScan).min_cut(&input.graph)?,
        Algorithm::StoerWagnerPq => {
            StoerWagner::new(Selection::PriorityQueue).min_cut(&input.graph)?
        }
        Algorithm::Karger | Algorithm::KargerShuffled => {
            let contraction = match cli.algorithm {
                Algorithm::Karger => Contraction::RejectionSampling,
                _ => Contraction::ShuffledScan,
            };
            let trials = cli
                .trials
                .or(input.trials)
                .unwrap_or(KargerConfig::default().trials);
            let mut config = KargerConfig::new(trials)
                .with_contraction(contraction)
                .with_parallel(cli.parallel);
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            Karger::new(config)?.estimate(&input.graph)?
        }
    };
    let elapsed = start.elapsed();
    info!("{:?} finished in {:?}", cli.algorithm, elapsed);

    println!("{}", format_result(cut.weight, cli.time.then_some(elapsed)));
    if cli.partition {
        let side: Vec<String> = cut.partition.iter().map(|v| v.to_string()).collect();
        println!("{}", side.join(" "));
    }
    Ok(())
}
