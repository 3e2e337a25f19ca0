//! Binary that reads a graph listing from a file or standard in, computes a vertex cover with
//! the chosen method and writes the result to standard out.
//!
//! Listing format: `c` comment lines, `v <label>...` vertex lines and `e <src> <trg>` edge lines.
//! Set `RUST_LOG=debug` to follow the solvers.

use std::error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use vc_engine::{budget::SearchBudget, cust_error::ProcessingError, vc_instance::{Cover, VCInstance}};

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// Repeatedly take the vertex of highest degree
    Greedy,
    /// Exhaustive search for a minimum cover
    BruteForce,
    /// Edge-by-edge construction, one line per edge
    Steps,
    /// Greedy and brute force side by side
    Compare,
}

#[derive(Parser)]
#[command(name = "cover")]
#[command(about = "Compute a vertex cover of a graph listing")]
struct Args {
    /// Input listing, standard in if omitted
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Method to run
    #[arg(short = 'm', long, value_enum, default_value_t = Method::Compare)]
    method: Method,

    /// Time limit for the brute force search in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Refuse to run the brute force search on more vertices than this
    #[arg(long)]
    max_vertices: Option<usize>,
}

fn validate(ins: &VCInstance, cover: &Cover) -> Result<(), ProcessingError> {
    if !ins.validate_solution(cover) {
        return Err(ProcessingError::InvalidSolution(format!("{} does not cover every edge", cover)))
    }
    Ok(())
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let ins = match &args.input {
        Some(path) => VCInstance::read_list(BufReader::new(File::open(path)?))?,
        None => VCInstance::read_list(io::stdin().lock())?,
    };
    log::info!("read graph with {} vertices and {} edges", ins.num_vertices(), ins.num_edges());

    let mut budget = SearchBudget::unlimited();
    if let Some(ms) = args.timeout_ms {
        budget = budget.with_timeout(Duration::from_millis(ms));
    }
    if let Some(limit) = args.max_vertices {
        budget = budget.with_max_vertices(limit);
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    match args.method {
        Method::Greedy => {
            let cover = ins.high_degree_heuristic();
            validate(&ins, &cover)?;
            writeln!(stdout, "Greedy Vertex Cover: {}", cover)?;
        },
        Method::BruteForce => {
            let cover = ins.brute_force(&budget)?;
            validate(&ins, &cover)?;
            writeln!(stdout, "Brute Force Vertex Cover: {}", cover)?;
        },
        Method::Steps => {
            for step in ins.cover_steps() {
                writeln!(
                    stdout,
                    "Step {}: {}-{} Vertex Cover: [{}]",
                    step.step + 1,
                    step.edge.0,
                    step.edge.1,
                    step.cover.join(", "),
                )?;
            }
            validate(&ins, &ins.edge_by_edge_cover())?;
        },
        Method::Compare => {
            let comparison = ins.compare(&budget);
            validate(&ins, comparison.greedy())?;
            if let Some(cover) = comparison.brute_force().cover() {
                validate(&ins, cover)?;
            }
            writeln!(stdout, "{}", comparison)?;
        },
    }
    Ok(())
}
