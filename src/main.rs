use clap::Parser;
use splice::case_io::{read_cases, write_results, write_results_json, CaseResult};
use splice::{solve, SearchConfig, SpliceError};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splice")]
#[command(about = "Chain-fusion solver for genotype pair cases", long_about = None)]
struct Cli {
    /// Input file of cases; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Override the per-case generation budget (defaults to the genotype count)
    #[arg(short, long)]
    generations: Option<usize>,
    /// Drop genotypes whose symbols the opposite side can never produce
    #[arg(long)]
    closure_filter: bool,
    /// Disable shortest-known-bound pruning
    #[arg(long)]
    no_bound_pruning: bool,
    /// Emit results as JSON lines instead of "Case N: answer"
    #[arg(long)]
    json: bool,
    /// Per-case progress output on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), SpliceError> {
    let cli = Cli::parse();

    let cases = match &cli.input {
        Some(path) => {
            let file = File::open(path)?;
            read_cases(BufReader::new(file))?
        }
        None => read_cases(io::stdin().lock())?,
    };

    let config = SearchConfig {
        generations: cli.generations,
        closure_filter: cli.closure_filter,
        bound_pruning: !cli.no_bound_pruning,
    };

    if cli.debug {
        eprintln!("[splice] {} case(s) read", cases.len());
    }

    let mut results = Vec::with_capacity(cases.len());
    for (index, genotypes) in cases.iter().enumerate() {
        let case = index + 1;
        if cli.debug {
            let budget = config.generations.unwrap_or(genotypes.len());
            eprintln!(
                "[splice] case {}: {} genotype(s), budget {}",
                case,
                genotypes.len(),
                budget
            );
        }
        let verdict = solve(genotypes, &config);
        let result = CaseResult::new(case, verdict);
        if cli.debug {
            eprintln!("[splice] case {}: {}", case, result.answer);
        }
        results.push(result);
    }

    let stdout = io::stdout().lock();
    if cli.json {
        write_results_json(stdout, &results)?;
    } else {
        write_results(stdout, &results)?;
    }

    Ok(())
}
