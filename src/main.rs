use std::{path::PathBuf, process::ExitCode};

use benchplot::{utils::charts_dir_for, BenchplotError, RenderOptions};
use clap::Parser;

const GENERATE_HELP: &str = "\
Generate the JSON first:
  go run hack/benchanalyze/main.go -old results/go-1.25.5.txt -new results/go-1.26.txt -output results/";

/// Render ns/op, percent-change, allocation and category charts from a
/// benchmark comparison report.
#[derive(Parser, Debug)]
#[command(
    name = "benchplot",
    version,
    arg_required_else_help = true,
    after_help = GENERATE_HELP
)]
struct Cli {
    /// comparison.json produced by benchanalyze
    report: PathBuf,

    /// Directory for the PNG files [default: <report dir>/charts]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print progress details while rendering
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = RenderOptions {
        output_dir: cli
            .output_dir
            .unwrap_or_else(|| charts_dir_for(&cli.report)),
        verbose: cfg!(feature = "verbose") && cli.verbose,
    };

    match benchplot::run(&cli.report, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ BenchplotError::NoEntries) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
