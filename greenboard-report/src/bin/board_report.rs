/// Greenboard report runner - extracts ops from a materialized grid
/// collection and prints the streak report.
///
/// Usage: cargo run --bin board_report <grids.json> [--exclude <title>]... [--json]
///
/// The input file holds a JSON array of sheet grids as produced by the
/// source collaborator. On any fatal error the run aborts with exit code 1
/// and writes nothing.

use greenboard_core::{BoardError, BoardResult, RunConfig, SheetGrid};
use greenboard_report::{pipeline, render};
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("greenboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin board_report <grids.json> [--exclude <title>]... [--json]");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin board_report fixtures/week1.json --exclude Roster");
        std::process::exit(1);
    }

    let path = args[1].clone();
    let mut config = RunConfig::default();
    let mut json_output = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--exclude" => {
                let Some(title) = args.get(i + 1) else {
                    eprintln!("--exclude requires a sheet title");
                    std::process::exit(1);
                };
                config.excluded_titles.push(title.clone());
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
        }
    }

    let grids = match load_grids(&path) {
        Ok(grids) => grids,
        Err(e) => {
            eprintln!("run aborted: {e}");
            std::process::exit(1);
        }
    };

    let output = pipeline::run(&grids, &config);

    if json_output {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("run aborted: failed to serialize output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render::render_report(&output));
    }
}

/// Load the grid collection. Failure here is the fatal case: the run ends
/// with no partial result.
fn load_grids(path: &str) -> BoardResult<Vec<SheetGrid>> {
    let content = std::fs::read_to_string(path).map_err(|e| BoardError::SourceUnavailable {
        reason: format!("{path}: {e}"),
    })?;
    serde_json::from_str(&content).map_err(|e| BoardError::MalformedCollection {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
