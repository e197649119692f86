use std::process::ExitCode;

use anyhow::{Context, Result};
use ffsim::{Coalesce, Report, Script, Simulation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: ffsim [--coalesce] <input_file>\nExample: ffsim memory_requests.txt";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(path: &str, coalesce: Coalesce) -> Result<()> {
    let script =
        Script::from_path(path).with_context(|| format!("Error reading from file {}", path))?;
    let simulation = Simulation::run(script, coalesce)?;

    print!("{}", Report::new(path, &simulation));
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let mut coalesce = Coalesce::Never;
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--coalesce" => coalesce = Coalesce::Adjacent,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("unexpected argument `{}`\n{}", arg, USAGE);
                return ExitCode::from(2);
            }
        }
    }

    let Some(path) = path else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(&path, coalesce) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
