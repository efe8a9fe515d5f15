//! One-shot recommendation scoring
//!
//! Usage: `recommend <user_id> [top_n] [min_rating]`
//!
//! Artifacts are read from `MODEL_DIR`. Logging is off unless `RUST_LOG` is set and
//! always goes to stderr.

use std::env;
use std::io;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recommendation_service::cli;
use recommendation_service::config::CliConfig;

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let outcome = cli::parse_args(&args).and_then(|request| {
        let config = CliConfig::from_env()?;
        cli::execute(&request, &config.model_dir)
    });

    let code = cli::emit(outcome, &mut io::stdout().lock(), &mut io::stderr().lock());
    process::exit(code);
}
