use std::io;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use boolean_search_engine::config::{self, Args};
use boolean_search_engine::{build_index_from_path, repl};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the query dialogue.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("loading corpus from {}", args.corpus.display());
    let outcome = build_index_from_path(&args.corpus);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    repl::report_build(&mut out, &outcome, args.format)?;

    if args.queries.is_empty() {
        let answered = repl::run_interactive(&outcome, io::stdin().lock(), &mut out, args.format)?;
        tracing::info!("answered {} queries", answered);
    } else {
        repl::run_batch(&outcome, &args.queries, &mut out, args.format)?;
    }

    Ok(())
}
