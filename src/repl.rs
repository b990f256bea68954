//! Read-query-print loop around a built index.

use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use tracing::debug;
use crate::config::{self, OutputFormat};
use crate::engine::search::{self, SearchResult};
use crate::index::BuildOutcome;

/// Writes the build summary: banners in text mode, the counts and source
/// status as one JSON object in JSON mode.
pub fn report_build<W: Write>(
    out: &mut W,
    outcome: &BuildOutcome,
    format: OutputFormat,
) -> Result<()> {
    let stats = outcome.stats();
    match format {
        OutputFormat::Text => {
            if !outcome.is_available() {
                writeln!(out, "{}", config::UNAVAILABLE_MESSAGE)?;
            }
            writeln!(out, "{}", config::BUILDING_BANNER)?;
            writeln!(
                out,
                "Indexed {} pages containing {} unique terms",
                stats.documents, stats.terms
            )?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "documents": stats.documents,
                "terms": stats.terms,
                "source": outcome.status,
            });
            writeln!(out, "{}", report)?;
        }
    }
    Ok(())
}

pub fn report_result<W: Write>(
    out: &mut W,
    result: &SearchResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Found {} matching pages", result.count)?;
            for id in &result.matches {
                writeln!(out, "{}", id)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
        }
    }
    Ok(())
}

/// Reads queries from `input` until an empty line or end of input.
///
/// Returns the number of queries answered.
pub fn run_interactive<R: BufRead, W: Write>(
    outcome: &BuildOutcome,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<usize> {
    let mut answered = 0;
    let mut lines = input.lines();

    loop {
        if format == OutputFormat::Text {
            write!(out, "{}", config::QUERY_PROMPT)?;
            out.flush().context("failed to flush prompt")?;
        }

        let query = match lines.next() {
            Some(line) => line.context("failed to read query")?,
            None => break,
        };
        if query.is_empty() {
            break;
        }

        debug!(%query, "evaluating query");
        let result = search::search(&outcome.index, &query);
        report_result(out, &result, format)?;
        answered += 1;
    }

    if format == OutputFormat::Text {
        writeln!(out, "{}", config::FAREWELL)?;
    }
    Ok(answered)
}

/// Evaluates `queries` in order without prompting.
pub fn run_batch<W: Write>(
    outcome: &BuildOutcome,
    queries: &[String],
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    for query in queries {
        let result = search::search(&outcome.index, query);
        report_result(out, &result, format)?;
    }
    Ok(())
}
