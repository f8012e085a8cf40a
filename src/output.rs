//! Output formatting for query results and index statistics

use crate::index::stats::IndexStats;
use crate::query::QueryResult;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Write one `<query> : <result>` line per result
pub fn write_results<W: Write>(out: &mut W, results: &[QueryResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

/// Print results to stdout
pub fn print_results(results: &[QueryResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_results(&mut lock, results)?;
    lock.flush()
}

/// Write a statistics block, labels highlighted when the writer supports color
pub fn write_stats<W: WriteColor>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    let title = match stats {
        IndexStats::Trie(_) => "Suffix trie",
        IndexStats::Array(_) => "Suffix array",
    };

    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", title)?;
    out.reset()?;

    for (label, value) in stats.rows() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "  {:<14}", format!("{}:", label))?;
        out.reset()?;
        writeln!(out, "{}", value)?;
    }

    Ok(())
}

/// Print a statistics block to stdout
pub fn print_stats(stats: &IndexStats, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_stats(&mut stdout, stats)
}
