use search_core::{DocumentId, MalformedQuery, QueryEngine};
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Token that ends an interactive session, compared case-insensitively.
pub const EXIT_SENTINEL: &str = "exit";
pub const PROMPT: &str = "Enter your query (e.g., canada AND NOT ontario): ";

/// Write a result set: the count, then one id per line in ascending order.
pub fn write_results<W: Write>(out: &mut W, docs: &BTreeSet<DocumentId>) -> io::Result<()> {
    writeln!(out, "Matched {} documents:", docs.len())?;
    for doc in docs {
        writeln!(out, " - {doc}")?;
    }
    Ok(())
}

/// Evaluate one query line and print either the results or the rejection.
pub fn answer<W: Write>(engine: &QueryEngine, line: &str, out: &mut W) -> io::Result<Result<usize, MalformedQuery>> {
    match engine.evaluate(line) {
        Ok(docs) => {
            write_results(out, &docs)?;
            Ok(Ok(docs.len()))
        }
        Err(e) => {
            writeln!(out, "error: {e}")?;
            Ok(Err(e))
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub rejected: usize,
}

/// Line-oriented prompt over a loaded engine. Ends on the exit sentinel or
/// end of input; rejected queries are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(engine: &QueryEngine, input: R, mut out: W) -> io::Result<SessionStats> {
    let mut stats = SessionStats::default();
    writeln!(out, "Boolean Search Engine (type '{EXIT_SENTINEL}' to quit)")?;
    let mut lines = input.lines();
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else { break };
        let line = line.trim();
        if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
            break;
        }
        if line.is_empty() {
            continue;
        }
        writeln!(out)?;
        match answer(engine, line, &mut out)? {
            Ok(_) => stats.answered += 1,
            Err(e) => {
                tracing::debug!(query = line, error = %e, "rejected query");
                stats.rejected += 1;
            }
        }
    }
    Ok(stats)
}
