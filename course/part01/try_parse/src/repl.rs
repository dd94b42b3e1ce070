use std::io::{BufRead, Write};

use crate::attempt::{ParseAttempt, TryParse};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Reads one candidate integer per line until EOF, answering each on `output`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> std::io::Result<Summary> {
    let mut summary = Summary::default();

    for line in input.lines() {
        let line = line?;
        match i32::try_parse(&line) {
            ParseAttempt::Success(value) => {
                summary.accepted += 1;
                writeln!(output, "accepted: {value}")?;
            }
            ParseAttempt::Failure => {
                summary.rejected += 1;
                tracing::debug!(input = ?line, "rejected input");
                writeln!(output, "rejected: {line:?}")?;
            }
        }
    }

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "reached end of input"
    );

    Ok(summary)
}
