use crate::core::solver::ScrambleSolver;
use crate::domain::model::SessionSummary;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// The interactive solve loop. Reads one scramble per line until `exit`
/// (any case) or end of input, printing the matching cities title-cased
/// with their regions. Generic over reader and writer so tests can drive
/// a whole session from in-memory buffers.
pub async fn run_repl<R, W>(
    solver: &ScrambleSolver,
    input: R,
    mut output: W,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    writeln!(output, "Type 'exit' to quit.")?;
    writeln!(output)?;

    loop {
        write!(output, "Enter scramble: ")?;
        output.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        let scramble = line.trim();
        if scramble.eq_ignore_ascii_case("exit") {
            break;
        }

        let matches = solver.solve(scramble);
        summary.queries += 1;
        summary.matches += matches.len();

        writeln!(output, "Results:")?;
        if matches.is_empty() {
            writeln!(output, "No matching city found.")?;
        } else {
            for city in &matches {
                writeln!(output, "- {} ({})", city.display_name(), city.region)?;
            }
        }
        writeln!(output)?;
    }

    Ok(summary)
}
