// src/fixture.rs
//
// The fixture-file demonstration format: zero or more training lines, a
// marker line starting with `---`, then one query fragment per line. This
// layer is thin glue over the provider; all completion semantics live in
// `core`.

use crate::core::provider::AutocompleteProvider;
use crate::core::types::Completion;
use std::io::{self, BufRead, Error, ErrorKind, Write};

/// A line whose content begins with this marker ends the training phase.
pub const TRAINING_END_MARKER: &str = "---";

/// How query results are rendered: the classic `word (count), ...` line or
/// a JSON array per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn is_training_end(line: &str) -> bool {
    line.starts_with(TRAINING_END_MARKER)
}

/// Filters a training line down to lowercase `a`-`z` and spaces. Dropped
/// characters are not treated as word boundaries, so "doesn't" fuses into
/// "doesnt". Faithful to the fixture format, not a bug to fix.
pub fn scrub_line(line: &str) -> String {
    line.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | ' '))
        .collect()
}

/// Renders completions as `word (count)` joined by `, `; empty input renders
/// as an empty string (a blank output line).
pub fn render_completions(completions: &[Completion]) -> String {
    completions
        .iter()
        .map(|c| format!("{} ({})", c.word, c.occurrence_count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Streams a whole fixture through the provider, echoing lines the way the
/// original demo did: scrubbed training lines, the `---` marker, and each
/// query line followed by its completions.
pub fn run<R: BufRead, W: Write>(
    provider: &mut AutocompleteProvider,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> io::Result<()> {
    let mut trained = false;
    for line in input.lines() {
        let line = line?;
        if !trained {
            if is_training_end(&line) {
                writeln!(output, "{TRAINING_END_MARKER}")?;
                trained = true;
                continue;
            }
            let passage = scrub_line(&line);
            writeln!(output, "{passage}")?;
            provider.train(&passage);
        } else {
            let fragment = line.trim();
            writeln!(output, "{fragment}")?;
            let completions = provider.query(fragment);
            match format {
                OutputFormat::Plain => writeln!(output, "{}", render_completions(&completions))?,
                OutputFormat::Json => {
                    let rendered = serde_json::to_string(&completions)
                        .map_err(|e| Error::new(ErrorKind::Other, e))?;
                    writeln!(output, "{rendered}")?;
                }
            }
        }
    }
    Ok(())
}
