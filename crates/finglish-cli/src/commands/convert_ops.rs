use std::io::{self, BufRead, Write};

use finglish_core::converter::{convert_with, PhraseCandidate, RankOptions};
use finglish_core::dict::Lexicon;

use super::CliError;

const PROMPT: &str = "finglish: ";

/// Prompt on stdout and read one line from stdin.
pub fn read_phrase() -> Result<String, CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Convert `phrase` and print the top `n` results.
///
/// A blank phrase prints nothing.
pub fn convert_cmd(
    lexicon: &Lexicon,
    phrase: &str,
    n: usize,
    opts: &RankOptions,
    json: bool,
) -> Result<(), CliError> {
    if phrase.trim().is_empty() {
        return Ok(());
    }
    let results = convert_with(lexicon, phrase, opts);
    let top = &results[..results.len().min(n)];
    write_results(&mut io::stdout().lock(), top, json)
}

/// One `confidence phrase` line per result, or a JSON array.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[PhraseCandidate],
    json: bool,
) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, results)?;
        writeln!(out)?;
        return Ok(());
    }
    for r in results {
        writeln!(out, "{:?} {}", r.confidence, r.phrase)?;
    }
    Ok(())
}
