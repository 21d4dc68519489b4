use std::io::{self, Write};

use finglish_core::converter::explain::{explain_word, format_text};
use finglish_core::converter::RankOptions;
use finglish_core::dict::Lexicon;

use super::CliError;

/// Print how `word` is segmented, expanded and cut.
pub fn explain_cmd(
    lexicon: &Lexicon,
    word: &str,
    opts: &RankOptions,
    json: bool,
) -> Result<(), CliError> {
    let result = explain_word(lexicon, word, opts);
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_text(&result))?;
    }
    Ok(())
}
