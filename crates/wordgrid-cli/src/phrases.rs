//! Phrase list parsing: a JSON array or one phrase per line.

use wordgrid_core::Phrase;

/// Parse phrase input.
///
/// Input starting with `[` is read as a JSON array of `{text, translation}`.
/// Otherwise each non-blank line not starting with `#` is a phrase, with an
/// optional translation after a tab or ` = `.
pub fn parse_phrases(input: &str) -> Result<Vec<Phrase>, serde_json::Error> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input);
    }

    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_line)
        .collect())
}

fn parse_line(line: &str) -> Phrase {
    let split = line.split_once('\t').or_else(|| line.split_once(" = "));
    match split {
        Some((text, translation)) => Phrase::new(text.trim(), translation.trim()),
        None => Phrase::new(line, ""),
    }
}
