use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::pipelines::sentiment::Prediction;

/// Renders matched words as a bracketed list of quoted words, e.g. `['good', 'nice']`.
///
/// Words are single-quoted unless they contain a `'` and no `"`. Backslashes,
/// the chosen quote, and control characters are escaped.
pub fn format_words(words: &BTreeSet<String>) -> String {
    let mut out = String::from("[");
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, word);
    }
    out.push(']');
    out
}

fn push_quoted(out: &mut String, word: &str) {
    let quote = if word.contains('\'') && !word.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Writes one result block: line, positive matches, negative matches, label, blank line.
pub fn write_block<W: Write>(
    writer: &mut W,
    line: &str,
    prediction: &Prediction,
) -> io::Result<()> {
    writeln!(writer, "{line}")?;
    writeln!(writer, "{}", format_words(&prediction.positive))?;
    writeln!(writer, "{}", format_words(&prediction.negative))?;
    writeln!(writer, "{}", prediction.label)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_list() {
        assert_eq!(format_words(&BTreeSet::new()), "[]");
    }

    #[test]
    fn sorted_single_quoted() {
        assert_eq!(format_words(&set(&["nice", "good"])), "['good', 'nice']");
    }

    #[test]
    fn apostrophe_switches_quote() {
        assert_eq!(format_words(&set(&["can't"])), "[\"can't\"]");
        assert_eq!(format_words(&set(&["it's\"x"])), "['it\\'s\"x']");
    }

    #[test]
    fn escapes_backslash_and_controls() {
        assert_eq!(format_words(&set(&["a\\b"])), "['a\\\\b']");
        assert_eq!(format_words(&set(&["a\tb"])), "['a\\tb']");
        assert_eq!(format_words(&set(&["a\u{1}b"])), "['a\\x01b']");
    }

    #[test]
    fn block_layout() {
        let prediction = Prediction::from_matches(set(&["good"]), set(&["bad"]));
        let mut buf = Vec::new();
        write_block(&mut buf, "good bad", &prediction).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "good bad\n['good']\n['bad']\nNeutral\n\n"
        );
    }
}
