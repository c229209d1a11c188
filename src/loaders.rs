use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, SentimentError};
use crate::models::Lexicon;

/// Reads a newline-delimited word list into a [`Lexicon`].
///
/// Each line is trimmed and kept verbatim. Blank lines, and lines starting
/// with the comment prefix when one is set, are skipped.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub(crate) path: PathBuf,
    pub(crate) comment_prefix: Option<String>,
}

impl LexiconLoader {
    /// Creates a loader for the word list at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            comment_prefix: None,
        }
    }

    /// Skips lines starting with `prefix`. `None` or an empty prefix keeps every line.
    pub fn comment_prefix(mut self, prefix: Option<String>) -> Self {
        self.comment_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Reads the file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::FileAccess`] if the file is missing or unreadable.
    pub fn load(&self) -> Result<Lexicon> {
        let file =
            File::open(&self.path).map_err(|e| SentimentError::file_access(&self.path, e))?;
        let lexicon = self.read(BufReader::new(file))?;

        tracing::debug!(
            path = %self.path.display(),
            words = lexicon.len(),
            "loaded lexicon"
        );

        Ok(lexicon)
    }

    fn read<R: BufRead>(&self, reader: R) -> Result<Lexicon> {
        let mut words = Vec::new();
        for line in read_lines(reader, &self.path) {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if let Some(prefix) = &self.comment_prefix {
                if word.starts_with(prefix.as_str()) {
                    continue;
                }
            }
            words.push(word.to_string());
        }
        Ok(words.into_iter().collect())
    }
}

/// Splits `reader` on `\n`, decoding each line lossily so that stray bytes never
/// reject a line. I/O failures are attributed to `path`.
pub(crate) fn read_lines<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<String>> + 'a {
    reader.split(b'\n').map(move |line| {
        line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .map_err(|e| SentimentError::file_access(path, e))
    })
}
