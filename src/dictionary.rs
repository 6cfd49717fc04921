//! Newline-separated word lists
//!
//! The word list is read lazily, one line at a time, so that a caller who stops early never
//! reads the rest of the file.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Where most Unix systems keep their word list
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Errors that can occur when opening a word list
#[derive(Debug)]
pub enum DictionaryError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::NotFound(path) => write!(
                f,
                "{} does not exist!\n\nEnsure that a word list is installed.\n\
                 On most Linux distributions, try:\n    `apt-cache search wordlist|grep ^w|sort`\n",
                path.display()
            ),
            DictionaryError::Io { path, source } => {
                write!(f, "Error reading {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::NotFound(_) => None,
            DictionaryError::Io { source, .. } => Some(source),
        }
    }
}

/// A lazily read word list: trimmed, non-empty lines
pub struct WordList<R> {
    path: PathBuf,
    lines: Lines<R>,
    read: usize,
}

impl WordList<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
            _ => DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), "opened word list");
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> WordList<R> {
    /// Read words from any buffered reader; `path` is only used in messages
    pub fn from_reader(path: impl AsRef<Path>, reader: R) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: reader.lines(),
            read: 0,
        }
    }
}

impl<R: BufRead> Iterator for WordList<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    self.read += 1;
                    let word = line.trim();
                    if !word.is_empty() {
                        return Some(word.to_string());
                    }
                }
                Err(error) => {
                    warn!(
                        path = %self.path.display(),
                        line = self.read + 1,
                        %error,
                        "stopped reading word list"
                    );
                    return None;
                }
            }
        }
    }
}
