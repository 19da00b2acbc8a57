//! Source locations and the capability seam for things that have one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Where a definition's text begins: a file path plus a 1-indexed line number.
///
/// The pair is opaque to this crate — callers derive it however their
/// reflection layer sees fit (debug info, macro captures, a symbol index).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-indexed line of the first line of the definition's own text.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Anything that can say where its source lives.
///
/// Adapters implement this per concrete callable representation and are
/// composed explicitly at call sites; nothing is injected into foreign types.
/// `None` is the documented "introspection gave us nothing" signal, not an
/// error by itself — the two entry points react to it differently.
pub trait HasSourceLocation {
    fn source_location(&self) -> Option<SourceLocation>;
}

impl HasSourceLocation for SourceLocation {
    fn source_location(&self) -> Option<SourceLocation> {
        Some(self.clone())
    }
}

impl<T: HasSourceLocation> HasSourceLocation for Option<T> {
    fn source_location(&self) -> Option<SourceLocation> {
        self.as_ref().and_then(HasSourceLocation::source_location)
    }
}

impl<T: HasSourceLocation + ?Sized> HasSourceLocation for &T {
    fn source_location(&self) -> Option<SourceLocation> {
        (**self).source_location()
    }
}

impl HasSourceLocation for (PathBuf, usize) {
    fn source_location(&self) -> Option<SourceLocation> {
        Some(SourceLocation::new(self.0.clone(), self.1))
    }
}

/// Open the backing file and position the cursor so the next read returns the
/// first line of the definition itself.
///
/// Consumes and discards exactly `line - 1` lines. Running out of file while
/// still skipping means the location points past end of file, which is the
/// same upstream-resolution inconsistency as never reaching a complete parse.
pub(crate) fn open_positioned(loc: &SourceLocation) -> Result<BufReader<File>, ExtractError> {
    let mut reader = open(&loc.file)?;
    let mut skipped = String::new();
    for _ in 1..loc.line {
        skipped.clear();
        let n = reader
            .read_line(&mut skipped)
            .map_err(|source| ExtractError::SourceFileUnreadable {
                path: loc.file.clone(),
                source,
            })?;
        if n == 0 {
            return Err(ExtractError::UnexpectedEndOfInput {
                path: loc.file.clone(),
                line: loc.line,
            });
        }
    }
    Ok(reader)
}

pub(crate) fn open(path: &Path) -> Result<BufReader<File>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::SourceFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn positions_cursor_at_requested_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("three.txt");
        let mut f = File::create(&path).unwrap();
        write!(f, "one\ntwo\nthree\n").unwrap();

        let mut reader = open_positioned(&SourceLocation::new(&path, 3)).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "three\n");
    }

    #[test]
    fn line_one_skips_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("one.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let mut reader = open_positioned(&SourceLocation::new(&path, 1)).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "first\n");
    }

    #[test]
    fn location_past_eof_is_unexpected_end_of_input() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("short.txt");
        std::fs::write(&path, "only\n").unwrap();

        let err = open_positioned(&SourceLocation::new(&path, 10)).unwrap_err();
        assert!(matches!(err, ExtractError::UnexpectedEndOfInput { line: 10, .. }));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = open_positioned(&SourceLocation::new("/no/such/file.rs", 1)).unwrap_err();
        assert!(matches!(err, ExtractError::SourceFileUnreadable { .. }));
    }
}
