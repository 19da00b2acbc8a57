use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while extracting source or comments.
///
/// All variants are precondition or environment failures; none is worth
/// retrying. The backing file is closed before any of these reach the caller.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The entity could not name a `(file, line)` pair. Introspection gave us
    /// nothing to work with, so there is nothing to open.
    #[error("no source location available for this entity")]
    LocationUnavailable,

    /// The backing file could not be opened or read. Files move, get deleted
    /// or lose permissions between definition time and extraction time.
    #[error("source file {} unreadable: {source}", .path.display())]
    SourceFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file ended before the accumulated lines ever formed a complete
    /// fragment. The location pointed somewhere that never resolves to valid
    /// syntax, which indicates a resolution bug upstream.
    #[error(
        "reached end of {} without completing the definition starting at line {line}",
        .path.display()
    )]
    UnexpectedEndOfInput { path: PathBuf, line: usize },
}
