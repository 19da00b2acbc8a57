//! The two public operations: greedy source accumulation and the comment
//! back-scan (implemented as a forward scan with reset, so one streaming pass
//! suffices and no random access or full-file buffering is needed).

use std::io::BufRead;

use tracing::debug;

use crate::error::ExtractError;
use crate::location::{open, open_positioned, HasSourceLocation};
use crate::syntax::Syntax;

/// Return the literal source text of the definition starting at the entity's
/// location: the shortest run of whole lines, starting at that line, that the
/// grammar accepts as one self-contained fragment.
///
/// Bytes come back exactly as they appear in the file — original line
/// terminators and indentation included, no reformatting. Intermediate
/// buffers that fail to parse (an opened block with no closing token yet) are
/// expected, not errors; the loop just keeps appending. The first accepted
/// prefix wins: if a strictly shorter run happens to be valid on its own, the
/// longer "intended" construct is never considered.
pub fn extract_source(
    entity: &impl HasSourceLocation,
    syntax: &impl Syntax,
) -> Result<String, ExtractError> {
    let loc = entity
        .source_location()
        .ok_or(ExtractError::LocationUnavailable)?;

    let mut reader = open_positioned(&loc)?;
    let mut candidate = String::new();
    let mut lines = 0usize;

    loop {
        let n = reader
            .read_line(&mut candidate)
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
        lines += 1;

        if syntax.is_complete(&candidate) {
            debug!(
                file = %loc.file.display(),
                start = loc.line,
                lines,
                "definition complete"
            );
            return Ok(candidate);
        }
    }
}

/// Return the contiguous block of comment/blank lines sitting directly above
/// the entity's location, trimmed of surrounding whitespace.
///
/// The scan runs forward from the start of the file over the `line - 1`
/// preceding lines: qualifying lines accumulate, and any non-comment,
/// non-blank line clears the buffer entirely. Only the block that ends
/// exactly at the definition survives — a comment separated from it by even
/// one code line is gone.
///
/// No preceding comment is a valid empty result, and so is an absent
/// location: with nothing to scan there is simply nothing to collect.
pub fn extract_comment(
    entity: &impl HasSourceLocation,
    syntax: &impl Syntax,
) -> Result<String, ExtractError> {
    let Some(loc) = entity.source_location() else {
        return Ok(String::new());
    };

    let mut reader = open(&loc.file)?;
    let mut buffer = String::new();
    let mut line = String::new();

    for _ in 1..loc.line {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .map_err(|source| ExtractError::SourceFileUnreadable {
                path: loc.file.clone(),
                source,
            })?;
        if n == 0 {
            break;
        }

        if line.trim().is_empty() || syntax.is_comment_line(&line) {
            buffer.push_str(&line);
        } else {
            buffer.clear();
        }
    }

    Ok(buffer.trim().to_string())
}
