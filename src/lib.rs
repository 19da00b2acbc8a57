//! Recover the literal source text of a definition from its `(file, line)`
//! location, without an AST index of the file.
//!
//! Given where a definition *starts*, the interesting problem is deciding
//! where it *ends*. Instead of tracking brace or keyword balance by hand,
//! [`extract_source`] accumulates lines one at a time and asks a real grammar
//! ([`Syntax`], stock implementation [`TreeSitterSyntax`]) after every line
//! whether the buffer now parses as one self-contained fragment; the first
//! accepted prefix wins. [`extract_comment`] recovers the contiguous block of
//! comment/blank lines sitting directly above the definition.
//!
//! ```no_run
//! use defsource::{extract_source, SourceLocation, TreeSitterSyntax};
//!
//! let syntax = TreeSitterSyntax::rust();
//! let loc = SourceLocation::new("src/main.rs", 14);
//! let body = extract_source(&loc, &syntax)?;
//! # Ok::<(), defsource::ExtractError>(())
//! ```

pub mod error;
pub mod extract;
pub mod location;
pub mod syntax;

pub use error::ExtractError;
pub use extract::{extract_comment, extract_source};
pub use location::{HasSourceLocation, SourceLocation};
pub use syntax::{Syntax, TreeSitterSyntax};
