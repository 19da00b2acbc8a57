//! Parser-backed completeness oracle.
//!
//! The accumulator needs exactly one judgement: "do these lines form one
//! complete, self-contained fragment yet?" Answering that in general requires
//! full grammar knowledge (string literals, raw strings, nested blocks,
//! multi-line constructs), so the judgement is delegated to a real tree-sitter
//! parse of the whole candidate rather than to a bespoke bracket counter.

use tracing::trace;
use tree_sitter::{Language, Parser};

/// Oracle consulted after every line appended to the candidate buffer.
///
/// Comment recognition lives behind the same seam because the single-line
/// comment lexical form is as grammar-specific as completeness is.
pub trait Syntax: Send + Sync {
    /// Does `code` parse as one complete, self-contained fragment?
    ///
    /// Returns `false` for both "incomplete so far" and "genuinely malformed";
    /// callers only need to know whether to keep appending lines.
    fn is_complete(&self, code: &str) -> bool;

    /// Is `line` a single-line comment (leading whitespace allowed)?
    fn is_comment_line(&self, line: &str) -> bool;
}

/// Stock [`Syntax`] implementation backed by a tree-sitter grammar.
///
/// A fresh parser is constructed per probe, so one instance is freely shared
/// across threads and calls carry no state between them.
pub struct TreeSitterSyntax {
    name: &'static str,
    language: Language,
    comment_prefixes: &'static [&'static str],
}

impl TreeSitterSyntax {
    pub fn new(
        name: &'static str,
        language: Language,
        comment_prefixes: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            language,
            comment_prefixes,
        }
    }

    pub fn rust() -> Self {
        Self::new("rust", tree_sitter_rust::LANGUAGE.into(), &["//"])
    }

    pub fn python() -> Self {
        Self::new("python", tree_sitter_python::LANGUAGE.into(), &["#"])
    }

    pub fn typescript() -> Self {
        Self::new(
            "typescript",
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            &["//"],
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Syntax for TreeSitterSyntax {
    fn is_complete(&self, code: &str) -> bool {
        // The empty program parses everywhere; it is never a definition.
        if code.trim().is_empty() {
            return false;
        }

        let mut parser = Parser::new();
        if parser.set_language(&self.language).is_err() {
            return false;
        }
        let Some(tree) = parser.parse(code, None) else {
            return false;
        };

        // has_error() covers both ERROR and MISSING nodes, i.e. dangling open
        // blocks and truncated statements as well as real syntax errors.
        let complete = !tree.root_node().has_error();
        trace!(lang = self.name, bytes = code.len(), complete, "completeness probe");
        complete
    }

    fn is_comment_line(&self, line: &str) -> bool {
        let t = line.trim_start();
        self.comment_prefixes.iter().any(|p| t.starts_with(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_function_is_complete_only_when_closed() {
        let syntax = TreeSitterSyntax::rust();
        assert!(!syntax.is_complete("fn add(a: i64, b: i64) -> i64 {\n"));
        assert!(!syntax.is_complete("fn add(a: i64, b: i64) -> i64 {\n    a + b\n"));
        assert!(syntax.is_complete("fn add(a: i64, b: i64) -> i64 {\n    a + b\n}\n"));
    }

    #[test]
    fn braces_inside_strings_do_not_fool_the_oracle() {
        let syntax = TreeSitterSyntax::rust();
        // A naive brace counter would close the function at the "}" literal.
        assert!(!syntax.is_complete("fn brace() -> char {\n    '}'\n"));
        assert!(syntax.is_complete("fn brace() -> char {\n    '}'\n}\n"));
    }

    #[test]
    fn python_def_needs_a_body() {
        let syntax = TreeSitterSyntax::python();
        assert!(!syntax.is_complete("def add(a, b):\n"));
        assert!(syntax.is_complete("def add(a, b):\n    return a + b\n"));
    }

    #[test]
    fn whitespace_only_is_never_complete() {
        let syntax = TreeSitterSyntax::rust();
        assert!(!syntax.is_complete(""));
        assert!(!syntax.is_complete("   \n\t\n"));
    }

    #[test]
    fn malformed_code_is_simply_not_complete() {
        let syntax = TreeSitterSyntax::rust();
        assert!(!syntax.is_complete("fn ) broken ( {\n"));
    }

    #[test]
    fn comment_lines_by_grammar() {
        let rust = TreeSitterSyntax::rust();
        assert!(rust.is_comment_line("// plain"));
        assert!(rust.is_comment_line("    /// doc, indented"));
        assert!(!rust.is_comment_line("let x = 1; // trailing does not count"));

        let python = TreeSitterSyntax::python();
        assert!(python.is_comment_line("  # note"));
        assert!(!python.is_comment_line("x = 1"));
    }
}
