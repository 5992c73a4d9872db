use thiserror::Error;

/// Errors produced while writing HTML.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// The underlying sink failed.
    #[error("failed to write HTML: {0}")]
    Io(#[from] std::io::Error),
    /// The buffered output was not valid UTF-8.
    #[error("HTML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// A tag was requested with an empty name.
    #[error("tag name must not be empty")]
    EmptyTagName,
    /// An attribute was written with an empty name.
    #[error("attribute name must not be empty (value: {value:?})")]
    EmptyAttributeName {
        /// The value the nameless attribute carried.
        value: String,
    },
    /// An end tag was requested while no tag was open.
    #[error("cannot close a tag: no tag is open")]
    UnbalancedEndTag,
    /// A tag scope was released while its tag was not the innermost open tag.
    #[error("cannot close <{tag}>: not the innermost open tag (expected depth {expected}, found {found})")]
    MismatchedScope {
        /// The tag the scope was opened for.
        tag: String,
        /// The open-tag depth recorded when the scope was opened.
        expected: usize,
        /// The open-tag depth at release.
        found: usize,
    },
    /// The writer was finished with tags still open.
    #[error("unclosed tags at end of output: {}", .0.join(", "))]
    UnclosedTags(Vec<String>),
    /// A `write` call did not match any supported argument shape.
    #[error("no `write` overload accepts {signature}")]
    UnsupportedOverload {
        /// The rejected call shape, e.g. `write(i32, bool)`.
        signature: String,
    },
    /// A composite format string could not be applied.
    #[error("invalid format string {format:?}: {reason}")]
    Format {
        /// The offending format string.
        format: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Shorthand for results returned by this crate.
pub type Result<T, E = HtmlError> = std::result::Result<T, E>;
