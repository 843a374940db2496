//! Configuration errors.

/// Rejected rule configuration.
///
/// Raised before any token is inspected. Scanning and rewriting themselves
/// cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An `exclude` element is not a string, is empty, or has surrounding
    /// whitespace.
    #[error(
        "invalid value for option `exclude`: each element must be a non-empty, \
         trimmed string, got {value} ({kind})"
    )]
    InvalidExcludeEntry {
        /// The offending element, rendered as JSON.
        value: String,
        /// PHP-style type name of the element (`string`, `integer`, ...).
        kind: &'static str,
    },

    /// Raw options could not be read: unknown option, wrong type for a
    /// scalar option, or input that is not an object.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}
