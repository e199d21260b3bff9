use thiserror::Error;

/// Classifies hostname errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostnameErrorKind {
    /// Nothing left after stripping scheme, userinfo, path and port
    Empty,
    /// A label between two dots (or at either end) is empty
    EmptyLabel,
    /// A label holds whitespace, a colon, `@` or a bracket
    InvalidCharacter,
    /// A `:` suffix was present but is not a valid port number
    InvalidPort,
    /// A bracketed `[...]` host is not an IPv6 address
    InvalidIpLiteral,
}

/// Domain extraction error types
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Malformed suffix rule at line {line}: {message}")]
    MalformedRule { line: usize, message: String },

    #[error("Invalid hostname '{input}': {kind:?}")]
    InvalidHostname {
        kind: HostnameErrorKind,
        input: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtractError {
    pub(crate) fn hostname(kind: HostnameErrorKind, input: &str) -> Self {
        ExtractError::InvalidHostname {
            kind,
            input: input.to_string(),
        }
    }

    /// True for per-input errors a caller can skip and keep going.
    pub fn is_invalid_hostname(&self) -> bool {
        matches!(self, ExtractError::InvalidHostname { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
