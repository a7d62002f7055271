//! Error types for the search expression parser.

use thiserror::Error;

/// A specialized Result type for search expression parsing.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while parsing a search expression.
///
/// All of these are recoverable: callers fall back to plain substring
/// matching of the original query (see
/// [`TrackMatcher`](crate::search::TrackMatcher)).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The expression is empty or whitespace-only.
    #[error("search expression is empty")]
    EmptyExpression,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The offending token.
        token: String,
    },

    /// The expression ended where a keyword or group was required.
    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,

    /// An opening parenthesis was never closed.
    #[error("unclosed parenthesis")]
    UnclosedParenthesis,
}

impl SearchError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        SearchError::UnexpectedToken {
            token: token.into(),
        }
    }
}
