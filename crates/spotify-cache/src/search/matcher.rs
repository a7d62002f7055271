//! Title matching with the substring fallback policy.

use super::ast::SearchExpr;
use super::detect::is_search_expression;
use super::error::SearchError;
use super::parser::SearchParser;

/// A compiled keyword query, ready to match track titles.
///
/// `TrackMatcher` bundles the routing heuristic, the parser, and the
/// fallback policy: queries that look like boolean expressions are
/// parsed; everything else - including boolean-looking queries that fail
/// to parse - matches as a plain case-insensitive substring of the whole
/// original query. Compiling never fails, so one malformed keyword can
/// never stop a sync run; the parse error is retained for reporting.
///
/// # Example
///
/// ```
/// use spotify_cache_rs::search::TrackMatcher;
///
/// let matcher = TrackMatcher::compile("Remix AND NOT Live");
/// assert!(matcher.matches("Summer Remix"));
/// assert!(!matcher.matches("Summer Remix Live"));
///
/// // Malformed expression: falls back to substring matching.
/// let matcher = TrackMatcher::compile("Remix AND");
/// assert!(matcher.fallback_error().is_some());
/// assert!(!matcher.matches("Summer Remix"));
/// assert!(matcher.matches("my Remix AND yours"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMatcher {
    mode: MatchMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MatchMode {
    /// The query parsed as a boolean expression.
    Expression(SearchExpr),

    /// Plain substring matching, either because the query never looked
    /// like an expression (`fallback: None`) or because parsing it
    /// failed (`fallback: Some(error)`).
    Substring {
        query: String,
        fallback: Option<SearchError>,
    },
}

impl TrackMatcher {
    /// Compiles a keyword query. Never fails.
    pub fn compile(query: &str) -> Self {
        if is_search_expression(query) {
            match SearchParser::parse(query) {
                Ok(expr) => {
                    return Self {
                        mode: MatchMode::Expression(expr),
                    };
                }
                Err(error) => {
                    return Self {
                        mode: MatchMode::Substring {
                            query: query.to_string(),
                            fallback: Some(error),
                        },
                    };
                }
            }
        }

        Self {
            mode: MatchMode::Substring {
                query: query.to_string(),
                fallback: None,
            },
        }
    }

    /// True when the query compiled to a boolean expression.
    pub fn is_expression(&self) -> bool {
        matches!(self.mode, MatchMode::Expression(_))
    }

    /// The parse error that forced substring fallback, if any.
    ///
    /// Callers surface this as a warning; it is never escalated.
    pub fn fallback_error(&self) -> Option<&SearchError> {
        match &self.mode {
            MatchMode::Substring {
                fallback: Some(error),
                ..
            } => Some(error),
            _ => None,
        }
    }

    /// Matches the compiled query against a track title.
    pub fn matches(&self, title: &str) -> bool {
        match &self.mode {
            MatchMode::Expression(expr) => expr.matches(title),
            MatchMode::Substring { query, .. } => {
                title.to_lowercase().contains(query.to_lowercase().as_str())
            }
        }
    }
}
