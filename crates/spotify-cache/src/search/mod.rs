//! Boolean search expressions for track titles.
//!
//! Sync targets are configured with a keyword, which may be either a
//! plain substring or a boolean query combining keywords with `AND`,
//! `OR`, `NOT` and parentheses:
//!
//! ```text
//! Remix AND NOT Live
//! (acoustic OR unplugged) AND session
//! ```
//!
//! Operators are recognized case-insensitively, but only as whole words:
//! a title or keyword like `Android` is a single keyword, never the
//! operator `AND`. Keywords match as case-insensitive substrings of the
//! track title.
//!
//! [`is_search_expression`] is the cheap routing heuristic: queries it
//! flags are parsed with [`SearchParser`], everything else is treated as
//! a plain substring by the caller. The heuristic can yield false
//! positives (a literal standalone "AND"), so a [`SearchError`] from the
//! parser is never fatal - [`TrackMatcher`] downgrades such queries to
//! substring matching.
//!
//! # Example
//!
//! ```
//! use spotify_cache_rs::search::{is_search_expression, SearchParser};
//!
//! assert!(is_search_expression("Remix AND NOT Live"));
//! assert!(!is_search_expression("Remix"));
//!
//! let expr = SearchParser::parse("Remix AND NOT Live").unwrap();
//! assert!(expr.matches("Summer Remix"));
//! assert!(!expr.matches("Summer Remix Live"));
//! ```

mod ast;
mod detect;
mod error;
mod lexer;
mod matcher;
mod parser;

pub use ast::SearchExpr;
pub use detect::is_search_expression;
pub use error::{SearchError, SearchResult};
pub use matcher::TrackMatcher;
pub use parser::SearchParser;
