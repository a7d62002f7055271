//! Recursive descent parser for search expressions.

use super::ast::SearchExpr;
use super::error::{SearchError, SearchResult};
use super::lexer::{Lexer, SearchToken};

/// Parser for boolean search expressions.
///
/// # Grammar
///
/// ```text
/// expression ::= or_expr
/// or_expr    ::= and_expr ("OR" and_expr)*
/// and_expr   ::= not_expr ("AND" not_expr)*
/// not_expr   ::= "NOT" primary | primary
/// primary    ::= WORD | "(" expression ")"
/// ```
///
/// # Operator Precedence (highest to lowest)
///
/// 1. `NOT` - unary, binds to a single primary
/// 2. `AND` - binary, left-associative
/// 3. `OR` - binary, left-associative
///
/// `NOT` deliberately takes one primary rather than a whole conjunction:
/// `NOT a AND b` parses as `(NOT a) AND b`. Write `NOT (a AND b)` for the
/// other reading. Chained binary operators nest to the left, so
/// `a OR b OR c` builds `Or(Or(a, b), c)`.
///
/// The token cursor lives inside a single `parse` call; the public
/// surface is an associated function, so concurrent parses cannot share
/// state.
///
/// # Example
///
/// ```
/// use spotify_cache_rs::search::{SearchExpr, SearchParser};
///
/// let expr = SearchParser::parse("Remix AND NOT Live").unwrap();
/// assert!(matches!(expr, SearchExpr::And(_, _)));
/// ```
pub struct SearchParser {
    tokens: Vec<SearchToken>,
    position: usize,
}

impl SearchParser {
    /// Parses a search expression string into a [`SearchExpr`] tree.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyExpression` for empty or
    /// whitespace-only input.
    ///
    /// Returns `SearchError::UnexpectedToken` when an operator or closing
    /// parenthesis appears where a keyword or group is required, and when
    /// input remains after a complete expression.
    ///
    /// Returns `SearchError::UnexpectedEndOfInput` when the expression
    /// ends mid-construct (e.g. a trailing `AND`).
    ///
    /// Returns `SearchError::UnclosedParenthesis` when a `(` is never
    /// matched by a `)`.
    pub fn parse(input: &str) -> SearchResult<SearchExpr> {
        let tokens = Lexer::new(input.trim()).tokenize();
        if tokens.is_empty() {
            return Err(SearchError::EmptyExpression);
        }

        let mut parser = Self {
            tokens,
            position: 0,
        };
        let expr = parser.parse_or()?;

        // A valid parse consumes every token.
        if parser.position < parser.tokens.len() {
            let remaining = &parser.tokens[parser.position];
            return Err(SearchError::unexpected_token(token_text(remaining)));
        }

        Ok(expr)
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&SearchToken> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<&SearchToken> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Checks if the current token matches the expected token.
    fn check(&self, expected: &SearchToken) -> bool {
        self.peek() == Some(expected)
    }

    /// Parses OR expressions: `and_expr ("OR" and_expr)*`
    fn parse_or(&mut self) -> SearchResult<SearchExpr> {
        let mut left = self.parse_and()?;

        while self.check(&SearchToken::Or) {
            self.advance();
            let right = self.parse_and()?;
            left = SearchExpr::or(left, right);
        }

        Ok(left)
    }

    /// Parses AND expressions: `not_expr ("AND" not_expr)*`
    fn parse_and(&mut self) -> SearchResult<SearchExpr> {
        let mut left = self.parse_not()?;

        while self.check(&SearchToken::And) {
            self.advance();
            let right = self.parse_not()?;
            left = SearchExpr::and(left, right);
        }

        Ok(left)
    }

    /// Parses NOT expressions: `"NOT" primary | primary`
    fn parse_not(&mut self) -> SearchResult<SearchExpr> {
        if self.check(&SearchToken::Not) {
            self.advance();
            let operand = self.parse_primary()?;
            return Ok(SearchExpr::negate(operand));
        }

        self.parse_primary()
    }

    /// Parses primary expressions: `WORD | "(" expression ")"`
    fn parse_primary(&mut self) -> SearchResult<SearchExpr> {
        let token = self
            .advance()
            .ok_or(SearchError::UnexpectedEndOfInput)?
            .clone();

        match token {
            SearchToken::OpenParen => {
                let inner = self.parse_or()?;
                if !self.check(&SearchToken::CloseParen) {
                    return Err(SearchError::UnclosedParenthesis);
                }
                self.advance();
                Ok(inner)
            }

            SearchToken::Word(word) => Ok(SearchExpr::keyword(word)),

            // An operator or closing paren where an operand belongs.
            other => Err(SearchError::unexpected_token(token_text(&other))),
        }
    }
}

/// Renders a token the way the user wrote it, for error messages.
fn token_text(token: &SearchToken) -> String {
    match token {
        SearchToken::OpenParen => "(".to_string(),
        SearchToken::CloseParen => ")".to_string(),
        SearchToken::And => "AND".to_string(),
        SearchToken::Or => "OR".to_string(),
        SearchToken::Not => "NOT".to_string(),
        SearchToken::Word(word) => word.clone(),
    }
}
