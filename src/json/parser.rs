//! Recursive descent parser for a single root value.
//!
//! The entry point skips leading whitespace, dispatches on the lookahead
//! byte, then requires that only whitespace follows the value.
//!
//! | lookahead | route |
//! |---|---|
//! | `t` / `f` / `n` | literal `true` / `false` / `null` |
//! | end of input | `ExpectValue` |
//! | anything else | number |

use tracing::{debug, trace};

use super::cursor::Cursor;
use super::number::parse_number;
use super::options::Options;
use super::types::Value;
use crate::error::{ParseError, ParseResult};

/// Parser over one input document.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: Options,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, options: Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
        }
    }

    /// Byte offset the parser has consumed up to.
    ///
    /// After a failure this is where the offending token starts.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse the input as exactly one root value.
    pub fn parse(&mut self) -> ParseResult<Value> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }

        Ok(value)
    }

    /// Dispatch on the lookahead byte without consuming it.
    fn parse_value(&mut self) -> ParseResult<Value> {
        let lookahead = self.cursor.peek();
        trace!(position = self.cursor.position(), ?lookahead, "dispatching value");

        match lookahead {
            Some(b't') => self.parse_literal("true", Value::True),
            Some(b'f') => self.parse_literal("false", Value::False),
            Some(b'n') => self.parse_literal("null", Value::Null),
            None => Err(ParseError::ExpectValue),
            Some(_) => parse_number(&mut self.cursor, &self.options),
        }
    }

    /// Match `keyword` byte-for-byte; the cursor does not move on mismatch.
    fn parse_literal(&mut self, keyword: &str, value: Value) -> ParseResult<Value> {
        if !self.cursor.rest().starts_with(keyword) {
            return Err(ParseError::InvalidValue);
        }
        self.cursor.advance(keyword.len());
        Ok(value)
    }
}

/// Parse a document with the default (compatible) options.
pub fn parse(input: &str) -> ParseResult<Value> {
    parse_with_options(input, Options::default())
}

/// Parse a document with custom options.
pub fn parse_with_options(input: &str, options: Options) -> ParseResult<Value> {
    let mut parser = Parser::new(input, options);
    let result = parser.parse();
    if let Err(e) = &result {
        debug!(position = parser.position(), outcome = e.name(), "parse rejected");
    }
    result
}

/// Parse into a caller-owned slot.
///
/// `out` is set to `Null` before parsing and stays `Null` on every failure;
/// it holds the parsed value only when `Ok(())` is returned.
pub fn parse_into(out: &mut Value, input: &str) -> ParseResult<()> {
    *out = Value::Null;
    *out = parse(input)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::Kind;

    #[test]
    fn test_parse_literals() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse("true"), Ok(Value::True));
        assert_eq!(parse("false"), Ok(Value::False));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("42"), Ok(Value::Number(42.0)));
        assert_eq!(parse(" -1.5e2 "), Ok(Value::Number(-150.0)));
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(""), Err(ParseError::ExpectValue));
        assert_eq!(parse(" \t\r\n"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_literal_mismatch_does_not_advance() {
        let mut parser = Parser::new("  nul", Options::default());
        assert_eq!(parser.parse(), Err(ParseError::InvalidValue));
        assert_eq!(parser.position(), 2);
    }

    #[test]
    fn test_literal_prefix_then_trailing() {
        assert_eq!(parse("tru"), Err(ParseError::InvalidValue));
        assert_eq!(parse("truee"), Err(ParseError::RootNotSingular));
        assert_eq!(parse("nullx"), Err(ParseError::RootNotSingular));
        assert_eq!(parse("fals"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert_eq!(parse("True"), Err(ParseError::InvalidValue));
        assert_eq!(parse("NULL"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_trailing_content() {
        let mut parser = Parser::new("1 2", Options::default());
        assert_eq!(parser.parse(), Err(ParseError::RootNotSingular));
        assert_eq!(parser.position(), 2);
    }

    #[test]
    fn test_unwired_starters_fall_through_to_number() {
        assert_eq!(parse("\"a\""), Err(ParseError::InvalidValue));
        assert_eq!(parse("[]"), Err(ParseError::InvalidValue));
        assert_eq!(parse("{}"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_strict_options() {
        assert_eq!(
            parse_with_options("007", Options::strict()),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_with_options("0.7", Options::strict()),
            Ok(Value::Number(0.7))
        );
    }

    #[test]
    fn test_parse_into_resets_on_failure() {
        let mut out = Value::Number(9.0);
        assert_eq!(parse_into(&mut out, "true x"), Err(ParseError::RootNotSingular));
        assert_eq!(out.kind(), Kind::Null);

        let mut out = Value::True;
        assert_eq!(parse_into(&mut out, "0123"), Err(ParseError::RootNotSingular));
        assert!(out.is_null());

        assert_eq!(parse_into(&mut out, " 2.5 "), Ok(()));
        assert_eq!(out.number(), 2.5);
    }
}
