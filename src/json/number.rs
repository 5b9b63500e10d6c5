//! Number literal recognition and conversion.
//!
//! Most validation is left to a decimal string-to-double conversion that
//! reports how much input it consumed. A few pre-checks reject what that
//! conversion would otherwise accept but JSON forbids: a leading `+`, a
//! leading `.`, infinity/NaN spellings, a `.` with no digit after it, and a
//! leading zero followed by more input.

use super::cursor::Cursor;
use super::options::Options;
use super::types::Value;
use crate::error::{ParseError, ParseResult};

/// Parse a number at the cursor, advancing past it on success.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>, options: &Options) -> ParseResult<Value> {
    let rest = cursor.rest();
    let bytes = rest.as_bytes();

    if let Some(b'+' | b'.' | b'I' | b'i' | b'N' | b'n') = bytes.first() {
        return Err(ParseError::InvalidValue);
    }

    // The first '.' anywhere in the remainder must be followed by a digit.
    if let Some(dot) = bytes.iter().position(|&b| b == b'.') {
        if !bytes.get(dot + 1).is_some_and(u8::is_ascii_digit) {
            return Err(ParseError::InvalidValue);
        }
    }

    if bytes.first() == Some(&b'0') && !matches!(bytes.get(1), None | Some(b'.')) {
        return Err(options.leading_zero.error());
    }

    let (n, consumed) = decimal_to_f64(rest)?;
    cursor.advance(consumed);
    Ok(Value::Number(n))
}

/// Convert the longest decimal floating-point prefix of `s`.
///
/// Returns the value and the number of bytes consumed. Never accepts
/// hexadecimal, infinity or NaN forms, and does not depend on the process
/// locale.
pub(crate) fn decimal_to_f64(s: &str) -> ParseResult<(f64, usize)> {
    let len = scan_decimal(s.as_bytes());
    if len == 0 {
        return Err(ParseError::InvalidValue);
    }

    let token = s.get(..len).ok_or(ParseError::InvalidValue)?;
    let n: f64 = token.parse().map_err(|_| ParseError::InvalidValue)?;

    // Infinite only on overflow: the scanner never admits an infinity spelling.
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }

    Ok((n, len))
}

/// Length of the longest prefix of the form
/// `[+-]? (digits [. digits*] | . digits) ([eE] [+-]? digits)?`, or 0.
fn scan_decimal(s: &[u8]) -> usize {
    let mut i = 0;
    if let Some(b'+' | b'-') = s.first() {
        i += 1;
    }

    let int_digits = count_digits(&s[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if s.get(i) == Some(&b'.') {
        frac_digits = count_digits(&s[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // An exponent marker without digits is left unconsumed.
    if let Some(b'e' | b'E') = s.get(i) {
        let mut j = i + 1;
        if let Some(b'+' | b'-') = s.get(j) {
            j += 1;
        }
        let exp_digits = s.get(j..).map_or(0, count_digits);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}
