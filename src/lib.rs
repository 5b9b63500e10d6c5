//! litjson - a minimal recursive-descent JSON scalar parser.
//!
//! Parses a document holding a single `null`, `true`, `false` or number and
//! reports failures with stable numeric outcome codes.
//!
//! # Architecture
//!
//! - [`json`] - Cursor, literal and number parsing, value types
//! - [`error`] - Outcome codes and the diagnostic name registry
//! - [`conformance`] - Corpus runner for outcome test vectors
//!
//! Outcome and kind codes are generated by `build.rs` from `codes.json`, so
//! names and numbers cannot drift apart.

// Library code reports failures through ParseResult, never by panicking.
// The two documented contract checks opt out locally.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{error_name, CodeSpace, ParseError, ParseResult};
pub use json::{get_number, get_type, parse, parse_into, Kind, Options, Value};
