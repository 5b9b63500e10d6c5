//! JSON scalar parsing.
//!
//! # Architecture
//!
//! - [`types`] - Value and kind types
//! - [`options`] - Parser options
//! - `cursor` - Read position and whitespace skipping
//! - `number` - Number recognition and locale-independent conversion
//! - [`parser`] - Dispatcher, literal matcher and entry points
//!
//! # Example
//!
//! ```
//! use litjson::json::{parse, Kind, Value};
//! use litjson::ParseError;
//!
//! let value = parse("  1e10 ").unwrap();
//! assert_eq!(value.kind(), Kind::Number);
//! assert_eq!(value.number(), 1e10);
//!
//! assert_eq!(parse("1 2"), Err(ParseError::RootNotSingular));
//! assert_eq!(parse("null"), Ok(Value::Null));
//! ```

mod cursor;
mod number;
pub mod options;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use options::{LeadingZero, Options};
pub use parser::{parse, parse_into, parse_with_options, Parser};
pub use types::{get_number, get_type, Kind, Value};
