//! Parsed value types.
//!
//! [`Value`] is a sum type with one variant per [`Kind`]. Only `Number`
//! carries a payload; `String`, `Array` and `Object` are reserved and never
//! produced by the parser.

use crate::error::{error_name, CodeSpace};

/// The discriminant of a parsed value.
///
/// Discriminants are the stable kind codes used by [`error_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Kind {
    /// `null`
    Null = 0,
    /// `false`
    False = 1,
    /// `true`
    True = 2,
    /// A number
    Number = 3,
    /// Reserved: string values are not parsed yet
    String = 4,
    /// Reserved: array values are not parsed yet
    Array = 5,
    /// Reserved: object values are not parsed yet
    Object = 6,
}

impl Kind {
    /// Every kind, in code order.
    pub const ALL: [Kind; 7] = [
        Kind::Null,
        Kind::False,
        Kind::True,
        Kind::Number,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    /// Get the numeric kind code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up a kind by its numeric code.
    pub fn from_code(code: u32) -> Option<Kind> {
        Kind::ALL.get(code as usize).copied()
    }

    /// Get the canonical kind name (`NULL`, `NUMBER`, ...).
    pub fn name(self) -> &'static str {
        error_name(self.code(), CodeSpace::Kind)
    }
}

/// A parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON false literal
    False,
    /// JSON true literal
    True,
    /// Double-precision number
    Number(f64),
    /// Reserved for string values
    String,
    /// Reserved for array values
    Array,
    /// Reserved for object values
    Object,
}

impl Value {
    /// Returns the discriminant of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::False => Kind::False,
            Value::True => Kind::True,
            Value::Number(_) => Kind::Number,
            Value::String => Kind::String,
            Value::Array => Kind::Array,
            Value::Object => Kind::Object,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns the boolean value for `true`/`false`, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a Number. Use [`Value::as_number`] when the
    /// kind is not already known.
    #[allow(clippy::panic)]
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("number() requires a NUMBER value, found {}", other.kind().name()),
        }
    }
}

/// Returns the kind of `value`.
pub fn get_type(value: &Value) -> Kind {
    value.kind()
}

/// Returns the number payload of `value`.
///
/// # Panics
///
/// Panics unless `value` is a Number.
pub fn get_number(value: &Value) -> f64 {
    value.number()
}
