//! Parser options.
//!
//! The only knob today is how a leading zero followed by more input
//! (`0123`, `0e5`, `0 `) is reported. The compatible behavior reports it as
//! `RootNotSingular`, the same code as trailing content after a complete
//! value; the strict behavior reports it as `InvalidValue`.

use crate::error::ParseError;

/// How to report a `0` that is followed by anything other than `.` or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingZero {
    /// Report [`ParseError::RootNotSingular`].
    #[default]
    RootNotSingular,
    /// Report [`ParseError::InvalidValue`].
    InvalidValue,
}

impl LeadingZero {
    /// The error this policy reports.
    pub const fn error(self) -> ParseError {
        match self {
            LeadingZero::RootNotSingular => ParseError::RootNotSingular,
            LeadingZero::InvalidValue => ParseError::InvalidValue,
        }
    }
}

/// Options for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Leading-zero reporting policy
    pub leading_zero: LeadingZero,
}

impl Options {
    /// Outcome codes identical to the established behavior.
    pub const fn compatible() -> Self {
        Self {
            leading_zero: LeadingZero::RootNotSingular,
        }
    }

    /// Number malformations are always reported as `InvalidValue`.
    pub const fn strict() -> Self {
        Self {
            leading_zero: LeadingZero::InvalidValue,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::compatible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compatible() {
        assert_eq!(Options::default(), Options::compatible());
        assert_eq!(
            Options::default().leading_zero.error(),
            ParseError::RootNotSingular
        );
    }

    #[test]
    fn test_strict_leading_zero() {
        assert_eq!(
            Options::strict().leading_zero.error(),
            ParseError::InvalidValue
        );
    }
}
