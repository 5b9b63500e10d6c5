//! Error handling and the diagnostic name registry.
//!
//! Outcome and kind codes are generated from `codes.json` by `build.rs`, so
//! the numeric codes and their canonical names have a single source.
//!
//! - [`ParseError`] is the failing half of a parse outcome (codes 1..=4)
//! - [`OUTCOME_NAMES`] / [`KIND_NAMES`] are the static name tables
//! - [`error_name`] is the diagnostic lookup over either table

include!(concat!(env!("OUT_DIR"), "/error_generated.rs"));

/// Numeric code of a successful parse.
pub const PARSE_OK: u32 = 0;

/// Selects which code space [`error_name`] looks a code up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSpace {
    /// Value kinds (`NULL`, `FALSE`, ... `OBJECT`).
    Kind,
    /// Parse outcomes (`PARSE_OK`, `PARSE_EXPECT_VALUE`, ...).
    Outcome,
}

/// Return the canonical name of `code` within `space`.
///
/// # Panics
///
/// Panics if `code` is out of range for `space`. This is a diagnostic
/// facility; an out-of-range code is a bug in the caller.
pub fn error_name(code: u32, space: CodeSpace) -> &'static str {
    let names: &[&'static str] = match space {
        CodeSpace::Kind => &KIND_NAMES,
        CodeSpace::Outcome => &OUTCOME_NAMES,
    };
    let index = code as usize;
    assert!(
        index < names.len(),
        "code {} out of range for {:?} names (0..{})",
        code,
        space,
        names.len()
    );
    names[index]
}

/// Numeric outcome code of a parse result: 0 on success, the error code otherwise.
pub fn outcome_code<T>(result: &ParseResult<T>) -> u32 {
    match result {
        Ok(_) => PARSE_OK,
        Err(e) => e.code(),
    }
}
