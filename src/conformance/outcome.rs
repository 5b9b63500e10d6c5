//! Serializable parse outcome.

use serde::{Deserialize, Serialize};

use crate::error::ParseResult;
use crate::json::Value;

/// A parse outcome as it appears in corpus files and CLI output.
///
/// Serializes as `{"ok":{"kind":"NUMBER","number":1.5}}` or
/// `{"err":{"code":2,"name":"PARSE_INVALID_VALUE"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeRecord {
    /// Successful parse
    Ok {
        /// Kind name of the root value
        kind: String,
        /// Number payload, present only for NUMBER
        #[serde(default, skip_serializing_if = "Option::is_none")]
        number: Option<f64>,
    },
    /// Failed parse
    Err {
        /// Numeric outcome code
        code: u32,
        /// Canonical outcome name
        name: String,
    },
}

impl OutcomeRecord {
    /// Build a record from a parse result.
    pub fn from_result(result: &ParseResult<Value>) -> Self {
        match result {
            Ok(value) => Self::Ok {
                kind: value.kind().name().to_string(),
                number: value.as_number(),
            },
            Err(e) => Self::Err {
                code: e.code(),
                name: e.name().to_string(),
            },
        }
    }

    /// Returns true if this is a successful outcome.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Compare two records, treating numbers as equal only when bit-identical.
    ///
    /// Error records match on code; the name is informational.
    pub fn matches(&self, other: &OutcomeRecord) -> bool {
        match (self, other) {
            (
                Self::Ok { kind: k1, number: n1 },
                Self::Ok { kind: k2, number: n2 },
            ) => k1 == k2 && n1.map(f64::to_bits) == n2.map(f64::to_bits),
            (Self::Err { code: c1, .. }, Self::Err { code: c2, .. }) => c1 == c2,
            _ => false,
        }
    }
}

impl std::fmt::Display for OutcomeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok { kind, number: Some(n) } => write!(f, "ok {} {:?}", kind, n),
            Self::Ok { kind, number: None } => write!(f, "ok {}", kind),
            Self::Err { code, name } => write!(f, "err {} ({})", name, code),
        }
    }
}
