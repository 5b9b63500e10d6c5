// Build script that generates the diagnostic code registry from codes.json.
// Build scripts never ship in the library, so expect() and panic!() are fine here.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
//
// Consumes `codes.json` and generates `error_generated.rs` in OUT_DIR with:
// - `ParseError`, one variant per failing outcome
// - `OUTCOME_NAMES` and `KIND_NAMES` lookup tables
// - the `ParseResult<T>` alias

use serde::Deserialize;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Codes {
    version: String,
    kinds: Vec<KindInfo>,
    outcomes: Vec<OutcomeInfo>,
}

#[derive(Debug, Deserialize)]
struct KindInfo {
    name: String,
    code: u32,
}

#[derive(Debug, Deserialize)]
struct OutcomeInfo {
    name: String,
    /// Rust variant name; `null` marks the success outcome.
    variant: Option<String>,
    code: u32,
    message: String,
}

fn main() {
    println!("cargo:rerun-if-changed=codes.json");
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let codes_path = Path::new(&manifest_dir).join("codes.json");

    let content = fs::read_to_string(&codes_path)
        .unwrap_or_else(|e| panic!("Could not read {}: {}", codes_path.display(), e));
    let codes: Codes = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Could not parse {}: {}", codes_path.display(), e));

    if codes.version != "1" {
        panic!("Unexpected codes.json version '{}', expected '1'", codes.version);
    }

    check_contiguous("kinds", codes.kinds.iter().map(|k| k.code));
    check_contiguous("outcomes", codes.outcomes.iter().map(|o| o.code));

    let successes: Vec<&OutcomeInfo> = codes
        .outcomes
        .iter()
        .filter(|o| o.variant.is_none())
        .collect();
    if successes.len() != 1 || successes[0].code != 0 {
        panic!("codes.json must define exactly one success outcome with code 0");
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    generate_error_rs(Path::new(&out_dir), &codes);
}

/// Codes must be 0, 1, 2, ... in declaration order so they can index the name tables.
fn check_contiguous(what: &str, codes: impl Iterator<Item = u32>) {
    for (expected, code) in codes.enumerate() {
        if code as usize != expected {
            panic!("{} codes must be contiguous from 0: found {} at position {}", what, code, expected);
        }
    }
}

fn generate_error_rs(out_path: &Path, codes: &Codes) {
    let failures: Vec<(&OutcomeInfo, &str)> = codes
        .outcomes
        .iter()
        .filter_map(|o| o.variant.as_deref().map(|v| (o, v)))
        .collect();

    let mut code = String::new();

    // Outer doc comments only: this file is pulled in with include!().
    code.push_str(
        r#"// Diagnostic codes generated from codes.json.
//
// DO NOT EDIT - This file is generated by build.rs

use thiserror::Error;

/// A failed parse outcome.
///
/// Discriminants are the stable numeric outcome codes; code 0 is reserved for success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u32)]
pub enum ParseError {
"#,
    );

    for (outcome, variant) in &failures {
        let _ = write!(
            code,
            "    /// {name} (code {code})\n    #[error(\"{name}: {message}\")]\n    {variant} = {code},\n\n",
            name = outcome.name,
            code = outcome.code,
            message = outcome.message,
            variant = variant,
        );
    }
    code.push_str("}\n\n");

    code.push_str(
        r#"impl ParseError {
    /// Get the numeric outcome code.
    pub const fn code(&self) -> u32 {
        *self as u32
    }

    /// Get the canonical outcome name.
    pub const fn name(&self) -> &'static str {
        match self {
"#,
    );
    for (outcome, variant) in &failures {
        let _ = writeln!(
            code,
            "            ParseError::{} => \"{}\",",
            variant, outcome.name
        );
    }
    code.push_str(
        r#"        }
    }

    /// Look up a failure by its numeric code. Code 0 (success) yields `None`.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
"#,
    );
    for (outcome, variant) in &failures {
        let _ = writeln!(
            code,
            "            {} => Some(ParseError::{}),",
            outcome.code, variant
        );
    }
    code.push_str(
        r#"            _ => None,
        }
    }
}

"#,
    );

    let _ = writeln!(
        code,
        "/// Outcome names indexed by outcome code.\npub const OUTCOME_NAMES: [&str; {}] = [",
        codes.outcomes.len()
    );
    for outcome in &codes.outcomes {
        let _ = writeln!(code, "    \"{}\",", outcome.name);
    }
    code.push_str("];\n\n");

    let _ = writeln!(
        code,
        "/// Value kind names indexed by kind code.\npub const KIND_NAMES: [&str; {}] = [",
        codes.kinds.len()
    );
    for kind in &codes.kinds {
        let _ = writeln!(code, "    \"{}\",", kind.name);
    }
    code.push_str("];\n\n");

    code.push_str(
        r#"/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
"#,
    );

    fs::write(out_path.join("error_generated.rs"), code)
        .expect("Failed to write error_generated.rs");
}
