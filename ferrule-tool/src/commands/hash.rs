//! Hash command implementation.
//!
//! Prints the kind, fully-qualified name and hash code of identifier
//! literals. A literal starting with `:` is a keyword; anything else is a
//! symbol.

use ferrule_ident::keyword::KEYWORD_MARKER;
use ferrule_ident::{Ident, Runtime, Symbol};
use serde::Serialize;

use crate::commands::common::{render, OutputFormat};
use crate::error::{FerruleError, Result};

/// Arguments for the hash command.
#[derive(Debug, Clone)]
pub struct HashArgs {
    /// Identifier literals such as `:cljs.core/none` or `first`.
    pub literals: Vec<String>,
    /// Report format.
    pub format: OutputFormat,
}

/// One line of the hash report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashReport {
    pub kind: String,
    pub namespace: Option<String>,
    pub name: String,
    pub literal: String,
    pub hash: i32,
}

impl HashReport {
    fn from_ident(ident: &dyn Ident, literal: String) -> Self {
        Self {
            kind: ident.kind().to_string(),
            namespace: ident.namespace().map(str::to_string),
            name: ident.name().to_string(),
            literal,
            hash: ident.hash_code(),
        }
    }
}

/// Describe a single literal.
pub fn describe(literal: &str, runtime: &Runtime) -> Result<HashReport> {
    if literal.starts_with(KEYWORD_MARKER) {
        let keyword = runtime.parse_keyword(literal)?;
        Ok(HashReport::from_ident(&keyword, keyword.to_string()))
    } else {
        let symbol = Symbol::parse(literal)?;
        Ok(HashReport::from_ident(&symbol, symbol.to_string()))
    }
}

/// Execute the hash command.
pub fn run_hash(args: HashArgs, runtime: &Runtime) -> Result<()> {
    if args.literals.is_empty() {
        return Err(FerruleError::Validation(
            "No identifier literals specified".to_string(),
        ));
    }

    let reports = args
        .literals
        .iter()
        .map(|literal| describe(literal, runtime))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("hashed {} literals", reports.len());

    let output = render(&reports, args.format, |r| {
        format!("{:<8} {:<32} {}", r.kind, r.literal, r.hash)
    })?;
    println!("{}", output);
    Ok(())
}
