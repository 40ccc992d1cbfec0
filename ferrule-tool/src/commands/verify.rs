//! Verify command implementation.
//!
//! Recomputes the hash code of every entry in a constants manifest and
//! reports the ones that disagree. Without a manifest the built-in core
//! constants are checked.
//!
//! Manifest format:
//!
//! ```toml
//! [[constant]]
//! kind = "keyword"
//! namespace = "cljs.core"
//! name = "none"
//! hash = 926646439
//! ```

use std::path::PathBuf;

use ferrule_ident::constants::CORE_CONSTANTS;
use ferrule_ident::{hash_qualified, IdentKind, QualifiedName};
use serde::{Deserialize, Serialize};

use crate::commands::common::{render, OutputFormat};
use crate::error::{FerruleError, Result};

/// Arguments for the verify command.
#[derive(Debug, Clone)]
pub struct VerifyArgs {
    /// Manifest to check; the built-in constants when absent.
    pub manifest: Option<PathBuf>,
    /// Report format.
    pub format: OutputFormat,
}

/// A constants manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "constant")]
    pub constants: Vec<ManifestEntry>,
}

/// One expected hash code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub kind: IdentKind,
    #[serde(default)]
    pub namespace: Option<String>,
    pub name: String,
    pub hash: i32,
}

/// An entry whose recomputed hash differs from the expected one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub kind: IdentKind,
    pub fqn: String,
    pub expected: i32,
    pub computed: i32,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Manifest equivalent to the built-in core constants.
    pub fn builtin() -> Self {
        let constants = CORE_CONSTANTS
            .iter()
            .map(|c| ManifestEntry {
                kind: c.kind,
                namespace: c.namespace.map(str::to_string),
                name: c.name.to_string(),
                hash: c.hash,
            })
            .collect();
        Self { constants }
    }
}

/// Recompute every entry's hash and collect the disagreements.
pub fn find_mismatches(manifest: &Manifest) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();
    for entry in &manifest.constants {
        let name = QualifiedName::new(entry.namespace.as_deref(), &entry.name)?;
        let computed = hash_qualified(entry.kind, &name);
        if computed != entry.hash {
            tracing::warn!(
                "{} {} expected {} but computed {}",
                entry.kind,
                name.fqn(),
                entry.hash,
                computed
            );
            mismatches.push(Mismatch {
                kind: entry.kind,
                fqn: name.fqn().to_string(),
                expected: entry.hash,
                computed,
            });
        }
    }
    Ok(mismatches)
}

/// Execute the verify command.
pub fn run_verify(args: VerifyArgs) -> Result<()> {
    let manifest = match &args.manifest {
        Some(path) => Manifest::parse(&std::fs::read_to_string(path)?)?,
        None => Manifest::builtin(),
    };

    let mismatches = find_mismatches(&manifest)?;
    let total = manifest.constants.len();
    tracing::info!("checked {} constants, {} mismatched", total, mismatches.len());

    if !mismatches.is_empty() {
        let output = render(&mismatches, args.format, |m| {
            format!(
                "{:<8} {:<32} expected {} computed {}",
                m.kind, m.fqn, m.expected, m.computed
            )
        })?;
        println!("{}", output);
        return Err(FerruleError::Mismatch {
            count: mismatches.len(),
            total,
        });
    }

    println!("{} constants verified", total);
    Ok(())
}
