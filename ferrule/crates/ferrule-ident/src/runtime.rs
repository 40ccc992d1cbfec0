//! Runtime context owning the keyword canonicalization table.
//!
//! There is no implicit global table. A [`Runtime`] is built once at startup
//! and passed by reference to everything that interns keywords; tests build
//! as many isolated runtimes as they like.
//!
//! # Examples
//!
//! ```
//! use ferrule_ident::Runtime;
//! use std::thread;
//!
//! let rt = Runtime::new();
//! let keywords: Vec<_> = thread::scope(|s| {
//!     let handles: Vec<_> = (0..4)
//!         .map(|_| s.spawn(|| rt.keyword(None, "ok").unwrap()))
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).collect()
//! });
//!
//! assert!(keywords.iter().all(|k| k.identical(&keywords[0])));
//! ```

use crate::config::RuntimeConfig;
use crate::constants;
use crate::error::IdentResult;
use crate::keyword::{Keyword, KEYWORD_MARKER};
use crate::meta::Metadata;
use crate::name::QualifiedName;
use crate::symbol::Symbol;
use crate::table::{KeywordTable, TableStats};

/// Identifier runtime: configuration plus the keyword table
#[derive(Debug)]
pub struct Runtime {
    config: RuntimeConfig,
    keywords: KeywordTable,
}

impl Runtime {
    /// Runtime with default configuration and an empty keyword table
    ///
    /// Unlike [`Runtime::with_config`] this does not preload the core
    /// constants, so it cannot fail.
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig {
                preload_constants: false,
                ..RuntimeConfig::default()
            },
            keywords: KeywordTable::new(),
        }
    }

    /// Runtime laid out according to `config`
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidConfig`](crate::IdentError::InvalidConfig) when
    /// `config` fails validation.
    pub fn with_config(config: RuntimeConfig) -> IdentResult<Self> {
        config.validate()?;

        let keywords = KeywordTable::with_layout(
            config.initial_capacity,
            config.shard_amount,
            config.namespace_hash_cache_limit,
        );
        if config.preload_constants {
            constants::preload(&keywords)?;
        }
        log::debug!(
            "identifier runtime ready (capacity {}, {} keywords)",
            config.initial_capacity,
            keywords.len()
        );

        Ok(Self { config, keywords })
    }

    /// Canonical keyword `namespace/name`
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`](crate::IdentError::InvalidName) for an
    /// empty name or an invalid namespace.
    pub fn keyword(&self, namespace: Option<&str>, name: &str) -> IdentResult<Keyword> {
        Ok(self.keywords.get_or_create(QualifiedName::new(namespace, name)?))
    }

    /// Canonical keyword for an existing qualified name
    pub fn intern(&self, name: QualifiedName) -> Keyword {
        self.keywords.get_or_create(name)
    }

    /// Canonical keyword from literal text, with or without a leading `:`
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`](crate::IdentError::InvalidName) when the
    /// text is empty after the marker.
    pub fn parse_keyword(&self, literal: &str) -> IdentResult<Keyword> {
        let text = literal.strip_prefix(KEYWORD_MARKER).unwrap_or(literal);
        Ok(self.keywords.get_or_create(QualifiedName::parse(text)?))
    }

    /// Keyword previously interned under `namespace/name`, if any
    pub fn find_keyword(&self, namespace: Option<&str>, name: &str) -> Option<Keyword> {
        let name = QualifiedName::new(namespace, name).ok()?;
        self.keywords.find(&name)
    }

    /// New symbol `namespace/name` carrying `meta`
    ///
    /// Symbols are not canonicalized; this never consults the keyword table.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Symbol::new`].
    pub fn symbol(
        &self,
        namespace: Option<&str>,
        name: &str,
        meta: Option<Metadata>,
    ) -> IdentResult<Symbol> {
        Symbol::with_metadata(namespace, name, meta)
    }

    /// Canonical keyword sharing a symbol's qualified name
    pub fn keyword_from_symbol(&self, symbol: &Symbol) -> Keyword {
        self.keywords.get_or_create(symbol.qualified_name().clone())
    }

    /// The keyword canonicalization table
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn stats(&self) -> TableStats {
        self.keywords.stats()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(Runtime: Send, Sync);
