//! Symbol values.
//!
//! A [`Symbol`] is a non-canonical identifier: two independently built symbols
//! with the same qualified name are equal but not identical. The name and hash
//! live in a shared immutable core; metadata hangs off the handle, so
//! [`Symbol::with_meta`] only allocates a new handle.
//!
//! Building a symbol touches no shared state and is safe from any thread.
//!
//! # Examples
//!
//! ```
//! use ferrule_ident::Symbol;
//!
//! let a = Symbol::new(None, "form").unwrap();
//! let b = Symbol::parse("form").unwrap();
//!
//! assert_eq!(a, b);          // structural equality
//! assert!(!a.ptr_eq(&b));    // distinct instances
//! assert_eq!(a.hash_code(), 16469056);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::IdentResult;
use crate::hash::{hash_qualified, IdentKind};
use crate::meta::Metadata;
use crate::name::QualifiedName;

struct SymbolCore {
    name: QualifiedName,
    hash: i32,
}

/// A namespace-qualified identifier with structural equality
///
/// Equality, ordering and hashing ignore metadata entirely. The hash code is
/// computed once at construction.
#[derive(Clone)]
pub struct Symbol {
    core: Arc<SymbolCore>,
    meta: Option<Metadata>,
}

impl Symbol {
    /// Build a symbol without metadata
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`](crate::IdentError::InvalidName) for an
    /// empty name or an invalid namespace.
    pub fn new(namespace: Option<&str>, name: &str) -> IdentResult<Self> {
        Ok(Self::from_name(QualifiedName::new(namespace, name)?))
    }

    /// Build a symbol carrying `meta`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Symbol::new`].
    pub fn with_metadata(
        namespace: Option<&str>,
        name: &str,
        meta: Option<Metadata>,
    ) -> IdentResult<Self> {
        Ok(Self::from_name(QualifiedName::new(namespace, name)?).with_meta(meta))
    }

    /// Build a symbol from fully-qualified text such as `cljs.core/first`
    ///
    /// See [`QualifiedName::parse`] for the splitting rule.
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`](crate::IdentError::InvalidName) for empty
    /// text.
    pub fn parse(text: &str) -> IdentResult<Self> {
        Ok(Self::from_name(QualifiedName::parse(text)?))
    }

    /// Build a symbol over an already validated qualified name
    pub fn from_name(name: QualifiedName) -> Self {
        let hash = hash_qualified(IdentKind::Symbol, &name);
        Self {
            core: Arc::new(SymbolCore { name, hash }),
            meta: None,
        }
    }

    /// New symbol sharing this one's name and hash, with `meta` attached
    ///
    /// `self` keeps its own metadata.
    pub fn with_meta(&self, meta: Option<Metadata>) -> Self {
        Self {
            core: Arc::clone(&self.core),
            meta,
        }
    }

    /// New symbol with the metadata transformed by `f`
    pub fn vary_meta<F>(&self, f: F) -> Self
    where
        F: FnOnce(Metadata) -> Metadata,
    {
        let current = self.meta.clone().unwrap_or_default();
        self.with_meta(Some(f(current)))
    }

    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.core.name.namespace()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.core.name.name()
    }

    #[inline]
    pub fn fqn(&self) -> &str {
        self.core.name.fqn()
    }

    #[inline]
    pub fn qualified_name(&self) -> &QualifiedName {
        &self.core.name
    }

    /// Cached hash code
    #[inline]
    pub fn hash_code(&self) -> i32 {
        self.core.hash
    }

    #[inline]
    pub fn meta(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.core.name.is_qualified()
    }

    /// Returns true when both symbols share the same immutable core
    ///
    /// Symbols derived through [`Symbol::with_meta`] share their core;
    /// independently constructed ones never do.
    #[inline]
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.core.hash == other.core.hash && self.core.name == other.core.name)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.core.hash);
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core.name.cmp(&other.core.name)
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fqn())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.fqn())
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync);
