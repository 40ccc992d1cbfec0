//! Metadata maps attached to symbols.
//!
//! Metadata is a side channel: it never takes part in a symbol's equality or
//! hash. A [`Metadata`] value is immutable and shared; every update returns a
//! new map and leaves the original untouched.

use std::fmt;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::keyword::Keyword;
use crate::symbol::Symbol;

type MetaMap = IndexMap<Keyword, MetaValue, BuildHasherDefault<FxHasher>>;

/// A value stored in a metadata map
#[derive(Clone, Debug, PartialEq)]
pub enum MetaValue {
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
    Keyword(Keyword),
    Symbol(Symbol),
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Str(Arc::from(value))
    }
}

impl From<Keyword> for MetaValue {
    fn from(value: Keyword) -> Self {
        MetaValue::Keyword(value)
    }
}

impl From<Symbol> for MetaValue {
    fn from(value: Symbol) -> Self {
        MetaValue::Symbol(value)
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Bool(b) => write!(f, "{}", b),
            MetaValue::Int(i) => write!(f, "{}", i),
            MetaValue::Str(s) => write!(f, "{:?}", s),
            MetaValue::Keyword(k) => write!(f, "{}", k),
            MetaValue::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// Immutable, insertion-ordered map from keywords to values
///
/// # Examples
///
/// ```
/// use ferrule_ident::{Metadata, Runtime};
///
/// let rt = Runtime::new();
/// let line = rt.keyword(None, "line").unwrap();
///
/// let empty = Metadata::new();
/// let meta = empty.assoc(line.clone(), 12i64);
///
/// assert!(empty.is_empty());
/// assert_eq!(meta.get(&line), Some(&12i64.into()));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Arc<MetaMap>,
}

impl Metadata {
    /// Empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this map with `key` bound to `value`
    pub fn assoc(&self, key: Keyword, value: impl Into<MetaValue>) -> Self {
        let mut entries = MetaMap::clone(&self.entries);
        entries.insert(key, value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Copy of this map without `key`
    pub fn dissoc(&self, key: &Keyword) -> Self {
        if !self.entries.contains_key(key) {
            return self.clone();
        }
        let mut entries = MetaMap::clone(&self.entries);
        entries.shift_remove(key);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Copy of this map with every entry of `other` added, `other` winning
    pub fn merge(&self, other: &Metadata) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let mut entries = MetaMap::clone(&self.entries);
        for (k, v) in other.iter() {
            entries.insert(k.clone(), v.clone());
        }
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Value bound to `key`
    pub fn get(&self, key: &Keyword) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Keyword) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &MetaValue)> {
        self.entries.iter()
    }

    /// Returns true when both handles share the same underlying map
    pub fn ptr_eq(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl FromIterator<(Keyword, MetaValue)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (Keyword, MetaValue)>>(iter: T) -> Self {
        Self {
            entries: Arc::new(iter.into_iter().collect()),
        }
    }
}
