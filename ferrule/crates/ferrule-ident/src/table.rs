//! Keyword canonicalization table using DashMap for concurrent access.
//!
//! This module provides the registry that makes keywords canonical:
//! - One live [`Keyword`] per distinct [`QualifiedName`]
//! - Atomic insert-if-absent per shard via DashMap's entry API
//! - Namespace hashes memoized through a [`StringHashCache`]
//! - Hit/miss statistics for profiling
//!
//! # Performance Characteristics
//!
//! - **Interning (hit)**: O(1) - shard read lock and hash lookup
//! - **Interning (miss)**: O(1) - shard write lock, hash computation, insert
//! - **Keyword comparison**: O(1) - pointer comparison
//!
//! # Thread Safety
//!
//! The table is `Sync + Send`. Concurrent [`KeywordTable::get_or_create`]
//! calls for the same name serialize on that name's shard: the first caller
//! installs the instance and every later caller, on any thread, receives it.
//!
//! Entries are never removed. The table grows for the life of its owner.

use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::RandomState;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::hash::{hash_qualified_with, IdentKind, StringHashCache};
use crate::keyword::Keyword;
use crate::name::QualifiedName;

/// Default number of pre-allocated slots
pub const DEFAULT_TABLE_CAPACITY: usize = 256;

/// Statistics about a keyword table for profiling
///
/// # Fields
///
/// * `count` - Number of canonical keywords
/// * `capacity` - Hash map capacity (number of buckets)
/// * `hits` - Number of times an existing keyword was returned
/// * `misses` - Number of times a new keyword was installed
///
/// # Examples
///
/// ```
/// use ferrule_ident::TableStats;
///
/// let stats = TableStats::new(100, 200, 90, 10);
/// assert_eq!(stats.load_factor(), 0.5);
/// assert_eq!(stats.hit_rate(), 0.9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Number of canonical keywords
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of lookups answered by an existing keyword
    pub hits: usize,
    /// Number of lookups that installed a new keyword
    pub misses: usize,
}

impl TableStats {
    pub const fn new(count: usize, capacity: usize, hits: usize, misses: usize) -> Self {
        Self {
            count,
            capacity,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Process-wide registry `QualifiedName -> Keyword`
///
/// Usually owned by a [`Runtime`](crate::Runtime); tests build their own to
/// stay isolated.
pub struct KeywordTable {
    map: DashMap<QualifiedName, Keyword, RandomState>,

    /// Memoized `hash_string` of namespaces, used on the miss path
    namespace_hashes: StringHashCache,

    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl KeywordTable {
    /// Create an empty table with default capacity and sharding
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_CAPACITY)
    }

    /// Create an empty table with room for `capacity` keywords
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(
            DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            StringHashCache::default(),
        )
    }

    /// Create an empty table with explicit sharding and cache size
    ///
    /// `shard_amount` must be a power of two greater than one; callers
    /// validate it first (see [`RuntimeConfig::validate`](crate::RuntimeConfig::validate)).
    pub(crate) fn with_layout(
        capacity: usize,
        shard_amount: Option<usize>,
        namespace_cache_limit: usize,
    ) -> Self {
        let map = match shard_amount {
            Some(shards) => DashMap::with_capacity_and_hasher_and_shard_amount(
                capacity,
                RandomState::new(),
                shards,
            ),
            None => DashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        };
        Self::from_parts(map, StringHashCache::new(namespace_cache_limit))
    }

    fn from_parts(
        map: DashMap<QualifiedName, Keyword, RandomState>,
        namespace_hashes: StringHashCache,
    ) -> Self {
        Self {
            map,
            namespace_hashes,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Canonical keyword for `name`, installing it on first request
    ///
    /// Idempotent: every call with an equal name returns the identical
    /// instance, including calls racing on other threads.
    pub fn get_or_create(&self, name: QualifiedName) -> Keyword {
        // Fast path: shared lock only
        if let Some(entry) = self.map.get(&name) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return entry.value().clone();
        }

        // Hash before taking the shard's write lock; the namespace cache has
        // its own lock and must not be held under a shard lock
        let hash = hash_qualified_with(IdentKind::Keyword, &name, |ns| {
            self.namespace_hashes.hash(ns)
        });

        // Slow path: the entry holds the shard's write lock, so lookup and
        // insert form one critical section
        match self.map.entry(name) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let name = entry.key().clone();
                log::trace!("interned keyword :{} (hash {})", name.fqn(), hash);
                let keyword = Keyword::canonical(name, hash);
                entry.insert(keyword.clone());
                keyword
            }
        }
    }

    /// Canonical keyword for `name` if one was already installed
    ///
    /// Never installs anything and does not touch the statistics.
    pub fn find(&self, name: &QualifiedName) -> Option<Keyword> {
        self.map.get(name).map(|entry| entry.value().clone())
    }

    /// Returns true if a keyword for `name` exists
    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.map.contains_key(name)
    }

    /// Number of canonical keywords
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Snapshot of every keyword, sorted by qualified name
    pub fn keywords(&self) -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = self.map.iter().map(|e| e.value().clone()).collect();
        keywords.sort();
        keywords
    }

    /// Get statistics about the table for profiling
    pub fn stats(&self) -> TableStats {
        TableStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Reset statistics counters (useful for benchmarking)
    pub fn reset_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeywordTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordTable")
            .field("len", &self.map.len())
            .field("stats", &self.stats())
            .finish()
    }
}

static_assertions::assert_impl_all!(KeywordTable: Send, Sync);
