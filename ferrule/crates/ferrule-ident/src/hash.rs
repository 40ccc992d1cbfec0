//! Deterministic 32-bit hashing for identifier values.
//!
//! All functions here are total and unseeded: the same input produces the same
//! `i32` in every process and every build. Hash codes of symbol and keyword
//! literals are baked into generated code ahead of time, so the runtime's
//! recomputation must agree bit for bit.
//!
//! # Algorithms
//!
//! | Function | Algorithm |
//! |----------|-----------|
//! | [`hash_string`] | `h = h * 31 + unit` over UTF-16 code units |
//! | [`hash_unencoded_chars`] | Murmur3 x86_32, seed 0, over UTF-16 code units |
//! | [`hash_combine`] | boost `hash_combine` with the golden ratio constant |
//! | [`hash_qualified`] | combination of the above plus the [`IdentKind`] tag |
//!
//! Every operation wraps on overflow, matching two's-complement 32-bit
//! arithmetic.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::name::QualifiedName;

/// Golden ratio constant shared by [`hash_combine`] and the keyword tag
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

const M3_SEED: u32 = 0;
const M3_C1: u32 = 0xcc9e_2d51;
const M3_C2: u32 = 0x1b87_3593;

/// Default number of entries kept by a [`StringHashCache`] before it flushes
pub const DEFAULT_STRING_HASH_CACHE_LIMIT: usize = 255;

/// Type discriminant folded into identifier hash codes
///
/// A symbol and a keyword with the same qualified name get different hash
/// codes. They may still share a bucket in a hash table; hash equality is
/// never identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentKind {
    /// Non-canonical identifier with structural equality
    Symbol,
    /// Canonical identifier with identity equality
    Keyword,
}

impl IdentKind {
    /// Value added to the qualified-name hash for this kind
    #[inline]
    pub const fn tag(self) -> i32 {
        match self {
            IdentKind::Symbol => 0,
            IdentKind::Keyword => GOLDEN_RATIO as i32,
        }
    }

    /// Folds this kind's tag into a qualified-name hash
    #[inline]
    pub const fn fold(self, base: i32) -> i32 {
        base.wrapping_add(self.tag())
    }

    /// Lowercase name of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            IdentKind::Symbol => "symbol",
            IdentKind::Keyword => "keyword",
        }
    }
}

impl std::fmt::Display for IdentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Polynomial string hash over UTF-16 code units
///
/// Computes `h = h * 31 + unit` for every code unit with 32-bit wraparound.
/// Characters outside the BMP contribute both halves of their surrogate pair.
///
/// # Examples
///
/// ```
/// use ferrule_ident::hash::hash_string;
///
/// assert_eq!(hash_string(""), 0);
/// assert_eq!(hash_string("form"), 3148996);
/// assert_eq!(hash_string("tag"), 114586);
/// ```
#[inline]
pub fn hash_string(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[inline]
fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(M3_C1).rotate_left(15).wrapping_mul(M3_C2)
}

#[inline]
fn mix_h1(h1: u32, k1: u32) -> u32 {
    (h1 ^ k1)
        .rotate_left(13)
        .wrapping_mul(5)
        .wrapping_add(0xe654_6b64)
}

#[inline]
fn fmix(mut h1: u32, len: u32) -> u32 {
    h1 ^= len;
    h1 ^= h1 >> 16;
    h1 = h1.wrapping_mul(0x85eb_ca6b);
    h1 ^= h1 >> 13;
    h1 = h1.wrapping_mul(0xc2b2_ae35);
    h1 ^= h1 >> 16;
    h1
}

/// Murmur3 (x86, 32-bit) over the UTF-16 code units of `s`
///
/// Units are consumed in pairs packed low-half-first into one 32-bit block.
/// A trailing odd unit is mixed on its own, and the finalizer receives the
/// length in bytes (two per unit).
pub fn hash_unencoded_chars(s: &str) -> i32 {
    let mut units = s.encode_utf16();
    let mut h1 = M3_SEED;
    let mut count: u32 = 0;

    loop {
        match (units.next(), units.next()) {
            (Some(lo), Some(hi)) => {
                h1 = mix_h1(h1, mix_k1(u32::from(lo) | (u32::from(hi) << 16)));
                count = count.wrapping_add(2);
            }
            (Some(last), None) => {
                h1 ^= mix_k1(u32::from(last));
                count = count.wrapping_add(1);
                break;
            }
            _ => break,
        }
    }

    fmix(h1, count.wrapping_mul(2)) as i32
}

/// Boost-style hash combination
///
/// `seed ^ (hash + 0x9e3779b9 + (seed << 6) + (seed >> 2))`, where `>>` is an
/// arithmetic shift and every addition wraps.
#[inline]
pub fn hash_combine(seed: i32, hash: i32) -> i32 {
    seed ^ hash
        .wrapping_add(GOLDEN_RATIO as i32)
        .wrapping_add(seed.wrapping_shl(6))
        .wrapping_add(seed >> 2)
}

/// Hash code of an identifier of the given kind
///
/// The local name goes through [`hash_unencoded_chars`], the namespace
/// through [`hash_string`] (0 when absent), the two are joined with
/// [`hash_combine`], and the kind tag is added last. Hashing the two parts
/// separately keeps `a/b` as a namespace split distinct from the unqualified
/// name `a/b`.
///
/// # Examples
///
/// ```
/// use ferrule_ident::hash::{hash_qualified, IdentKind};
/// use ferrule_ident::QualifiedName;
///
/// let form = QualifiedName::new(None, "form").unwrap();
/// assert_eq!(hash_qualified(IdentKind::Symbol, &form), 16469056);
///
/// let none = QualifiedName::new(Some("cljs.core"), "none").unwrap();
/// assert_eq!(hash_qualified(IdentKind::Keyword, &none), 926646439);
/// ```
#[inline]
pub fn hash_qualified(kind: IdentKind, name: &QualifiedName) -> i32 {
    hash_qualified_with(kind, name, hash_string)
}

/// Like [`hash_qualified`], with a caller-supplied namespace hasher
///
/// `namespace_hash` must agree with [`hash_string`]; it exists so callers can
/// memoize namespace hashes.
pub fn hash_qualified_with<F>(kind: IdentKind, name: &QualifiedName, namespace_hash: F) -> i32
where
    F: FnOnce(&str) -> i32,
{
    let ns_hash = name.namespace().map_or(0, namespace_hash);
    kind.fold(hash_combine(hash_unencoded_chars(name.name()), ns_hash))
}

/// Bounded memo of [`hash_string`] results
///
/// Namespaces repeat across many identifiers (`cljs.core/...`), so the keyword
/// table memoizes their hashes here. When the cache reaches its limit it is
/// flushed wholesale rather than evicting individual entries.
pub struct StringHashCache {
    entries: Mutex<FxHashMap<Box<str>, i32>>,
    limit: usize,
}

impl StringHashCache {
    /// Create an empty cache holding at most `limit` entries
    ///
    /// A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
            limit: limit.max(1),
        }
    }

    /// Hash `s`, reusing a memoized value when present
    pub fn hash(&self, s: &str) -> i32 {
        let mut entries = self.entries.lock();
        if let Some(&hash) = entries.get(s) {
            return hash;
        }

        if entries.len() >= self.limit {
            log::debug!("flushing string hash cache after {} entries", entries.len());
            entries.clear();
        }

        let hash = hash_string(s);
        entries.insert(s.into(), hash);
        hash
    }

    /// Number of memoized strings
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true when nothing is memoized
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries before a flush
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for StringHashCache {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_HASH_CACHE_LIMIT)
    }
}

impl std::fmt::Debug for StringHashCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringHashCache")
            .field("len", &self.len())
            .field("limit", &self.limit)
            .finish()
    }
}
