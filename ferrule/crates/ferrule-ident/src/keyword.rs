//! Keyword values.
//!
//! Keywords are self-evaluating identifiers and are always canonical: the only
//! way to obtain one is through a [`KeywordTable`](crate::KeywordTable) (usually
//! via [`Runtime::keyword`](crate::Runtime::keyword)), which hands out a single
//! shared instance per qualified name. Equality is therefore pointer identity
//! and costs one comparison.
//!
//! Keywords carry no metadata and never change after construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::hash::IdentKind;
use crate::name::QualifiedName;
use crate::symbol::Symbol;

/// Marker printed before a keyword's fully-qualified name
pub const KEYWORD_MARKER: char = ':';

struct KeywordInner {
    name: QualifiedName,
    hash: i32,
}

/// A canonical, namespace-qualified identifier
///
/// Two keywords from the same table are equal iff they are the same instance.
/// Keywords from different tables are never equal, even with equal names, and
/// never compare `Equal` under `Ord` either.
///
/// # Examples
///
/// ```
/// use ferrule_ident::Runtime;
///
/// let rt = Runtime::new();
/// let a = rt.keyword(None, "ready").unwrap();
/// let b = rt.parse_keyword(":ready").unwrap();
///
/// assert!(a.identical(&b));
/// assert_eq!(a.hash_code(), 1086465795);
/// assert_eq!(a.to_string(), ":ready");
/// ```
#[derive(Clone)]
pub struct Keyword {
    inner: Arc<KeywordInner>,
}

impl Keyword {
    /// Construct the canonical instance for `name`
    ///
    /// Only the keyword table calls this, while it holds the slot for `name`.
    pub(crate) fn canonical(name: QualifiedName, hash: i32) -> Self {
        debug_assert_eq!(hash, crate::hash::hash_qualified(IdentKind::Keyword, &name));
        Self {
            inner: Arc::new(KeywordInner { name, hash }),
        }
    }

    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.inner.name.namespace()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.inner.name.name()
    }

    #[inline]
    pub fn fqn(&self) -> &str {
        self.inner.name.fqn()
    }

    #[inline]
    pub fn qualified_name(&self) -> &QualifiedName {
        &self.inner.name
    }

    /// Cached hash code
    #[inline]
    pub fn hash_code(&self) -> i32 {
        self.inner.hash
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.inner.name.is_qualified()
    }

    /// Reference identity; the same relation as `==`
    #[inline]
    pub fn identical(&self, other: &Keyword) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Symbol with the same qualified name
    pub fn to_symbol(&self) -> Symbol {
        Symbol::from_name(self.inner.name.clone())
    }
}

impl PartialEq for Keyword {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.inner.hash);
    }
}

impl Ord for Keyword {
    /// Orders by qualified name
    ///
    /// Equal names from different tables are distinct keywords; they are
    /// ordered by instance address so that `Equal` coincides with `==`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.identical(other) {
            return Ordering::Equal;
        }
        self.inner
            .name
            .cmp(&other.inner.name)
            .then_with(|| Arc::as_ptr(&self.inner).cmp(&Arc::as_ptr(&other.inner)))
    }
}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", KEYWORD_MARKER, self.fqn())
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyword({})", self)
    }
}

static_assertions::assert_impl_all!(Keyword: Send, Sync);
