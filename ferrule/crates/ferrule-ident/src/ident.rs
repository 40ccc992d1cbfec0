//! The identifier capability shared by symbols and keywords.
//!
//! [`Symbol`] and [`Keyword`] do not share a base type; each implements
//! [`Ident`] on its own so that their different equality rules stay
//! independent. Code that only needs names and hashes (printers, generic
//! hash containers) can be written once against the trait.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

use crate::hash::IdentKind;
use crate::keyword::Keyword;
use crate::name::QualifiedName;
use crate::symbol::Symbol;

/// Read-only view of an identifier value
pub trait Ident {
    /// Which kind of identifier this is
    fn kind(&self) -> IdentKind;

    /// The underlying `(namespace, name)` pair
    fn qualified_name(&self) -> &QualifiedName;

    /// Hash code computed at construction
    fn hash_code(&self) -> i32;

    fn namespace(&self) -> Option<&str> {
        self.qualified_name().namespace()
    }

    fn name(&self) -> &str {
        self.qualified_name().name()
    }

    fn fqn(&self) -> &str {
        self.qualified_name().fqn()
    }
}

impl Ident for Symbol {
    fn kind(&self) -> IdentKind {
        IdentKind::Symbol
    }

    fn qualified_name(&self) -> &QualifiedName {
        Symbol::qualified_name(self)
    }

    fn hash_code(&self) -> i32 {
        Symbol::hash_code(self)
    }
}

impl Ident for Keyword {
    fn kind(&self) -> IdentKind {
        IdentKind::Keyword
    }

    fn qualified_name(&self) -> &QualifiedName {
        Keyword::qualified_name(self)
    }

    fn hash_code(&self) -> i32 {
        Keyword::hash_code(self)
    }
}

/// `Hash` for identifiers only feeds the cached code, so a single Fx round
/// is all a container needs
pub type IdentBuildHasher = BuildHasherDefault<FxHasher>;

/// Hash map keyed by symbols or keywords
pub type IdentMap<K, V> = HashMap<K, V, IdentBuildHasher>;

/// Hash set of symbols or keywords
pub type IdentSet<K> = HashSet<K, IdentBuildHasher>;
