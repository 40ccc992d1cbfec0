//! ferrule-ident - Interned Symbols and Keywords
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Identifier values for a Lisp-family runtime. Symbols and keywords show up
//! everywhere: map keys, dispatch tags, AST node labels. This crate provides
//! the values themselves, their stable hash codes and the table that keeps
//! keywords canonical.
//!
//! Data flows one way:
//!
//! ```text
//! raw text -> QualifiedName -> hash -> Symbol | Keyword -> (KeywordTable)
//! ```
//!
//! COMPONENTS:
//! -----------
//! - [`hash`]: deterministic 32-bit hashing (UTF-16 polynomial, Murmur3,
//!   boost combine). No random seeding; codes match across runs and builds.
//! - [`QualifiedName`]: optional namespace plus mandatory local name.
//! - [`Symbol`]: structural equality, copy-on-write metadata.
//! - [`Keyword`]: canonical, identity equality, no metadata.
//! - [`KeywordTable`]: concurrent `QualifiedName -> Keyword` registry.
//! - [`Runtime`]: explicit context owning a table; no hidden singleton.
//!
//! EQUALITY AND HASHING:
//! ---------------------
//! | Type | `==` | `Hash` |
//! |------|------|--------|
//! | `Symbol` | namespace and name | cached code |
//! | `Keyword` | pointer identity | cached code |
//!
//! A symbol and a keyword with the same name hash differently (the keyword
//! code carries a type tag) but never compare equal regardless.
//!
//! # Examples
//!
//! ```
//! use ferrule_ident::{Ident, Runtime, Symbol};
//!
//! let rt = Runtime::new();
//!
//! let kw = rt.keyword(Some("cljs.core"), "none").unwrap();
//! assert!(kw.identical(&rt.parse_keyword(":cljs.core/none").unwrap()));
//! assert_eq!(kw.hash_code(), 926646439);
//!
//! let sym = Symbol::new(None, "tag").unwrap();
//! assert_eq!(sym, Symbol::parse("tag").unwrap());
//! assert_eq!(Ident::hash_code(&sym), 350170304);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod hash;
pub mod ident;
pub mod keyword;
pub mod meta;
pub mod name;
pub mod runtime;
pub mod symbol;
pub mod table;

pub use config::RuntimeConfig;
pub use error::{IdentError, IdentResult};
pub use hash::{hash_qualified, hash_string, IdentKind, StringHashCache};
pub use ident::{Ident, IdentMap, IdentSet};
pub use keyword::Keyword;
pub use meta::{MetaValue, Metadata};
pub use name::QualifiedName;
pub use runtime::Runtime;
pub use symbol::Symbol;
pub use table::{KeywordTable, TableStats};
