//! Qualified names: an optional namespace plus a mandatory local name.
//!
//! The fully-qualified form (`ns/name`, or just `name`) is computed once at
//! construction. Equality, ordering and hashing look at the two fields, never
//! at the joined string, so the namespace split stays significant: `a/b` as
//! namespace `a` and name `b` is a different name from the unqualified `a/b`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{IdentError, IdentResult};

/// Separator between namespace and local name in the fully-qualified form
pub const NAMESPACE_SEPARATOR: char = '/';

/// An immutable `(namespace, name)` pair
///
/// Cloning is cheap: the strings are reference counted and shared between
/// clones.
///
/// # Examples
///
/// ```
/// use ferrule_ident::QualifiedName;
///
/// let qn = QualifiedName::new(Some("cljs.core"), "none").unwrap();
/// assert_eq!(qn.namespace(), Some("cljs.core"));
/// assert_eq!(qn.name(), "none");
/// assert_eq!(qn.fqn(), "cljs.core/none");
///
/// assert!(QualifiedName::new(None, "").is_err());
/// ```
#[derive(Clone)]
pub struct QualifiedName {
    namespace: Option<Arc<str>>,
    name: Arc<str>,
    fqn: Arc<str>,
}

impl QualifiedName {
    /// Build a qualified name
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`] if `name` is empty, or if `namespace` is
    /// present but empty or contains [`NAMESPACE_SEPARATOR`].
    pub fn new(namespace: Option<&str>, name: &str) -> IdentResult<Self> {
        if name.is_empty() {
            return Err(IdentError::InvalidName(
                "local name must not be empty".to_string(),
            ));
        }

        match namespace {
            None => {
                let name: Arc<str> = Arc::from(name);
                Ok(Self {
                    namespace: None,
                    fqn: Arc::clone(&name),
                    name,
                })
            }
            Some(ns) => {
                validate_namespace(ns)?;
                let fqn = format!("{}{}{}", ns, NAMESPACE_SEPARATOR, name);
                Ok(Self {
                    namespace: Some(Arc::from(ns)),
                    name: Arc::from(name),
                    fqn: Arc::from(fqn),
                })
            }
        }
    }

    /// Build an unqualified name
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`] if `name` is empty.
    pub fn simple(name: &str) -> IdentResult<Self> {
        Self::new(None, name)
    }

    /// Split fully-qualified text into a qualified name
    ///
    /// The text is split on its first `/` when that separator is neither the
    /// first nor the last character; otherwise the whole text is the local
    /// name. So `"/"` is the unqualified name `/`, and `"clojure.core//"` is
    /// name `/` in namespace `clojure.core`.
    ///
    /// # Errors
    ///
    /// [`IdentError::InvalidName`] if `text` is empty.
    pub fn parse(text: &str) -> IdentResult<Self> {
        match text.find(NAMESPACE_SEPARATOR) {
            Some(idx) if idx > 0 && idx + 1 < text.len() => {
                Self::new(Some(&text[..idx]), &text[idx + 1..])
            }
            _ => Self::new(None, text),
        }
    }

    /// Namespace, if qualified
    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified form: `namespace/name`, or `name` when unqualified
    #[inline]
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// Returns true when a namespace is present
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.namespace.is_some()
    }

    /// Same local name in a different namespace
    ///
    /// # Errors
    ///
    /// Same conditions as [`QualifiedName::new`].
    pub fn with_namespace(&self, namespace: Option<&str>) -> IdentResult<Self> {
        Self::new(namespace, &self.name)
    }
}

fn validate_namespace(ns: &str) -> IdentResult<()> {
    if ns.is_empty() {
        return Err(IdentError::InvalidName(
            "namespace must not be empty when present".to_string(),
        ));
    }
    if ns.contains(NAMESPACE_SEPARATOR) {
        return Err(IdentError::InvalidName(format!(
            "namespace `{}` must not contain `{}`",
            ns, NAMESPACE_SEPARATOR
        )));
    }
    Ok(())
}

/// Compare two strings by UTF-16 code units, the host string order
pub(crate) fn cmp_code_units(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.name == other.name
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.name.hash(state);
    }
}

impl Ord for QualifiedName {
    /// Unqualified names sort first, then by namespace, then by local name
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.namespace, &other.namespace) {
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => cmp_code_units(&self.name, &other.name),
            (Some(a), Some(b)) => cmp_code_units(a, b)
                .then_with(|| cmp_code_units(&self.name, &other.name)),
        }
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqn)
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualifiedName")
            .field("namespace", &self.namespace())
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified() {
        let qn = QualifiedName::new(None, "ok").unwrap();
        assert_eq!(qn.namespace(), None);
        assert_eq!(qn.name(), "ok");
        assert_eq!(qn.fqn(), "ok");
        assert!(!qn.is_qualified());
    }

    #[test]
    fn test_qualified() {
        let qn = QualifiedName::new(Some("cljs.core"), "not-found").unwrap();
        assert_eq!(qn.fqn(), "cljs.core/not-found");
        assert!(qn.is_qualified());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            QualifiedName::new(None, ""),
            Err(IdentError::InvalidName(_))
        ));
        assert!(matches!(
            QualifiedName::new(Some("user"), ""),
            Err(IdentError::InvalidName(_))
        ));
    }

    #[test]
    fn test_bad_namespace_rejected() {
        assert!(QualifiedName::new(Some(""), "x").is_err());
        assert!(QualifiedName::new(Some("a/b"), "x").is_err());
    }

    #[test]
    fn test_name_may_contain_separator() {
        let div = QualifiedName::new(Some("clojure.core"), "/").unwrap();
        assert_eq!(div.fqn(), "clojure.core//");
        assert_eq!(QualifiedName::parse("clojure.core//").unwrap(), div);
    }

    #[test]
    fn test_parse() {
        let qn = QualifiedName::parse("user/foo").unwrap();
        assert_eq!(qn.namespace(), Some("user"));
        assert_eq!(qn.name(), "foo");

        let qn = QualifiedName::parse("foo").unwrap();
        assert_eq!(qn.namespace(), None);

        let qn = QualifiedName::parse("/").unwrap();
        assert_eq!(qn.namespace(), None);
        assert_eq!(qn.name(), "/");

        let qn = QualifiedName::parse("/foo").unwrap();
        assert_eq!(qn.namespace(), None);
        assert_eq!(qn.name(), "/foo");

        let qn = QualifiedName::parse("foo/").unwrap();
        assert_eq!(qn.namespace(), None);
        assert_eq!(qn.name(), "foo/");

        assert!(QualifiedName::parse("").is_err());
    }

    #[test]
    fn test_fqn_roundtrip() {
        let qn = QualifiedName::new(Some("my.app"), "handler").unwrap();
        assert_eq!(QualifiedName::parse(qn.fqn()).unwrap(), qn);
    }

    #[test]
    fn test_equality_is_field_wise() {
        let qualified = QualifiedName::new(Some("a"), "b").unwrap();
        let flat = QualifiedName::new(None, "a/b").unwrap();
        assert_eq!(qualified.fqn(), flat.fqn());
        assert_ne!(qualified, flat);
    }

    #[test]
    fn test_ordering() {
        let mut names = vec![
            QualifiedName::new(Some("b"), "a").unwrap(),
            QualifiedName::new(None, "z").unwrap(),
            QualifiedName::new(Some("a"), "z").unwrap(),
            QualifiedName::new(None, "a").unwrap(),
            QualifiedName::new(Some("a"), "b").unwrap(),
        ];
        names.sort();
        let fqns: Vec<_> = names.iter().map(|n| n.fqn()).collect();
        assert_eq!(fqns, ["a", "z", "a/b", "a/z", "b/a"]);
    }

    #[test]
    fn test_ordering_uses_code_units() {
        // U+1F980 sorts after U+FF21 by code point but before it by UTF-16 unit
        let wide = QualifiedName::new(None, "\u{ff21}").unwrap();
        let astral = QualifiedName::new(None, "🦀").unwrap();
        assert!(astral < wide);
    }

    #[test]
    fn test_with_namespace() {
        let qn = QualifiedName::new(None, "foo").unwrap();
        let moved = qn.with_namespace(Some("user")).unwrap();
        assert_eq!(moved.fqn(), "user/foo");
        assert_eq!(moved.with_namespace(None).unwrap(), qn);
    }

    #[test]
    fn test_display_and_debug() {
        let qn = QualifiedName::new(Some("user"), "foo").unwrap();
        assert_eq!(qn.to_string(), "user/foo");
        assert_eq!(
            format!("{:?}", qn),
            "QualifiedName { namespace: Some(\"user\"), name: \"foo\" }"
        );
    }
}
