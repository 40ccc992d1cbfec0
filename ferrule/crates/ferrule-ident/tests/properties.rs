//! Property tests for hashing, naming and identity rules

mod common;

use common::{empty_runtime, valid_namespace};
use ferrule_ident::hash::{hash_qualified, hash_string, IdentKind};
use ferrule_ident::{Metadata, QualifiedName, Symbol};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Straightforward reference for the polynomial string hash
fn reference_hash(s: &str) -> i32 {
    let mut h: u32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as u32);
    }
    h as i32
}

#[quickcheck]
fn prop_hash_string_matches_reference(s: String) -> bool {
    hash_string(&s) == reference_hash(&s)
}

#[quickcheck]
fn prop_hash_string_deterministic(s: String) -> bool {
    hash_string(&s) == hash_string(&s.clone())
}

#[quickcheck]
fn prop_hash_string_concatenation(a: String, b: String) -> bool {
    let units = b.encode_utf16().count() as u32;
    let scale = 31i32.wrapping_pow(units);
    let joined = format!("{}{}", a, b);
    hash_string(&joined) == hash_string(&a).wrapping_mul(scale).wrapping_add(hash_string(&b))
}

#[quickcheck]
fn prop_empty_name_rejected(ns: Option<String>) -> bool {
    let ns = ns.as_deref().and_then(valid_namespace);
    QualifiedName::new(ns, "")
        .map_err(|e| e.is_invalid_name())
        .err()
        .unwrap_or(false)
}

#[quickcheck]
fn prop_unqualified_fqn_is_name(name: String) -> TestResult {
    if name.is_empty() {
        return TestResult::discard();
    }
    let qn = QualifiedName::new(None, &name).unwrap();
    TestResult::from_bool(qn.fqn() == name && qn.namespace().is_none())
}

#[quickcheck]
fn prop_fqn_roundtrip(ns: String, name: String) -> TestResult {
    let Some(ns) = valid_namespace(&ns) else {
        return TestResult::discard();
    };
    if name.is_empty() {
        return TestResult::discard();
    }
    let qn = QualifiedName::new(Some(ns), &name).unwrap();
    let (left, right) = qn.fqn().split_once('/').unwrap();
    TestResult::from_bool(
        left == ns && right == name && QualifiedName::parse(qn.fqn()).unwrap() == qn,
    )
}

#[quickcheck]
fn prop_keyword_identity_across_calls(ns: Option<String>, name: String) -> TestResult {
    if name.is_empty() {
        return TestResult::discard();
    }
    let ns = ns.as_deref().and_then(valid_namespace);
    let rt = empty_runtime();
    let a = rt.keyword(ns, &name).unwrap();
    let b = rt.keyword(ns, &name).unwrap();
    let c = rt.keyword(ns, &name).unwrap();
    TestResult::from_bool(a.identical(&b) && b.identical(&c) && rt.keywords().len() == 1)
}

#[quickcheck]
fn prop_keyword_identity_iff_equal_names(a: String, b: String) -> TestResult {
    if a.is_empty() || b.is_empty() {
        return TestResult::discard();
    }
    let rt = empty_runtime();
    let qa = QualifiedName::parse(&a).unwrap();
    let qb = QualifiedName::parse(&b).unwrap();
    let ka = rt.intern(qa.clone());
    let kb = rt.intern(qb.clone());
    TestResult::from_bool(ka.identical(&kb) == (qa == qb))
}

#[quickcheck]
fn prop_keyword_hash_uses_keyword_tag(ns: Option<String>, name: String) -> TestResult {
    if name.is_empty() {
        return TestResult::discard();
    }
    let ns = ns.as_deref().and_then(valid_namespace);
    let rt = empty_runtime();
    let kw = rt.keyword(ns, &name).unwrap();
    let sym = Symbol::new(ns, &name).unwrap();
    TestResult::from_bool(
        kw.hash_code() == hash_qualified(IdentKind::Keyword, kw.qualified_name())
            && kw.hash_code() == IdentKind::Keyword.fold(sym.hash_code()),
    )
}

#[quickcheck]
fn prop_symbol_metadata_ignored(name: String, m1: i64, m2: i64) -> TestResult {
    if name.is_empty() {
        return TestResult::discard();
    }
    let rt = empty_runtime();
    let line = rt.keyword(None, "line").unwrap();
    let a = rt
        .symbol(None, &name, Some(Metadata::new().assoc(line.clone(), m1)))
        .unwrap();
    let b = rt
        .symbol(None, &name, Some(Metadata::new().assoc(line, m2)))
        .unwrap();
    TestResult::from_bool(a == b && a.hash_code() == b.hash_code() && !a.ptr_eq(&b))
}

#[quickcheck]
fn prop_with_meta_copy_on_write(name: String, value: i64) -> TestResult {
    if name.is_empty() {
        return TestResult::discard();
    }
    let rt = empty_runtime();
    let key = rt.keyword(None, "k").unwrap();
    let original = Symbol::new(None, &name).unwrap();
    let derived = original.with_meta(Some(Metadata::new().assoc(key, value)));
    TestResult::from_bool(
        derived.name() == original.name()
            && derived.hash_code() == original.hash_code()
            && original.meta().is_none()
            && derived.meta().map(Metadata::len) == Some(1),
    )
}

#[quickcheck]
fn prop_symbol_order_consistent_with_eq(a: String, b: String) -> TestResult {
    if a.is_empty() || b.is_empty() {
        return TestResult::discard();
    }
    let sa = Symbol::parse(&a).unwrap();
    let sb = Symbol::parse(&b).unwrap();
    TestResult::from_bool((sa.cmp(&sb) == std::cmp::Ordering::Equal) == (sa == sb))
}
