//! Concurrency tests for keyword canonicalization
//!
//! Every test races several threads on the same runtime and checks that no
//! qualified name ever ends up with two live keyword instances.

mod common;

use common::{assert_all_identical, empty_runtime, preloaded_runtime, qn, THREADS};
use ferrule_ident::hash::{hash_qualified, IdentKind};
use ferrule_ident::{Keyword, Symbol};
use std::sync::{Arc, Barrier};
use std::thread;

/// Two threads intern `:ok` at the same moment
#[test]
fn test_two_threads_same_keyword() {
    let rt = Arc::new(empty_runtime());
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let rt = Arc::clone(&rt);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                rt.keyword(None, "ok").unwrap()
            })
        })
        .collect();

    let results: Vec<Keyword> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_all_identical(&results);
    assert_eq!(
        results[0].hash_code(),
        hash_qualified(IdentKind::Keyword, &qn(None, "ok"))
    );
    assert_eq!(rt.keywords().len(), 1);
}

/// Many threads, many overlapping names
#[test]
fn test_overlapping_names() {
    const NAMES: usize = 64;

    let rt = Arc::new(empty_runtime());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let rt = Arc::clone(&rt);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Each thread walks the names in a different order
                (0..NAMES)
                    .map(|i| (i + t * 7) % NAMES)
                    .map(|i| {
                        let kw = rt.keyword(Some("race"), &format!("k{}", i)).unwrap();
                        (i, kw)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut by_name: Vec<Vec<Keyword>> = vec![Vec::new(); NAMES];
    for handle in handles {
        for (i, kw) in handle.join().unwrap() {
            by_name[i].push(kw);
        }
    }

    for group in &by_name {
        assert_eq!(group.len(), THREADS);
        assert_all_identical(group);
    }
    assert_eq!(rt.keywords().len(), NAMES);
    assert_eq!(rt.stats().misses, NAMES);
    assert_eq!(rt.stats().hits, NAMES * (THREADS - 1));
}

/// Racing on names that were preloaded returns the preloaded instances
#[test]
fn test_race_on_preloaded_constants() {
    let rt = preloaded_runtime();
    let canonical = rt.find_keyword(Some("cljs.core"), "none").unwrap();
    let before = rt.keywords().len();

    let results: Vec<Keyword> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| rt.parse_keyword(":cljs.core/none").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for kw in &results {
        assert!(kw.identical(&canonical));
    }
    assert_eq!(rt.keywords().len(), before);
}

/// Symbols built on many threads are equal but never share a core
#[test]
fn test_symbols_need_no_coordination() {
    let symbols: Vec<Symbol> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| Symbol::new(Some("cljs.core"), "first").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for sym in &symbols[1..] {
        assert_eq!(*sym, symbols[0]);
        assert!(!sym.ptr_eq(&symbols[0]));
    }
}

/// Symbols and their metadata variants can be shared across threads
#[test]
fn test_shared_symbol_with_meta() {
    let rt = empty_runtime();
    let line = rt.keyword(None, "line").unwrap();
    let base = Symbol::new(None, "x").unwrap();

    let derived: Vec<Symbol> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS as i64)
            .map(|i| {
                let base = &base;
                let line = line.clone();
                s.spawn(move || base.vary_meta(|m| m.assoc(line, i)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(base.meta().is_none());
    for sym in &derived {
        assert_eq!(*sym, base);
        assert!(sym.ptr_eq(&base));
    }
}
