//! Shared helpers for ferrule-ident integration tests

#![allow(dead_code)]

use ferrule_ident::{Keyword, QualifiedName, Runtime, RuntimeConfig};

/// Number of threads used by concurrency tests
pub const THREADS: usize = 16;

/// Runtime without preloaded constants
pub fn empty_runtime() -> Runtime {
    Runtime::new()
}

/// Runtime with the core constants preloaded and a fixed shard layout
pub fn preloaded_runtime() -> Runtime {
    let config = RuntimeConfig {
        shard_amount: Some(8),
        ..Default::default()
    };
    Runtime::with_config(config).expect("default config with 8 shards is valid")
}

/// `Some(ns)` when `ns` is usable as a namespace, `None` otherwise
pub fn valid_namespace(ns: &str) -> Option<&str> {
    if ns.is_empty() || ns.contains('/') {
        None
    } else {
        Some(ns)
    }
}

pub fn qn(ns: Option<&str>, name: &str) -> QualifiedName {
    QualifiedName::new(ns, name).expect("test names are valid")
}

/// Assert every keyword in `keywords` is the same instance
pub fn assert_all_identical(keywords: &[Keyword]) {
    let first = &keywords[0];
    for (i, kw) in keywords.iter().enumerate() {
        assert!(
            first.identical(kw),
            "keyword #{} ({}) is not the canonical instance",
            i,
            kw
        );
    }
}
