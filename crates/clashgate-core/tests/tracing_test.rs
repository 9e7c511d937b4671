//! Tests for tracing initialization.

use clashgate_core::tracing::{init_tracing, init_tracing_with, DEFAULT_FILTER};

#[test]
fn test_init_is_idempotent() {
    init_tracing_with(Some("clashgate_analysis=debug"));
    init_tracing();
    init_tracing_with(Some("not a [valid filter"));
    tracing::info!("still logging after repeated init");
}

#[test]
fn test_default_filter_names_workspace_crates() {
    assert!(DEFAULT_FILTER.contains("clashgate_analysis=info"));
    assert!(DEFAULT_FILTER.contains("clashgate_cli=info"));
}
