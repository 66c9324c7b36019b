//! Subscriber installation for the `tabula` binary.
//!
//! Nothing is installed unless `TABULA_LOG` (or, failing that, `RUST_LOG`)
//! holds a filter. `TABULA_LOG_TREE=1` renders nested spans as an indented
//! tree instead of flat lines.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once; later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = select_directives(
            std::env::var("TABULA_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        ) else {
            return;
        };

        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));
        let tree = tree_requested(std::env::var("TABULA_LOG_TREE").ok().as_deref());
        // A subscriber set by an embedding program wins.
        let _ = if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
    });
}

/// `TABULA_LOG` takes precedence over `RUST_LOG`; empty values count as unset.
fn select_directives(tabula: Option<String>, rust: Option<String>) -> Option<String> {
    tabula
        .filter(|s| !s.trim().is_empty())
        .or_else(|| rust.filter(|s| !s.trim().is_empty()))
}

fn tree_requested(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "true" | "yes" | "on"))
}

#[cfg(test)]
mod tests;
