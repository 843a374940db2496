//! Native function invocation fixer.
//!
//! Rewrites unqualified calls to PHP's internal functions so they name the
//! root namespace explicitly:
//!
//! ```text
//! json_encode($options)   →   \json_encode($options)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! config ─validate─▶ TargetCatalog ─┐
//!                                   ├─▶ scanner::scan ─▶ Vec<usize> ─▶ rewriter::apply
//! TokenStream (borrowed) ───────────┘     (read-only)     ascending      (descending)
//! ```
//!
//! 1. **Configure** (`config`, `catalog`): options are validated and the set
//!    of target names is built once per rule instance.
//! 2. **Scan** (`scanner`): one read-only pass collects the indices of all
//!    qualifying call sites.
//! 3. **Rewrite** (`rewriter`): separators are inserted from the highest
//!    index down, so every collected index stays valid.
//!
//! # Debugging
//!
//! - `RUST_LOG=backslash_fixer=debug`: catalog size and insertions per stream
//! - `RUST_LOG=backslash_fixer=trace`: every qualifying call site

mod catalog;
mod config;
mod error;
mod fixer;
mod native_function_invocation;
pub mod rewriter;
pub mod scanner;

pub use catalog::{TargetCatalog, OPCACHE_FUNCTIONS};
pub use config::FunctionInvocationConfig;
pub use error::ConfigError;
pub use fixer::{CodeSample, Fixer, OptionDescriptor, RuleDefinition};
pub use native_function_invocation::NativeFunctionInvocation;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
