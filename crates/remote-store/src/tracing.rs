//! # Observability & Tracing
//!
//! This module provides the tracing bootstrap shared by every binary and
//! test harness in the workspace.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact subscriber that hides the
//! crate/module prefix (`with_target(false)`); log lines carry the
//! `resource` field instead. Verbosity comes from the `RUST_LOG`
//! environment variable.
//!
//! ## What Gets Traced
//!
//! - **Backend Lifecycle**: startup, shutdown, and final record count
//! - **Store Operations**: List, Create, Update, Delete, with ids and sizes
//! - **Component Flow**: composer submissions and board commits as spans
//! - **Errors**: failure reason plus the id the operation targeted
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store plumbing only
//! RUST_LOG=remote_store=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, request sites log the full payload once via the
//! `?draft` structured-field syntax; everything after stays compact.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use the resource field instead
        .compact() // Compact format shows spans inline (e.g., "order_composition:submit")
        .init();
}
