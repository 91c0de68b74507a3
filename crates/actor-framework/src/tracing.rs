//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate: every event carries its data as fields
//!   (`robot=#3 activity=sell outcome=success euros=5`), not baked into the message.
//! - **Configurable log levels** via the `RUST_LOG` environment variable, `info` when unset.
//! - **Compact format** with the module prefix hidden (`with_target(false)`); spans are shown
//!   inline.
//!
//! ```bash
//! # Transitions, milestones and warnings
//! RUST_LOG=info cargo run
//!
//! # Every actor message with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the actor plumbing
//! RUST_LOG=actor_framework=debug cargo run
//! ```
use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
