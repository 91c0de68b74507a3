//! # Actor Framework
//!
//! Building blocks for sharing one piece of mutable state between many concurrent tasks
//! without locks: the state lives inside a single Tokio task (the actor) and everyone else
//! talks to it through cheap, cloneable clients.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **State Layer** ([`ActorState`]) - Your business rules: which actions exist and how each
//!    one changes the state.
//! 2. **Runtime Layer** ([`StateActor`]) - Message processing and concurrency.
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - Type-safe communication.
//!
//! You write the rules **once** in the state type, and the framework handles the async message
//! passing, error boxing and shutdown.
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task.
//! - Messages are processed **sequentially** (no locks needed, every action is atomic).
//! - Any number of tasks may hold a client and call it concurrently.
//! - When the last client is dropped the actor stops and [`StateActor::run`] resolves to the
//!   final state.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Testing
//!
//! The [`mock`] module lets you test client wrappers against scripted responses without
//! spawning a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
