//! Type-safe wrappers around [`StateClient`](actor_framework::StateClient).

pub mod inventory_client;

pub use inventory_client::*;
