//! # Simulation Lifecycle
//!
//! Starts the inventory actor and the first robots, launches every robot bought along the way,
//! and tears the whole thing down once the target robot exists.
//!
//! ## Shutdown
//!
//! The robot that buys robot number `robot_target` cancels the shared stop token. From there:
//!
//! 1. **Robots wind down** - each one finishes the activity it is in and does not start
//!    another.
//! 2. **Pending spawns are drained** - robots bought during the wind-down are recorded as
//!    created but never launched.
//! 3. **The inventory closes** - once every client is dropped the actor stops and hands back
//!    the final [`Inventory`](crate::inventory::Inventory), which ends up in the
//!    [`SimulationReport`].
//!
//! ## Configuration
//!
//! [`FactoryConfig::from_env`] reads `FOOBARTORY_TIME_SCALE`, `FOOBARTORY_SEED` and
//! `FOOBARTORY_ROBOT_TARGET`. Logging is configured separately through `RUST_LOG`, see
//! [`actor_framework::tracing`].

pub mod config;
pub mod error;
pub mod factory;

pub use config::*;
pub use error::*;
pub use factory::*;
