//! # Foobartory
//!
//! A simulated factory in which robots mine foo and bar, assemble them into foobars, sell the
//! foobars and buy more robots, until the factory owns 30 of them.
//!
//! ## Core Components
//!
//! - **[model]**: Goods, serial numbers and stock levels.
//! - **[inventory]**: The shared stock, held by a single actor so every operation is atomic.
//! - **[clients]**: [`InventoryClient`](clients::InventoryClient), the typed handle robots use.
//! - **[robot]**: The robot cycle and its five activities.
//! - **[lifecycle]**: Configuration and the [`Factory`](lifecycle::Factory) driver.
//!
//! ## Testing
//!
//! Randomness sits behind [`Chance`](robot::Chance); tests script it with
//! [`ScriptedChance`](robot::ScriptedChance) and run on tokio's paused clock.

pub mod clients;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod robot;
