//! # Inventory Actor
//!
//! The single shared resource of the factory: pools of foo, bar and foobar, the cash balance and
//! the robot counter.
//!
//! ## Structure
//!
//! - [`state`] - [`Inventory`] and its [`ActorState`](actor_framework::ActorState) implementation
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]
//! - [`error`] - [`InventoryError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Atomicity
//!
//! The inventory runs inside a [`StateActor`], which applies one action at a time. Robots that
//! need to check-then-act (assembly takes a foo *and* a bar; a purchase needs money *and* foo)
//! use the compound actions, so no other robot can slip in between the check and the update.
//!
//! ## Usage
//!
//! ```rust
//! use foobartory::inventory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = inventory::new();
//!     tokio::spawn(actor.run());
//!
//!     let serial = client.add_foo().await?;
//!     assert_eq!(client.peek_foo_count().await?, 1);
//!     assert_eq!(client.take_foo().await?.serial(), serial);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use crate::clients::InventoryClient;
use actor_framework::StateActor;

/// Creates a new, empty Inventory actor and its client.
pub fn new() -> (StateActor<Inventory>, InventoryClient) {
    with_inventory(Inventory::new())
}

/// Creates an Inventory actor that starts from `inventory`.
pub fn with_inventory(inventory: Inventory) -> (StateActor<Inventory>, InventoryClient) {
    let (actor, generic_client) = StateActor::new(inventory, 64);
    (actor, InventoryClient::new(generic_client))
}
