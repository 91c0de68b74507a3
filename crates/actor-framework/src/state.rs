//! # ActorState Trait
//!
//! The `ActorState` trait is the contract a piece of shared state implements to be owned by a
//! [`StateActor`](crate::StateActor). Instead of a map of entities keyed by id, the actor owns
//! exactly one value and applies every incoming action to it, one at a time.
//!
//! # Architecture Note
//! Callers never touch the state directly. They send an `Action` through a
//! [`StateClient`](crate::StateClient) and wait for the `ActionResult`. Because the actor
//! handles one message at a time, every action is atomic with respect to every other caller,
//! including multi-step checks such as "enough stock? then take it".
//!
//! The associated types keep this type safe: an inventory actor only accepts inventory actions,
//! and the compiler rejects anything else.

use std::fmt::Debug;

/// Trait that any state must implement to be owned by a [`StateActor`](crate::StateActor).
pub trait ActorState: Send + 'static {
    /// Enum of the operations this state supports.
    type Action: Send + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Debug;

    /// A cheap, read-only view of the state (counts, levels, ...).
    type Snapshot: Send + Debug;

    /// The error type for rejected actions.
    ///
    /// One error enum covers every action of the state. A rejected action must leave the state
    /// exactly as it found it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply one action.
    ///
    /// Synchronous: the actor never yields while the state is half updated, so no other
    /// caller can observe an intermediate value.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Build a snapshot of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once after the last client is gone, before the state is handed back.
    fn on_stop(&self) {}
}
