//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the component that owns a single piece of shared state.
//! It implements the "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the state.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns one [`ActorState`].
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver end of
/// the channel.
///
/// **Concurrency Model**:
/// Any number of tasks may hold a [`StateClient`] and send requests at the same time. The
/// actor still processes them *sequentially* in a loop, so the state needs no `Mutex`, and a
/// check-then-act sequence inside a single action can never race with another caller.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Share**: Clone the client into every task that needs the state.
/// 4.  **Collect**: Drop every client; the task then ends and yields the final state.
///
/// ```rust
/// use actor_framework::{ActorState, StateActor};
///
/// #[derive(Debug)] struct Counter { value: u32 }
/// #[derive(Debug)] enum CounterAction { Add(u32) }
/// #[derive(Debug, thiserror::Error)] #[error("overflow")] struct CounterError;
///
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Snapshot = u32;
///     type Error = CounterError;
///
///     fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
///         let CounterAction::Add(n) = action;
///         self.value = self.value.checked_add(n).ok_or(CounterError)?;
///         Ok(self.value)
///     }
///
///     fn snapshot(&self) -> u32 { self.value }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(Counter { value: 0 }, 10);
///     let handle = tokio::spawn(actor.run());
///
///     assert_eq!(client.perform_action(CounterAction::Add(2)).await.unwrap(), 2);
///
///     drop(client);
///     let counter = handle.await.unwrap();
///     assert_eq!(counter.value, 2);
/// }
/// ```
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` owning `state`, and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial state.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped, then returns the
    /// final state.
    pub async fn run(mut self) -> T {
        // "Inventory" rather than "foobartory::inventory::state::Inventory"
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(value) => debug!(state_type, ?value, "Action ok"),
                        // Rejections are ordinary outcomes; the caller decides how loud to be.
                        Err(e) => debug!(state_type, error = %e, "Action rejected"),
                    }
                    handled += 1;
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    let snapshot = self.state.snapshot();
                    debug!(state_type, ?snapshot, "Snapshot");
                    let _ = respond_to.send(Ok(snapshot));
                }
            }
        }

        self.state.on_stop();
        info!(state_type, handled, "Shutdown");
        self.state
    }
}
