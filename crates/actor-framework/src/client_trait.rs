//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific clients, adding a default `snapshot` method
//! built on top of a generic `StateClient` and the client's own error mapping.
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorState, FrameworkError, StateClient};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Tank { litres: u32 }
/// #[derive(Debug)] enum TankAction { Drain(u32) }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TankError(String);
///
/// impl ActorState for Tank {
///     type Action = TankAction;
///     type ActionResult = u32;
///     type Snapshot = u32;
///     type Error = TankError;
///     fn handle_action(&mut self, action: TankAction) -> Result<u32, TankError> {
///         let TankAction::Drain(n) = action;
///         self.litres = self.litres.checked_sub(n).ok_or_else(|| TankError("empty".into()))?;
///         Ok(self.litres)
///     }
///     fn snapshot(&self) -> u32 { self.litres }
/// }
///
/// struct TankClient { inner: StateClient<Tank> }
///
/// #[async_trait]
/// impl ActorClient<Tank> for TankClient {
///     type Error = TankError;
///     fn inner(&self) -> &StateClient<Tank> { &self.inner }
///     fn map_error(e: FrameworkError) -> TankError { TankError(e.to_string()) }
/// }
///
/// async fn usage(client: TankClient) {
///     // snapshot() is provided automatically!
///     let _litres = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the state.
    #[tracing::instrument(level = "debug", skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
