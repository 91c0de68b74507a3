//! # Generic Messages
//!
//! This module defines the message types used for communication between
//! the `StateClient` and `StateActor`.

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Action**: applies a [`ActorState::Action`] and replies with its result.
/// - **Snapshot**: replies with a [`ActorState::Snapshot`] without mutating anything.
///
/// The enum is generic over `T: ActorState`, so an actor can only ever receive the actions
/// its own state understands.
#[derive(Debug)]
pub enum StateRequest<T: ActorState> {
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
}
