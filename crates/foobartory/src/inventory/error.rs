//! Error types for the Inventory actor.

use crate::model::Material;
use thiserror::Error;

/// Errors that can occur during inventory operations.
///
/// Every variant except `ActorCommunicationError` is a rejected request that left the
/// inventory unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A take found its pool empty.
    #[error("No {0} in stock")]
    Empty(Material),

    /// Paying would push the balance below zero.
    #[error("Insufficient funds: required {required} euros, available {available}")]
    InsufficientFunds { required: u32, available: u32 },

    /// Not enough foo to pay for a robot.
    #[error("Insufficient foo: required {required}, available {available}")]
    InsufficientFoo { required: usize, available: usize },

    /// The factory already has every robot it will ever buy.
    #[error("Robot limit of {limit} reached")]
    RobotLimitReached { limit: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl InventoryError {
    /// `true` for the rejections an activity recovers from by doing nothing.
    pub fn is_shortage(&self) -> bool {
        !matches!(self, InventoryError::ActorCommunicationError(_))
    }
}
