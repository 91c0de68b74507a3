use super::config::ConfigError;
use crate::inventory::InventoryError;
use thiserror::Error;
use tokio::task::JoinError;

/// Why a simulation did not reach its robot target.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Robot task failed: {0}")]
    RobotTask(JoinError),

    #[error("Inventory actor failed: {0}")]
    InventoryTask(JoinError),

    /// Every robot stopped before the target was bought.
    #[error("All robots stopped before robot #{target} was bought")]
    Stalled { target: u32 },
}
