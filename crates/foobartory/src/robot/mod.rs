//! # Robots
//!
//! Each robot is a tokio task looping over move, pick, perform. Robots share nothing but the
//! [`RobotContext`]: an inventory client, the stop signal and the channel new robots are
//! announced on.
//!
//! ## Structure
//!
//! - [`worker`] - [`Robot`], its cycle and the five activities
//! - [`activity`] - [`Activity`], [`Outcome`], [`RobotState`]
//! - [`chance`] - [`Chance`], the random source behind every decision
//! - [`rules`] - Durations and prices

pub mod activity;
pub mod chance;
pub mod rules;
pub mod worker;

pub use activity::*;
pub use chance::*;
pub use worker::*;

use crate::clients::InventoryClient;
use crate::model::RobotNumber;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Handles every robot carries.
#[derive(Clone)]
pub struct RobotContext {
    pub inventory: InventoryClient,
    /// Fired once, by the robot that buys robot number `robot_target`.
    pub stop: CancellationToken,
    /// Numbers of freshly bought robots, for the factory to launch.
    pub spawner: mpsc::UnboundedSender<RobotNumber>,
    /// Wall-clock seconds per time-unit.
    pub time_scale: f64,
    pub robot_target: u32,
}

impl RobotContext {
    /// Sleeps for `units` time-units. Not interrupted by the stop signal.
    pub async fn pause(&self, units: f64) {
        let seconds = units * self.time_scale;
        if seconds > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
        }
    }
}
