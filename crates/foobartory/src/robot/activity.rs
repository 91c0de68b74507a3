use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The five things a robot can do in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    MineFoo,
    MineBar,
    Assemble,
    Sell,
    BuyRobot,
}

impl Activity {
    /// Every activity; a robot draws uniformly from this table.
    pub const ALL: [Activity; 5] = [
        Activity::MineFoo,
        Activity::MineBar,
        Activity::Assemble,
        Activity::Sell,
        Activity::BuyRobot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Activity::MineFoo => "mine-foo",
            Activity::MineBar => "mine-bar",
            Activity::Assemble => "assemble",
            Activity::Sell => "sell",
            Activity::BuyRobot => "buy-robot",
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How an activity ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    /// The modelled 40% assembly failure.
    Failure,
    /// Nothing to work with (empty pool, not enough money or foo); the inventory is untouched.
    NoOp,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::NoOp => "noop",
        };
        f.write_str(name)
    }
}

/// One completed activity, as logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityReport {
    pub activity: Activity,
    pub outcome: Outcome,
    pub note: String,
}

/// Where a robot is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    Idle,
    Moving,
    Performing(Activity),
}

impl Display for RobotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RobotState::Idle => f.write_str("idle"),
            RobotState::Moving => f.write_str("moving"),
            RobotState::Performing(activity) => write!(f, "performing {activity}"),
        }
    }
}
