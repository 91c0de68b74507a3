//! Durations (in time-units) and prices of the activities.

/// Relocation before every activity.
pub const MOVE_UNITS: f64 = 5.0;

pub const MINE_FOO_UNITS: f64 = 1.0;

/// Mining a bar takes a uniform random time in this range.
pub const MINE_BAR_MIN_UNITS: f64 = 0.5;
pub const MINE_BAR_MAX_UNITS: f64 = 2.0;

pub const ASSEMBLE_UNITS: f64 = 2.0;
pub const ASSEMBLY_SUCCESS_RATE: f64 = 0.6;

/// Time at the market, paid only when there is something to sell.
pub const SELL_UNITS: f64 = 10.0;
/// Most foobars one trip to the market can carry.
pub const SELL_BATCH: usize = 5;

pub const ROBOT_PRICE: u32 = 3;
pub const ROBOT_FOO_COST: usize = 6;
