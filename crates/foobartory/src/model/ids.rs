use super::Material;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Serial number stamped on every foo and bar for traceability.
///
/// Serials come from one [`SerialGenerator`], so a serial is unique across both materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Serial(pub u64);

impl From<u64> for Serial {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SN-{:06}", self.0)
    }
}

/// Hands out serials in increasing order, starting at 1. Never reuses one, and remembers which
/// material each serial was stamped on.
#[derive(Debug, Default)]
pub struct SerialGenerator {
    minted: Vec<Material>,
}

impl SerialGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_serial(&mut self, material: Material) -> Serial {
        self.minted.push(material);
        Serial(self.issued())
    }

    /// Number of serials handed out so far.
    pub fn issued(&self) -> u64 {
        u64::try_from(self.minted.len()).unwrap_or(u64::MAX)
    }

    /// The material `serial` was stamped on, or `None` if it was never handed out.
    pub fn material_of(&self, serial: Serial) -> Option<Material> {
        let index = usize::try_from(serial.0.checked_sub(1)?).ok()?;
        self.minted.get(index).copied()
    }
}

/// Sequence number of a robot. The first robot is `#1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotNumber(pub u32);

impl From<u32> for RobotNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for RobotNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
