use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Aggregate counts of the factory at one instant. Attached to every transition log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevels {
    pub foo: usize,
    pub bar: usize,
    pub foobar: usize,
    pub euros: u32,
    pub robots: u32,
}

impl Display for StockLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} foo, {} bar, {} foobar, {} euros, {} robots",
            self.foo, self.bar, self.foobar, self.euros, self.robots
        )
    }
}
