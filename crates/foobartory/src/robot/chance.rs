//! The random decisions a robot makes, behind a trait so tests can script them.

use super::activity::Activity;
use super::rules::{ASSEMBLY_SUCCESS_RATE, MINE_BAR_MAX_UNITS, MINE_BAR_MIN_UNITS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of every random draw a robot needs.
pub trait Chance: Send + Sync {
    /// Next activity, uniformly over [`Activity::ALL`].
    fn pick_activity(&mut self) -> Activity;

    /// Whether the next assembly succeeds.
    fn assembly_succeeds(&mut self) -> bool;

    /// How long the next bar takes to mine, in time-units.
    fn bar_mining_units(&mut self) -> f64;
}

/// [`Chance`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChance<R> {
    rng: R,
}

impl<R: Rng + Send + Sync> RngChance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChance<StdRng> {
    /// Reproducible sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send + Sync> Chance for RngChance<R> {
    fn pick_activity(&mut self) -> Activity {
        Activity::ALL[self.rng.gen_range(0..Activity::ALL.len())]
    }

    fn assembly_succeeds(&mut self) -> bool {
        self.rng.gen_bool(ASSEMBLY_SUCCESS_RATE)
    }

    fn bar_mining_units(&mut self) -> f64 {
        self.rng.gen_range(MINE_BAR_MIN_UNITS..=MINE_BAR_MAX_UNITS)
    }
}

/// [`Chance`] that replays queued answers.
///
/// Once a queue runs dry it falls back to mining foo, successful assemblies and the shortest
/// bar mining time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChance {
    activities: VecDeque<Activity>,
    assemblies: VecDeque<bool>,
    bar_units: VecDeque<f64>,
}

impl ScriptedChance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_pick(mut self, activity: Activity) -> Self {
        self.activities.push_back(activity);
        self
    }

    pub fn then_assembly(mut self, succeeds: bool) -> Self {
        self.assemblies.push_back(succeeds);
        self
    }

    pub fn then_bar_units(mut self, units: f64) -> Self {
        self.bar_units.push_back(units);
        self
    }
}

impl Chance for ScriptedChance {
    fn pick_activity(&mut self) -> Activity {
        self.activities.pop_front().unwrap_or(Activity::MineFoo)
    }

    fn assembly_succeeds(&mut self) -> bool {
        self.assemblies.pop_front().unwrap_or(true)
    }

    fn bar_mining_units(&mut self) -> f64 {
        self.bar_units.pop_front().unwrap_or(MINE_BAR_MIN_UNITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_seeded_chance_is_reproducible() {
        let mut a = RngChance::seeded(7);
        let mut b = RngChance::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.pick_activity(), b.pick_activity());
            assert_eq!(a.assembly_succeeds(), b.assembly_succeeds());
        }
    }

    #[test]
    fn test_bar_mining_stays_in_range() {
        let mut chance = RngChance::seeded(1);
        for _ in 0..1_000 {
            let units = chance.bar_mining_units();
            assert!((MINE_BAR_MIN_UNITS..=MINE_BAR_MAX_UNITS).contains(&units));
        }
    }

    #[test]
    fn test_every_activity_gets_picked() {
        let mut chance = RngChance::seeded(42);
        let mut counts: HashMap<Activity, u32> = HashMap::new();
        for _ in 0..5_000 {
            *counts.entry(chance.pick_activity()).or_default() += 1;
        }
        assert_eq!(counts.len(), Activity::ALL.len());
        // 1000 expected per activity; allow a wide margin
        assert!(counts.values().all(|&n| (800..1200).contains(&n)));
    }

    #[test]
    fn test_assembly_success_rate_is_roughly_sixty_percent() {
        let mut chance = RngChance::seeded(3);
        let successes = (0..10_000).filter(|_| chance.assembly_succeeds()).count();
        assert!((5_700..6_300).contains(&successes), "{successes} successes");
    }

    #[test]
    fn test_scripted_chance_replays_then_falls_back() {
        let mut chance = ScriptedChance::new()
            .then_pick(Activity::Sell)
            .then_assembly(false)
            .then_bar_units(1.5);

        assert_eq!(chance.pick_activity(), Activity::Sell);
        assert_eq!(chance.pick_activity(), Activity::MineFoo);
        assert!(!chance.assembly_succeeds());
        assert!(chance.assembly_succeeds());
        assert_eq!(chance.bar_mining_units(), 1.5);
        assert_eq!(chance.bar_mining_units(), MINE_BAR_MIN_UNITS);
    }
}
