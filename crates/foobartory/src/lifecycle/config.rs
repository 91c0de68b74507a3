//! Run parameters, read from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const TIME_SCALE_VAR: &str = "FOOBARTORY_TIME_SCALE";
pub const SEED_VAR: &str = "FOOBARTORY_SEED";
pub const ROBOT_TARGET_VAR: &str = "FOOBARTORY_ROBOT_TARGET";

/// Upper bound on seconds per time-unit.
pub const MAX_TIME_SCALE: f64 = 60.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Unparsable { key: &'static str, value: String },

    #[error("time scale must be a number between 0 and 60, got {0}")]
    TimeScale(f64),

    #[error("robot target {target} must be greater than the {initial} starting robots")]
    RobotTarget { target: u32, initial: u32 },

    #[error("the factory needs at least one starting robot")]
    NoRobots,
}

/// How a simulation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Wall-clock seconds per time-unit. `0.0` runs as fast as the scheduler allows.
    pub time_scale: f64,
    /// Seeds every robot's random source; `None` draws from the OS.
    pub seed: Option<u64>,
    /// The run ends when this robot is bought.
    pub robot_target: u32,
    pub initial_robots: u32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            time_scale: 0.01,
            seed: None,
            robot_target: 30,
            initial_robots: 2,
        }
    }
}

impl FactoryConfig {
    /// Defaults overridden by `FOOBARTORY_TIME_SCALE`, `FOOBARTORY_SEED` and
    /// `FOOBARTORY_ROBOT_TARGET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(TIME_SCALE_VAR) {
            config.time_scale = parse(TIME_SCALE_VAR, &value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse(SEED_VAR, &value)?);
        }
        if let Some(value) = lookup(ROBOT_TARGET_VAR) {
            config.robot_target = parse(ROBOT_TARGET_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::TimeScale(self.time_scale));
        }
        if self.initial_robots == 0 {
            return Err(ConfigError::NoRobots);
        }
        if self.robot_target <= self.initial_robots {
            return Err(ConfigError::RobotTarget {
                target: self.robot_target,
                initial: self.initial_robots,
            });
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Unparsable {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = FactoryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FactoryConfig::default());
        assert_eq!(config.robot_target, 30);
        assert_eq!(config.initial_robots, 2);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = FactoryConfig::from_lookup(lookup(&[
            (TIME_SCALE_VAR, "0.5"),
            (SEED_VAR, " 1234 "),
            (ROBOT_TARGET_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.time_scale, 0.5);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.robot_target, 5);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = FactoryConfig::from_lookup(lookup(&[(SEED_VAR, "lucky")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Unparsable {
                key: SEED_VAR,
                value: "lucky".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_time_scales() {
        for value in ["-1", "NaN", "inf", "61"] {
            let result = FactoryConfig::from_lookup(lookup(&[(TIME_SCALE_VAR, value)]));
            assert!(
                matches!(result, Err(ConfigError::TimeScale(_))),
                "{value} accepted"
            );
        }
    }

    #[test]
    fn test_target_must_exceed_starting_robots() {
        let err = FactoryConfig::from_lookup(lookup(&[(ROBOT_TARGET_VAR, "2")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RobotTarget {
                target: 2,
                initial: 2
            }
        );

        let config = FactoryConfig {
            initial_robots: 0,
            ..FactoryConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoRobots));
    }
}
