use crate::error::SimError;

pub const DEFAULT_SIM_TARGET: u64 = 10_000;

/// Settings for one simulation run. Fixed once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of trials to run.
    pub target: u64,
    /// Seed for a reproducible run; `None` draws from OS entropy.
    pub seed: Option<i64>,
    /// Check the host's choice against the game rules every round.
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_SIM_TARGET,
            seed: None,
            debug: false,
        }
    }
}

impl RunConfig {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.target == 0 {
            return Err(SimError::InvalidConfig(
                "The number of simulations must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse the `sim_target` argument into a trial count of at least one.
pub fn parse_sim_target(raw: &str) -> Result<u64, String> {
    let value: i128 = raw
        .trim()
        .parse()
        .map_err(|_| "The number of simulations must be an integer".to_string())?;
    if value < 1 {
        return Err("The number of simulations must be >= 1".to_string());
    }
    u64::try_from(value)
        .map_err(|_| format!("The number of simulations must be <= {}", u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sim_target() {
        assert_eq!(parse_sim_target("6"), Ok(6));
        assert_eq!(parse_sim_target(" 200000 "), Ok(200_000));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for raw in ["", "abc", "1.5", "1e3"] {
            assert_eq!(
                parse_sim_target(raw),
                Err("The number of simulations must be an integer".to_string()),
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        for raw in ["0", "-1", "-9000"] {
            assert_eq!(
                parse_sim_target(raw),
                Err("The number of simulations must be >= 1".to_string())
            );
        }
    }

    #[test]
    fn test_validate() {
        assert!(RunConfig::default().validate().is_ok());
        assert!(matches!(
            RunConfig::new(0).validate(),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = RunConfig::new(6).with_seed(42).with_debug(true);
        assert_eq!(
            config,
            RunConfig {
                target: 6,
                seed: Some(42),
                debug: true,
            }
        );
    }
}
