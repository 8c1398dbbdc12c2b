use crate::error::{MctsError, Result};

/// Configuration for one move decision
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of simulations to run per decision
    pub num_simulations: u32,

    /// Temperature for move selection (1.0 = proportional to visits, near 0 = argmax)
    pub temperature: f32,
}

impl MctsConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of simulations
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Set temperature for move selection
    pub fn with_temperature(mut self, t: f32) -> Self {
        self.temperature = t;
        self
    }

    /// At least one simulation, and a strictly positive finite temperature
    pub fn validate(&self) -> Result<()> {
        if self.num_simulations == 0 {
            return Err(MctsError::InvalidConfig(
                "num_simulations must be greater than 0".to_string(),
            ));
        }
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(MctsError::InvalidConfig(format!(
                "temperature must be > 0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 100,
            temperature: 1.0,
        }
    }
}
