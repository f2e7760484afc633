use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::spatial::Rect;

/// Startup parameters for a lattice.
///
/// Missing JSON fields fall back to the reference setup (384x384, solid
/// block over rows/cols 50..150, seed 12345). `"obstacle": null` disables
/// the block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub size: u32,
    pub obstacle: Option<Rect>,
    pub seed: u64,
}

pub const REFERENCE_SIZE: u32 = 384;
pub const REFERENCE_SEED: u64 = 12345;

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: REFERENCE_SIZE,
            obstacle: Some(Rect::square(50, 150)),
            seed: REFERENCE_SEED,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_reference_setup() {
        let config = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn null_obstacle_disables_block() {
        let config = SimulationConfig::from_json(r#"{"size": 16, "obstacle": null, "seed": 3}"#).unwrap();
        assert_eq!(config.size, 16);
        assert_eq!(config.obstacle, None);
        assert_eq!(config.seed, 3);
    }

    #[test]
    fn obstacle_round_trips_through_json() {
        let config = SimulationConfig {
            size: 32,
            obstacle: Some(Rect::new(2, 5, 3, 9)),
            seed: 1,
        };
        let json = config.to_json().unwrap();
        assert_eq!(SimulationConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            SimulationConfig::from_json(r#"{"size": "big"}"#),
            Err(EngineError::Config(_))
        ));
    }
}
