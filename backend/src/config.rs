use std::path::PathBuf;

use rocket::figment::Figment;
use serde::Deserialize;

use crate::sim_db::{ConfigError, SimConfig};

/// Application keys read from the same figment as Rocket's own settings
/// (`Rocket.toml`, `ROCKET_*` environment variables).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub static_dir: PathBuf,
    pub sim_min_delay_ms: u64,
    pub sim_max_delay_ms: u64,
    pub sim_fault_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sim = SimConfig::default();
        AppConfig {
            static_dir: PathBuf::from(rocket::fs::relative!("public")),
            sim_min_delay_ms: sim.min_delay_ms,
            sim_max_delay_ms: sim.max_delay_ms,
            sim_fault_rate: sim.fault_rate,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read configuration: {0}")]
    Figment(#[from] rocket::figment::Error),

    #[error("invalid simulation settings: {0}")]
    Sim(#[from] ConfigError),
}

impl AppConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, LoadError> {
        let config: AppConfig = figment.extract()?;
        config.sim().validate()?;
        Ok(config)
    }

    pub fn sim(&self) -> SimConfig {
        SimConfig {
            min_delay_ms: self.sim_min_delay_ms,
            max_delay_ms: self.sim_max_delay_ms,
            fault_rate: self.sim_fault_rate,
        }
    }
}
