use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use thiserror::Error;
use tracing::{info, warn};

pub mod constant {
    pub const LANDMARK_LAT: f64 = 25.197197;
    pub const LANDMARK_LON: f64 = 55.274376;
    pub const WAYPOINT_RADIUS_KM: f64 = 5.0;
    pub const KM_PER_DEGREE: f64 = 111.0;
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    pub const MIN_SPEED_KMH: f64 = 30.0;
    pub const MAX_SPEED_KMH: f64 = 70.0;
    pub const DEFAULT_FLEET_SIZE: usize = 30;
    pub(crate) const DEFAULT_PORT: u16 = 3000;
    pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub fleet_seed: Option<u64>,
    /// Upper bound on `count`; unset means no cap.
    pub max_fleet_size: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: constant::DEFAULT_BIND_ADDR.to_string(),
            port: constant::DEFAULT_PORT,
            fleet_seed: None,
            max_fleet_size: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| {
            info!("BIND_ADDR not set, using {}", defaults.bind_addr);
            defaults.bind_addr.clone()
        });
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let fleet_seed: Option<u64> = parse_var(&lookup, "FLEET_SEED")?;
        let max_fleet_size: Option<usize> = parse_var(&lookup, "MAX_FLEET_SIZE")?;

        if max_fleet_size == Some(0) {
            return Err(ConfigError::Invalid {
                var: "MAX_FLEET_SIZE",
                value: "0".to_string(),
            });
        }
        if fleet_seed.is_some() {
            warn!("FLEET_SEED is set, fleet generation is reproducible");
        }

        Ok(Self {
            bind_addr,
            port,
            fleet_seed,
            max_fleet_size,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<T>();
    match parsed {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(ConfigError::Invalid { var, value: raw }),
    }
}
