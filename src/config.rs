use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_JAEGER_ENDPOINT: &str = "http://jaeger:14268/api/traces";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// JSON array used to seed the activity storage.
    pub activities_file: Option<PathBuf>,
    pub enable_telemetry: bool,
    pub jaeger_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "BIND_ADDRESS",
                value: bind_address.clone(),
            })?;

        let enable_telemetry = match var("ENABLE_TELEMETRY") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "ENABLE_TELEMETRY",
                    value,
                })?,
            None => false,
        };

        Ok(Self {
            bind_address,
            activities_file: var("ACTIVITIES_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            enable_telemetry,
            jaeger_endpoint: var("JAEGER_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_JAEGER_ENDPOINT.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            activities_file: None,
            enable_telemetry: false,
            jaeger_endpoint: DEFAULT_JAEGER_ENDPOINT.to_string(),
        }
    }
}
