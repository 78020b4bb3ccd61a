use std::{str::FromStr, time::Duration};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const TIMEOUT_VAR: &str = "UFW_TUI_TIMEOUT";
pub const ELEVATION_VAR: &str = "UFW_TUI_ELEVATION";
pub const UFW_VAR: &str = "UFW_TUI_UFW";
pub const SS_VAR: &str = "UFW_TUI_SS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid UFW_TUI_TIMEOUT '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("Invalid UFW_TUI_ELEVATION '{0}'. Valid options: sudo, none")]
    InvalidElevation(String),
}

/// How privileged tool calls are issued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Elevation {
    /// `sudo -n <tool> ...`
    Sudo,
    /// Run the tool directly, the process is expected to be root already.
    #[strum(serialize = "none")]
    Direct,
}

impl Elevation {
    pub fn detect() -> Self {
        if unsafe { libc::geteuid() } == 0 {
            Elevation::Direct
        } else {
            Elevation::Sudo
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub timeout: Duration,
    pub elevation: Elevation,
    pub ufw: String,
    pub ss: String,
}

impl Config {
    pub fn from_lookup<F>(lookup: F, default_elevation: Elevation) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup(TIMEOUT_VAR).filter(|value| !value.is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => DEFAULT_TIMEOUT,
        };

        let elevation = match lookup(ELEVATION_VAR).filter(|value| !value.is_empty()) {
            Some(value) => Elevation::from_str(&value.to_lowercase())
                .map_err(|_| ConfigError::InvalidElevation(value))?,
            None => default_elevation,
        };

        Ok(Self {
            timeout,
            elevation,
            ufw: lookup(UFW_VAR)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "ufw".to_string()),
            ss: lookup(SS_VAR)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "ss".to_string()),
        })
    }
}
