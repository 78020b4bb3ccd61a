use std::{
    path::Path,
    process::{Command, Stdio},
};

use log::info;

use crate::config::{Config, Elevation};

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("This application requires sudo privileges.\nRun: sudo ufw-tui")]
    NoPrivilege,

    #[error("sudo not found on system")]
    SudoNotFound,

    #[error("UFW is not installed on the system ({0} not found)")]
    MissingTool(String),
}

/// Checks if a binary exists in PATH, or at the given location when it
/// contains a path separator.
pub fn binary_exists(name: &str) -> bool {
    if name.contains('/') {
        return Path::new(name).is_file();
    }

    std::env::var_os("PATH")
        .and_then(|paths| {
            std::env::split_paths(&paths).find_map(|dir| {
                let full_path = dir.join(name);
                if full_path.is_file() {
                    Some(full_path)
                } else {
                    None
                }
            })
        })
        .is_some()
}

fn can_elevate(elevation: Elevation) -> Result<(), PreflightError> {
    match elevation {
        Elevation::Sudo => {
            let status = Command::new("sudo")
                .args(["-n", "true"])
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|_| PreflightError::SudoNotFound)?;

            if status.success() {
                Ok(())
            } else {
                Err(PreflightError::NoPrivilege)
            }
        }
        Elevation::Direct => {
            if unsafe { libc::geteuid() } == 0 {
                Ok(())
            } else {
                Err(PreflightError::NoPrivilege)
            }
        }
    }
}

pub fn check(config: &Config) -> Result<(), PreflightError> {
    can_elevate(config.elevation)?;

    if !binary_exists(&config.ufw) {
        return Err(PreflightError::MissingTool(config.ufw.clone()));
    }

    info!("Preflight passed ({} via {})", config.ufw, config.elevation);
    Ok(())
}
