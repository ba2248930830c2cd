// SPDX-License-Identifier: MIT OR Apache-2.0

//! clouds.yaml discovery
//!
//! Searched in order, first usable file wins:
//!
//! 1. `./clouds.yaml`
//! 2. `~/.config/openstack/clouds.yaml`
//! 3. `/etc/openstack/clouds.yaml`

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::clouds::CloudsConfig;
use crate::auth::AuthOptions;
use crate::error::{CloudsError, Result};

/// File name looked up in every search directory
pub const CLOUDS_FILE: &str = "clouds.yaml";

/// Environment variable naming a clouds.yaml file to try before the default locations
pub const ENV_CLIENT_CONFIG_FILE: &str = "OS_CLIENT_CONFIG_FILE";

/// Environment variable selecting the active cloud
pub const ENV_OS_CLOUD: &str = "OS_CLOUD";

const SYSTEM_CONFIG_DIR: &str = "/etc/openstack";

impl CloudsConfig {
    /// Load configuration by searching the default locations
    ///
    /// A file that exists but is malformed stops the search; a missing or
    /// unreadable file moves on to the next location.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The home directory cannot be determined
    /// - A clouds.yaml file is found but cannot be parsed
    /// - No location holds a readable clouds.yaml file
    pub fn load() -> Result<Self> {
        Self::from_paths(default_paths()?)
    }

    /// Like [`CloudsConfig::load`], but tries `OS_CLIENT_CONFIG_FILE` first if set.
    pub fn load_with_env() -> Result<Self> {
        let paths = with_override(default_paths()?, env::var_os(ENV_CLIENT_CONFIG_FILE));
        Self::from_paths(paths)
    }

    /// Search an explicit list of candidate files, in order.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = path.as_ref();
            trace!(target: "openstack_clouds::config", path = %path.display(), "trying clouds.yaml");

            match Self::from_file(path) {
                Ok(config) => return Ok(config),
                Err(err) if err.is_parse() => return Err(err),
                Err(err) => {
                    debug!(target: "openstack_clouds::config", error = %err, "skipping candidate");
                }
            }
        }
        Err(CloudsError::NoUsableFile)
    }

    /// Get the options for the cloud named by `OS_CLOUD`
    ///
    /// # Errors
    ///
    /// Returns [`CloudsError::NoActiveCloud`] if `OS_CLOUD` is unset or empty,
    /// and [`CloudsError::NotFound`] if it names an unknown cloud.
    pub fn active_cloud(&self) -> Result<AuthOptions> {
        match env::var(ENV_OS_CLOUD) {
            Ok(name) if !name.is_empty() => self.get(&name),
            _ => Err(CloudsError::NoActiveCloud(ENV_OS_CLOUD)),
        }
    }
}

/// The default search list for the current user
///
/// # Errors
///
/// Returns [`CloudsError::HomeDir`] if the home directory cannot be determined
pub fn default_paths() -> Result<Vec<PathBuf>> {
    let home = dirs::home_dir()
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or(CloudsError::HomeDir)?;

    Ok(candidate_paths(&home))
}

/// Put a non-empty override in front of `paths`.
fn with_override(mut paths: Vec<PathBuf>, path: Option<OsString>) -> Vec<PathBuf> {
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        paths.insert(0, PathBuf::from(path));
    }
    paths
}

fn candidate_paths(home: &Path) -> Vec<PathBuf> {
    vec![
        Path::new(".").join(CLOUDS_FILE),
        home.join(".config").join("openstack").join(CLOUDS_FILE),
        Path::new(SYSTEM_CONFIG_DIR).join(CLOUDS_FILE),
    ]
}
