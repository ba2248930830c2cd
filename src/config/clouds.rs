// SPDX-License-Identifier: MIT OR Apache-2.0

//! clouds.yaml parser
//!
//! A clouds.yaml file maps cloud names to sections; only the `auth`
//! section of each cloud is read:
//!
//! ```yaml
//! clouds:
//!   devstack:
//!     auth:
//!       auth_url: http://192.168.0.10:5000/v2.0
//!       username: demo
//!       password: secret
//!       tenant_name: demo
//!     region_name: RegionOne
//! ```

use serde::de::Deserializer;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::auth::AuthOptions;
use crate::error::{CloudsError, ParseCause, ParseError, Result};

/// Shown as the file name when parsing content that did not come from disk.
const IN_MEMORY_SOURCE: &str = "<memory>";

#[derive(Debug, Default, Deserialize)]
struct CloudsDocument {
    #[serde(default)]
    clouds: Option<HashMap<String, Option<CloudEntry>>>,
}

#[derive(Debug, Deserialize)]
struct CloudEntry {
    // Outer `Some` means the key is present, even with a null body.
    #[serde(default, deserialize_with = "present")]
    auth: Option<Option<AuthSection>>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthSection {
    // Unquoted scalars keep their source text, so `password: 1.50` stays "1.50".
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    tenant_name: Option<String>,
    #[serde(default)]
    tenant_id: Option<String>,
    #[serde(default)]
    auth_url: Option<String>,
}

impl From<AuthSection> for AuthOptions {
    fn from(auth: AuthSection) -> Self {
        Self {
            identity_endpoint: auth.auth_url.unwrap_or_default(),
            username: auth.username.unwrap_or_default(),
            password: auth.password.unwrap_or_default(),
            tenant_name: auth.tenant_name.unwrap_or_default(),
            tenant_id: auth.tenant_id.unwrap_or_default(),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Authentication options for every cloud defined in a clouds.yaml file.
///
/// Built once by a load call and never modified afterwards, so a shared
/// reference can be read from any number of threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudsConfig {
    clouds: HashMap<String, AuthOptions>,
}

impl CloudsConfig {
    /// Load configuration from a specific clouds.yaml file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the clouds.yaml file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read ([`CloudsError::Io`])
    /// - The file is malformed YAML or defines no clouds ([`CloudsError::Parse`])
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| CloudsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(path, &content)?;
        debug!(
            target: "openstack_clouds::config",
            path = %path.display(),
            clouds = config.len(),
            "loaded clouds.yaml"
        );
        Ok(config)
    }

    /// Parse configuration from YAML string
    ///
    /// # Errors
    ///
    /// Returns [`CloudsError::Parse`] if the YAML is malformed or defines no clouds
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(Path::new(IN_MEMORY_SOURCE), yaml.as_bytes())
    }

    fn parse(file: &Path, content: &[u8]) -> Result<Self> {
        let parse_error = |cause| ParseError {
            file: file.to_path_buf(),
            cause,
        };

        let document: CloudsDocument = serde_yaml::from_slice::<Option<CloudsDocument>>(content)
            .map_err(|e| parse_error(ParseCause::Yaml(e)))?
            .unwrap_or_default();

        let entries = match document.clouds {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(parse_error(ParseCause::Empty).into()),
        };

        let clouds = entries
            .into_iter()
            .filter_map(|(name, entry)| {
                let auth = entry?.auth?;
                Some((name, AuthOptions::from(auth.unwrap_or_default())))
            })
            .collect();

        Ok(Self { clouds })
    }

    /// Get the options for one cloud by name
    ///
    /// The returned value is a copy; changing it does not affect this config.
    ///
    /// # Errors
    ///
    /// Returns [`CloudsError::NotFound`] if no cloud with that name has an `auth` section
    pub fn get(&self, name: &str) -> Result<AuthOptions> {
        self.clouds
            .get(name)
            .cloned()
            .ok_or_else(|| CloudsError::NotFound(name.to_string()))
    }

    /// Copy of every cloud keyed by name, or `None` if no clouds are defined
    pub fn all(&self) -> Option<HashMap<String, AuthOptions>> {
        if self.clouds.is_empty() {
            return None;
        }
        Some(self.clouds.clone())
    }

    /// List all cloud names
    pub fn cloud_names(&self) -> Vec<&String> {
        self.clouds.keys().collect()
    }

    /// Number of clouds with an `auth` section
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// True if no cloud has an `auth` section
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }
}
