// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenStack clouds.yaml loading
//!
//! This module reads the `auth` section of every cloud in a clouds.yaml
//! file, either from an explicit path or by searching the standard
//! locations.
//!
//! # Environment Variables
//!
//! - `OS_CLIENT_CONFIG_FILE` - Extra clouds.yaml path tried first by [`CloudsConfig::load_with_env`]
//! - `OS_CLOUD` - Cloud returned by [`CloudsConfig::active_cloud`]
//!
//! # Example
//!
//! ```no_run
//! use openstack_clouds::config::CloudsConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CloudsConfig::load()?;
//! let auth = config.get("devstack")?;
//! println!("Identity endpoint: {}", auth.identity_endpoint);
//! # Ok(())
//! # }
//! ```

mod clouds;
mod search;

pub use clouds::CloudsConfig;
pub use search::{default_paths, CLOUDS_FILE, ENV_CLIENT_CONFIG_FILE, ENV_OS_CLOUD};
