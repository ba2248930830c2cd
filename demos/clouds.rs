// SPDX-License-Identifier: MIT OR Apache-2.0

//! Example demonstrating clouds.yaml discovery
//!
//! This example shows how to:
//! - Search the standard clouds.yaml locations
//! - List the configured clouds
//! - Pick the cloud named by OS_CLOUD

use openstack_clouds::config::{default_paths, ENV_OS_CLOUD};
use openstack_clouds::CloudsConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== clouds.yaml Discovery Example ===\n");

    println!("Search order:");
    for path in default_paths()? {
        println!("  - {}", path.display());
    }

    match CloudsConfig::load_with_env() {
        Ok(config) => {
            println!("\n✓ Loaded {} cloud(s)", config.len());

            let mut names = config.cloud_names();
            names.sort();
            for name in names {
                let auth = config.get(name)?;
                println!("  - {}", name);
                println!("    Endpoint: {}", auth.identity_endpoint);
                println!("    Username: {}", auth.username);
                println!("    Has password: {}", auth.has_password());
            }

            match config.active_cloud() {
                Ok(auth) => println!("\nActive cloud ({}): {:?}", ENV_OS_CLOUD, auth),
                Err(e) => println!("\n{}", e),
            }
        }
        Err(e) => {
            println!("\n✗ Failed to load config: {}", e);
            println!("\nNote: This example requires a clouds.yaml file in one of the locations above.");
        }
    }

    Ok(())
}
