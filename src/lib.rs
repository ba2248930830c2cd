// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod auth;
pub mod config;
pub mod error;
pub mod testkit;

pub use auth::AuthOptions;
pub use config::CloudsConfig;
pub use error::{CloudsError, ParseCause, ParseError};
