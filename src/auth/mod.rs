// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credentials handed to an OpenStack identity client.

use url::Url;

use crate::error::{CloudsError, Result};

/// Password credentials for one cloud, as read from its `auth` section.
///
/// Fields that were absent in the file are empty strings. Nothing here is
/// validated; the identity service decides what it accepts.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    /// Identity service URL (`auth_url`)
    pub identity_endpoint: String,
    pub username: String,
    pub password: String,
    pub tenant_name: String,
    pub tenant_id: String,
}

impl AuthOptions {
    /// Parse `identity_endpoint` for use by an HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CloudsError::InvalidEndpoint`] if the value is not an absolute URL.
    pub fn identity_url(&self) -> Result<Url> {
        Url::parse(&self.identity_endpoint).map_err(|source| CloudsError::InvalidEndpoint {
            endpoint: self.identity_endpoint.clone(),
            source,
        })
    }

    /// True if a password was configured
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl std::fmt::Debug for AuthOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthOptions")
            .field("identity_endpoint", &self.identity_endpoint)
            .field("username", &self.username)
            .field(
                "password",
                &if self.has_password() { "[REDACTED]" } else { "" },
            )
            .field("tenant_name", &self.tenant_name)
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}
