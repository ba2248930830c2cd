// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudsError {
    #[error("config: cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config: cannot find home directory")]
    HomeDir,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("config: cloud `{0}` not found")]
    NotFound(String),

    #[error("config: no usable clouds.yaml file found")]
    NoUsableFile,

    #[error("config: no active cloud, set {0}")]
    NoActiveCloud(&'static str),

    #[error("config: invalid auth_url `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

impl CloudsError {
    /// True for a structurally broken file, which stops the search.
    pub fn is_parse(&self) -> bool {
        matches!(self, CloudsError::Parse(_))
    }
}

/// A clouds.yaml file was found but is not usable.
#[derive(Debug, Error)]
#[error("config: cannot parse {}: {cause}", file.display())]
pub struct ParseError {
    pub file: PathBuf,
    #[source]
    pub cause: ParseCause,
}

#[derive(Debug, Error)]
pub enum ParseCause {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// The `clouds` key is missing, null, or an empty mapping.
    #[error("config is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CloudsError>;
