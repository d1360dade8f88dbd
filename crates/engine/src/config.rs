// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration, passed in explicitly by the invoking harness.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

/// The fixed settings one run operates under. There is no other external
/// surface — no flags, no ambient environment reads inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Log group holding the bot's boot streams.
    pub log_group: String,
    /// Identity of the secret the credential is merged into.
    pub secret_id: String,
    /// Bucket the key artifact is published to.
    pub bucket: String,
    /// Managed key used for server-side encryption of the artifact.
    pub kms_key_id: String,
    /// Region the collaborators operate in; carried for their transport
    /// configuration, unused by the pipeline itself.
    pub region: String,
}

impl RunConfig {
    /// Reject configurations with empty required settings. Called at the
    /// run boundary before any I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_group.is_empty() {
            return Err(ConfigError::Missing("log_group"));
        }
        if self.secret_id.is_empty() {
            return Err(ConfigError::Missing("secret_id"));
        }
        if self.bucket.is_empty() {
            return Err(ConfigError::Missing("bucket"));
        }
        if self.kms_key_id.is_empty() {
            return Err(ConfigError::Missing("kms_key_id"));
        }
        if self.region.is_empty() {
            return Err(ConfigError::Missing("region"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
