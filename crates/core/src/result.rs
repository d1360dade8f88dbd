// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured run outcome returned to the invoking harness.

use serde::{Deserialize, Serialize};

/// Prefix for run identifiers; the success identifier appends the run's
/// epoch-seconds timestamp.
pub const IDENTIFIER_PREFIX: &str = "post-deploy";

/// Fixed identifier reported when a run fails before producing a timestamped
/// identity.
pub const FAILED_IDENTIFIER: &str = "post-deploy-failed";

/// Terminal status of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
}

crate::simple_display! {
    RunStatus {
        Success => "success",
        Failed => "failed",
    }
}

/// Outcome record handed back to the trigger. Never a process exit code —
/// the trigger is an orchestration event, not a terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub status: RunStatus,
    pub identifier: String,
    /// Whether a credential was located and persisted this run.
    pub credential_found: bool,
    /// Whether any public-key material was collected this run.
    pub key_found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RunResult {
    /// Successful run summary. `epoch_ms` stamps the run identifier.
    pub fn success(epoch_ms: u64, credential_found: bool, key_found: bool) -> Self {
        Self {
            status: RunStatus::Success,
            identifier: format!("{}-{}", IDENTIFIER_PREFIX, epoch_ms / 1000),
            credential_found,
            key_found,
            reason: None,
        }
    }

    /// Failed run with a reason. Nothing may escape the pipeline boundary
    /// except through this constructor.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Failed,
            identifier: FAILED_IDENTIFIER.to_string(),
            credential_found: false,
            key_found: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
