// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline orchestrator: drives one sweep over a log group.

use crate::config::{ConfigError, RunConfig};
use crate::merge::MergeError;
use crate::{extract, merge, redact};
use logsweep_adapters::{Encryption, LogStore, LogStoreError, ObjectStore, SecretStore};
use logsweep_core::{patterns, Clock, KeyArtifact, RunResult, KEY_OBJECT_NAME};
use thiserror::Error;

/// Fatal errors that abort a run. Recoverable failures (reading an existing
/// secret, redacting one stream, uploading the artifact) are logged at their
/// call sites and never reach this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("log store error: {0}")]
    LogStore(#[from] LogStoreError),

    #[error("secret merge failed: {0}")]
    Merge(#[from] MergeError),
}

/// Search state for the run. The transition to `Found` happens at most once,
/// at the single site where the credential is written to the secret store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Searching,
    Found,
}

impl Search {
    fn found(self) -> bool {
        self == Search::Found
    }
}

/// Run summary carried out of the stream loop.
struct Swept {
    credential_found: bool,
    key_found: bool,
}

/// One-shot sweep over all streams of a log group.
///
/// Strictly sequential; a run holds no state beyond the search flag and the
/// accumulated key text, and persists neither — re-running after a crash
/// relies only on redaction tokens already present in the streams.
///
/// Concurrent runs against the same log group are not protected: the
/// secret-store fetch-modify-write is last-writer-wins. Do not invoke
/// concurrently.
pub struct Pipeline<L, S, O, C> {
    logs: L,
    secrets: S,
    objects: O,
    clock: C,
    config: RunConfig,
}

impl<L, S, O, C> Pipeline<L, S, O, C>
where
    L: LogStore,
    S: SecretStore,
    O: ObjectStore,
    C: Clock,
{
    pub fn new(config: RunConfig, logs: L, secrets: S, objects: O, clock: C) -> Self {
        Self { logs, secrets, objects, clock, config }
    }

    /// Execute one run. Never returns an error and never panics: every
    /// fatal path is converted into a failed [`RunResult`] here, at the
    /// pipeline boundary.
    pub async fn run(&self) -> RunResult {
        tracing::info!(group = %self.config.log_group, "starting credential sweep");

        match self.run_inner().await {
            Ok(swept) => {
                tracing::info!(
                    credential_found = swept.credential_found,
                    key_found = swept.key_found,
                    "sweep completed"
                );
                RunResult::success(self.clock.epoch_ms(), swept.credential_found, swept.key_found)
            }
            Err(error) => {
                tracing::error!(%error, "sweep failed");
                RunResult::failed(error.to_string())
            }
        }
    }

    async fn run_inner(&self) -> Result<Swept, PipelineError> {
        self.config.validate()?;

        let group = &self.config.log_group;
        let streams = self.logs.list_streams(group).await?;
        tracing::info!(streams = streams.len(), "listed log streams");

        let mut search = Search::Searching;
        let mut artifact = KeyArtifact::new();

        for descriptor in &streams {
            let stream = descriptor.name.as_str();
            let events = self.logs.read_events(group, stream).await?;
            tracing::debug!(stream, events = events.len(), "read stream");

            // A redaction token anywhere in the stream means a prior run
            // already processed it: skip extraction and redaction entirely.
            if events.iter().any(|e| patterns::is_redacted(&e.message)) {
                tracing::info!(stream, "stream already processed, skipping");
                continue;
            }

            if !search.found() {
                if let Some(credential) = extract::find_credential(&events) {
                    tracing::info!(stream, "found a credential");
                    merge::store_credential(&self.secrets, &self.config.secret_id, &credential)
                        .await?;
                    tracing::info!("credential stored in secret store");
                    search = Search::Found;
                }
            }

            artifact.append(&extract::key_fragments(&events));

            // Streams visited while still searching are left alone: the
            // credential is emitted once, early, and streams arrive
            // newest-first, so only the discovery stream and older ones can
            // hold it. Redaction failure on one stream must not stop the
            // rest.
            if search.found() {
                match redact::commit(&self.logs, group, stream, &events).await {
                    Ok(redacted) => {
                        tracing::info!(stream, redacted, "redacted credential lines");
                    }
                    Err(error) => {
                        tracing::error!(stream, %error, "failed to redact stream");
                    }
                }
            }
        }

        self.publish_key(&artifact).await;

        Ok(Swept { credential_found: search.found(), key_found: !artifact.is_empty() })
    }

    /// Publish the assembled key artifact. Absence of key material and
    /// upload failure are both reportable outcomes, not run failures.
    async fn publish_key(&self, artifact: &KeyArtifact) {
        if artifact.is_empty() {
            tracing::warn!("no public key material found");
            return;
        }

        let encryption = Encryption::new(self.config.kms_key_id.clone());
        match self
            .objects
            .put(&self.config.bucket, KEY_OBJECT_NAME, artifact.as_str().to_string(), &encryption)
            .await
        {
            Ok(()) => {
                tracing::info!(lines = artifact.line_count(), "public key uploaded");
            }
            Err(error) => {
                tracing::error!(%error, "failed to upload public key");
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
