// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret merge: fetch-modify-write that only touches the credential field.

use logsweep_adapters::{SecretStore, SecretStoreError};
use logsweep_core::{SecretFields, CREDENTIAL_FIELD};
use thiserror::Error;

/// Errors from the secret merge
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("secret store error: {0}")]
    Store(#[from] SecretStoreError),

    #[error("secret document error: {0}")]
    Document(#[from] serde_json::Error),
}

/// Merge the credential into the stored secret.
///
/// A missing or unreadable secret is not fatal to setting the credential:
/// the merge degrades to an empty field set. Unrelated fields present in
/// the fetched document survive untouched; the write replaces the whole
/// document (the store has no partial-field update). Field names are
/// logged, values never.
pub async fn store_credential<S: SecretStore>(
    secrets: &S,
    secret_id: &str,
    credential: &str,
) -> Result<(), MergeError> {
    let mut fields = match secrets.get(secret_id).await {
        Ok(document) => match SecretFields::parse(&document) {
            Ok(fields) => {
                tracing::info!(fields = ?fields.names(), "existing secret fields");
                fields
            }
            Err(error) => {
                tracing::warn!(%error, "stored secret is not a JSON object, starting fresh");
                SecretFields::default()
            }
        },
        Err(error) => {
            tracing::warn!(%error, "could not read existing secret, starting fresh");
            SecretFields::default()
        }
    };

    fields.set(CREDENTIAL_FIELD, credential);
    tracing::info!(fields = ?fields.names(), "updated secret fields");

    secrets.put(secret_id, fields.to_document()?).await?;
    Ok(())
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
