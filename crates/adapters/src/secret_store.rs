// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter for the secret store.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from secret store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecretStoreError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Key-value secret storage. Documents are opaque strings to the adapter;
/// the pipeline layers its JSON field-set convention on top.
///
/// No partial-field update primitive exists: updates are whole-document
/// writes, and concurrent writers race last-writer-wins. Do not invoke the
/// pipeline concurrently against the same secret.
#[async_trait]
pub trait SecretStore: Clone + Send + Sync + 'static {
    /// Fetch the current secret document.
    async fn get(&self, id: &str) -> Result<String, SecretStoreError>;

    /// Replace the secret document in full.
    async fn put(&self, id: &str, document: String) -> Result<(), SecretStoreError>;
}
