// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter for durable object storage.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from object store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Server-side encryption parameters for a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encryption {
    /// Identifier of the managed key the store encrypts the object with.
    pub kms_key_id: String,
}

impl Encryption {
    pub fn new(kms_key_id: impl Into<String>) -> Self {
        Self { kms_key_id: kms_key_id.into() }
    }
}

/// Write-only object storage for published artifacts.
#[async_trait]
pub trait ObjectStore: Clone + Send + Sync + 'static {
    /// Store `body` at `bucket`/`key`, encrypted server-side.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: String,
        encryption: &Encryption,
    ) -> Result<(), ObjectStoreError>;
}
