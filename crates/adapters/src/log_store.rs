// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter for the log service.

use async_trait::async_trait;
use logsweep_core::{LogEvent, StreamDescriptor};
use thiserror::Error;

/// Errors from log store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogStoreError {
    #[error("log group not found: {0}")]
    GroupNotFound(String),

    #[error("log stream not found: {0}")]
    StreamNotFound(String),

    #[error("log stream already exists: {0}")]
    StreamExists(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Adapter for reading and rewriting log streams.
///
/// The underlying store is append-only; a rewrite is expressed as
/// delete/create/append, never as a line-level edit.
#[async_trait]
pub trait LogStore: Clone + Send + Sync + 'static {
    /// Stream descriptors for a group, ordered most-recently-active first
    /// (descending by last event time). Fully paginated by the adapter.
    async fn list_streams(&self, group: &str) -> Result<Vec<StreamDescriptor>, LogStoreError>;

    /// All events of a stream, oldest first. Fully paginated by the adapter.
    async fn read_events(&self, group: &str, stream: &str)
        -> Result<Vec<LogEvent>, LogStoreError>;

    /// Remove a stream and its events.
    async fn delete_stream(&self, group: &str, stream: &str) -> Result<(), LogStoreError>;

    /// Create an empty stream. Fails if the stream already exists.
    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogStoreError>;

    /// Append events to a stream in the given order.
    async fn append_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
    ) -> Result<(), LogStoreError>;
}
