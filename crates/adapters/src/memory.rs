// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store implementations for tests.
//!
//! Each fake keeps its state behind `Arc<Mutex>` so clones share one world,
//! counts writes so specs can assert idempotency, and supports failure
//! injection for exercising the recoverable/fatal error paths.

use crate::log_store::{LogStore, LogStoreError};
use crate::object_store::{Encryption, ObjectStore, ObjectStoreError};
use crate::secret_store::{SecretStore, SecretStoreError};
use async_trait::async_trait;
use logsweep_core::{LogEvent, StreamDescriptor};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

// --- Log store ---

#[derive(Default)]
struct LogStoreState {
    groups: HashMap<String, BTreeMap<String, Vec<LogEvent>>>,
    writes: u64,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory [`LogStore`] with write counting and failure injection.
#[derive(Clone, Default)]
pub struct MemoryLogStore {
    inner: Arc<Mutex<LogStoreState>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stream with events (oldest first), creating the group as
    /// needed. Replaces any prior content of that stream.
    pub fn seed_stream(&self, group: &str, stream: &str, events: Vec<LogEvent>) {
        let mut state = self.inner.lock();
        state.groups.entry(group.to_string()).or_default().insert(stream.to_string(), events);
    }

    /// Events currently stored for a stream, if it exists.
    pub fn events(&self, group: &str, stream: &str) -> Option<Vec<LogEvent>> {
        let state = self.inner.lock();
        state.groups.get(group).and_then(|streams| streams.get(stream)).cloned()
    }

    /// Number of mutating calls (delete/create/append) performed so far.
    pub fn write_count(&self) -> u64 {
        self.inner.lock().writes
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn list_streams(&self, group: &str) -> Result<Vec<StreamDescriptor>, LogStoreError> {
        let state = self.inner.lock();
        if state.fail_reads {
            return Err(LogStoreError::Transport("injected read failure".to_string()));
        }
        let streams = state
            .groups
            .get(group)
            .ok_or_else(|| LogStoreError::GroupNotFound(group.to_string()))?;
        let mut descriptors: Vec<StreamDescriptor> = streams
            .iter()
            .map(|(name, events)| {
                StreamDescriptor::new(name.as_str(), events.iter().map(|e| e.timestamp).max())
            })
            .collect();
        // Most-recently-active first; empty streams last, name as tiebreak
        descriptors.sort_by(|a, b| {
            b.last_event_at.cmp(&a.last_event_at).then_with(|| a.name.cmp(&b.name))
        });
        Ok(descriptors)
    }

    async fn read_events(
        &self,
        group: &str,
        stream: &str,
    ) -> Result<Vec<LogEvent>, LogStoreError> {
        let state = self.inner.lock();
        if state.fail_reads {
            return Err(LogStoreError::Transport("injected read failure".to_string()));
        }
        state
            .groups
            .get(group)
            .ok_or_else(|| LogStoreError::GroupNotFound(group.to_string()))?
            .get(stream)
            .cloned()
            .ok_or_else(|| LogStoreError::StreamNotFound(stream.to_string()))
    }

    async fn delete_stream(&self, group: &str, stream: &str) -> Result<(), LogStoreError> {
        let mut state = self.inner.lock();
        if state.fail_writes {
            return Err(LogStoreError::Transport("injected write failure".to_string()));
        }
        let streams = state
            .groups
            .get_mut(group)
            .ok_or_else(|| LogStoreError::GroupNotFound(group.to_string()))?;
        if streams.remove(stream).is_none() {
            return Err(LogStoreError::StreamNotFound(stream.to_string()));
        }
        state.writes += 1;
        Ok(())
    }

    async fn create_stream(&self, group: &str, stream: &str) -> Result<(), LogStoreError> {
        let mut state = self.inner.lock();
        if state.fail_writes {
            return Err(LogStoreError::Transport("injected write failure".to_string()));
        }
        let streams = state
            .groups
            .get_mut(group)
            .ok_or_else(|| LogStoreError::GroupNotFound(group.to_string()))?;
        if streams.contains_key(stream) {
            return Err(LogStoreError::StreamExists(stream.to_string()));
        }
        streams.insert(stream.to_string(), Vec::new());
        state.writes += 1;
        Ok(())
    }

    async fn append_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
    ) -> Result<(), LogStoreError> {
        let mut state = self.inner.lock();
        if state.fail_writes {
            return Err(LogStoreError::Transport("injected write failure".to_string()));
        }
        let stored = state
            .groups
            .get_mut(group)
            .ok_or_else(|| LogStoreError::GroupNotFound(group.to_string()))?
            .get_mut(stream)
            .ok_or_else(|| LogStoreError::StreamNotFound(stream.to_string()))?;
        stored.extend(events);
        state.writes += 1;
        Ok(())
    }
}

// --- Secret store ---

#[derive(Default)]
struct SecretStoreState {
    secrets: HashMap<String, String>,
    puts: u64,
    fail_get: bool,
    fail_put: bool,
}

/// In-memory [`SecretStore`].
#[derive(Clone, Default)]
pub struct MemorySecretStore {
    inner: Arc<Mutex<SecretStoreState>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, id: &str, document: &str) {
        self.inner.lock().secrets.insert(id.to_string(), document.to_string());
    }

    /// Stored document for a secret, if any.
    pub fn document(&self, id: &str) -> Option<String> {
        self.inner.lock().secrets.get(id).cloned()
    }

    pub fn put_count(&self) -> u64 {
        self.inner.lock().puts
    }

    pub fn set_fail_get(&self, fail: bool) {
        self.inner.lock().fail_get = fail;
    }

    pub fn set_fail_put(&self, fail: bool) {
        self.inner.lock().fail_put = fail;
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn get(&self, id: &str) -> Result<String, SecretStoreError> {
        let state = self.inner.lock();
        if state.fail_get {
            return Err(SecretStoreError::Transport("injected get failure".to_string()));
        }
        state
            .secrets
            .get(id)
            .cloned()
            .ok_or_else(|| SecretStoreError::NotFound(id.to_string()))
    }

    async fn put(&self, id: &str, document: String) -> Result<(), SecretStoreError> {
        let mut state = self.inner.lock();
        if state.fail_put {
            return Err(SecretStoreError::Transport("injected put failure".to_string()));
        }
        state.secrets.insert(id.to_string(), document);
        state.puts += 1;
        Ok(())
    }
}

// --- Object store ---

/// One stored object with its encryption parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: String,
    pub kms_key_id: String,
}

#[derive(Default)]
struct ObjectStoreState {
    objects: HashMap<(String, String), StoredObject>,
    fail_put: bool,
}

/// In-memory [`ObjectStore`].
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    inner: Arc<Mutex<ObjectStoreState>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored object at `bucket`/`key`, if any.
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.inner.lock().objects.get(&(bucket.to_string(), key.to_string())).cloned()
    }

    pub fn set_fail_put(&self, fail: bool) {
        self.inner.lock().fail_put = fail;
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: String,
        encryption: &Encryption,
    ) -> Result<(), ObjectStoreError> {
        let mut state = self.inner.lock();
        if state.fail_put {
            return Err(ObjectStoreError::Transport("injected put failure".to_string()));
        }
        state.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject { body, kms_key_id: encryption.kms_key_id.clone() },
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
