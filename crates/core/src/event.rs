// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log event and stream descriptor records.

use serde::{Deserialize, Serialize};

/// One timestamped text event read from a log stream.
///
/// Immutable once read; the redaction pass builds replacement copies rather
/// than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Emission time in epoch milliseconds, assigned by the log service.
    pub timestamp: i64,
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self { timestamp, message: message.into() }
    }
}

/// Descriptor for one stream within a log group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub name: String,
    /// Timestamp of the newest event, epoch milliseconds. `None` for a
    /// stream that has never received an event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_event_at: Option<i64>,
}

impl StreamDescriptor {
    pub fn new(name: impl Into<String>, last_event_at: Option<i64>) -> Self {
        Self { name: name.into(), last_event_at }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
