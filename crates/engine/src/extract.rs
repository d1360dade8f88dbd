// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction pass: pure reads over one stream's ordered events.

use logsweep_core::patterns;
use logsweep_core::LogEvent;

/// Locate the one-time credential in a stream.
///
/// Finds the first event carrying the marker, then scans strictly-later
/// events for the first credential-shaped line. Only the first marker
/// occurrence is honored; a marker with no qualifying follower before
/// stream end yields `None`.
pub fn find_credential(events: &[LogEvent]) -> Option<String> {
    let marker = events.iter().position(|e| patterns::is_marker(&e.message))?;
    events[marker + 1..]
        .iter()
        .find(|e| patterns::is_credential(&e.message))
        .map(|e| e.message.trim().to_string())
}

/// Collect every fingerprint-shaped line, trimmed and newline-terminated,
/// in event order. Empty when the stream has no key material.
pub fn key_fragments(events: &[LogEvent]) -> String {
    let mut fragments = String::new();
    for event in events {
        if patterns::is_fingerprint(&event.message) {
            fragments.push_str(event.message.trim());
            fragments.push('\n');
        }
    }
    fragments
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
