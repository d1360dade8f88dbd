// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redaction pass: rewrite a stream with credential lines blanked out.

use logsweep_adapters::{LogStore, LogStoreError};
use logsweep_core::patterns;
use logsweep_core::patterns::REDACTED_TEXT;
use logsweep_core::LogEvent;

/// Build the redacted copy of a stream's events.
///
/// Every credential-shaped (trimmed) message is replaced with the redaction
/// token; timestamps and ordering are untouched. Returns the rewrite and
/// the number of replaced events.
pub fn redact_events(events: &[LogEvent]) -> (Vec<LogEvent>, usize) {
    let mut redacted = 0;
    let rewritten = events
        .iter()
        .map(|event| {
            if patterns::is_credential(&event.message) {
                redacted += 1;
                LogEvent::new(event.timestamp, REDACTED_TEXT)
            } else {
                event.clone()
            }
        })
        .collect();
    (rewritten, redacted)
}

/// Replace a stream's stored content with its redacted rewrite.
///
/// The store only supports append, so the commit is delete-then-recreate-
/// then-append. A crash between delete and append can leave the stream
/// empty or partial; an empty stream yields nothing on re-scan, and the run
/// is invoked once per deployment, so the window is accepted. The append is
/// skipped when the rewrite is empty.
///
/// Returns the number of redacted lines.
pub async fn commit<L: LogStore>(
    logs: &L,
    group: &str,
    stream: &str,
    events: &[LogEvent],
) -> Result<usize, LogStoreError> {
    let (rewritten, redacted) = redact_events(events);

    logs.delete_stream(group, stream).await?;
    logs.create_stream(group, stream).await?;
    if !rewritten.is_empty() {
        logs.append_events(group, stream, rewritten).await?;
    }

    Ok(redacted)
}

#[cfg(test)]
#[path = "redact_tests.rs"]
mod tests;
