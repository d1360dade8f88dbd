// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural matchers for credential and key material in log lines.
//!
//! Matchers are pure, total functions over a single line of text; they never
//! fail and carry no state. Matching is structural only — a line is treated
//! as a credential or fingerprint purely by shape, with no entropy or
//! checksum validation.

use regex::Regex;
use std::sync::LazyLock;

/// Sentinel line the bot prints immediately before its generated credential.
pub const PASSWORD_MARKER: &str = "**** GENERATED PASSWORD";

/// Replacement text written over a discovered credential line.
pub const REDACTED_TEXT: &str = "[REDACTED]";

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static CREDENTIAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{20,}$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static FINGERPRINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{4}\s+[0-9a-f]{4}").expect("constant regex pattern is valid")
});

/// True when the line carries the credential marker.
///
/// Containment rather than equality: boot banners wrap the marker with
/// prefixes and trailing asterisks.
pub fn is_marker(line: &str) -> bool {
    line.contains(PASSWORD_MARKER)
}

/// True when the trimmed line has credential shape: solely alphanumeric,
/// length >= 20. Deliberately permissive — any such line occurring where a
/// credential is expected is treated as the credential.
pub fn is_credential(line: &str) -> bool {
    CREDENTIAL_PATTERN.is_match(line.trim())
}

/// True when the line starts with two groups of 4 lowercase hex characters
/// separated by whitespace — one fragment of the public key block.
pub fn is_fingerprint(line: &str) -> bool {
    FINGERPRINT_PATTERN.is_match(line)
}

/// True when the trimmed line is exactly the redaction token. The presence
/// of such a line is the only durable signal that a stream was already
/// processed by a prior run.
pub fn is_redacted(line: &str) -> bool {
    line.trim() == REDACTED_TEXT
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
