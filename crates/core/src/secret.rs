// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret document field set with merge-preserving updates.

use serde_json::{Map, Value};

/// Name of the field the pipeline owns inside the secret document. All
/// other fields belong to other processes and must survive a merge intact.
pub const CREDENTIAL_FIELD: &str = "password";

/// Parsed field set of a secret document (a flat JSON object).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretFields(Map<String, Value>);

impl SecretFields {
    /// Parse a stored secret document. Fails when the document is not a
    /// JSON object.
    pub fn parse(document: &str) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_str(document)?;
        Ok(Self(fields))
    }

    /// Serialize back to the full-document form the store expects.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Set one field to a string value, inserting or overwriting.
    pub fn set(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), Value::String(value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Field names, for logging. Values are never logged.
    pub fn names(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;
