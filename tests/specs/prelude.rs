// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared scenario helpers.

use logsweep_adapters::{MemoryLogStore, MemoryObjectStore, MemorySecretStore};
use logsweep_core::{FakeClock, LogEvent};
use logsweep_engine::{Pipeline, RunConfig};

pub const GROUP: &str = "/wickr/bot-boot";
pub const SECRET: &str = "arn:secret:wickr-bot";
pub const BUCKET: &str = "wickr-bot-artifacts";
pub const KMS_KEY: &str = "kms-bot-artifacts";
pub const CREDENTIAL: &str = "Qw83nRtV0bXk29fmLsWd71hp";

/// One complete deployment world: stores, clock, and config.
pub struct World {
    pub logs: MemoryLogStore,
    pub secrets: MemorySecretStore,
    pub objects: MemoryObjectStore,
    pub clock: FakeClock,
}

impl World {
    pub fn new() -> Self {
        Self {
            logs: MemoryLogStore::new(),
            secrets: MemorySecretStore::new(),
            objects: MemoryObjectStore::new(),
            clock: FakeClock::new(),
        }
    }

    pub fn config(&self) -> RunConfig {
        RunConfig {
            log_group: GROUP.to_string(),
            secret_id: SECRET.to_string(),
            bucket: BUCKET.to_string(),
            kms_key_id: KMS_KEY.to_string(),
            region: "us-east-1".to_string(),
        }
    }

    pub fn pipeline(
        &self,
    ) -> Pipeline<MemoryLogStore, MemorySecretStore, MemoryObjectStore, FakeClock> {
        Pipeline::new(
            self.config(),
            self.logs.clone(),
            self.secrets.clone(),
            self.objects.clone(),
            self.clock.clone(),
        )
    }

    /// Seed a stream from `(timestamp, message)` pairs.
    pub fn stream(&self, name: &str, lines: &[(i64, &str)]) {
        let events: Vec<LogEvent> =
            lines.iter().map(|(ts, message)| LogEvent::new(*ts, *message)).collect();
        self.logs.seed_stream(GROUP, name, events);
    }
}
