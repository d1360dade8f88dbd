// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery specs
//!
//! Verify a run can be safely repeated after partial failures: a failed
//! redaction leaves the stream eligible for the next run, and a stream
//! emptied by a crash mid-rewrite yields nothing on re-scan.

use crate::prelude::*;
use logsweep_core::patterns::REDACTED_TEXT;

fn seed_credential_stream(world: &World) {
    world.stream(
        "bot/boot",
        &[
            (1000, "**** GENERATED PASSWORD"),
            (1001, CREDENTIAL),
            (1002, "ab12 cd34 ef56"),
        ],
    );
}

#[tokio::test]
async fn failed_redaction_is_retried_on_the_next_run() {
    let world = World::new();
    seed_credential_stream(&world);

    // first run: credential lands in the secret store, but the log store
    // rejects every rewrite
    world.logs.set_fail_writes(true);
    let first = world.pipeline().run().await;

    assert!(first.is_success());
    assert!(first.credential_found);
    assert_eq!(world.logs.events(GROUP, "bot/boot").unwrap()[1].message, CREDENTIAL);

    // second run: store healthy again; the stream is still unredacted, so
    // it is rediscovered and the plaintext finally erased
    world.logs.set_fail_writes(false);
    let second = world.pipeline().run().await;

    assert!(second.is_success());
    assert!(second.credential_found);
    assert_eq!(world.logs.events(GROUP, "bot/boot").unwrap()[1].message, REDACTED_TEXT);
    // both runs wrote the same credential; last writer wins harmlessly
    assert_eq!(world.secrets.put_count(), 2);
}

#[tokio::test]
async fn stream_emptied_by_a_crash_is_harmless() {
    let world = World::new();
    // delete succeeded, append never happened: the accepted crash window
    world.stream("bot/boot", &[]);
    world.stream("bot/later", &[(2000, "restarted")]);

    let result = world.pipeline().run().await;

    assert!(result.is_success());
    assert!(!result.credential_found);
    assert!(!result.key_found);
    assert_eq!(world.logs.write_count(), 0);
}

#[tokio::test]
async fn already_redacted_stream_is_never_rewritten() {
    let world = World::new();
    world.stream(
        "bot/boot",
        &[(1000, "**** GENERATED PASSWORD"), (1001, REDACTED_TEXT), (1002, "ab12 cd34")],
    );

    let result = world.pipeline().run().await;

    assert!(result.is_success());
    assert!(!result.credential_found);
    // the guard skips the whole stream, key fragments included
    assert!(!result.key_found);
    assert_eq!(world.logs.write_count(), 0);
    assert_eq!(world.secrets.put_count(), 0);
}
