// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-deploy sweep specs
//!
//! Verify the full first-boot scenario: credential moved to the secret
//! store, plaintext erased, key artifact published.

use crate::prelude::*;
use logsweep_core::patterns::REDACTED_TEXT;
use logsweep_core::{SecretFields, CREDENTIAL_FIELD, KEY_OBJECT_NAME};

fn seed_first_boot(world: &World) {
    // The bot restarted once after provisioning; the older stream holds the
    // one-time credential and the key block.
    world.stream("bot/2026-08-01", &[(86_400_000, "bot restarted"), (86_400_100, "healthy")]);
    world.stream(
        "bot/2026-07-31",
        &[
            (1000, "provisioning bot"),
            (1001, "**** GENERATED PASSWORD"),
            (1002, CREDENTIAL),
            (1003, "**** GENERATED PASSWORD END"),
            (1004, "ab12 cd34 ef56 9900 aabb"),
            (1005, "ccdd ee00 1122 3344 5566"),
            (1006, "bot ready"),
        ],
    );
}

#[tokio::test]
async fn first_run_moves_credential_and_publishes_key() {
    let world = World::new();
    world.clock.set_epoch_ms(1_754_006_400_000);
    seed_first_boot(&world);
    world.secrets.seed(SECRET, r#"{"username":"retention-bot","network":"prod"}"#);

    let result = world.pipeline().run().await;

    assert!(result.is_success());
    assert!(result.credential_found);
    assert!(result.key_found);
    assert_eq!(result.identifier, "post-deploy-1754006400");

    // credential merged without disturbing what other processes stored
    let fields = SecretFields::parse(&world.secrets.document(SECRET).unwrap()).unwrap();
    assert_eq!(fields.get("username"), Some(&serde_json::json!("retention-bot")));
    assert_eq!(fields.get("network"), Some(&serde_json::json!("prod")));
    assert_eq!(fields.get(CREDENTIAL_FIELD), Some(&serde_json::json!(CREDENTIAL)));

    // plaintext gone, all other lines intact and in order
    let messages: Vec<String> = world
        .logs
        .events(GROUP, "bot/2026-07-31")
        .unwrap()
        .into_iter()
        .map(|e| e.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "provisioning bot",
            "**** GENERATED PASSWORD",
            REDACTED_TEXT,
            "**** GENERATED PASSWORD END",
            "ab12 cd34 ef56 9900 aabb",
            "ccdd ee00 1122 3344 5566",
            "bot ready",
        ]
    );

    // newer stream untouched
    assert_eq!(world.logs.events(GROUP, "bot/2026-08-01").unwrap().len(), 2);

    // published artifact under the fixed key, encrypted with the configured key
    let stored = world.objects.object(BUCKET, KEY_OBJECT_NAME).unwrap();
    assert_eq!(stored.body, "ab12 cd34 ef56 9900 aabb\nccdd ee00 1122 3344 5566\n");
    assert_eq!(stored.kms_key_id, KMS_KEY);
}

#[tokio::test]
async fn result_record_serializes_for_the_trigger() {
    let world = World::new();
    world.clock.set_epoch_ms(1_754_006_400_000);
    seed_first_boot(&world);

    let result = world.pipeline().run().await;
    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&result).unwrap(),
    )
    .unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["identifier"], "post-deploy-1754006400");
    assert_eq!(json["credential_found"], true);
    assert_eq!(json["key_found"], true);
    assert_eq!(json.get("reason"), None);
}

#[tokio::test]
async fn second_run_is_a_no_op() {
    let world = World::new();
    seed_first_boot(&world);

    world.pipeline().run().await;
    let writes = world.logs.write_count();
    let puts = world.secrets.put_count();

    let result = world.pipeline().run().await;

    assert!(result.is_success());
    assert!(!result.credential_found);
    assert!(!result.key_found);
    assert_eq!(world.logs.write_count(), writes);
    assert_eq!(world.secrets.put_count(), puts);
}
