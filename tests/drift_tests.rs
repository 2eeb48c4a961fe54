// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use hearth::models::DeviceProperties;
use hearth::seed;
use hearth::store::DeviceAction;

#[tokio::test]
async fn drift_refreshes_timestamps_and_stays_bounded() {
    let mut store = seed::device_store();
    let before = store.devices();

    store.start_drift(Duration::from_millis(20), 42);
    tokio::time::sleep(Duration::from_millis(150)).await;
    store.shutdown();

    let after = store.devices();
    assert_eq!(after.len(), before.len());
    // At least one tick has fired; timestamps only move forward.
    assert!(after[0].last_updated > before[0].last_updated);
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.id, a.id);
        assert!(a.last_updated >= b.last_updated);
    }

    // Thermostat moves less than one unit per tick; ~7 ticks max here.
    match after[2].properties {
        DeviceProperties::Thermostat { temperature, .. } => {
            assert!((temperature - 22.0).abs() <= 10.0);
        }
        ref other => panic!("unexpected properties {:?}", other),
    }
    // Drift never touches lock or light state.
    assert_eq!(before[4].properties, after[4].properties);
    match (&before[1].properties, &after[1].properties) {
        (
            DeviceProperties::Light { brightness: b, .. },
            DeviceProperties::Light { brightness: a, .. },
        ) => assert_eq!(b, a),
        other => panic!("unexpected properties {:?}", other),
    }
}

#[tokio::test]
async fn shutdown_cancels_the_drift_task() {
    let mut store = seed::device_store();
    assert!(!store.drift_running());

    store.start_drift(Duration::from_millis(20), 7);
    assert!(store.drift_running());
    // Starting again while running is a no-op.
    store.start_drift(Duration::from_millis(20), 7);

    tokio::time::sleep(Duration::from_millis(60)).await;
    store.shutdown();
    assert!(!store.drift_running());
    // Repeated shutdown is safe.
    store.shutdown();

    // Let any in-flight tick settle, then the state must hold still.
    tokio::time::sleep(Duration::from_millis(30)).await;
    let frozen = store.devices();
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(store.devices(), frozen);
}

#[tokio::test]
async fn dispatch_works_while_drift_runs() {
    let mut store = seed::device_store();
    store.start_drift(Duration::from_millis(10), 99);

    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let d = store
        .devices()
        .into_iter()
        .find(|d| d.id == 2)
        .expect("device 2");
    // Drift never flips power state or brightness on lights.
    assert!(d.is_active);
    match d.properties {
        DeviceProperties::Light { brightness, .. } => assert_eq!(brightness, 75),
        other => panic!("unexpected properties {:?}", other),
    }
    store.shutdown();
}
