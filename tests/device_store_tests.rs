// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use hearth::models::{ALL_ROOMS, Device, DeviceProperties};
use hearth::seed;
use hearth::store::{DeviceAction, DeviceStore};

fn setup() -> DeviceStore {
    DeviceStore::new(seed::devices())
}

fn device(store: &DeviceStore, id: i64) -> Device {
    store
        .devices()
        .into_iter()
        .find(|d| d.id == id)
        .expect("device in seed")
}

#[test]
fn toggle_power_round_trips() {
    let store = setup();
    let before = device(&store, 1).is_active;
    store.dispatch(DeviceAction::TogglePower { device_id: 1 });
    assert_eq!(device(&store, 1).is_active, !before);
    store.dispatch(DeviceAction::TogglePower { device_id: 1 });
    assert_eq!(device(&store, 1).is_active, before);
}

#[test]
fn toggle_power_drives_light_brightness() {
    let store = setup();
    // Bedroom light starts off with brightness 0.
    assert!(!device(&store, 2).is_active);

    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    let on = device(&store, 2);
    assert!(on.is_active);
    assert_eq!(
        on.properties,
        DeviceProperties::Light {
            brightness: 75,
            color: "#ffffff".to_string()
        }
    );

    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    let off = device(&store, 2);
    assert!(!off.is_active);
    match off.properties {
        DeviceProperties::Light { brightness, .. } => assert_eq!(brightness, 0),
        other => panic!("unexpected properties {:?}", other),
    }
}

#[test]
fn brightness_implies_activity() {
    let store = setup();
    store.dispatch(DeviceAction::SetBrightness {
        device_id: 2,
        brightness: 50,
    });
    let d = device(&store, 2);
    assert!(d.is_active);
    match d.properties {
        DeviceProperties::Light { brightness, .. } => assert_eq!(brightness, 50),
        other => panic!("unexpected properties {:?}", other),
    }

    store.dispatch(DeviceAction::SetBrightness {
        device_id: 2,
        brightness: 0,
    });
    assert!(!device(&store, 2).is_active);
}

#[test]
fn set_temperature_targets_only_the_setpoint() {
    let store = setup();
    store.dispatch(DeviceAction::SetTemperature {
        device_id: 3,
        temperature: 26.5,
    });
    match device(&store, 3).properties {
        DeviceProperties::Thermostat {
            temperature,
            target_temperature,
            ..
        } => {
            assert_eq!(target_temperature, 26.5);
            assert_eq!(temperature, 22.0);
        }
        other => panic!("unexpected properties {:?}", other),
    }
}

#[test]
fn lock_and_recording_toggle() {
    let store = setup();
    store.dispatch(DeviceAction::ToggleLock { device_id: 5 });
    assert_eq!(
        device(&store, 5).properties,
        DeviceProperties::Lock { is_locked: false }
    );

    store.dispatch(DeviceAction::ToggleRecording { device_id: 4 });
    match device(&store, 4).properties {
        DeviceProperties::Security { is_recording, .. } => assert!(!is_recording),
        other => panic!("unexpected properties {:?}", other),
    }
}

#[test]
fn unknown_device_id_is_a_noop() {
    let store = setup();
    let before = store.devices();
    store.dispatch(DeviceAction::TogglePower { device_id: 999 });
    assert_eq!(store.devices(), before);
}

#[test]
fn dispatch_leaves_other_devices_untouched() {
    let store = setup();
    let before = store.devices();
    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    for (b, a) in before.iter().zip(store.devices().iter()) {
        if b.id != 2 {
            assert_eq!(b, a);
        }
    }
}

#[test]
fn brightness_on_non_light_only_touches_activity() {
    let store = setup();
    let before = device(&store, 3).properties.clone();
    store.dispatch(DeviceAction::SetBrightness {
        device_id: 3,
        brightness: 50,
    });
    let after = device(&store, 3);
    assert!(after.is_active);
    assert_eq!(after.properties, before);
}

#[test]
fn dispatch_refreshes_last_updated() {
    let store = setup();
    let before = device(&store, 2).last_updated;
    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    assert!(device(&store, 2).last_updated >= before);
    // Offline enforcement is not this layer's job; an offline device still
    // accepts the action.
    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
}

#[test]
fn room_aggregates_add_up() {
    let store = setup();
    let rooms = store.rooms();
    assert_eq!(rooms[0].name, ALL_ROOMS);
    assert_eq!(rooms[0].id, "all");
    assert_eq!(rooms[0].device_count, 7);

    let per_room_total: usize = rooms[1..].iter().map(|r| r.device_count).sum();
    assert_eq!(per_room_total, store.devices().len());

    let active = store.devices().iter().filter(|d| d.is_active).count();
    assert_eq!(rooms[0].active_devices, active);

    // Distinct rooms in first-observed order.
    let names: Vec<&str> = rooms[1..].iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Living Room", "Bedroom", "Entrance", "Kitchen"]);
    let living = &rooms[1];
    assert_eq!(living.id, "living-room");
    assert_eq!(living.device_count, 2);
}

#[test]
fn room_counts_follow_dispatches() {
    let store = setup();
    let active_before = store.rooms()[0].active_devices;
    store.dispatch(DeviceAction::TogglePower { device_id: 2 });
    assert_eq!(store.rooms()[0].active_devices, active_before + 1);
}

#[test]
fn room_filter_selects_subsets() {
    let mut store = setup();
    assert_eq!(store.selected_room(), ALL_ROOMS);
    assert_eq!(store.filtered_devices().len(), 7);

    store.select_room("Kitchen");
    let kitchen = store.filtered_devices();
    assert_eq!(kitchen.len(), 2);
    assert!(kitchen.iter().all(|d| d.room == "Kitchen"));

    store.select_room(ALL_ROOMS);
    assert_eq!(store.filtered_devices().len(), 7);
}
