// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use crate::models::{Device, DeviceProperties};
use crate::store::{DeviceAction, DeviceStore};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Utc;

pub fn handle(store: &mut DeviceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("toggle", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.dispatch(DeviceAction::TogglePower { device_id: id });
            report_device(store, id);
        }
        Some(("brightness", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let value = *sub.get_one::<u8>("value").unwrap();
            store.dispatch(DeviceAction::SetBrightness {
                device_id: id,
                brightness: value,
            });
            report_device(store, id);
        }
        Some(("temperature", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let value = *sub.get_one::<f64>("value").unwrap();
            store.dispatch(DeviceAction::SetTemperature {
                device_id: id,
                temperature: value,
            });
            report_device(store, id);
        }
        Some(("lock", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.dispatch(DeviceAction::ToggleLock { device_id: id });
            report_device(store, id);
        }
        Some(("record", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.dispatch(DeviceAction::ToggleRecording { device_id: id });
            report_device(store, id);
        }
        Some(("rooms", sub)) => rooms(store, sub)?,
        Some(("watch", sub)) => watch(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &mut DeviceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if let Some(room) = sub.get_one::<String>("room") {
        store.select_room(room);
    }
    let devices = store.filtered_devices();
    if !maybe_print_json(json_flag, jsonl_flag, &devices)? {
        print_devices(&devices);
    }
    Ok(())
}

fn rooms(store: &DeviceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rooms = store.rooms();
    if !maybe_print_json(json_flag, jsonl_flag, &rooms)? {
        let rows: Vec<Vec<String>> = rooms
            .iter()
            .map(|r| {
                vec![
                    r.icon.clone(),
                    r.name.clone(),
                    r.device_count.to_string(),
                    r.active_devices.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["", "Room", "Devices", "Active"], rows));
    }
    Ok(())
}

/// Run the drift task on a local runtime for a fixed number of ticks,
/// re-rendering the panel after each one, then tear the task down.
fn watch(store: &mut DeviceStore, sub: &clap::ArgMatches) -> Result<()> {
    let ticks = *sub.get_one::<u32>("ticks").unwrap();
    let period = Duration::from_secs(*sub.get_one::<u64>("interval").unwrap());
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        store.start_drift(period, Utc::now().timestamp_millis() as u64);
        for tick in 1..=ticks {
            tokio::time::sleep(period).await;
            println!("tick {}/{}", tick, ticks);
            print_devices(&store.filtered_devices());
        }
    });
    store.shutdown();
    Ok(())
}

fn report_device(store: &DeviceStore, id: i64) {
    match store.devices().into_iter().find(|d| d.id == id) {
        Some(d) => println!(
            "{} ({}) -> {}, {}",
            d.name,
            d.kind(),
            if d.is_active { "on" } else { "off" },
            fmt_props(&d.properties)
        ),
        None => println!("No device with id {}", id),
    }
}

fn print_devices(devices: &[Device]) {
    let rows: Vec<Vec<String>> = devices
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.clone(),
                d.kind().to_string(),
                d.room.clone(),
                if d.is_online { "yes" } else { "no" }.to_string(),
                if d.is_active { "yes" } else { "no" }.to_string(),
                fmt_props(&d.properties),
                d.last_updated.format("%H:%M:%S").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Name", "Kind", "Room", "Online", "Active", "Properties", "Updated"],
            rows,
        )
    );
}

fn fmt_props(props: &DeviceProperties) -> String {
    match props {
        DeviceProperties::Light { brightness, color } => {
            format!("brightness {}%, {}", brightness, color)
        }
        DeviceProperties::Thermostat {
            temperature,
            target_temperature,
            mode,
        } => format!("{}° -> {}°, {}", temperature, target_temperature, mode),
        DeviceProperties::Security {
            is_recording,
            motion_detected,
        } => format!(
            "recording {}, motion {}",
            if *is_recording { "on" } else { "off" },
            if *motion_detected { "detected" } else { "clear" }
        ),
        DeviceProperties::Lock { is_locked } => {
            if *is_locked { "locked" } else { "unlocked" }.to_string()
        }
        DeviceProperties::Sensor {
            value,
            unit,
            threshold,
        } => format!("{}{} (threshold {})", value, unit, threshold),
    }
}
