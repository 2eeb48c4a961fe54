// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use log::{debug, info};
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::models::{ALL_ROOMS, Device, DeviceProperties, Room};
use crate::utils::{room_icon, room_slug};

/// Interval at which simulated telemetry drifts when nobody touches a device.
pub const DRIFT_PERIOD: Duration = Duration::from_secs(5);

/// Brightness a light comes back on with after TogglePower.
const POWER_ON_BRIGHTNESS: u8 = 75;

/// The closed set of mutations a consumer may request. Every variant targets
/// a single device; an unknown id makes the dispatch a silent no-op.
#[derive(Debug, Clone)]
pub enum DeviceAction {
    TogglePower { device_id: i64 },
    SetBrightness { device_id: i64, brightness: u8 },
    SetTemperature { device_id: i64, temperature: f64 },
    ToggleLock { device_id: i64 },
    ToggleRecording { device_id: i64 },
}

impl DeviceAction {
    pub fn device_id(&self) -> i64 {
        match *self {
            DeviceAction::TogglePower { device_id }
            | DeviceAction::SetBrightness { device_id, .. }
            | DeviceAction::SetTemperature { device_id, .. }
            | DeviceAction::ToggleLock { device_id }
            | DeviceAction::ToggleRecording { device_id } => device_id,
        }
    }
}

/// In-memory store for the device collection plus the room filter. The
/// collection sits behind a shared lock because the drift task mutates it
/// concurrently with dispatches; every mutation replaces the whole `Vec`
/// under the lock, so readers only ever observe complete snapshots.
///
/// The store does not check `is_online` before applying an action; disabling
/// controls for offline devices is the presentation layer's job.
pub struct DeviceStore {
    devices: Arc<Mutex<Vec<Device>>>,
    selected_room: String,
    drift: Option<JoinHandle<()>>,
}

impl DeviceStore {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(Mutex::new(devices)),
            selected_room: ALL_ROOMS.to_string(),
            drift: None,
        }
    }

    /// Snapshot of the full collection.
    pub fn devices(&self) -> Vec<Device> {
        lock(&self.devices).clone()
    }

    pub fn selected_room(&self) -> &str {
        &self.selected_room
    }

    pub fn select_room(&mut self, room: &str) {
        self.selected_room = room.to_string();
    }

    /// Snapshot restricted to the selected room; the full collection when
    /// "All Rooms" is selected.
    pub fn filtered_devices(&self) -> Vec<Device> {
        let guard = lock(&self.devices);
        if self.selected_room == ALL_ROOMS {
            guard.clone()
        } else {
            guard
                .iter()
                .filter(|d| d.room == self.selected_room)
                .cloned()
                .collect()
        }
    }

    /// Room aggregates: the synthetic "All Rooms" entry first, then one per
    /// distinct room in first-observed order.
    pub fn rooms(&self) -> Vec<Room> {
        let guard = lock(&self.devices);
        let mut rooms = vec![Room {
            id: "all".to_string(),
            name: ALL_ROOMS.to_string(),
            device_count: guard.len(),
            active_devices: guard.iter().filter(|d| d.is_active).count(),
            icon: "🏠".to_string(),
        }];
        let mut seen: Vec<&str> = Vec::new();
        for device in guard.iter() {
            if seen.contains(&device.room.as_str()) {
                continue;
            }
            seen.push(&device.room);
            rooms.push(Room {
                id: room_slug(&device.room),
                name: device.room.clone(),
                device_count: guard.iter().filter(|d| d.room == device.room).count(),
                active_devices: guard
                    .iter()
                    .filter(|d| d.room == device.room && d.is_active)
                    .count(),
                icon: room_icon(&device.room).to_string(),
            });
        }
        rooms
    }

    pub fn dispatch(&self, action: DeviceAction) {
        let device_id = action.device_id();
        let mut guard = lock(&self.devices);
        if !guard.iter().any(|d| d.id == device_id) {
            debug!("action for unknown device {}, ignoring", device_id);
            return;
        }
        // Whole-collection replacement; untouched devices are carried over
        // structurally unchanged.
        let next: Vec<Device> = guard
            .iter()
            .map(|d| {
                if d.id == device_id {
                    apply_action(d, &action)
                } else {
                    d.clone()
                }
            })
            .collect();
        *guard = next;
    }

    /// Spawn the recurring telemetry-drift task. Requires a tokio runtime.
    /// Idempotent while a task is already running.
    pub fn start_drift(&mut self, period: Duration, seed: u64) {
        if self.drift.is_some() {
            return;
        }
        info!("starting telemetry drift, period {:?}", period);
        let devices = Arc::clone(&self.devices);
        self.drift = Some(tokio::spawn(async move {
            let mut rng = DriftRng::new(seed);
            let mut ticker = interval(period);
            // The first tick of an interval completes immediately; consume
            // it so the first drift lands one full period after startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut guard = lock(&devices);
                let next: Vec<Device> = guard.iter().map(|d| drift_device(d, &mut rng)).collect();
                debug!("telemetry drift tick over {} devices", next.len());
                *guard = next;
            }
        }));
    }

    pub fn drift_running(&self) -> bool {
        self.drift.is_some()
    }

    /// Cancel the drift task. Safe to call repeatedly and without a runtime.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.drift.take() {
            handle.abort();
            info!("telemetry drift stopped");
        }
    }
}

impl Drop for DeviceStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn lock(devices: &Mutex<Vec<Device>>) -> MutexGuard<'_, Vec<Device>> {
    devices.lock().unwrap_or_else(|e| e.into_inner())
}

fn apply_action(device: &Device, action: &DeviceAction) -> Device {
    let mut next = device.clone();
    next.last_updated = Utc::now();
    match *action {
        DeviceAction::TogglePower { .. } => {
            let was_active = next.is_active;
            next.is_active = !was_active;
            if let DeviceProperties::Light { brightness, .. } = &mut next.properties {
                *brightness = if was_active { 0 } else { POWER_ON_BRIGHTNESS };
            }
        }
        DeviceAction::SetBrightness { brightness, .. } => {
            next.is_active = brightness > 0;
            if let DeviceProperties::Light { brightness: b, .. } = &mut next.properties {
                *b = brightness;
            }
        }
        DeviceAction::SetTemperature { temperature, .. } => {
            if let DeviceProperties::Thermostat {
                target_temperature, ..
            } = &mut next.properties
            {
                *target_temperature = temperature;
            }
        }
        DeviceAction::ToggleLock { .. } => {
            if let DeviceProperties::Lock { is_locked } = &mut next.properties {
                *is_locked = !*is_locked;
            }
        }
        DeviceAction::ToggleRecording { .. } => {
            if let DeviceProperties::Security { is_recording, .. } = &mut next.properties {
                *is_recording = !*is_recording;
            }
        }
    }
    next
}

/// One drift step for one device: refresh the timestamp and nudge whatever
/// passive telemetry the device kind carries. Thermostat temperatures move
/// by less than one unit per tick, sensor readings by less than 1.5, and
/// security devices flip motion detection on roughly one tick in ten.
fn drift_device(device: &Device, rng: &mut DriftRng) -> Device {
    let mut next = device.clone();
    next.last_updated = Utc::now();
    match &mut next.properties {
        DeviceProperties::Thermostat { temperature, .. } => {
            *temperature = (*temperature + (rng.next_f64() - 0.5) * 2.0).round();
        }
        DeviceProperties::Sensor { value, .. } => {
            *value = (*value + (rng.next_f64() - 0.5) * 3.0).round();
        }
        DeviceProperties::Security {
            motion_detected, ..
        } => {
            if rng.next_f64() > 0.9 {
                *motion_detected = !*motion_detected;
            }
        }
        _ => {}
    }
    next
}

/// Small deterministic LCG so drift is reproducible under test.
struct DriftRng {
    state: u64,
}

impl DriftRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}
