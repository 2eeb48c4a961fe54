// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the synthetic room aggregate covering the whole collection.
pub const ALL_ROOMS: &str = "All Rooms";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Thermostat,
    Security,
    Lock,
    Sensor,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceKind::Light => write!(f, "light"),
            DeviceKind::Thermostat => write!(f, "thermostat"),
            DeviceKind::Security => write!(f, "security"),
            DeviceKind::Lock => write!(f, "lock"),
            DeviceKind::Sensor => write!(f, "sensor"),
        }
    }
}

/// Type-dependent property bag. Each kind carries exactly the properties
/// that apply to it; a brightness for a thermostat cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProperties {
    Light {
        brightness: u8,
        color: String,
    },
    Thermostat {
        temperature: f64,
        target_temperature: f64,
        mode: String,
    },
    Security {
        is_recording: bool,
        motion_detected: bool,
    },
    Lock {
        is_locked: bool,
    },
    Sensor {
        value: f64,
        unit: String,
        threshold: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub room: String,
    pub is_online: bool,
    pub is_active: bool,
    /// Refreshed on every mutation, user-driven or drift-driven.
    pub last_updated: DateTime<Utc>,
    pub properties: DeviceProperties,
}

impl Device {
    pub fn kind(&self) -> DeviceKind {
        match self.properties {
            DeviceProperties::Light { .. } => DeviceKind::Light,
            DeviceProperties::Thermostat { .. } => DeviceKind::Thermostat,
            DeviceProperties::Security { .. } => DeviceKind::Security,
            DeviceProperties::Lock { .. } => DeviceKind::Lock,
            DeviceProperties::Sensor { .. } => DeviceKind::Sensor,
        }
    }
}

/// Derived aggregate, recomputed from the device collection on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub device_count: usize,
    pub active_devices: usize,
    pub icon: String,
}
