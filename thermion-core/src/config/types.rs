//! Configuration type definitions
//!
//! These types make up the persisted settings image; see [`store`] for the
//! on-flash encoding.
//!
//! [`store`]: super::store

use serde::{Deserialize, Serialize};

use crate::traits::Weekday;

/// Radio broadcast settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioConfig {
    /// Master enable for the periodic status broadcast
    pub enabled: bool,
    /// Configured radio address, sent in every frame
    pub address: u8,
    /// Broadcast cadence: a frame is queued when the clock's second counter
    /// is divisible by this. Gating by device address modulo is a candidate
    /// replacement for multi-device collision avoidance.
    pub cadence_s: u8,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            address: 0,
            cadence_s: 4,
        }
    }
}

/// Weekly instant at which motor calibration is forcibly invalidated
///
/// Scheduled valve-seize protection, independent of the controller output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MaintenanceInstant {
    /// Day of week
    pub weekday: Weekday,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl MaintenanceInstant {
    /// True when the given wall-clock position is exactly this instant
    pub fn matches(&self, weekday: Weekday, hour: u8, minute: u8) -> bool {
        self.weekday == weekday && self.hour == hour && self.minute == minute
    }
}

impl Default for MaintenanceInstant {
    fn default() -> Self {
        Self {
            weekday: Weekday::Sunday,
            hour: 10,
            minute: 0,
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Radio broadcast settings
    pub radio: RadioConfig,
    /// Weekly forced-recalibration instant
    pub maintenance: MaintenanceInstant,
    /// Seconds between unattended UI refreshes
    pub ui_refresh_s: u8,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            radio: RadioConfig::default(),
            maintenance: MaintenanceInstant::default(),
            ui_refresh_s: 10,
        }
    }
}
