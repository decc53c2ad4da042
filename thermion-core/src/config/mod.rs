//! Configuration types and the persisted settings codec

pub mod store;
pub mod types;

pub use store::{decode_settings, encode_settings, SettingsError, SETTINGS_LAYOUT};
pub use types::{DeviceConfig, MaintenanceInstant, RadioConfig};
