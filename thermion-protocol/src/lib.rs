//! Radio status-broadcast protocol for the Thermion valve thermostat
//!
//! Each device periodically broadcasts one fixed-layout 14-byte frame and
//! then turns its transmitter off. There is no acknowledgment, retry, or
//! session layer; receivers resynchronize on every frame.
//!
//! # Frame layout
//!
//! ```text
//! ┌──────────┬──────┬────────┬───────┬──────┬───────────┬────────┬───────┬────────┬─────┬───────────┐
//! │ PREAMBLE │ SYNC │ LENGTH │ FLAGS │ ADDR │ TEMP (BE) │ WANTED │ VALVE │ STATUS │ CRC │ POSTAMBLE │
//! │ 2B       │ 2B   │ 1B     │ 1B    │ 1B   │ 2B        │ 1B     │ 1B    │ 1B     │ 1B  │ 1B        │
//! └──────────┴──────┴────────┴───────┴──────┴───────────┴────────┴───────┴────────┴─────┴───────────┘
//! ```
//!
//! LENGTH counts the bytes from the length field through the checksum
//! (always 9 for this layout). The checksum is a Dallas/iButton CRC-8 over
//! the same span minus the checksum itself, computed once at assembly time.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod crc;
pub mod frame;
pub mod status;

pub use crc::{crc8, crc8_update};
pub use frame::{
    BroadcastFrame, DEVICE_TYPE_MASK, DEVICE_TYPE_VALVE, FRAME_LEN, LENGTH_FIELD,
    PACKET_TYPE_BROADCAST, PACKET_TYPE_COMMAND, PACKET_TYPE_MASK, PACKET_TYPE_REPLY, POSTAMBLE,
    PREAMBLE, SYNC_WORD,
};
pub use status::StatusBits;
