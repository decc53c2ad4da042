//! Broadcast frame assembly
//!
//! Offsets 0-3 are fixed radio framing (preamble and receiver sync word),
//! offsets 4-12 are the checked span (length field through checksum), and
//! offset 13 is the postamble. The frame is assembled in one shot and is
//! immutable from then on; transmission shifts it out byte by byte.

use crate::crc::crc8;
use crate::status::StatusBits;

/// Total frame size, preamble through postamble
pub const FRAME_LEN: usize = 14;

/// Preamble marker byte (sent twice)
pub const PREAMBLE: u8 = 0xAA;

/// Receiver synchronization pattern
pub const SYNC_WORD: [u8; 2] = [0x2D, 0xD4];

/// Postamble marker byte
pub const POSTAMBLE: u8 = 0xAA;

/// Value of the length field: byte count from the length field through the
/// checksum, constant for this fixed layout
pub const LENGTH_FIELD: u8 = 9;

/// Packet-type tag occupies the upper two bits of the flags field
pub const PACKET_TYPE_MASK: u8 = 0b1100_0000;
/// Unsolicited status broadcast
pub const PACKET_TYPE_BROADCAST: u8 = 0b0000_0000;
/// Command addressed to a device
pub const PACKET_TYPE_COMMAND: u8 = 0b0100_0000;
/// Reply to a command
pub const PACKET_TYPE_REPLY: u8 = 0b1000_0000;

/// Device-type tag occupies the lower five bits of the flags field
pub const DEVICE_TYPE_MASK: u8 = 0b0001_1111;
/// Device-type tag for this radiator valve thermostat
pub const DEVICE_TYPE_VALVE: u8 = 0b0001_0100;

/// One periodic status broadcast, ready to encode
///
/// Produced once per broadcast cycle from live controller and motor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BroadcastFrame {
    /// Configured radio address of the sender
    pub sender: u8,
    /// Measured temperature in centi-degrees, high byte first on the wire
    pub current_temp: u16,
    /// Set-point temperature
    pub wanted_temp: u8,
    /// Valve opening percentage
    pub valve_percent: u8,
    /// Mode and fault summary
    pub status: StatusBits,
}

impl BroadcastFrame {
    /// Encode into the fixed 14-byte wire layout
    ///
    /// The checksum covers offsets 4-11 and is computed here, not during
    /// transmission.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        let mut buf = [0u8; FRAME_LEN];
        buf[0] = PREAMBLE;
        buf[1] = PREAMBLE;
        buf[2] = SYNC_WORD[0];
        buf[3] = SYNC_WORD[1];
        buf[4] = LENGTH_FIELD;
        buf[5] = PACKET_TYPE_BROADCAST | DEVICE_TYPE_VALVE;
        buf[6] = self.sender;
        buf[7] = (self.current_temp >> 8) as u8;
        buf[8] = self.current_temp as u8;
        buf[9] = self.wanted_temp;
        buf[10] = self.valve_percent;
        buf[11] = self.status.bits();
        buf[12] = crc8(&buf[4..12]);
        buf[13] = POSTAMBLE;
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout_markers() {
        let frame = BroadcastFrame {
            sender: 0x17,
            current_temp: 0x00FA,
            wanted_temp: 22,
            valve_percent: 100,
            status: StatusBits::empty(),
        };
        let bytes = frame.encode();

        assert_eq!(bytes[0], PREAMBLE);
        assert_eq!(bytes[1], PREAMBLE);
        assert_eq!(&bytes[2..4], &SYNC_WORD);
        assert_eq!(bytes[4], LENGTH_FIELD);
        assert_eq!(bytes[5] & PACKET_TYPE_MASK, PACKET_TYPE_BROADCAST);
        assert_eq!(bytes[5] & DEVICE_TYPE_MASK, DEVICE_TYPE_VALVE);
        assert_eq!(bytes[6], 0x17);
        assert_eq!(bytes[13], POSTAMBLE);
    }

    #[test]
    fn test_known_broadcast_vector() {
        // Temperature 21.5°C, set-point 21, valve 42%, auto mode, no faults.
        let frame = BroadcastFrame {
            sender: 0x04,
            current_temp: 215,
            wanted_temp: 21,
            valve_percent: 42,
            status: StatusBits::empty(),
        };
        let bytes = frame.encode();

        assert_eq!(&bytes[7..12], &[0x00, 0xD7, 0x15, 0x2A, 0x00]);
        assert_eq!(bytes[12], 0x64);
    }

    #[test]
    fn test_checksum_verifies_independently() {
        let mut status = StatusBits::from_faults(0x80);
        status.insert(StatusBits::MANUAL_MODE);
        status.insert(StatusBits::WINDOW_OPEN);
        let frame = BroadcastFrame {
            sender: 0x1D,
            current_temp: 1999,
            wanted_temp: 30,
            valve_percent: 0,
            status,
        };
        let bytes = frame.encode();

        assert_eq!(crc8(&bytes[4..12]), bytes[12]);
        // Folding the checksum itself into the span yields zero.
        assert_eq!(crc8(&bytes[4..13]), 0);
    }

    #[test]
    fn test_temperature_high_byte_first() {
        let frame = BroadcastFrame {
            sender: 0,
            current_temp: 0x1234,
            wanted_temp: 0,
            valve_percent: 0,
            status: StatusBits::empty(),
        };
        let bytes = frame.encode();
        assert_eq!(bytes[7], 0x12);
        assert_eq!(bytes[8], 0x34);
    }

    #[test]
    fn test_status_byte_reflects_mode_and_faults() {
        let mut status = StatusBits::from_faults(0x40);
        status.insert(StatusBits::WINDOW_OPEN);
        let frame = BroadcastFrame {
            sender: 1,
            current_temp: 0,
            wanted_temp: 0,
            valve_percent: 0,
            status,
        };
        assert_eq!(frame.encode()[11], 0x42);
    }
}
