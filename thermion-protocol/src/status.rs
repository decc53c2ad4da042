//! Operating-mode and fault summary carried in each broadcast
//!
//! The status byte is rebuilt from live controller state for every frame;
//! nothing in it is persisted between broadcasts.

/// Mode and fault flags at offset 11 of the broadcast frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusBits(u8);

impl StatusBits {
    /// Controller runs in manual mode. Auto is the common case, so the
    /// rarer one carries the flag.
    pub const MANUAL_MODE: Self = Self(0x01);
    /// Window-open condition detected by the controller
    pub const WINDOW_OPEN: Self = Self(0x02);
    /// Bits reserved for controller fault flags
    pub const FAULT_MASK: u8 = 0xFC;

    /// No flags set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap the controller's fault flags, masking out the mode bits
    pub const fn from_faults(bits: u8) -> Self {
        Self(bits & Self::FAULT_MASK)
    }

    /// Set all flags from `other`
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Check whether all flags in `other` are set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw wire value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no mode or fault flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}
