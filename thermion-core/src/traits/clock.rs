//! Real-time clock seam
//!
//! The clock owns its own timekeeping algorithm (calendar arithmetic,
//! oscillator correction); the core only owns the cadence at which it is
//! advanced.

use serde::{Deserialize, Serialize};

/// Day of week as the clock reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Wall-clock timekeeping
pub trait Rtc {
    /// Advance the wall clock by one second
    ///
    /// Returns true when a minute boundary was crossed.
    fn advance_second(&mut self) -> bool;

    /// Current day of week
    fn weekday(&self) -> Weekday;

    /// Current hour (0-23)
    fn hour(&self) -> u8;

    /// Current minute (0-59)
    fn minute(&self) -> u8;

    /// Current second (0-59), the broadcast cadence input
    fn second(&self) -> u8;
}
