//! Temperature controller seam
//!
//! The control algorithm itself (PID or otherwise) is independently
//! replaceable; the core feeds it the per-second cadence and reads back the
//! telemetry that goes into each status broadcast.

pub trait ValveController {
    /// Run one control update
    ///
    /// `minute_boundary` reports whether the last clock advance crossed a
    /// minute; `previous` is the last valve command. Returns the new desired
    /// opening percentage.
    fn control_update(&mut self, minute_boundary: bool, previous: u8) -> u8;

    /// Averaged measured temperature in centi-degrees
    fn average_temp(&self) -> u16;

    /// Current set-point temperature
    fn wanted_temp(&self) -> u8;

    /// True in automatic mode
    fn auto_mode(&self) -> bool;

    /// True while a window-open condition is detected
    fn window_open(&self) -> bool;

    /// Raw fault flags, mapped into the broadcast status byte
    fn fault_bits(&self) -> u8;
}
