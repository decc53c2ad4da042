//! Valve motor seam
//!
//! Calibration (end-stop discovery via encoder pulse counting) lives inside
//! the motor subsystem; the core does not interpret pulse counts. What the
//! core owns is the cadence: raw counts are fed in on every encoder-pulse
//! task and once more at the end of every control tick, so the calibration
//! state never goes stale between ticks.

pub trait ValveMotor {
    /// Latest raw position-sensor pulse count from the encoder input
    fn encoder_pulses(&mut self) -> u16;

    /// Feed a raw pulse count into the calibration state
    fn update_calibration(&mut self, pulses: u16);

    /// Drop the calibration state to uncalibrated, forcing a re-homing run
    fn invalidate_calibration(&mut self);

    /// Command a target opening percentage
    fn goto_percent(&mut self, percent: u8);

    /// Current opening percentage as the calibration state reports it
    fn position_percent(&self) -> u8;

    /// Stop the drive timer after a motor-stop event
    fn stop_pulse_timer(&mut self);

    /// Service the drive timer after an encoder pulse event
    fn service_pulse(&mut self);
}
