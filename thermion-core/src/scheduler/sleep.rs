//! Sleep-depth selection
//!
//! Consulted only when the pending-work register is empty. Deeper modes
//! stop more clocks, so any peripheral still waiting on a live clock caps
//! the depth.

/// CPU low-power modes, shallowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepDepth {
    /// Clock subsystem keeps running; the serial link and free-running
    /// timers survive
    Idle,
    /// Digital noise sources quieted while a conversion completes
    AdcNoiseReduction,
    /// Deepest mode, everything but the wake sources stopped
    PowerSave,
}

/// Pick the deepest depth that still satisfies pending hardware needs
///
/// Evaluated in order: a peripheral needing a live clock wins, then an
/// armed conversion, then full power-save.
pub fn select_depth(clock_needed: bool, adc_armed: bool) -> SleepDepth {
    if clock_needed {
        SleepDepth::Idle
    } else if adc_armed {
        SleepDepth::AdcNoiseReduction
    } else {
        SleepDepth::PowerSave
    }
}

/// One-shot arm for the conversion started on sleep entry
///
/// The control tick arms it once per second; entering sleep consumes it
/// exactly once, whatever depth was chosen.
#[derive(Debug, Default)]
pub struct SleepGate {
    adc_armed: bool,
}

impl SleepGate {
    /// Gate with nothing armed
    pub const fn new() -> Self {
        Self { adc_armed: false }
    }

    /// Arm a conversion for the next sleep entry
    pub fn arm_adc(&mut self) {
        self.adc_armed = true;
    }

    /// True while a conversion is armed
    pub fn is_armed(&self) -> bool {
        self.adc_armed
    }

    /// Consume the arm. Returns true when a conversion must start now.
    pub fn disarm(&mut self) -> bool {
        core::mem::replace(&mut self.adc_armed, false)
    }
}
