//! Sleep and ADC seams

use crate::scheduler::SleepDepth;

/// CPU sleep-depth control
///
/// # Contract
///
/// [`enter_sleep`](SleepControl::enter_sleep) is the only suspension point
/// in the core. The dispatcher evaluates the pending-work register
/// immediately before calling it, so the implementation must be race-free
/// against producers: a task flag set after that check but before (or
/// during) suspension must still wake the CPU. On hardware this is the
/// interrupts-masked check-then-sleep sequence; a host implementation needs
/// an equivalent wait/notify primitive (a parker token, a condvar with
/// re-checked predicate) that cannot miss a wakeup signaled just before
/// blocking. A naive check-then-block misses wakeups indefinitely.
pub trait SleepControl {
    /// Suspend at the given depth until any wake event fires
    fn enter_sleep(&mut self, depth: SleepDepth);

    /// True while a free-running timer still needs its clock source, which
    /// caps sleep at [`SleepDepth::Idle`]
    fn timer_needs_clock(&self) -> bool;
}

/// Temperature-channel ADC
pub trait AdcSampler {
    /// Start the conversion armed for this sleep cycle
    fn start_conversion(&mut self);

    /// Handle a conversion-complete event
    ///
    /// Returns true when the whole sample sequence has finished.
    fn service_conversion(&mut self) -> bool;
}
