//! Pending-work flag register
//!
//! One bit per task kind. Interrupt handlers set bits; the dispatcher tests
//! and clears them. Each bit has exactly one setter (its interrupt source)
//! and one clearer (the dispatcher), so no locking beyond the atomic
//! register itself is needed.

use core::sync::atomic::{AtomicU8, Ordering};

/// Task kinds, one flag bit each
///
/// Declaration order is dispatch priority, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Task {
    /// LCD contents changed, redraw needed
    LcdRefresh = 1 << 0,
    /// ADC conversion completed
    AdcDone = 1 << 1,
    /// Serial command byte ready
    Comm = 1 << 2,
    /// Motor drive timer must stop
    MotorStop = 1 << 3,
    /// Position-sensor encoder pulse arrived
    MotorPulse = 1 << 4,
    /// Key line changed
    Keyboard = 1 << 5,
    /// Radio frame byte ready to shift out
    Radio = 1 << 6,
    /// One second elapsed
    ClockTick = 1 << 7,
}

impl Task {
    /// All task kinds in dispatch priority order
    pub const ALL: [Task; 8] = [
        Task::LcdRefresh,
        Task::AdcDone,
        Task::Comm,
        Task::MotorStop,
        Task::MotorPulse,
        Task::Keyboard,
        Task::Radio,
        Task::ClockTick,
    ];

    /// This task's bit in the register
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Process-wide pending-work register
///
/// Suitable for a `static`. [`set`](TaskFlags::set) is the only operation
/// intended for interrupt context; everything else belongs to the
/// dispatcher.
#[derive(Debug, Default)]
pub struct TaskFlags(AtomicU8);

impl TaskFlags {
    /// Empty register
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Mark a task pending. Idempotent; callable from interrupt context.
    pub fn set(&self, task: Task) {
        self.0.fetch_or(task.bit(), Ordering::SeqCst);
    }

    /// Atomically clear a flag and report whether it had been set.
    /// Dispatcher only.
    pub fn clear_and_test(&self, task: Task) -> bool {
        self.0.fetch_and(!task.bit(), Ordering::SeqCst) & task.bit() != 0
    }

    /// Clear a flag without testing it. Dispatcher only.
    pub fn clear(&self, task: Task) {
        self.0.fetch_and(!task.bit(), Ordering::SeqCst);
    }

    /// Test a flag without clearing it. Dispatcher only.
    pub fn is_set(&self, task: Task) -> bool {
        self.0.load(Ordering::SeqCst) & task.bit() != 0
    }

    /// True when no task is pending
    ///
    /// The window between this check and the sleep entry is closed by the
    /// [`SleepControl::enter_sleep`](crate::traits::SleepControl::enter_sleep)
    /// contract.
    pub fn is_empty(&self) -> bool {
        self.0.load(Ordering::SeqCst) == 0
    }

    /// Raw bitmask, for diagnostics and tests
    pub fn snapshot(&self) -> u8 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_register_is_empty() {
        let flags = TaskFlags::new();
        assert!(flags.is_empty());
        assert_eq!(flags.snapshot(), 0);
    }

    #[test]
    fn test_set_is_idempotent() {
        let flags = TaskFlags::new();
        flags.set(Task::Keyboard);
        flags.set(Task::Keyboard);
        assert_eq!(flags.snapshot(), Task::Keyboard.bit());
    }

    #[test]
    fn test_flags_are_independent() {
        let flags = TaskFlags::new();
        flags.set(Task::LcdRefresh);
        flags.set(Task::ClockTick);

        assert!(flags.is_set(Task::LcdRefresh));
        assert!(flags.is_set(Task::ClockTick));
        assert!(!flags.is_set(Task::Radio));

        flags.clear(Task::LcdRefresh);
        assert!(!flags.is_set(Task::LcdRefresh));
        assert!(flags.is_set(Task::ClockTick));
    }

    #[test]
    fn test_clear_and_test_reports_previous_state() {
        let flags = TaskFlags::new();
        flags.set(Task::MotorPulse);

        assert!(flags.clear_and_test(Task::MotorPulse));
        assert!(!flags.clear_and_test(Task::MotorPulse));
        assert!(flags.is_empty());
    }

    #[test]
    fn test_clear_and_test_leaves_other_flags() {
        let flags = TaskFlags::new();
        for task in Task::ALL {
            flags.set(task);
        }

        assert!(flags.clear_and_test(Task::Comm));
        assert_eq!(flags.snapshot(), 0xFF & !Task::Comm.bit());
    }

    #[test]
    fn test_priority_order_matches_bit_order() {
        let mut previous = 0u8;
        for task in Task::ALL {
            assert!(task.bit() > previous);
            previous = task.bit();
        }
    }
}
