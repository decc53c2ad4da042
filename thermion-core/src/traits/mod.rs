//! Hardware abstraction traits
//!
//! These traits define the seams between the scheduling and protocol logic
//! and hardware-specific implementations, so the core stays testable
//! without real hardware.

pub mod clock;
pub mod comm;
pub mod controller;
pub mod motor;
pub mod power;
pub mod radio;
pub mod ui;

pub use clock::{Rtc, Weekday};
pub use comm::CommandLink;
pub use controller::ValveController;
pub use motor::ValveMotor;
pub use power::{AdcSampler, SleepControl};
pub use radio::RadioTransport;
pub use ui::{Diagnostic, Display, Keyboard};

/// Everything the dispatcher needs from a board, in one bound
pub trait Board:
    SleepControl
    + AdcSampler
    + RadioTransport
    + ValveMotor
    + ValveController
    + Display
    + Keyboard
    + CommandLink
    + Rtc
{
}

impl<T> Board for T where
    T: SleepControl
        + AdcSampler
        + RadioTransport
        + ValveMotor
        + ValveController
        + Display
        + Keyboard
        + CommandLink
        + Rtc
{
}
