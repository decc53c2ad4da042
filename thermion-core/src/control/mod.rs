//! Once-per-second control path

pub mod tick;

pub use tick::ControlTick;
