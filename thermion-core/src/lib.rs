//! Board-agnostic control core for the Thermion radiator valve thermostat
//!
//! This crate contains all control logic that does not depend on specific
//! hardware implementations:
//!
//! - Pending-work flag register (interrupt producers, dispatcher consumer)
//! - Sleep-depth policy and main dispatch loop
//! - Once-per-second control tick (valve control cadence, weekly
//!   recalibration, broadcast assembly)
//! - Radio link state machine (one byte per dispatch cycle)
//! - Hardware abstraction traits (radio transport, motor, controller, ...)
//! - Configuration types and the persisted settings codec

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod control;
pub mod radio;
pub mod scheduler;
pub mod traits;
