//! Cooperative task dispatch
//!
//! The pending-work flag register, the sleep-depth policy and the main
//! dispatch loop. Interrupt handlers are the only producers; the dispatcher
//! is the single thread of execution and the sole consumer.

pub mod dispatcher;
pub mod flags;
pub mod sleep;

pub use dispatcher::{CycleOutcome, Dispatcher};
pub use flags::{Task, TaskFlags};
pub use sleep::{select_depth, SleepDepth, SleepGate};
