//! Radio frame transmission
//!
//! Frame assembly lives in `thermion-protocol`; this module owns the
//! transmit state machine the dispatcher drives one byte per cycle.

pub mod link;

pub use link::{RadioLink, RadioMode};
