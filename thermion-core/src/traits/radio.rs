//! Radio transceiver transport seam
//!
//! The core only shifts already-framed bytes through this interface; frame
//! assembly and the transmit state machine live in [`crate::radio`].

pub trait RadioTransport {
    /// Power the transmitter chain up and arm the byte-ready line
    fn enable_transmitter(&mut self);

    /// Shift one byte out, waiting only for the module-ready handshake
    fn write_byte(&mut self, byte: u8);

    /// Turn the transceiver off and clear any pending transmit interrupt
    fn power_down(&mut self);
}
