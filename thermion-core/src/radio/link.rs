//! Radio link state machine
//!
//! One previously assembled frame is shifted out one byte per dispatch
//! cycle; when the cursor reaches the end the transmitter is powered down
//! and the link returns to idle. Broadcast-and-forget: no retry, no
//! acknowledgment, no way to abort a transmission once started.

use heapless::Vec;
use thermion_protocol::FRAME_LEN;

use crate::scheduler::{Task, TaskFlags};
use crate::traits::RadioTransport;

/// Link states
///
/// Idle is both the initial and the terminal state between broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioMode {
    /// Transceiver powered down
    #[default]
    Idle,
    /// Shifting a queued frame out
    Transmitting,
    /// Listening; the receive path is reserved and not handled yet
    Receiving,
}

/// Fixed-capacity frame buffer plus transmit cursor
///
/// The buffer is loaded once per broadcast and immutable until exhausted;
/// length and cursor reset to zero on completion.
#[derive(Debug, Default)]
pub struct RadioLink {
    buf: Vec<u8, FRAME_LEN>,
    cursor: usize,
    mode: RadioMode,
}

impl RadioLink {
    /// Idle link with an empty buffer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cursor: 0,
            mode: RadioMode::Idle,
        }
    }

    /// Current link state
    pub fn mode(&self) -> RadioMode {
        self.mode
    }

    /// Bytes still waiting to be shifted out
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    /// Queue an assembled frame, power the transmitter up and mark radio
    /// work pending
    pub fn begin_broadcast<R: RadioTransport>(
        &mut self,
        frame: &[u8; FRAME_LEN],
        transport: &mut R,
        flags: &TaskFlags,
    ) {
        self.buf.clear();
        // Capacity equals FRAME_LEN, the copy cannot fail.
        let _ = self.buf.extend_from_slice(frame);
        self.cursor = 0;
        self.mode = RadioMode::Transmitting;
        transport.enable_transmitter();
        flags.set(Task::Radio);
    }

    /// One dispatch cycle worth of radio work
    ///
    /// While transmitting, shifts out exactly one byte. On exhaustion the
    /// radio flag is cleared, buffer and cursor reset, the link returns to
    /// idle and the transmitter is powered down.
    pub fn service<R: RadioTransport>(&mut self, transport: &mut R, flags: &TaskFlags) {
        match self.mode {
            RadioMode::Transmitting => {
                if self.cursor < self.buf.len() {
                    transport.write_byte(self.buf[self.cursor]);
                    self.cursor += 1;
                }
                if self.cursor == self.buf.len() {
                    flags.clear(Task::Radio);
                    self.buf.clear();
                    self.cursor = 0;
                    self.mode = RadioMode::Idle;
                    transport.power_down();
                }
            }
            RadioMode::Receiving => {
                // Reserved; nothing consumes received bytes yet.
            }
            RadioMode::Idle => {
                // Spurious wakeup with nothing queued.
                flags.clear(Task::Radio);
            }
        }
    }
}
