//! Once-per-second control tick
//!
//! All per-second side effects are batched here so every consumer of "one
//! second has elapsed" observes them in a fixed order: clock advance,
//! control update, weekly recalibration check, broadcast assembly, motor
//! cadence, keyboard long-press detection, ADC arm, UI refresh countdown.
//! Nothing in the core re-enters this path within one tick.

use thermion_protocol::{BroadcastFrame, StatusBits};

use crate::config::DeviceConfig;
use crate::radio::RadioLink;
use crate::scheduler::{SleepGate, TaskFlags};
use crate::traits::Board;

/// Per-second housekeeping state
#[derive(Debug, Default)]
pub struct ControlTick {
    valve_wanted: u8,
    ui_countdown: u8,
}

impl ControlTick {
    /// Fresh tick state; the first unattended UI refresh is due immediately
    pub const fn new() -> Self {
        Self {
            valve_wanted: 0,
            ui_countdown: 0,
        }
    }

    /// Most recently computed valve command
    pub fn valve_wanted(&self) -> u8 {
        self.valve_wanted
    }

    /// True once the unattended UI refresh countdown has run out
    pub fn ui_refresh_due(&self) -> bool {
        self.ui_countdown == 0
    }

    /// Reload the countdown after the menu has been serviced
    pub fn reload_ui_countdown(&mut self, config: &DeviceConfig) {
        self.ui_countdown = config.ui_refresh_s;
    }

    /// Handle one elapsed second
    pub fn on_second<B: Board>(
        &mut self,
        board: &mut B,
        radio: &mut RadioLink,
        gate: &mut SleepGate,
        flags: &TaskFlags,
        config: &DeviceConfig,
    ) {
        let minute_boundary = board.advance_second();
        self.valve_wanted = board.control_update(minute_boundary, self.valve_wanted);

        // Valve-seize protection: force a re-homing run once a week,
        // independent of the controller's own output.
        if minute_boundary
            && config
                .maintenance
                .matches(board.weekday(), board.hour(), board.minute())
        {
            board.invalidate_calibration();
        }

        if config.radio.enabled
            && config.radio.cadence_s > 0
            && board.second() % config.radio.cadence_s == 0
        {
            let frame = self.assemble_broadcast(board, config).encode();
            radio.begin_broadcast(&frame, board, flags);
        }

        // One more encoder sample so the calibration state cannot go stale
        // between ticks.
        let pulses = board.encoder_pulses();
        board.update_calibration(pulses);
        board.goto_percent(self.valve_wanted);

        board.service_long_press();
        gate.arm_adc();
        self.ui_countdown = self.ui_countdown.saturating_sub(1);
        board.refresh();
    }

    fn assemble_broadcast<B: Board>(&self, board: &B, config: &DeviceConfig) -> BroadcastFrame {
        let mut status = StatusBits::from_faults(board.fault_bits());
        if !board.auto_mode() {
            status.insert(StatusBits::MANUAL_MODE);
        }
        if board.window_open() {
            status.insert(StatusBits::WINDOW_OPEN);
        }

        BroadcastFrame {
            sender: config.radio.address,
            current_temp: board.average_temp(),
            wanted_temp: board.wanted_temp(),
            valve_percent: board.position_percent(),
            status,
        }
    }
}
