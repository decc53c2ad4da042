//! Main dispatch loop
//!
//! Single thread of execution; interrupt handlers only set flags. Each
//! cycle either sleeps (register empty) or handles pending flags in fixed
//! priority order. The five highest-priority tasks return to the top of the
//! loop straight after handling, so the common single-pending-task case
//! gets back to sleep fastest. Keyboard, radio and clock-tick work fall
//! through within the same cycle because each may produce or depend on the
//! others inside one tick.

use crate::config::{store, DeviceConfig};
use crate::control::ControlTick;
use crate::radio::{RadioLink, RadioMode};
use crate::scheduler::sleep::{select_depth, SleepGate};
use crate::scheduler::{SleepDepth, Task, TaskFlags};
use crate::traits::{Board, Diagnostic};

/// What one pass of the main loop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// Startup fault latched; no task will ever be handled
    Halted,
    /// Register was empty, slept at the given depth
    Slept(SleepDepth),
    /// At least one task was handled
    Dispatched,
    /// Nothing matched by the time the flags were tested
    Idle,
}

/// Cooperative dispatcher, the sole consumer of the pending-work register
#[derive(Debug)]
pub struct Dispatcher<'a> {
    flags: &'a TaskFlags,
    config: DeviceConfig,
    tick: ControlTick,
    radio: RadioLink,
    gate: SleepGate,
    halted: bool,
}

impl<'a> Dispatcher<'a> {
    /// Decode the persisted settings image and build the dispatcher
    ///
    /// An unreadable image (layout tag mismatch, corrupt body) is the one
    /// fatal error in the core: the fixed diagnostic goes on the display
    /// and the dispatcher latches a permanent halt, leaving every queued
    /// flag untouched forever.
    pub fn boot<B: Board>(flags: &'a TaskFlags, settings_image: &[u8], board: &mut B) -> Self {
        match store::decode_settings(settings_image) {
            Ok(config) => Self::with_config(flags, config),
            Err(_) => {
                board.show_diagnostic(Diagnostic::SettingsLayout);
                board.refresh();
                let mut dispatcher = Self::with_config(flags, DeviceConfig::default());
                dispatcher.halted = true;
                dispatcher
            }
        }
    }

    /// Build a dispatcher from an already-validated configuration
    pub fn with_config(flags: &'a TaskFlags, config: DeviceConfig) -> Self {
        Self {
            flags,
            config,
            tick: ControlTick::new(),
            radio: RadioLink::new(),
            gate: SleepGate::new(),
            halted: false,
        }
    }

    /// True once the fatal startup path has latched
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Active configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Current radio link state
    pub fn radio_mode(&self) -> RadioMode {
        self.radio.mode()
    }

    /// Most recently computed valve command
    pub fn valve_wanted(&self) -> u8 {
        self.tick.valve_wanted()
    }

    /// One pass of the main loop
    pub fn run_cycle<B: Board>(&mut self, board: &mut B) -> CycleOutcome {
        if self.halted {
            return CycleOutcome::Halted;
        }

        if self.flags.is_empty() {
            let clock_needed = board.needs_clock() || board.timer_needs_clock();
            let depth = select_depth(clock_needed, self.gate.is_armed());
            if self.gate.disarm() {
                board.start_conversion();
            }
            board.enter_sleep(depth);
            return CycleOutcome::Slept(depth);
        }

        // Highest-priority group: handle one task, then return to the top.
        if self.flags.clear_and_test(Task::LcdRefresh) {
            board.refresh();
            return CycleOutcome::Dispatched;
        }
        if self.flags.clear_and_test(Task::AdcDone) {
            let _ = board.service_conversion();
            return CycleOutcome::Dispatched;
        }
        if self.flags.clear_and_test(Task::Comm) {
            board.process();
            return CycleOutcome::Dispatched;
        }
        if self.flags.clear_and_test(Task::MotorStop) {
            board.stop_pulse_timer();
            return CycleOutcome::Dispatched;
        }
        if self.flags.clear_and_test(Task::MotorPulse) {
            let pulses = board.encoder_pulses();
            board.update_calibration(pulses);
            board.service_pulse();
            return CycleOutcome::Dispatched;
        }

        // Fall-through group.
        let mut handled = false;
        if self.flags.clear_and_test(Task::Keyboard) {
            board.scan();
            handled = true;
        }
        // The radio task keeps its flag while bytes remain; the link clears
        // it on completion.
        if self.flags.is_set(Task::Radio) {
            self.radio.service(board, self.flags);
            handled = true;
        }
        if self.flags.clear_and_test(Task::ClockTick) {
            self.tick
                .on_second(board, &mut self.radio, &mut self.gate, self.flags, &self.config);
            handled = true;
        }

        // Menu glue: run the menu on key events or when the unattended
        // refresh countdown has expired.
        if board.has_events() || self.tick.ui_refresh_due() {
            let changed = board.service_menu(false);
            if changed {
                board.service_menu(true);
            }
            board.refresh();
            self.tick.reload_ui_countdown(&self.config);
            handled = true;
        }

        if handled {
            CycleOutcome::Dispatched
        } else {
            CycleOutcome::Idle
        }
    }
}
