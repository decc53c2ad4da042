//! Display and keyboard seams

/// Fixed diagnostics the display can latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Persisted settings were written by an incompatible layout
    SettingsLayout,
}

/// LCD and menu front end
pub trait Display {
    /// Redraw the LCD from current UI state
    fn refresh(&mut self);

    /// Latch a fixed diagnostic message (the fatal startup path)
    fn show_diagnostic(&mut self, diagnostic: Diagnostic);

    /// Run the menu state machine
    ///
    /// `redraw` is true on the second pass after the menu reported a state
    /// change. Returns true when the menu state changed.
    fn service_menu(&mut self, redraw: bool) -> bool;
}

/// Key input front end
pub trait Keyboard {
    /// Debounce and translate raw key lines into events
    fn scan(&mut self);

    /// Long-press detection, run once per control tick
    fn service_long_press(&mut self);

    /// True while key events await the menu
    fn has_events(&self) -> bool;
}
