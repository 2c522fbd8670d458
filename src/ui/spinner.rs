// src/ui/spinner.rs
// =============================================================================
// A terminal spinner that lives exactly as long as a value.
//
// `Spinner::start` begins repainting a status line on a background ticker.
// When the returned guard is dropped (normal return, `?` early return, or
// the enclosing future being cancelled by ctrl-c) the ticker is stopped
// and the line is cleared, so nothing printed afterwards is overwritten.
//
// The spinner draws to stderr and indicatif hides it automatically when
// stderr is not a terminal, so piped output stays clean.
//
// Rust concepts:
// - Drop: runs cleanup when a value goes out of scope
// - Option: a disabled spinner simply holds None
// =============================================================================

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {msg}...";

// Braille frames, the trailing space is the "finished" frame
const TICK: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    // Starts a spinner with the given message
    //
    // When `enabled` is false (verbose mode) nothing is drawn and the
    // guard is inert.
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Spinner { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        let style = match ProgressStyle::with_template(TEMPLATE) {
            Ok(style) => style.tick_chars(TICK),
            Err(_) => ProgressStyle::default_spinner(),
        };
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);

        Spinner { bar: Some(bar) }
    }

    /// Stops the ticker and clears the line now instead of at end of scope
    pub fn stop(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.clear();
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a guard instead of start()/stop() calls?
//    - With `?` a function can return from many places
//    - Drop runs on every one of them, so the line is always cleared
//    - It also runs when tokio drops a cancelled future
//
// 2. Why does stop() take `self` by value?
//    - Calling it consumes the spinner, so it can't be used afterwards
//    - Drop still runs after stop(); clear() is a no-op the second time
// -----------------------------------------------------------------------------
