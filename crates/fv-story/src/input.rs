//! Raw-input helpers: wheel debouncing, swipe tracking, key mapping.
//!
//! These reduce host input events to [`NavCommand`]s.  They hold no clock;
//! like the controller, the wheel debouncer is polled with millisecond
//! timestamps from the frame loop.

// ── NavCommand ────────────────────────────────────────────────────────────────

/// A navigation intent, however it was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    Jump(usize),
    ToggleAutoPlay,
}

/// Map a key name (DOM `KeyboardEvent.key` convention) to a command.
pub fn key_command(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowDown" | "ArrowRight" | "PageDown" => Some(NavCommand::Next),
        "ArrowUp" | "ArrowLeft" | "PageUp" => Some(NavCommand::Previous),
        " " | "Space" => Some(NavCommand::ToggleAutoPlay),
        _ => None,
    }
}

// ── WheelDebouncer ────────────────────────────────────────────────────────────

/// Collapses a burst of wheel events into a single navigation.
///
/// Every event overwrites the pending direction and restarts the quiet
/// timer; the command fires only once the timer expires with no further
/// events, so the *last* event's direction wins.
#[derive(Debug)]
pub struct WheelDebouncer {
    quiet_ms: u64,
    pending:  Option<(NavCommand, u64)>,
}

impl WheelDebouncer {
    pub fn new(quiet_ms: u64) -> Self {
        Self { quiet_ms, pending: None }
    }

    /// Record a wheel event.  Positive `delta_y` scrolls toward the next
    /// chapter; zero is ignored.
    pub fn on_wheel(&mut self, delta_y: f64, now_ms: u64) {
        let command = if delta_y > 0.0 {
            NavCommand::Next
        } else if delta_y < 0.0 {
            NavCommand::Previous
        } else {
            return;
        };
        self.pending = Some((command, now_ms + self.quiet_ms));
    }

    /// Fire the pending command if its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<NavCommand> {
        match self.pending {
            Some((command, deadline)) if now_ms >= deadline => {
                self.pending = None;
                Some(command)
            }
            _ => None,
        }
    }
}

// ── SwipeTracker ──────────────────────────────────────────────────────────────

/// Turns a touch-start/touch-end pair into a navigation when the vertical
/// travel exceeds the threshold.  Swiping up (finger moves toward smaller
/// y) goes to the next chapter.
#[derive(Debug)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_y:      Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, start_y: None }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    pub fn touch_end(&mut self, y: f64) -> Option<NavCommand> {
        let start = self.start_y.take()?;
        let travel = start - y;
        if travel.abs() <= self.threshold_px {
            return None;
        }
        Some(if travel > 0.0 { NavCommand::Next } else { NavCommand::Previous })
    }
}
