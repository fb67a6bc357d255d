//! Story timing and input knobs.

use crate::error::{StoryError, StoryResult};

/// Tunable timings for playback and input handling.
///
/// The defaults match the production story; hosts override individual
/// fields with struct-update syntax.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StorySettings {
    /// Dwell time on a chapter before auto-play advances.
    pub auto_play_delay_ms:   u64,
    /// Added to a chapter's transition duration before its directive is
    /// applied, so the camera has fully settled.
    pub transition_buffer_ms: u64,
    /// Quiet period after the last wheel event before it navigates.
    pub wheel_debounce_ms:    u64,
    /// Minimum vertical swipe distance that counts as navigation.
    pub swipe_threshold_px:   f64,
    pub keyboard_nav:         bool,
    pub swipe_nav:            bool,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            auto_play_delay_ms:   6_000,
            transition_buffer_ms: 500,
            wheel_debounce_ms:    150,
            swipe_threshold_px:   50.0,
            keyboard_nav:         true,
            swipe_nav:            true,
        }
    }
}

impl StorySettings {
    /// Reject settings that would wedge playback.
    pub fn validate(&self) -> StoryResult<()> {
        if self.auto_play_delay_ms == 0 {
            return Err(StoryError::InvalidSettings("auto_play_delay_ms must be > 0"));
        }
        if self.swipe_threshold_px < 0.0 {
            return Err(StoryError::InvalidSettings("swipe_threshold_px must be >= 0"));
        }
        Ok(())
    }
}
