//! Host panel callbacks.

use crate::chapter::{Chapter, ChapterStats};

/// Callbacks fired by the controller as playback progresses.  All methods
/// default to no-ops; hosts override the ones their UI cares about.
pub trait StoryObserver {
    /// The controller entered a chapter (transition started or, for a
    /// snap, completed).
    fn on_chapter_changed(&mut self, index: usize, chapter: &Chapter) {
        let _ = (index, chapter);
    }

    /// A chapter's directive was applied; `stats` is that chapter's panel
    /// figures, or `None` to clear the panel.
    fn on_stats(&mut self, stats: Option<&ChapterStats>) {
        let _ = stats;
    }

    /// Auto-play was toggled.
    fn on_auto_play(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

/// Observer that ignores everything.
#[derive(Default)]
pub struct NoopStoryObserver;

impl StoryObserver for NoopStoryObserver {}
