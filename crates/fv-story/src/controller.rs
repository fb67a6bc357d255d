//! `StoryController` — the playback state machine.
//!
//! # Transition model
//!
//! Entering a chapter starts a camera transition and records a directive
//! deadline of `now + chapter.duration_ms + transition_buffer_ms`.  Until
//! [`StoryController::tick`] crosses that deadline the controller is
//! *transitioning*: the chapter's directive has not been applied yet and
//! any navigation input is dropped, so camera motion can never be
//! preempted mid-flight.
//!
//! # Auto-play
//!
//! Auto-play is an orthogonal flag plus one cancellable deadline.  When a
//! chapter's directive is applied with auto-play on, the controller arms
//! `now + auto_play_delay_ms`; `tick` crossing that deadline advances to
//! the next chapter (wrapping to the first after the last).  Manual
//! navigation disarms the pending deadline, and arrival at the new chapter
//! re-arms it.

use crate::chapter::Chapter;
use crate::error::{StoryError, StoryResult};
use crate::input::NavCommand;
use crate::observer::StoryObserver;
use crate::settings::StorySettings;
use crate::target::StoryTarget;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { apply_at_ms: u64 },
}

// ── StoryController ───────────────────────────────────────────────────────────

pub struct StoryController {
    chapters:        Vec<Chapter>,
    settings:        StorySettings,
    current:         usize,
    phase:           Phase,
    auto_playing:    bool,
    auto_play_at_ms: Option<u64>,
}

impl StoryController {
    pub fn new(chapters: Vec<Chapter>, settings: StorySettings) -> StoryResult<Self> {
        if chapters.is_empty() {
            return Err(StoryError::EmptyStory);
        }
        settings.validate()?;
        Ok(Self {
            chapters,
            settings,
            current: 0,
            phase: Phase::Idle,
            auto_playing: false,
            auto_play_at_ms: None,
        })
    }

    // ── Navigation ────────────────────────────────────────────────────────

    /// Enter the first chapter without animation (host startup path).
    pub fn start<T, O>(&mut self, now_ms: u64, target: &mut T, observer: &mut O)
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        self.go_to_chapter(0, false, now_ms, target, observer);
    }

    /// Enter chapter `index`.  Returns `false` — and changes nothing — if
    /// the index is out of range or a transition is still in flight.
    ///
    /// With `animate`, the camera transition starts now and the chapter's
    /// directive is deferred to the transition deadline; without it, the
    /// camera snaps and the directive applies immediately.
    pub fn go_to_chapter<T, O>(
        &mut self,
        index: usize,
        animate: bool,
        now_ms: u64,
        target: &mut T,
        observer: &mut O,
    ) -> bool
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        if index >= self.chapters.len() {
            tracing::debug!(index, "chapter index out of range");
            return false;
        }
        if matches!(self.phase, Phase::Transitioning { .. }) {
            tracing::debug!(index, "navigation dropped mid-transition");
            return false;
        }

        // Any pending auto-play advance is superseded by this navigation;
        // arrival re-arms it.
        self.auto_play_at_ms = None;
        self.current = index;

        let chapter = &self.chapters[index];
        let request = chapter.camera_request();
        let style = chapter.animation;
        let duration_ms = chapter.duration_ms;
        observer.on_chapter_changed(index, chapter);

        if animate {
            target.animate_camera(style, &request);
            let apply_at_ms = now_ms + duration_ms + self.settings.transition_buffer_ms;
            self.phase = Phase::Transitioning { apply_at_ms };
            tracing::debug!(index, apply_at_ms, "chapter transition started");
        } else {
            target.snap_camera(&request);
            self.arrive(now_ms, target, observer);
        }
        true
    }

    /// Advance to the next chapter.  Past the last chapter this is a no-op
    /// unless auto-play is on, in which case the story wraps to the first.
    pub fn next_chapter<T, O>(&mut self, now_ms: u64, target: &mut T, observer: &mut O) -> bool
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        if self.current + 1 < self.chapters.len() {
            self.go_to_chapter(self.current + 1, true, now_ms, target, observer)
        } else if self.auto_playing {
            self.go_to_chapter(0, true, now_ms, target, observer)
        } else {
            false
        }
    }

    /// Go back one chapter; a no-op at the first.
    pub fn previous_chapter<T, O>(&mut self, now_ms: u64, target: &mut T, observer: &mut O) -> bool
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        if self.current == 0 {
            return false;
        }
        self.go_to_chapter(self.current - 1, true, now_ms, target, observer)
    }

    /// Flip auto-play.  Turning it on arms the advance deadline (unless a
    /// transition is in flight, in which case arrival arms it); turning it
    /// off cancels any pending advance.  Returns the new state.
    pub fn toggle_auto_play<O: StoryObserver>(&mut self, now_ms: u64, observer: &mut O) -> bool {
        self.auto_playing = !self.auto_playing;
        if self.auto_playing {
            if self.phase == Phase::Idle {
                self.auto_play_at_ms = Some(now_ms + self.settings.auto_play_delay_ms);
            }
        } else {
            self.auto_play_at_ms = None;
        }
        observer.on_auto_play(self.auto_playing);
        tracing::debug!(enabled = self.auto_playing, "auto-play toggled");
        self.auto_playing
    }

    /// Route a reduced input command.  Returns whether it had any effect.
    pub fn handle<T, O>(
        &mut self,
        command: NavCommand,
        now_ms: u64,
        target: &mut T,
        observer: &mut O,
    ) -> bool
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        match command {
            NavCommand::Next => self.next_chapter(now_ms, target, observer),
            NavCommand::Previous => self.previous_chapter(now_ms, target, observer),
            NavCommand::Jump(index) => self.go_to_chapter(index, true, now_ms, target, observer),
            NavCommand::ToggleAutoPlay => self.toggle_auto_play(now_ms, observer),
        }
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    /// Advance the controller's deadlines.  Called once per frame with a
    /// monotonic millisecond timestamp.
    pub fn tick<T, O>(&mut self, now_ms: u64, target: &mut T, observer: &mut O)
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        if let Phase::Transitioning { apply_at_ms } = self.phase {
            if now_ms >= apply_at_ms {
                self.arrive(now_ms, target, observer);
            }
            return;
        }
        if self.auto_playing
            && self.auto_play_at_ms.is_some_and(|at_ms| now_ms >= at_ms)
        {
            self.auto_play_at_ms = None;
            self.next_chapter(now_ms, target, observer);
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_chapter(&self) -> &Chapter {
        &self.chapters[self.current]
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn settings(&self) -> &StorySettings {
        &self.settings
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The current chapter's camera has settled: apply its directive,
    /// publish its stats, and re-arm auto-play.
    fn arrive<T, O>(&mut self, now_ms: u64, target: &mut T, observer: &mut O)
    where
        T: StoryTarget,
        O: StoryObserver,
    {
        let chapter = &self.chapters[self.current];
        target.apply_directive(&chapter.directive);
        observer.on_stats(chapter.stats.as_ref());

        self.phase = Phase::Idle;
        if self.auto_playing {
            self.auto_play_at_ms = Some(now_ms + self.settings.auto_play_delay_ms);
        }
    }
}
