//! `fv-story` — chapter-driven playback for the flowviz flow map.
//!
//! A story is an ordered list of [`Chapter`]s, each bundling a camera
//! target, a filter/pause directive, and optional statistics for the host
//! panel.  [`StoryController`] is the state machine that walks the list:
//! it starts camera transitions, defers the chapter's directive until the
//! transition deadline passes, schedules auto-play, and drops navigation
//! that arrives mid-transition.
//!
//! The controller owns no clock and no event loop.  The host calls
//! [`StoryController::tick`] with a monotonic millisecond timestamp once
//! per frame, and feeds user input through [`NavCommand`]s (optionally
//! produced by the [`input`] helpers).
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`chapter`]  | `Chapter`, `ChapterDirective`, `ChapterStats`         |
//! | [`settings`] | `StorySettings` — timing and input knobs              |
//! | [`controller`] | `StoryController` — the playback state machine      |
//! | [`target`]   | `StoryTarget` — what a story drives (impl for `FlowViz`) |
//! | [`observer`] | `StoryObserver` — host panel callbacks                |
//! | [`input`]    | wheel debouncing, swipe tracking, key mapping         |
//! | [`error`]    | `StoryError`, `StoryResult`                           |

pub mod chapter;
pub mod controller;
pub mod error;
pub mod input;
pub mod observer;
pub mod settings;
pub mod target;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chapter::{CameraStyle, Chapter, ChapterDirective, ChapterStats};
pub use controller::StoryController;
pub use error::{StoryError, StoryResult};
pub use input::{key_command, NavCommand, SwipeTracker, WheelDebouncer};
pub use observer::{NoopStoryObserver, StoryObserver};
pub use settings::StorySettings;
pub use target::StoryTarget;
