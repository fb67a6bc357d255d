//! The `StoryTarget` seam — what a story controller drives.
//!
//! The controller never touches `FlowViz` directly; it speaks this trait,
//! which keeps the state machine testable against a recording mock.

use fv_core::{CameraRequest, MapControl};
use fv_render::{DrawSurface, FlowViz, LabelOverlay};

use crate::chapter::{CameraStyle, ChapterDirective};

/// Everything a chapter needs from the visualization: camera motion and
/// directive application.
pub trait StoryTarget {
    /// Start an animated camera transition.  Returns immediately; the
    /// controller tracks completion by deadline.
    fn animate_camera(&mut self, style: CameraStyle, request: &CameraRequest);

    /// Move the camera instantaneously.
    fn snap_camera(&mut self, request: &CameraRequest);

    /// Apply a chapter's filter and pause state.
    fn apply_directive(&mut self, directive: &ChapterDirective);
}

impl<M: MapControl, S: DrawSurface, L: LabelOverlay> StoryTarget for FlowViz<M, S, L> {
    fn animate_camera(&mut self, style: CameraStyle, request: &CameraRequest) {
        match style {
            CameraStyle::Fly => self.map_mut().fly_to(request),
            CameraStyle::Ease => self.map_mut().ease_to(request),
        }
    }

    fn snap_camera(&mut self, request: &CameraRequest) {
        self.map_mut().jump_to(request);
    }

    fn apply_directive(&mut self, directive: &ChapterDirective) {
        self.update_flows(directive.landfills.iter().cloned());
        self.filter_by_municipalities(directive.municipalities.clone());
        if directive.pause {
            self.pause_animation();
        } else {
            self.resume_animation();
        }
    }
}
