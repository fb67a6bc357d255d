//! Particle and trail animation.
//!
//! Each renderable flow carries one glowing particle that advances a fixed
//! fraction of the path per frame (`phase = (phase + speed) mod 1`) and
//! drags a fading trail of recent path vertices behind it.
//!
//! A flow whose projection has fewer than two points is skipped for the
//! frame *including* the phase advance — an unrenderable flow pauses rather
//! than progressing invisibly, so it resumes from where it was last seen.

use fv_core::ScreenPoint;
use fv_model::Flow;

use crate::surface::{BlendMode, DrawSurface};

/// Trail window: only the most recent this-many points are drawn, so trails
/// on long multi-vertex paths show only the tail.
pub const MAX_TRAIL_POINTS: usize = 80;

pub const TRAIL_WIDTH: f64 = 6.0;
pub const TRAIL_ALPHA: f64 = 0.4;
pub const TRAIL_GLOW_BLUR: f64 = 20.0;

pub const PARTICLE_RADIUS: f64 = 3.0;
pub const HEAD_GLOW_BLUR: f64 = 30.0;

/// Advance and draw every renderable flow's particle for one frame.
pub fn animate_flows<S: DrawSurface>(surface: &mut S, flows: &mut [Flow]) {
    for flow in flows {
        animate_flow(surface, flow);
    }
}

fn animate_flow<S: DrawSurface>(surface: &mut S, flow: &mut Flow) {
    let Some(path) = flow.projected.as_deref() else {
        return;
    };
    if path.len() < 2 {
        return;
    }

    let phase = (flow.phase + flow.speed) % 1.0;
    let (head, segment) = particle_position(path, phase);
    let trail = trail_window(path, segment, head);
    flow.phase = phase;

    // Trail: additive, translucent, glow-shaded.
    surface.set_blend(BlendMode::Lighter);
    surface.set_alpha(TRAIL_ALPHA);
    surface.set_glow(flow.color, TRAIL_GLOW_BLUR);
    surface.stroke_path(&trail, flow.color, TRAIL_WIDTH);

    // Particle head: opaque disc with a wider glow.
    surface.set_alpha(1.0);
    surface.set_glow(flow.color, HEAD_GLOW_BLUR);
    surface.fill_disc(head, PARTICLE_RADIUS, flow.color);

    // Reset sticky state so the next flow starts clean.
    surface.clear_glow();
    surface.set_alpha(1.0);
    surface.set_blend(BlendMode::SourceOver);
}

/// Map `phase ∈ [0, 1)` onto `path`: scale to segment space, take the
/// integer part as the active segment and the fraction as the interpolation
/// factor within it.  The terminal segment is clamped as phase nears 1.
///
/// Returns the interpolated point and the active segment index.
/// `path` must have at least 2 points.
pub fn particle_position(path: &[ScreenPoint], phase: f64) -> (ScreenPoint, usize) {
    let segments = path.len() - 1;
    let progress = phase * segments as f64;
    let segment = (progress.floor() as usize).min(segments - 1);
    let t = progress - segment as f64;
    (path[segment].lerp(path[segment + 1], t), segment)
}

/// The trail polyline: all path vertices up to and including the active
/// segment, plus the interpolated head, truncated to the most recent
/// [`MAX_TRAIL_POINTS`].
fn trail_window(path: &[ScreenPoint], segment: usize, head: ScreenPoint) -> Vec<ScreenPoint> {
    let mut trail: Vec<ScreenPoint> = path[..=segment].to_vec();
    trail.push(head);
    if trail.len() > MAX_TRAIL_POINTS {
        let drop = trail.len() - MAX_TRAIL_POINTS;
        trail.drain(..drop);
    }
    trail
}

#[cfg(test)]
mod unit {
    use super::*;

    fn straight_path(points: usize) -> Vec<ScreenPoint> {
        (0..points).map(|i| ScreenPoint::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn position_interpolates_within_segment() {
        let path = straight_path(3); // segments [0,1] and [1,2]
        let (point, segment) = particle_position(&path, 0.25);
        assert_eq!(segment, 0);
        assert!((point.x - 0.5).abs() < 1e-12);

        let (point, segment) = particle_position(&path, 0.75);
        assert_eq!(segment, 1);
        assert!((point.x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn terminal_segment_is_clamped() {
        let path = straight_path(3);
        let (point, segment) = particle_position(&path, 0.999_999_9);
        assert_eq!(segment, 1);
        assert!(point.x <= 2.0);
    }

    #[test]
    fn trail_never_exceeds_window() {
        let path = straight_path(500);
        for phase in [0.01, 0.2, 0.5, 0.99] {
            let (head, segment) = particle_position(&path, phase);
            let trail = trail_window(&path, segment, head);
            assert!(trail.len() <= MAX_TRAIL_POINTS, "trail {} long", trail.len());
            // The head is always the last trail point.
            assert_eq!(*trail.last().unwrap(), head);
        }
    }

    #[test]
    fn short_paths_keep_full_trail() {
        let path = straight_path(4);
        let (head, segment) = particle_position(&path, 0.9);
        let trail = trail_window(&path, segment, head);
        assert_eq!(trail.len(), segment + 2); // vertices 0..=segment plus head
    }
}
