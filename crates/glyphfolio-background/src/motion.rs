//! Per-glyph fall-and-fade motion.
//!
//! Each of the batch's slots owns one descriptor. The fall-and-fade loop
//! keeps running across batches; a new batch only retargets the horizontal
//! end point.

use std::ops::Range;

use glyphfolio_core::Viewport;
use rand::Rng;

/// Vertical start position, above the visible area.
pub const START_Y: f32 = -50.0;

/// Distance below the visible area where the fall ends.
pub const END_Y_MARGIN: f32 = 50.0;

/// Range of fall durations, in seconds.
pub const DURATION_SECS: Range<f32> = 5.0..15.0;

/// Opacity keyframes, evenly spaced over one loop.
pub const OPACITY_KEYFRAMES: [f32; 3] = [0.0, 0.5, 0.0];

/// Motion of a single glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionDescriptor {
    /// Horizontal position at the start of each loop.
    pub start_x: f32,
    /// Horizontal position at the end of each loop.
    pub end_x: f32,
    pub start_y: f32,
    pub end_y: f32,
    /// Length of one loop, in seconds.
    pub duration_secs: f32,
    /// Elapsed time at which the slot's loop started.
    pub appeared_at_ms: u64,
}

/// Where a glyph is, and how visible, at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl MotionDescriptor {
    /// Sample a descriptor for a glyph appearing at `now_ms`.
    ///
    /// Start and end x are drawn independently, so glyphs drift sideways as
    /// they fall instead of keeping a fixed column.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, now_ms: u64) -> Self {
        let start_x = rng.random::<f32>() * viewport.width;
        let end_x = rng.random::<f32>() * viewport.width;
        let span = DURATION_SECS.end - DURATION_SECS.start;
        let duration_secs = DURATION_SECS.start + rng.random::<f32>() * span;

        Self {
            start_x,
            end_x,
            start_y: START_Y,
            end_y: viewport.height + END_Y_MARGIN,
            duration_secs,
            appeared_at_ms: now_ms,
        }
    }

    /// Point the glyph at a fresh horizontal target, leaving the vertical
    /// loop and its timing untouched.
    pub fn retarget<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.end_x = rng.random::<f32>() * viewport.width;
    }

    /// Fraction of the current loop completed at `now_ms`, in `[0, 1)`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let duration_ms = (self.duration_secs * 1000.0) as u64;
        if duration_ms == 0 {
            return 0.0;
        }
        let age_ms = now_ms.saturating_sub(self.appeared_at_ms);
        (age_ms % duration_ms) as f32 / duration_ms as f32
    }

    /// Position and opacity at `now_ms`. The motion loops indefinitely.
    pub fn frame_at(&self, now_ms: u64) -> MotionFrame {
        let t = self.progress(now_ms);
        MotionFrame {
            x: lerp(self.start_x, self.end_x, t),
            y: lerp(self.start_y, self.end_y, t),
            opacity: keyframe_value(&OPACITY_KEYFRAMES, t),
        }
    }
}

/// Interpolate evenly spaced keyframes at progress `t` in `[0, 1]`.
pub fn keyframe_value(keyframes: &[f32], t: f32) -> f32 {
    match keyframes {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = (keyframes.len() - 1) as f32;
            let scaled = t.clamp(0.0, 1.0) * segments;
            let index = (scaled as usize).min(keyframes.len() - 2);
            let local = scaled - index as f32;
            lerp(keyframes[index], keyframes[index + 1], local)
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn descriptor() -> MotionDescriptor {
        MotionDescriptor {
            start_x: 0.0,
            end_x: 100.0,
            start_y: START_Y,
            end_y: 250.0,
            duration_secs: 10.0,
            appeared_at_ms: 1_000,
        }
    }

    #[test]
    fn test_opacity_keyframes() {
        assert_eq!(OPACITY_KEYFRAMES, [0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_sampled_durations_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let viewport = Viewport::from_cells(80, 24);
        for _ in 0..10_000 {
            let motion = MotionDescriptor::sample(&mut rng, viewport, 0);
            assert!((5.0..=15.0).contains(&motion.duration_secs));
        }
    }

    #[test]
    fn test_sampled_positions_within_viewport() {
        let mut rng = StdRng::seed_from_u64(6);
        let viewport = Viewport::from_cells(80, 24);
        for _ in 0..10_000 {
            let motion = MotionDescriptor::sample(&mut rng, viewport, 0);
            assert!((0.0..=viewport.width).contains(&motion.start_x));
            assert!((0.0..=viewport.width).contains(&motion.end_x));
            assert_eq!(motion.start_y, -50.0);
            assert_eq!(motion.end_y, viewport.height + 50.0);
        }
    }

    #[test]
    fn test_start_and_end_x_sampled_independently() {
        let mut rng = StdRng::seed_from_u64(8);
        let viewport = Viewport::from_cells(80, 24);
        let drifting = (0..100)
            .map(|_| MotionDescriptor::sample(&mut rng, viewport, 0))
            .filter(|m| m.start_x != m.end_x)
            .count();
        assert!(drifting > 90);
    }

    #[test]
    fn test_zero_viewport_samples_zero_positions() {
        let mut rng = StdRng::seed_from_u64(9);
        let motion = MotionDescriptor::sample(&mut rng, Viewport::default(), 0);
        assert_eq!(motion.start_x, 0.0);
        assert_eq!(motion.end_x, 0.0);
        assert_eq!(motion.end_y, 50.0);
    }

    #[test]
    fn test_frame_fades_in_then_out() {
        let motion = descriptor();
        let start = motion.frame_at(1_000);
        let middle = motion.frame_at(6_000);
        let late = motion.frame_at(8_500);

        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.y, -50.0);
        assert!((middle.opacity - 0.5).abs() < 1e-6);
        assert!((middle.x - 50.0).abs() < 1e-3);
        assert!((middle.y - 100.0).abs() < 1e-3);
        assert!(late.opacity < middle.opacity);
    }

    #[test]
    fn test_motion_loops() {
        let motion = descriptor();
        assert_eq!(motion.frame_at(3_000), motion.frame_at(13_000));
        assert_eq!(motion.progress(11_000), 0.0);
    }

    #[test]
    fn test_retarget_only_moves_end_x() {
        let mut rng = StdRng::seed_from_u64(10);
        let viewport = Viewport::from_cells(80, 24);
        let before = descriptor();
        let mut motion = before.clone();
        motion.retarget(&mut rng, viewport);

        assert!((0.0..=viewport.width).contains(&motion.end_x));
        assert_eq!(motion.start_x, before.start_x);
        assert_eq!(motion.start_y, before.start_y);
        assert_eq!(motion.end_y, before.end_y);
        assert_eq!(motion.duration_secs, before.duration_secs);
        assert_eq!(motion.appeared_at_ms, before.appeared_at_ms);
        assert_eq!(motion.frame_at(6_000).y, before.frame_at(6_000).y);
    }

    #[test]
    fn test_keyframe_value_edges() {
        assert_eq!(keyframe_value(&[], 0.5), 0.0);
        assert_eq!(keyframe_value(&[0.3], 0.9), 0.3);
        assert_eq!(keyframe_value(&OPACITY_KEYFRAMES, 1.0), 0.0);
        assert!((keyframe_value(&OPACITY_KEYFRAMES, 0.25) - 0.25).abs() < 1e-6);
    }
}
