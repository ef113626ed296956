//! The mounted glyph animator.

use glyphfolio_core::Viewport;
use rand::{SeedableRng, rngs::StdRng};

use crate::batch::SymbolBatch;
use crate::motion::{MotionDescriptor, MotionFrame};
use crate::timer::RegenTimer;

/// A glyph ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub frame: MotionFrame,
}

/// A mounted animator: one batch on screen and a running regeneration timer.
///
/// Mounting draws the first batch immediately. Dropping the animator (or
/// calling [`MatrixAnimator::unmount`]) cancels the timer; a later mount
/// starts over with nothing carried across.
#[derive(Debug)]
pub struct MatrixAnimator {
    batch: SymbolBatch,
    /// One descriptor per glyph in `batch`, same order.
    motions: Vec<MotionDescriptor>,
    timer: RegenTimer,
    rng: StdRng,
    viewport: Viewport,
    /// Number of batches drawn by this instance, the first included.
    generation: u64,
}

impl MatrixAnimator {
    /// Mount with an OS-seeded random source.
    pub fn mount(viewport: Viewport, now_ms: u64) -> Self {
        Self::mount_with_rng(StdRng::from_os_rng(), viewport, now_ms)
    }

    /// Mount with a deterministic random source.
    pub fn mount_seeded(seed: u64, viewport: Viewport, now_ms: u64) -> Self {
        Self::mount_with_rng(StdRng::seed_from_u64(seed), viewport, now_ms)
    }

    fn mount_with_rng(mut rng: StdRng, viewport: Viewport, now_ms: u64) -> Self {
        let batch = SymbolBatch::generate(&mut rng);
        let motions = sample_motions(&mut rng, batch.len(), viewport, now_ms);
        tracing::debug!(?viewport, now_ms, "glyph animator mounted");
        Self {
            batch,
            motions,
            timer: RegenTimer::start(now_ms),
            rng,
            viewport,
            generation: 1,
        }
    }

    /// Advance to `now_ms`, regenerating the batch if a tick is due.
    ///
    /// Returns true when a new batch was installed. Any number of due ticks
    /// collapse into one regeneration since only the last batch is visible.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let due = self.timer.poll(now_ms);
        if due == 0 {
            return false;
        }
        self.regenerate();
        if due > 1 {
            tracing::trace!(skipped = due - 1, "coalesced missed regeneration ticks");
        }
        true
    }

    /// Update the viewport. A changed size resamples every slot's motion.
    pub fn resize(&mut self, viewport: Viewport, now_ms: u64) {
        if viewport == self.viewport {
            return;
        }
        tracing::debug!(?viewport, "viewport changed, resampling glyph motion");
        self.viewport = viewport;
        self.motions = sample_motions(&mut self.rng, self.batch.len(), viewport, now_ms);
    }

    /// Install a new batch. Each slot keeps its running fall-and-fade loop;
    /// only the character and the horizontal target change.
    fn regenerate(&mut self) {
        self.batch = SymbolBatch::generate(&mut self.rng);
        for motion in &mut self.motions {
            motion.retarget(&mut self.rng, self.viewport);
        }
        self.generation += 1;
        tracing::trace!(generation = self.generation, "glyph batch regenerated");
    }

    /// Every glyph with its position and opacity at `now_ms`.
    pub fn glyphs(&self, now_ms: u64) -> impl Iterator<Item = Glyph> + '_ {
        self.batch
            .iter()
            .zip(&self.motions)
            .map(move |(ch, motion)| Glyph {
                ch,
                frame: motion.frame_at(now_ms),
            })
    }

    pub fn batch(&self) -> &SymbolBatch {
        &self.batch
    }

    pub fn motions(&self) -> &[MotionDescriptor] {
        &self.motions
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of batches drawn since mount, the first included.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Elapsed time at which the next regeneration is due.
    pub fn next_tick_ms(&self) -> u64 {
        self.timer.next_due_ms()
    }

    /// Unmount, cancelling the regeneration timer. Returns the number of
    /// batches this instance drew.
    pub fn unmount(self) -> u64 {
        tracing::debug!(generation = self.generation, "glyph animator unmounted");
        self.generation
    }
}

fn sample_motions(
    rng: &mut StdRng,
    count: usize,
    viewport: Viewport,
    now_ms: u64,
) -> Vec<MotionDescriptor> {
    (0..count)
        .map(|_| MotionDescriptor::sample(rng, viewport, now_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BATCH_SIZE;

    fn viewport() -> Viewport {
        Viewport::from_cells(80, 24)
    }

    #[test]
    fn test_mount_draws_first_batch_immediately() {
        let animator = MatrixAnimator::mount_seeded(1, viewport(), 0);
        assert_eq!(animator.generation(), 1);
        assert_eq!(animator.batch().len(), BATCH_SIZE);
        assert_eq!(animator.motions().len(), BATCH_SIZE);
        assert_eq!(animator.next_tick_ms(), 500);
    }

    #[test]
    fn test_regenerates_after_one_tick() {
        let mut animator = MatrixAnimator::mount_seeded(2, viewport(), 0);
        let before = animator.batch().clone();

        assert!(!animator.advance(499));
        assert_eq!(animator.batch(), &before);

        assert!(animator.advance(500));
        assert_eq!(animator.generation(), 2);
        assert_ne!(animator.batch(), &before);
        assert_eq!(animator.batch().len(), BATCH_SIZE);
    }

    #[test]
    fn test_batch_length_constant_across_ticks() {
        let mut animator = MatrixAnimator::mount_seeded(3, viewport(), 0);
        for step in 1..=40 {
            animator.advance(step * 500);
            assert_eq!(animator.batch().len(), BATCH_SIZE);
            assert_eq!(animator.glyphs(step * 500).count(), BATCH_SIZE);
        }
        assert_eq!(animator.generation(), 41);
    }

    #[test]
    fn test_missed_ticks_coalesce() {
        let mut animator = MatrixAnimator::mount_seeded(4, viewport(), 0);
        assert!(animator.advance(2_100));
        assert_eq!(animator.generation(), 2);
        assert_eq!(animator.next_tick_ms(), 2_500);
    }

    #[test]
    fn test_new_batch_keeps_fall_running() {
        let mut animator = MatrixAnimator::mount_seeded(5, viewport(), 0);
        let before = animator.motions().to_vec();
        animator.advance(500);

        let after = animator.motions();
        assert!(after.iter().all(|m| m.appeared_at_ms == 0));
        for (old, new) in before.iter().zip(after) {
            assert_eq!(old.start_x, new.start_x);
            assert_eq!(old.start_y, new.start_y);
            assert_eq!(old.end_y, new.end_y);
            assert_eq!(old.duration_secs, new.duration_secs);
        }
        let retargeted = before
            .iter()
            .zip(after)
            .filter(|(old, new)| old.end_x != new.end_x)
            .count();
        assert!(retargeted > 190);
    }

    #[test]
    fn test_glyphs_fall_through_viewport_while_ticking() {
        let viewport = viewport();
        let mut animator = MatrixAnimator::mount_seeded(9, viewport, 0);
        let mut lowest = f32::MIN;
        for now in (0..=20_000).step_by(50) {
            animator.advance(now);
            lowest = animator
                .glyphs(now)
                .map(|g| g.frame.y)
                .fold(lowest, f32::max);
        }
        assert!(lowest > viewport.height * 0.9);
    }

    #[test]
    fn test_resize_resamples_motion() {
        let mut animator = MatrixAnimator::mount_seeded(6, viewport(), 0);
        let batch = animator.batch().clone();
        animator.resize(Viewport::from_cells(40, 10), 100);

        assert_eq!(animator.batch(), &batch);
        assert_eq!(animator.generation(), 1);
        assert!(
            animator
                .motions()
                .iter()
                .all(|m| m.end_y == 160.0 + 50.0 && m.start_x < 320.0)
        );
    }

    #[test]
    fn test_zero_viewport_does_not_panic() {
        let mut animator = MatrixAnimator::mount_seeded(7, Viewport::default(), 0);
        animator.advance(500);
        assert!(animator.glyphs(750).all(|g| g.frame.x == 0.0));
    }

    #[test]
    fn test_unmount_reports_generations() {
        let mut animator = MatrixAnimator::mount_seeded(8, viewport(), 0);
        animator.advance(500);
        animator.advance(1_000);
        assert_eq!(animator.unmount(), 3);
    }
}
