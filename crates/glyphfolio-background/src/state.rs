//! Background animation state management.

use glyphfolio_core::{ColorTheme, Viewport};
use ratatui::Frame;

use crate::animator::MatrixAnimator;
use crate::overlay::MatrixOverlay;

/// Background animation state: either a mounted animator or nothing.
#[derive(Debug)]
pub struct BackgroundState {
    /// The mounted animator, `None` while unmounted.
    animator: Option<MatrixAnimator>,
    /// Batches drawn by every instance mounted so far.
    regenerations: u64,
    /// Fixed seed for deterministic runs; each mount derives its own.
    seed: Option<u64>,
    /// Number of mounts so far.
    mounts: u64,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create an unmounted background state.
    pub fn new() -> Self {
        Self {
            animator: None,
            regenerations: 0,
            seed: None,
            mounts: 0,
        }
    }

    /// Create an unmounted state whose animators use seeded randomness.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Mount a fresh animator, replacing any mounted one.
    pub fn mount(&mut self, viewport: Viewport, now_ms: u64) {
        self.unmount();
        let animator = match self.seed {
            Some(seed) => {
                MatrixAnimator::mount_seeded(seed.wrapping_add(self.mounts), viewport, now_ms)
            }
            None => MatrixAnimator::mount(viewport, now_ms),
        };
        self.mounts += 1;
        self.regenerations += animator.generation();
        self.animator = Some(animator);
    }

    /// Unmount the animator, if any. Its timer is cancelled and its batch dropped.
    pub fn unmount(&mut self) {
        if let Some(animator) = self.animator.take() {
            animator.unmount();
        }
    }

    /// Mount if unmounted, unmount if mounted.
    pub fn toggle(&mut self, viewport: Viewport, now_ms: u64) {
        if self.is_mounted() {
            self.unmount();
        } else {
            self.mount(viewport, now_ms);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.animator.is_some()
    }

    pub fn animator(&self) -> Option<&MatrixAnimator> {
        self.animator.as_ref()
    }

    /// Total batches drawn across all mounts.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    /// Advance the mounted animator, if any, to `now_ms`.
    pub fn update(&mut self, viewport: Viewport, now_ms: u64) {
        let Some(animator) = self.animator.as_mut() else {
            return;
        };
        animator.resize(viewport, now_ms);
        if animator.advance(now_ms) {
            self.regenerations += 1;
        }
    }

    /// Render the background to the frame.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64, theme: ColorTheme) {
        let area = frame.area();
        self.update(Viewport::from_rect(area), elapsed_ms);

        if let Some(animator) = &self.animator {
            frame.render_widget(MatrixOverlay::new(animator, elapsed_ms, theme), area);
        }
    }
}
