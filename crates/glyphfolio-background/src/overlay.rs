//! Widget that paints the animator's glyphs into a buffer.

use glyphfolio_core::{ColorTheme, Viewport};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::animator::MatrixAnimator;
use crate::color::glyph_color;

/// Glyphs fainter than this are not drawn.
const MIN_VISIBLE_OPACITY: f32 = 0.04;

/// Non-interactive overlay drawing one frame of a mounted animator.
///
/// Only cells under a visible glyph are touched, so content rendered
/// afterwards sits on top.
#[derive(Debug, Clone, Copy)]
pub struct MatrixOverlay<'a> {
    animator: &'a MatrixAnimator,
    now_ms: u64,
    theme: ColorTheme,
}

impl<'a> MatrixOverlay<'a> {
    pub fn new(animator: &'a MatrixAnimator, now_ms: u64, theme: ColorTheme) -> Self {
        Self {
            animator,
            now_ms,
            theme,
        }
    }
}

impl Widget for MatrixOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = Viewport::from_rect(area);
        if bounds.is_empty() {
            return;
        }

        for glyph in self.animator.glyphs(self.now_ms) {
            if glyph.frame.opacity < MIN_VISIBLE_OPACITY {
                continue;
            }
            let Some((cx, cy)) = bounds.cell_at(glyph.frame.x, glyph.frame.y) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                cell.set_char(glyph.ch)
                    .set_style(Style::new().fg(glyph_color(self.theme, glyph.frame.opacity)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|c| c.symbol() != " ").count()
    }

    /// Mount at 0 and tick the animator on its schedule up to `now_ms`.
    fn ticked(seed: u64, area: Rect, now_ms: u64) -> MatrixAnimator {
        let mut animator = MatrixAnimator::mount_seeded(seed, Viewport::from_rect(area), 0);
        for now in (0..=now_ms).step_by(500) {
            animator.advance(now);
        }
        assert_eq!(animator.generation(), now_ms / 500 + 1);
        animator
    }

    #[test]
    fn test_paints_some_glyphs() {
        let area = Rect::new(0, 0, 80, 24);
        let animator = ticked(1, area, 4_000);
        let mut buf = Buffer::empty(area);

        MatrixOverlay::new(&animator, 4_000, ColorTheme::Green).render(area, &mut buf);

        let painted = painted_cells(&buf);
        assert!(painted > 0);
        assert!(painted <= 200);
    }

    #[test]
    fn test_painted_glyphs_are_printable_ascii() {
        let area = Rect::new(0, 0, 80, 24);
        let animator = ticked(2, area, 4_000);
        let mut buf = Buffer::empty(area);

        MatrixOverlay::new(&animator, 4_000, ColorTheme::Green).render(area, &mut buf);

        for cell in buf.content() {
            let ch = cell.symbol().chars().next().unwrap_or(' ');
            assert!(ch == ' ' || (33..=125).contains(&(ch as u32)));
        }
    }

    #[test]
    fn test_nothing_painted_at_mount_instant() {
        // Every glyph starts fully transparent.
        let area = Rect::new(0, 0, 80, 24);
        let animator = MatrixAnimator::mount_seeded(3, Viewport::from_rect(area), 0);
        let mut buf = Buffer::empty(area);

        MatrixOverlay::new(&animator, 0, ColorTheme::Green).render(area, &mut buf);

        assert_eq!(painted_cells(&buf), 0);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let animator = MatrixAnimator::mount_seeded(4, Viewport::default(), 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        MatrixOverlay::new(&animator, 4_000, ColorTheme::Green)
            .render(Rect::new(0, 0, 0, 0), &mut buf);
        assert!(buf.content().is_empty());
    }

    #[test]
    fn test_respects_area_offset() {
        let full = Rect::new(0, 0, 60, 20);
        let area = Rect::new(10, 5, 40, 10);
        let animator = ticked(5, area, 4_000);
        let mut buf = Buffer::empty(full);

        MatrixOverlay::new(&animator, 4_000, ColorTheme::Green).render(area, &mut buf);

        for y in 0..full.height {
            for x in 0..full.width {
                let inside = area.contains(ratatui::layout::Position::new(x, y));
                if !inside {
                    assert_eq!(buf[(x, y)].symbol(), " ");
                }
            }
        }
    }
}
