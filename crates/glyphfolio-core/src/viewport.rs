//! Viewport dimensions in nominal pixels.

use ratatui::layout::Rect;

/// Nominal width of one terminal cell, in pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Nominal height of one terminal cell, in pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Size of the visible drawing surface.
///
/// The default is a zero-sized viewport, used when no terminal is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions. Negative values clamp to 0.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a viewport covering `columns` x `rows` terminal cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(
            columns as f32 * CELL_WIDTH_PX,
            rows as f32 * CELL_HEIGHT_PX,
        )
    }

    /// Viewport covering the given area.
    pub fn from_rect(area: Rect) -> Self {
        Self::from_cells(area.width, area.height)
    }

    /// Whether the viewport has no visible surface.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Map a pixel position to a cell offset, or `None` when it falls outside.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(0.0..self.width).contains(&x) || !(0.0..self.height).contains(&y) {
            return None;
        }
        Some(((x / CELL_WIDTH_PX) as u16, (y / CELL_HEIGHT_PX) as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        let viewport = Viewport::from_cells(80, 24);
        assert_eq!(viewport.width, 640.0);
        assert_eq!(viewport.height, 384.0);
        assert!(!viewport.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let viewport = Viewport::default();
        assert!(viewport.is_empty());
        assert_eq!(viewport.cell_at(0.0, 0.0), None);
    }

    #[test]
    fn test_cell_at() {
        let viewport = Viewport::from_cells(10, 5);
        assert_eq!(viewport.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.cell_at(17.0, 33.0), Some((2, 2)));
        assert_eq!(viewport.cell_at(79.9, 79.9), Some((9, 4)));
        assert_eq!(viewport.cell_at(80.0, 0.0), None);
        assert_eq!(viewport.cell_at(5.0, -1.0), None);
    }

    #[test]
    fn test_negative_dimensions_clamp() {
        assert_eq!(Viewport::new(-3.0, 10.0).width, 0.0);
    }
}
