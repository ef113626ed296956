//! Core types shared across the glyphfolio crates.

mod section;
mod theme;
mod viewport;

pub use section::Section;
pub use theme::ColorTheme;
pub use viewport::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Viewport};
