//! Falling-glyph background for the glyphfolio page.
//!
//! Every 500 ms the animator draws a new batch of 200 random printable
//! glyphs. Each glyph falls from above the viewport to below it, drifting
//! sideways and fading in and out, looping until the next batch replaces
//! it. The animator is mounted once under the page and holds its timer
//! only while mounted.

mod animator;
mod batch;
mod chars;
mod color;
mod motion;
mod overlay;
mod state;
mod timer;
mod viewport;

pub use animator::{Glyph, MatrixAnimator};
pub use batch::{BATCH_SIZE, SymbolBatch};
pub use chars::{GLYPH_END, GLYPH_FIRST, random_glyph};
pub use color::{glyph_color, hsl_to_rgb};
pub use motion::{
    DURATION_SECS, END_Y_MARGIN, MotionDescriptor, MotionFrame, OPACITY_KEYFRAMES, START_Y,
    keyframe_value,
};
pub use overlay::MatrixOverlay;
pub use state::BackgroundState;
pub use timer::{RegenTimer, TICK_INTERVAL};
pub use viewport::current_viewport;
