//! Reading the terminal's current size.

use glyphfolio_core::Viewport;

/// Current terminal size as a viewport.
///
/// Without a terminal (piped output, test harness) the size cannot be read;
/// the zero viewport is returned instead of an error.
pub fn current_viewport() -> Viewport {
    viewport_or_default(crossterm::terminal::size())
}

fn viewport_or_default(size: std::io::Result<(u16, u16)>) -> Viewport {
    match size {
        Ok((columns, rows)) => Viewport::from_cells(columns, rows),
        Err(err) => {
            tracing::warn!(%err, "terminal size unavailable, using an empty viewport");
            Viewport::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_error_falls_back_to_zero() {
        let err = std::io::Error::other("no tty");
        assert_eq!(viewport_or_default(Err(err)), Viewport::default());
    }

    #[test]
    fn test_size_maps_to_cells() {
        assert_eq!(
            viewport_or_default(Ok((100, 30))),
            Viewport::from_cells(100, 30)
        );
    }

    #[test]
    fn test_current_viewport_never_panics() {
        let _ = current_viewport();
    }
}
