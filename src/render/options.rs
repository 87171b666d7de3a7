/// Display settings for [`BoardView`](super::BoardView).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Shade squares with 24-bit terminal colors
    pub color: bool,
    /// Draw rank digits and file letters around the board
    pub coordinates: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            color: true,
            coordinates: true,
        }
    }
}

impl DisplayOptions {
    /// Plain text with labels, for logs and tests.
    #[must_use]
    pub const fn plain() -> Self {
        DisplayOptions {
            color: false,
            coordinates: true,
        }
    }
}
