//! Square colors.

/// A 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// This color seen through a black overlay of the given opacity (0-255).
    #[must_use]
    pub const fn overlay_black(self, alpha: u8) -> Rgb {
        let keep = 255 - alpha as u16;
        Rgb(
            scale_channel(self.0, keep),
            scale_channel(self.1, keep),
            scale_channel(self.2, keep),
        )
    }
}

const fn scale_channel(c: u8, keep: u16) -> u8 {
    ((c as u16 * keep) / 255) as u8
}

pub const LIGHT_SQUARE: Rgb = Rgb(0xee, 0xee, 0xd2);
pub const DARK_SQUARE: Rgb = Rgb(0x76, 0x96, 0x56);
pub const BACKGROUND: Rgb = Rgb(0x30, 0x2c, 0x2b);
pub const PIECE: Rgb = Rgb(0, 0, 0);

/// Opacity of the overlay drawn over the selected square.
pub const HIGHLIGHT_ALPHA: u8 = 150;

/// Background of a square, taking the highlight into account.
#[must_use]
pub const fn square_color(light: bool, highlighted: bool) -> Rgb {
    let base = if light { LIGHT_SQUARE } else { DARK_SQUARE };
    if highlighted {
        base.overlay_black(HIGHLIGHT_ALPHA)
    } else {
        base
    }
}

/// Label color on a square: the opposite square shade.
#[must_use]
pub const fn label_color(light: bool) -> Rgb {
    if light {
        DARK_SQUARE
    } else {
        LIGHT_SQUARE
    }
}
