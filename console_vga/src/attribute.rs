//! Text attribute codec
//!
//! A VGA text cell is 16 bits: the character code in the low byte and the
//! attribute in the high byte. The attribute packs a 4-bit background color
//! above a 4-bit foreground color. Everything here is a pure function.

#[cfg(test)]
use serde::{Deserialize, Serialize};

/// VGA color codes
#[cfg_attr(test, derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VgaColor {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl VgaColor {
    /// All sixteen colors in code order
    pub const ALL: [VgaColor; 16] = [
        VgaColor::Black,
        VgaColor::Blue,
        VgaColor::Green,
        VgaColor::Cyan,
        VgaColor::Red,
        VgaColor::Magenta,
        VgaColor::Brown,
        VgaColor::LightGray,
        VgaColor::DarkGray,
        VgaColor::LightBlue,
        VgaColor::LightGreen,
        VgaColor::LightCyan,
        VgaColor::LightRed,
        VgaColor::LightMagenta,
        VgaColor::LightBrown,
        VgaColor::White,
    ];

    /// Color for the low four bits of `value`
    pub const fn from_nibble(value: u8) -> VgaColor {
        Self::ALL[(value & 0x0F) as usize]
    }

    /// Make a VGA attribute byte from foreground and background colors
    pub const fn make_attr(fg: VgaColor, bg: VgaColor) -> u8 {
        attribute_of(fg as u8, bg as u8)
    }
}

/// Attribute used after a clear: white on black
pub const DEFAULT_ATTRIBUTE: u8 = VgaColor::make_attr(VgaColor::White, VgaColor::Black);

/// A space in the default attribute
pub const BLANK_CELL: u16 = cell_of(b' ', DEFAULT_ATTRIBUTE);

/// Packs a foreground/background pair into an attribute byte
///
/// Both inputs are masked to four bits, so out-of-range values alias into
/// the 0-15 color space instead of corrupting the other nibble.
pub const fn attribute_of(foreground: u8, background: u8) -> u8 {
    ((background & 0x0F) << 4) | (foreground & 0x0F)
}

/// Packs a character and an attribute into a cell
pub const fn cell_of(character: u8, attribute: u8) -> u16 {
    (character as u16) | ((attribute as u16) << 8)
}

/// Packs a character and a color pair into a cell
pub const fn cell_of_colors(character: u8, foreground: u8, background: u8) -> u16 {
    cell_of(character, attribute_of(foreground, background))
}

/// Splits a cell into `(character, attribute)`
pub const fn split_cell(cell: u16) -> (u8, u8) {
    ((cell & 0xFF) as u8, (cell >> 8) as u8)
}
