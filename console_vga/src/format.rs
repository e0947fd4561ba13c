//! Number formatting into fixed stack buffers
//!
//! No allocator exists during early boot, so numbers are rendered into
//! small arrays and emitted through [`TextConsole::put_string`].

use hal::TextBuffer;
use hal_x86_64::PortIo;

use crate::console::TextConsole;

/// `"0x"` plus eight digits
const HEX_LEN: usize = 10;

/// Longest `u32` in decimal ("4294967295")
const DEC_MAX_LEN: usize = 10;

/// Uppercase hex digit for the low nibble of `nibble`
pub const fn hex_digit(nibble: u8) -> u8 {
    let nibble = nibble & 0x0F;
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + (nibble - 10)
    }
}

/// A rendered `0xXXXXXXXX` value
///
/// One byte past the digits holds a NUL terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexString {
    bytes: [u8; HEX_LEN + 2],
}

impl HexString {
    /// The ten output bytes, without the terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..HEX_LEN]
    }

    /// The output bytes followed by the NUL terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..HEX_LEN + 1]
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits and "0x" are ever stored.
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

/// A rendered decimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecString {
    bytes: [u8; DEC_MAX_LEN],
    start: usize,
}

impl DecString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..]
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

/// Renders `value` as `0x` and exactly eight uppercase, zero-padded digits
pub fn format_hex(mut value: u32) -> HexString {
    let mut bytes = [0u8; HEX_LEN + 2];
    bytes[0] = b'0';
    bytes[1] = b'x';

    // Least significant nibble goes last
    for pos in (2..HEX_LEN).rev() {
        bytes[pos] = hex_digit((value & 0x0F) as u8);
        value >>= 4;
    }
    bytes[HEX_LEN] = 0;

    HexString { bytes }
}

/// Renders `value` in decimal with no padding
pub fn format_dec(mut value: u32) -> DecString {
    let mut bytes = [0u8; DEC_MAX_LEN];
    let mut start = DEC_MAX_LEN;

    loop {
        start -= 1;
        bytes[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    DecString { bytes, start }
}

impl<B: TextBuffer, P: PortIo> TextConsole<B, P> {
    /// Prints `value` as `0x` followed by eight uppercase hex digits
    pub fn put_hex(&mut self, value: u32) {
        let hex = format_hex(value);
        self.put_string(hex.as_bytes_with_nul());
    }

    /// Prints `value` in decimal
    pub fn put_dec(&mut self, value: u32) {
        let dec = format_dec(value);
        self.put_string(dec.as_bytes());
    }
}
