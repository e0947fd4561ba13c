//! Hardware cursor sync
//!
//! The blinking cursor is positioned by the VGA CRT controller. Every
//! register access is two port writes: the register number to the index
//! port, then the value to (or from) the data port.

use hal_x86_64::PortIo;

/// CRTC index register (color mode)
pub const CRTC_INDEX_PORT: u16 = 0x3D4;
/// CRTC data register (color mode)
pub const CRTC_DATA_PORT: u16 = 0x3D5;

/// Cursor start scanline register
pub const CURSOR_START_REG: u8 = 0x0A;
/// Cursor end scanline register
pub const CURSOR_END_REG: u8 = 0x0B;
/// Cursor location, high byte
pub const CURSOR_LOCATION_HIGH: u8 = 0x0E;
/// Cursor location, low byte
pub const CURSOR_LOCATION_LOW: u8 = 0x0F;

const CURSOR_DISABLE: u8 = 0x20;

/// The CRTC port pair that drives the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareCursor {
    index_port: u16,
    data_port: u16,
}

impl HardwareCursor {
    /// Standard color-mode ports
    pub const VGA: HardwareCursor = HardwareCursor::new(CRTC_INDEX_PORT, CRTC_DATA_PORT);

    pub const fn new(index_port: u16, data_port: u16) -> Self {
        Self {
            index_port,
            data_port,
        }
    }

    /// Moves the blinking cursor to linear cell `offset`
    ///
    /// High byte first, then low byte.
    pub fn set_position<P: PortIo>(&self, io: &mut P, offset: u16) {
        self.write_register(io, CURSOR_LOCATION_HIGH, (offset >> 8) as u8);
        self.write_register(io, CURSOR_LOCATION_LOW, (offset & 0xFF) as u8);
    }

    /// Reads the linear cell offset the hardware cursor sits at
    pub fn position<P: PortIo>(&self, io: &mut P) -> u16 {
        let low = self.read_register(io, CURSOR_LOCATION_LOW);
        let high = self.read_register(io, CURSOR_LOCATION_HIGH);
        ((high as u16) << 8) | low as u16
    }

    /// Shows the cursor spanning scanlines `start..=end`
    ///
    /// The reserved upper bits of both registers are preserved.
    pub fn enable<P: PortIo>(&self, io: &mut P, start: u8, end: u8) {
        let current = self.read_register(io, CURSOR_START_REG);
        self.write_register(io, CURSOR_START_REG, (current & 0xC0) | (start & 0x1F));

        let current = self.read_register(io, CURSOR_END_REG);
        self.write_register(io, CURSOR_END_REG, (current & 0xE0) | (end & 0x1F));
    }

    /// Hides the cursor
    pub fn disable<P: PortIo>(&self, io: &mut P) {
        self.write_register(io, CURSOR_START_REG, CURSOR_DISABLE);
    }

    fn write_register<P: PortIo>(&self, io: &mut P, register: u8, value: u8) {
        io.outb(self.index_port, register);
        io.outb(self.data_port, value);
    }

    fn read_register<P: PortIo>(&self, io: &mut P, register: u8) -> u8 {
        io.outb(self.index_port, register);
        io.inb(self.data_port)
    }
}

impl Default for HardwareCursor {
    fn default() -> Self {
        Self::VGA
    }
}
