//! Port I/O abstraction for x86
//!
//! This module provides a trait-based abstraction for x86 port I/O operations,
//! allowing for both real hardware access and fake implementations for testing.
//!
//! The text console uses it to drive the VGA CRT controller (ports `0x3D4` and
//! `0x3D5`), which positions the blinking hardware cursor.
//!
//! ## Safety
//!
//! Port I/O operations are inherently unsafe as they directly interact with hardware.
//! Care must be taken to:
//! - Only access valid hardware ports
//! - Not interfere with other system components
//!
//! The `RealPortIo` implementation isolates all unsafe code to small, auditable functions.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Port I/O trait
///
/// Abstracts x86 I/O port operations to allow test doubles.
///
/// ## Implementation Notes
///
/// Implementations must guarantee:
/// - Each call is a single hardware transaction
/// - Operations complete synchronously, in call order, before returning
pub trait PortIo {
    /// Reads a byte from an I/O port
    fn inb(&mut self, port: u16) -> u8;

    /// Writes a byte to an I/O port
    fn outb(&mut self, port: u16, value: u8);

    /// Reads a 16-bit word from an I/O port
    fn inw(&mut self, port: u16) -> u16;

    /// Writes a 16-bit word to an I/O port
    fn outw(&mut self, port: u16, value: u16);
}

/// Real hardware port I/O implementation
///
/// Uses x86 `in` and `out` instructions to access hardware ports.
///
/// ## Safety
///
/// This implementation is only safe when:
/// - Running on x86/x86_64 architecture with I/O privilege (ring 0 in early boot)
/// - Accessing ports that exist and are safe to access
///
/// ## Example
///
/// ```rust,ignore
/// let mut io = RealPortIo::new();
/// io.outb(0x3D4, 0x0F); // Select cursor location low register
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RealPortIo;

impl RealPortIo {
    /// Creates a new real port I/O implementation
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl PortIo for RealPortIo {
    #[inline]
    fn inb(&mut self, port: u16) -> u8 {
        // SAFETY: Raw port read. The caller picked a port that is valid on
        // this machine and the kernel runs with I/O privilege.
        unsafe {
            let value: u8;
            core::arch::asm!(
                "in al, dx",
                in("dx") port,
                out("al") value,
                options(nomem, nostack, preserves_flags)
            );
            value
        }
    }

    #[inline]
    fn outb(&mut self, port: u16, value: u8) {
        // SAFETY: Raw port write, same preconditions as `inb`.
        unsafe {
            core::arch::asm!(
                "out dx, al",
                in("dx") port,
                in("al") value,
                options(nomem, nostack, preserves_flags)
            );
        }
    }

    #[inline]
    fn inw(&mut self, port: u16) -> u16 {
        // SAFETY: Raw port read, same preconditions as `inb`.
        unsafe {
            let value: u16;
            core::arch::asm!(
                "in ax, dx",
                in("dx") port,
                out("ax") value,
                options(nomem, nostack, preserves_flags)
            );
            value
        }
    }

    #[inline]
    fn outw(&mut self, port: u16, value: u16) {
        // SAFETY: Raw port write, same preconditions as `inb`.
        unsafe {
            core::arch::asm!(
                "out dx, ax",
                in("dx") port,
                in("ax") value,
                options(nomem, nostack, preserves_flags)
            );
        }
    }
}

/// Fake port I/O implementation for testing
///
/// Allows scripted reads and captures writes for test verification.
///
/// ## Example
///
/// ```rust
/// use hal_x86_64::port_io::{FakePortIo, PortIo};
///
/// let mut io = FakePortIo::new();
/// io.script_read(0x3D5, 0x0D); // Cursor start register contents
///
/// io.outb(0x3D4, 0x0A);
/// assert_eq!(io.inb(0x3D5), 0x0D);
///
/// assert_eq!(io.writes(), &[(0x3D4, 0x0A)]);
/// assert_eq!(io.remaining_reads(), 0);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Default)]
pub struct FakePortIo {
    /// Scripted byte reads: (port, value)
    read_script: Vec<(u16, u8)>,
    /// Current byte read index
    read_index: usize,
    /// Scripted word reads: (port, value)
    word_script: Vec<(u16, u16)>,
    /// Current word read index
    word_index: usize,
    /// Captured byte writes: (port, value)
    writes: Vec<(u16, u8)>,
    /// Captured word writes: (port, value)
    word_writes: Vec<(u16, u16)>,
}

#[cfg(feature = "alloc")]
impl FakePortIo {
    /// Creates a new fake port I/O implementation
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a read operation
    ///
    /// The next call to `inb(port)` with the specified port will return `value`.
    pub fn script_read(&mut self, port: u16, value: u8) {
        self.read_script.push((port, value));
    }

    /// Scripts multiple read operations
    pub fn script_reads(&mut self, reads: &[(u16, u8)]) {
        self.read_script.extend_from_slice(reads);
    }

    /// Scripts a word read operation
    pub fn script_read_word(&mut self, port: u16, value: u16) {
        self.word_script.push((port, value));
    }

    /// Returns the number of scripted reads (byte and word) remaining
    pub fn remaining_reads(&self) -> usize {
        (self.read_script.len() - self.read_index) + (self.word_script.len() - self.word_index)
    }

    /// Returns all captured byte writes
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }

    /// Returns all captured word writes
    pub fn word_writes(&self) -> &[(u16, u16)] {
        &self.word_writes
    }

    /// Clears all captured writes
    pub fn clear_writes(&mut self) {
        self.writes.clear();
        self.word_writes.clear();
    }

    /// Resets the read script (clears all reads and resets index)
    pub fn reset_reads(&mut self) {
        self.read_script.clear();
        self.read_index = 0;
        self.word_script.clear();
        self.word_index = 0;
    }
}

#[cfg(feature = "alloc")]
impl PortIo for FakePortIo {
    fn inb(&mut self, port: u16) -> u8 {
        if self.read_index >= self.read_script.len() {
            panic!(
                "FakePortIo: No scripted read for port 0x{:04X} (read_index={}, script_len={})",
                port,
                self.read_index,
                self.read_script.len()
            );
        }

        let (expected_port, value) = self.read_script[self.read_index];
        if port != expected_port {
            panic!(
                "FakePortIo: Port mismatch at read_index={}: expected 0x{:04X}, got 0x{:04X}",
                self.read_index, expected_port, port
            );
        }

        self.read_index += 1;
        value
    }

    fn outb(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
    }

    fn inw(&mut self, port: u16) -> u16 {
        if self.word_index >= self.word_script.len() {
            panic!(
                "FakePortIo: No scripted word read for port 0x{:04X} (word_index={}, script_len={})",
                port,
                self.word_index,
                self.word_script.len()
            );
        }

        let (expected_port, value) = self.word_script[self.word_index];
        if port != expected_port {
            panic!(
                "FakePortIo: Port mismatch at word_index={}: expected 0x{:04X}, got 0x{:04X}",
                self.word_index, expected_port, port
            );
        }

        self.word_index += 1;
        value
    }

    fn outw(&mut self, port: u16, value: u16) {
        self.word_writes.push((port, value));
    }
}
