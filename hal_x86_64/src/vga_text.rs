//! Memory-mapped VGA text buffer
//!
//! In text mode 3 the adapter exposes 80x25 cells of 16 bits each at
//! physical address `0xB8000`. Early boot runs identity-mapped, so the
//! physical address is also the virtual one; later stages pass in a
//! higher-half alias instead.

use core::ptr;

use hal::{TextBuffer, TextBufferInfo};

/// VGA text buffer physical address
pub const VGA_TEXT_BUFFER_PHYS: usize = 0xB8000;

/// VGA text buffer size (80x25 * 2 bytes per cell = 4000 bytes)
pub const VGA_TEXT_BUFFER_SIZE: usize = 80 * 25 * 2;

/// Text buffer backed by VGA memory
///
/// Every access is a single volatile 16-bit load or store, so a reader
/// never observes half a cell.
pub struct MmioTextBuffer {
    base: *mut u16,
    info: TextBufferInfo,
}

impl MmioTextBuffer {
    /// Wraps the VGA text buffer at `virt_addr`
    ///
    /// # Safety
    ///
    /// The caller must ensure that `virt_addr` points to a valid, mapped VGA
    /// text buffer of at least [`VGA_TEXT_BUFFER_SIZE`] bytes, and that no
    /// other live `MmioTextBuffer` aliases it.
    pub unsafe fn new(virt_addr: usize) -> Self {
        Self {
            base: virt_addr as *mut u16,
            info: TextBufferInfo::VGA_80X25,
        }
    }

    /// Wraps the identity-mapped buffer at [`VGA_TEXT_BUFFER_PHYS`]
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioTextBuffer::new`]; additionally the low
    /// megabyte must be identity-mapped.
    pub unsafe fn identity_mapped() -> Self {
        Self::new(VGA_TEXT_BUFFER_PHYS)
    }
}

impl TextBuffer for MmioTextBuffer {
    fn info(&self) -> TextBufferInfo {
        self.info
    }

    fn read_cell(&self, index: usize) -> Option<u16> {
        if index >= self.info.cell_count() {
            return None;
        }
        // SAFETY: index is bounds-checked against the mapped cell count.
        Some(unsafe { ptr::read_volatile(self.base.add(index)) })
    }

    fn write_cell(&mut self, index: usize, cell: u16) -> bool {
        if index >= self.info.cell_count() {
            return false;
        }
        // SAFETY: index is bounds-checked against the mapped cell count.
        unsafe { ptr::write_volatile(self.base.add(index), cell) };
        true
    }
}

// The buffer is plain device memory; ownership moves with the console that
// holds it, and shared access goes through the console's lock.
unsafe impl Send for MmioTextBuffer {}
