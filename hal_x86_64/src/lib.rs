//! # x86_64 Hardware Abstraction Layer
//!
//! This crate implements the HAL traits for x86_64 (and i686) text-mode boot.
//!
//! ## Scope
//!
//! - [`port_io`]: `in`/`out` instructions behind the [`PortIo`] trait
//! - [`vga_text`]: the memory-mapped text buffer at physical `0xB8000`
//! - [`X86_64Cpu`]: `hlt`

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

use hal::CpuHal;

pub mod port_io;
pub mod vga_text;

#[cfg(feature = "alloc")]
pub use port_io::FakePortIo;
pub use port_io::{PortIo, RealPortIo};
pub use vga_text::{MmioTextBuffer, VGA_TEXT_BUFFER_PHYS, VGA_TEXT_BUFFER_SIZE};

/// x86_64 CPU implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct X86_64Cpu;

impl CpuHal for X86_64Cpu {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    fn halt(&self) {
        // SAFETY: hlt only parks the core until the next interrupt.
        unsafe {
            core::arch::asm!("hlt", options(nomem, nostack, preserves_flags));
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    fn halt(&self) {
        core::hint::spin_loop();
    }
}
