//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the hardware abstraction traits the console is written
//! against.
//!
//! ## Philosophy
//!
//! **Hardware is reached through traits, never through raw addresses in core logic.**
//!
//! The console driver never dereferences a fixed physical address itself. It
//! is handed a [`TextBuffer`] and writes cells through it. Architecture crates
//! provide the memory-mapped implementation; tests use [`MemoryTextBuffer`].
//!
//! ## Design Principles
//!
//! 1. **No x86-specific assumptions**: Core logic must work on any architecture
//! 2. **Trait-based**: All hardware operations go through traits
//! 3. **Minimal unsafe**: Hardware access requires unsafe, but keep it isolated
//! 4. **Testable**: HAL can be mocked for testing

#![cfg_attr(not(test), no_std)]

pub mod cpu;
pub mod text_buffer;

pub use cpu::CpuHal;
pub use text_buffer::{
    MemoryTextBuffer, TextBuffer, TextBufferInfo, TEXT_CELLS, TEXT_COLUMNS, TEXT_ROWS,
};
