//! # VGA Text Console
//!
//! This crate drives an 80x25 VGA text screen for early boot.
//!
//! ## Philosophy
//!
//! This is NOT a terminal emulator. No ANSI escape codes, no VT100, no TTY model.
//! Bytes go in, cells come out: a small line discipline (backspace, tab,
//! carriage return, newline), wrapping, scrolling, and a hardware cursor
//! that follows the logical one.
//!
//! ## Design Principles
//!
//! 1. **Total**: Every console operation succeeds; bad input is masked or ignored
//! 2. **Testable**: The screen is a [`hal::TextBuffer`], the cursor ports a [`hal_x86_64::PortIo`]
//! 3. **No unsafe**: Raw memory and port access live in `hal_x86_64`
//! 4. **Explicit state**: The cursor and attribute belong to a [`TextConsole`], not a global
//!
//! ## Example
//!
//! ```
//! use console_vga::{TextConsole, VgaColor};
//! use hal::MemoryTextBuffer;
//! use hal_x86_64::FakePortIo;
//!
//! let mut console = TextConsole::new(MemoryTextBuffer::new(), FakePortIo::new());
//! console.initialize();
//! console.set_color(VgaColor::Red as u8, VgaColor::LightGray as u8);
//! console.put_string(b"Hi");
//!
//! assert_eq!(console.buffer().char_at(1, 0), b'i');
//! assert_eq!(console.cursor_position(), (2, 0));
//! ```

#![cfg_attr(not(test), no_std)]

pub mod attribute;
pub mod config;
pub mod console;
pub mod cursor;
pub mod format;
pub mod global;
pub mod logger;

pub use attribute::{
    attribute_of, cell_of, cell_of_colors, split_cell, VgaColor, BLANK_CELL, DEFAULT_ATTRIBUTE,
};
pub use config::{ConfigError, ConsoleConfig, WrapPolicy};
pub use console::{ConsoleState, TextConsole};
pub use cursor::HardwareCursor;
pub use format::{format_dec, format_hex, hex_digit, DecString, HexString};
pub use global::GlobalConsole;
pub use logger::ConsoleLogger;

/// VGA text mode dimensions
pub const VGA_WIDTH: usize = hal::TEXT_COLUMNS;
pub const VGA_HEIGHT: usize = hal::TEXT_ROWS;
