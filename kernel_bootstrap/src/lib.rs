#![cfg_attr(not(test), no_std)]

//! Kernel bootstrap library
//!
//! Holds the testable part of the boot sequence: the fixed greeting the
//! kernel prints once the console is up.

use console_vga::{TextConsole, VgaColor};
use hal::TextBuffer;
use hal_x86_64::{PortIo, VGA_TEXT_BUFFER_PHYS};

pub const GREETING: &[u8] = b"Hello, World!\n";
pub const WELCOME: &[u8] = b"\tWelcome to my OS!\n";
pub const VIDEO_ADDRESS_LABEL: &[u8] = b"The address for video memory is: ";

/// Clears the screen and prints the boot greeting
///
/// The welcome line is red on light grey; everything else is white on black.
/// Output ends right after the video memory address, with no newline.
pub fn greet<B: TextBuffer, P: PortIo>(console: &mut TextConsole<B, P>) {
    console.initialize();
    console.put_string(GREETING);

    console.set_color(VgaColor::Red as u8, VgaColor::LightGray as u8);
    console.put_string(WELCOME);

    console.set_color(VgaColor::White as u8, VgaColor::Black as u8);
    console.put_string(VIDEO_ADDRESS_LABEL);
    console.put_hex(VGA_TEXT_BUFFER_PHYS as u32);
}
