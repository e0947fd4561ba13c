//! Shared console instance
//!
//! The kernel has one screen. [`GlobalConsole`] lets it live in a `static`
//! behind a spin lock so the entry point, the panic handler and the logger
//! all reach the same console. Before [`GlobalConsole::install`] runs, every
//! call is a silent no-op.

use core::fmt;

use hal::TextBuffer;
use hal_x86_64::PortIo;
use spin::Mutex;

use crate::console::TextConsole;

/// Lock-protected, lazily installed console
pub struct GlobalConsole<B: TextBuffer, P: PortIo> {
    inner: Mutex<Option<TextConsole<B, P>>>,
}

impl<B: TextBuffer, P: PortIo> GlobalConsole<B, P> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Installs `console` and clears the screen
    ///
    /// Returns the previously installed console, if any.
    pub fn install(&self, mut console: TextConsole<B, P>) -> Option<TextConsole<B, P>> {
        console.initialize();
        self.inner.lock().replace(console)
    }

    /// Removes the installed console
    pub fn take(&self) -> Option<TextConsole<B, P>> {
        self.inner.lock().take()
    }

    pub fn is_installed(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Runs `f` against the installed console
    ///
    /// Returns `None` when no console is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut TextConsole<B, P>) -> R) -> Option<R> {
        self.inner.lock().as_mut().map(f)
    }

    /// Like [`GlobalConsole::with`], but gives up instead of spinning if the
    /// lock is held (e.g. a panic raised while printing)
    pub fn try_with<R>(&self, f: impl FnOnce(&mut TextConsole<B, P>) -> R) -> Option<R> {
        self.inner.try_lock()?.as_mut().map(f)
    }

    /// Clears the screen and resets colors and cursor
    pub fn initialize(&self) {
        self.with(|console| console.initialize());
    }

    pub fn set_color(&self, foreground: u8, background: u8) {
        self.with(|console| console.set_color(foreground, background));
    }

    pub fn write_string(&self, bytes: &[u8]) {
        self.with(|console| console.put_string(bytes));
    }

    pub fn write_hex(&self, value: u32) {
        self.with(|console| console.put_hex(value));
    }

    pub fn write_dec(&self, value: u32) {
        self.with(|console| console.put_dec(value));
    }

    /// Formats `args` onto the console
    pub fn write_fmt(&self, args: fmt::Arguments) {
        self.with(|console| {
            let _ = fmt::Write::write_fmt(console, args);
        });
    }
}

impl<B: TextBuffer, P: PortIo> Default for GlobalConsole<B, P> {
    fn default() -> Self {
        Self::new()
    }
}
