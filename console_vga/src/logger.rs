//! `log` backend that prints to the text console
//!
//! Records are printed as `[LEVEL] target: message` with the level tag
//! colored by severity. The console's own attribute is restored afterwards
//! so log lines do not leak colors into regular output.

use core::fmt::Write;

use hal::TextBuffer;
use hal_x86_64::PortIo;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::attribute::VgaColor;
use crate::global::GlobalConsole;

/// Attribute for a level tag
pub const fn level_attribute(level: Level) -> u8 {
    let fg = match level {
        Level::Error => VgaColor::LightRed,
        Level::Warn => VgaColor::LightBrown,
        Level::Info => VgaColor::LightGreen,
        Level::Debug => VgaColor::LightCyan,
        Level::Trace => VgaColor::DarkGray,
    };
    VgaColor::make_attr(fg, VgaColor::Black)
}

/// Logger writing into a [`GlobalConsole`]
pub struct ConsoleLogger<B: TextBuffer + 'static, P: PortIo + 'static> {
    console: &'static GlobalConsole<B, P>,
    level: LevelFilter,
}

impl<B: TextBuffer + 'static, P: PortIo + 'static> ConsoleLogger<B, P> {
    pub const fn new(console: &'static GlobalConsole<B, P>, level: LevelFilter) -> Self {
        Self { console, level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl<B, P> Log for ConsoleLogger<B, P>
where
    B: TextBuffer + Send + 'static,
    P: PortIo + Send + 'static,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // A record raised while the console is locked is dropped rather
        // than deadlocking.
        self.console.try_with(|console| {
            let saved = console.attribute();

            console.set_attribute(level_attribute(record.level()));
            let _ = write!(console, "[{}]", record.level());
            console.set_attribute(saved);
            let _ = writeln!(console, " {}: {}", record.target(), record.args());
        });
    }

    fn flush(&self) {}
}

/// Registers `logger` as the global `log` backend
pub fn init<B, P>(logger: &'static ConsoleLogger<B, P>) -> Result<(), SetLoggerError>
where
    B: TextBuffer + Send + 'static,
    P: PortIo + Send + 'static,
{
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(())
}
