//! Console configuration
//!
//! The defaults describe a stock 80x25 VGA text screen with the CRT
//! controller at its color-mode ports. Only the wrap policy and tab width
//! change emission behavior; the rest describes the hardware.

use hal::TextBufferInfo;
use thiserror::Error;

use crate::attribute::VgaColor;
use crate::cursor::{CRTC_DATA_PORT, CRTC_INDEX_PORT};
#[cfg(test)]
use serde::{Deserialize, Serialize};

/// When the cursor wraps to the next row
#[cfg_attr(test, derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Wrap as soon as the column reaches the row width
    #[default]
    AtWidth,
    /// Wrap only once the column has passed the row width
    ///
    /// One more character lands at column `columns`, which aliases the first
    /// cell of the next row; the next character then overwrites it.
    PastWidth,
}

impl WrapPolicy {
    /// Whether a cursor at `x` must wrap on a screen `columns` wide
    pub const fn should_wrap(self, x: usize, columns: usize) -> bool {
        match self {
            WrapPolicy::AtWidth => x >= columns,
            WrapPolicy::PastWidth => x > columns,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab width {0} must be a non-zero power of two")]
    InvalidTabWidth(usize),

    #[error("tab width {tab_width} must be smaller than {columns} columns")]
    TabWiderThanRow { tab_width: usize, columns: usize },

    #[error("screen geometry {columns}x{rows} has no cells")]
    EmptyGeometry { columns: usize, rows: usize },

    #[error(
        "screen geometry {columns}x{rows} does not fit a {buffer_columns}x{buffer_rows} buffer"
    )]
    GeometryMismatch {
        columns: usize,
        rows: usize,
        buffer_columns: usize,
        buffer_rows: usize,
    },
}

/// Text console configuration
#[cfg_attr(test, derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Cells per row
    pub columns: usize,
    /// Visible rows
    pub rows: usize,
    /// Tab stop spacing
    pub tab_width: usize,
    /// Foreground restored by `clear()`
    pub default_foreground: VgaColor,
    /// Background restored by `clear()`
    pub default_background: VgaColor,
    /// Line wrap comparison
    pub wrap: WrapPolicy,
    /// CRTC index register port
    pub crtc_index_port: u16,
    /// CRTC data register port
    pub crtc_data_port: u16,
}

impl ConsoleConfig {
    /// Stock VGA text mode 3
    pub const VGA_TEXT: ConsoleConfig = ConsoleConfig {
        columns: 80,
        rows: 25,
        tab_width: 8,
        default_foreground: VgaColor::White,
        default_background: VgaColor::Black,
        wrap: WrapPolicy::AtWidth,
        crtc_index_port: CRTC_INDEX_PORT,
        crtc_data_port: CRTC_DATA_PORT,
    };

    /// Same as [`ConsoleConfig::VGA_TEXT`] with the legacy wrap comparison
    pub const fn legacy() -> Self {
        let mut config = Self::VGA_TEXT;
        config.wrap = WrapPolicy::PastWidth;
        config
    }

    /// Returns a copy with a different wrap policy
    pub const fn with_wrap(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = wrap;
        self
    }

    /// Attribute applied after a clear
    pub const fn default_attribute(&self) -> u8 {
        VgaColor::make_attr(self.default_foreground, self.default_background)
    }

    /// Number of visible cells
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Checks the configuration against the geometry of the target buffer
    ///
    /// The row stride is the buffer's, so the column count must match it
    /// exactly; fewer rows than the buffer holds are allowed.
    pub fn validate(&self, info: TextBufferInfo) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGeometry {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !self.tab_width.is_power_of_two() {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        if self.tab_width >= self.columns {
            return Err(ConfigError::TabWiderThanRow {
                tab_width: self.tab_width,
                columns: self.columns,
            });
        }
        if self.columns != info.columns || self.rows > info.rows {
            return Err(ConfigError::GeometryMismatch {
                columns: self.columns,
                rows: self.rows,
                buffer_columns: info.columns,
                buffer_rows: info.rows,
            });
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::VGA_TEXT
    }
}
