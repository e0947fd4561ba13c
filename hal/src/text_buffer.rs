//! # Text Buffer HAL
//!
//! This module defines the hardware abstraction for character-cell displays.
//!
//! ## Philosophy
//!
//! A text display is a row-major grid of 16-bit cells: low byte is the
//! character code, high byte is the attribute. The trait exposes that grid
//! through bounds-checked cell indexing and nothing else. No cursor, no
//! colors, no line discipline; those belong to the console driver.
//!
//! ## Design Principles
//!
//! 1. **Bounds-checked**: Out-of-range writes are dropped, reads return `None`
//! 2. **Whole cells**: Every write is a single 16-bit store, never a split byte pair
//! 3. **Swappable**: Memory-mapped in production, an array in tests

/// Standard VGA text mode width
pub const TEXT_COLUMNS: usize = 80;

/// Standard VGA text mode height
pub const TEXT_ROWS: usize = 25;

/// Number of cells in a standard text screen
pub const TEXT_CELLS: usize = TEXT_COLUMNS * TEXT_ROWS;

/// Text buffer geometry
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextBufferInfo {
    /// Cells per row
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
}

impl TextBufferInfo {
    /// The 80x25 layout of VGA text mode 3
    pub const VGA_80X25: TextBufferInfo = TextBufferInfo {
        columns: TEXT_COLUMNS,
        rows: TEXT_ROWS,
    };

    /// Linear cell index for (col, row)
    pub const fn index(&self, col: usize, row: usize) -> usize {
        row * self.columns + col
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}

/// Character-cell display surface
///
/// Implementations own (or borrow) `info().cell_count()` cells.
pub trait TextBuffer {
    /// Returns the buffer geometry
    fn info(&self) -> TextBufferInfo;

    /// Reads the cell at a linear index
    ///
    /// Returns `None` if `index` is outside the buffer.
    fn read_cell(&self, index: usize) -> Option<u16>;

    /// Writes the cell at a linear index
    ///
    /// Returns `false` (and writes nothing) if `index` is outside the buffer.
    fn write_cell(&mut self, index: usize, cell: u16) -> bool;

    /// Copies `count` cells from `src` to `dst`
    ///
    /// The copy runs forward one cell at a time. Overlapping ranges are only
    /// safe when `src >= dst`, which is the direction scrolling uses. Stops at
    /// the first index that falls outside the buffer.
    fn copy_cells(&mut self, dst: usize, src: usize, count: usize) {
        for i in 0..count {
            let Some(cell) = self.read_cell(src + i) else {
                break;
            };
            if !self.write_cell(dst + i, cell) {
                break;
            }
        }
    }

    /// Writes `cell` into `count` consecutive cells starting at `start`
    fn fill_cells(&mut self, start: usize, cell: u16, count: usize) {
        for i in 0..count {
            if !self.write_cell(start + i, cell) {
                break;
            }
        }
    }
}

/// In-memory 80x25 text buffer
///
/// Used by tests and anywhere a shadow copy of the screen is useful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTextBuffer {
    cells: [u16; TEXT_CELLS],
}

impl MemoryTextBuffer {
    /// Creates a buffer with every cell zeroed
    pub const fn new() -> Self {
        Self {
            cells: [0; TEXT_CELLS],
        }
    }

    /// Creates a buffer with every cell set to `cell`
    pub const fn filled(cell: u16) -> Self {
        Self {
            cells: [cell; TEXT_CELLS],
        }
    }

    /// Returns all cells in row-major order
    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    /// Returns the cell at (col, row), or `None` when out of range
    pub fn cell_at(&self, col: usize, row: usize) -> Option<u16> {
        if col >= TEXT_COLUMNS || row >= TEXT_ROWS {
            return None;
        }
        self.read_cell(TextBufferInfo::VGA_80X25.index(col, row))
    }

    /// Character byte at (col, row); 0 when out of range
    pub fn char_at(&self, col: usize, row: usize) -> u8 {
        self.cell_at(col, row).map_or(0, |cell| (cell & 0xFF) as u8)
    }

    /// Attribute byte at (col, row); 0 when out of range
    pub fn attr_at(&self, col: usize, row: usize) -> u8 {
        self.cell_at(col, row).map_or(0, |cell| (cell >> 8) as u8)
    }

    /// Copies the character bytes of one row into `out`
    ///
    /// Returns the number of bytes written, at most `TEXT_COLUMNS`.
    pub fn row_chars(&self, row: usize, out: &mut [u8]) -> usize {
        if row >= TEXT_ROWS {
            return 0;
        }
        let mut written = 0;
        for (col, slot) in out.iter_mut().take(TEXT_COLUMNS).enumerate() {
            *slot = self.char_at(col, row);
            written += 1;
        }
        written
    }
}

impl Default for MemoryTextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryTextBuffer {
    fn info(&self) -> TextBufferInfo {
        TextBufferInfo::VGA_80X25
    }

    fn read_cell(&self, index: usize) -> Option<u16> {
        self.cells.get(index).copied()
    }

    fn write_cell(&mut self, index: usize, cell: u16) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }
}
