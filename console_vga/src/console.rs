//! Display buffer driver
//!
//! [`TextConsole`] owns a [`TextBuffer`], the port I/O used for the hardware
//! cursor, and the [`ConsoleState`] (cursor plus current attribute). Bytes
//! go in one at a time through [`TextConsole::put_char`], which applies the
//! line discipline, wraps, scrolls and finally resyncs the hardware cursor.

use core::fmt;
use core::sync::atomic::{compiler_fence, Ordering};

use hal::TextBuffer;
use hal_x86_64::PortIo;

use crate::attribute::{attribute_of, cell_of};
use crate::config::{ConfigError, ConsoleConfig};
use crate::cursor::HardwareCursor;

const BACKSPACE: u8 = 0x08;
const TAB: u8 = 0x09;

/// Cursor position and current attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleState {
    attribute: u8,
    x: usize,
    y: usize,
}

impl ConsoleState {
    pub const fn new(attribute: u8) -> Self {
        Self {
            attribute,
            x: 0,
            y: 0,
        }
    }

    /// Attribute applied to newly written characters
    pub const fn attribute(&self) -> u8 {
        self.attribute
    }

    /// `(column, row)` of the next character
    pub const fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Sets the current colors; both are masked to four bits
    pub fn set_color(&mut self, foreground: u8, background: u8) {
        self.attribute = attribute_of(foreground, background);
    }

    pub fn set_attribute(&mut self, attribute: u8) {
        self.attribute = attribute;
    }

    fn reset(&mut self, attribute: u8) {
        *self = Self::new(attribute);
    }
}

/// VGA-style text console
pub struct TextConsole<B: TextBuffer, P: PortIo> {
    buffer: B,
    io: P,
    cursor: HardwareCursor,
    config: ConsoleConfig,
    state: ConsoleState,
}

impl<B: TextBuffer, P: PortIo> TextConsole<B, P> {
    /// Creates a console sized to `buffer` with default settings
    ///
    /// `buffer` must have at least one row and be wider than a tab stop;
    /// use [`TextConsole::with_config`] to get an error instead.
    /// Nothing is written until [`TextConsole::initialize`] runs.
    pub fn new(buffer: B, io: P) -> Self {
        let info = buffer.info();
        let mut config = ConsoleConfig::default();
        config.columns = info.columns;
        config.rows = info.rows;
        debug_assert_eq!(config.validate(info), Ok(()), "unusable text buffer geometry");
        Self::from_parts(buffer, io, config)
    }

    /// Creates a console with an explicit configuration
    pub fn with_config(buffer: B, io: P, config: ConsoleConfig) -> Result<Self, ConfigError> {
        config.validate(buffer.info())?;
        Ok(Self::from_parts(buffer, io, config))
    }

    fn from_parts(buffer: B, io: P, config: ConsoleConfig) -> Self {
        Self {
            buffer,
            io,
            cursor: HardwareCursor::new(config.crtc_index_port, config.crtc_data_port),
            state: ConsoleState::new(config.default_attribute()),
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// `(column, row)` of the next character
    pub fn cursor_position(&self) -> (usize, usize) {
        self.state.cursor()
    }

    pub fn attribute(&self) -> u8 {
        self.state.attribute()
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn io(&self) -> &P {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut P {
        &mut self.io
    }

    /// Releases the buffer and port I/O
    pub fn into_parts(self) -> (B, P) {
        (self.buffer, self.io)
    }

    /// Sets the attribute for subsequent characters
    pub fn set_color(&mut self, foreground: u8, background: u8) {
        self.state.set_color(foreground, background);
    }

    pub fn set_attribute(&mut self, attribute: u8) {
        self.state.set_attribute(attribute);
    }

    /// Prepares the screen for output; same as [`TextConsole::clear`]
    pub fn initialize(&mut self) {
        self.clear();
    }

    /// Blanks every cell, resets the attribute and homes the cursor
    ///
    /// Rows of the buffer below the configured screen are blanked too.
    pub fn clear(&mut self) {
        let blank = self.blank_cell();
        let cells = self.buffer.info().cell_count();
        self.buffer.fill_cells(0, blank, cells);

        self.state.reset(self.config.default_attribute());
        self.update_cursor();
    }

    /// Scrolls the screen up if the cursor has run past the last row
    ///
    /// Afterwards the cursor row is always visible.
    pub fn scroll(&mut self) {
        let rows = self.config.rows;
        let columns = self.config.columns;
        if self.state.y < rows {
            return;
        }

        let offset = self.state.y - rows + 1;
        let blank = self.blank_cell();
        if offset >= rows {
            self.buffer.fill_cells(0, blank, rows * columns);
        } else {
            self.buffer
                .copy_cells(0, offset * columns, (rows - offset) * columns);
            self.buffer
                .fill_cells((rows - offset) * columns, blank, offset * columns);
        }
        self.state.y = rows.saturating_sub(1);
    }

    /// Emits one byte
    ///
    /// | byte | effect |
    /// |---|---|
    /// | `0x08` | cursor left, stopping at column 0 |
    /// | `0x09` | cursor to the next tab stop |
    /// | `\r` | column 0 |
    /// | `\n` | column 0 of the next row |
    /// | `>= b' '` | cell written in the current attribute, cursor right |
    /// | anything else | ignored |
    pub fn put_char(&mut self, c: u8) {
        match c {
            BACKSPACE => {
                if self.state.x > 0 {
                    self.state.x -= 1;
                }
            }
            TAB => {
                let tab = self.config.tab_width;
                self.state.x = (self.state.x + tab) & !(tab - 1);
            }
            b'\r' => self.state.x = 0,
            b'\n' => {
                self.state.x = 0;
                self.state.y += 1;
            }
            c if c >= b' ' => {
                // Linear addressing: under PastWidth, column `columns` lands
                // on the first cell of the next row.
                let index = self.state.y * self.config.columns + self.state.x;
                self.buffer.write_cell(index, cell_of(c, self.state.attribute));
                self.state.x += 1;
            }
            _ => {}
        }

        if self.config.wrap.should_wrap(self.state.x, self.config.columns) {
            self.state.x = 0;
            self.state.y += 1;
        }

        self.scroll();
        self.update_cursor();
    }

    /// Emits bytes up to the first NUL or the end of the slice
    pub fn put_string(&mut self, s: &[u8]) {
        for &byte in s.iter().take_while(|&&byte| byte != 0) {
            self.put_char(byte);
        }
    }

    /// Writes a cell at (col, row) with an explicit attribute
    ///
    /// The cursor does not move. Returns false if (col, row) is off-screen.
    pub fn write_at(&mut self, col: usize, row: usize, ch: u8, attr: u8) -> bool {
        if col >= self.config.columns || row >= self.config.rows {
            return false;
        }
        self.buffer
            .write_cell(row * self.config.columns + col, cell_of(ch, attr))
    }

    /// Mirrors the logical cursor into the CRT controller
    pub fn update_cursor(&mut self) {
        let offset = self.state.y * self.config.columns + self.state.x;
        // Cell stores must not sink below the cursor port writes.
        compiler_fence(Ordering::SeqCst);
        self.cursor.set_position(&mut self.io, offset as u16);
    }

    /// Shows the hardware cursor over scanlines `start..=end`
    pub fn enable_cursor(&mut self, start: u8, end: u8) {
        self.cursor.enable(&mut self.io, start, end);
    }

    /// Hides the hardware cursor
    pub fn disable_cursor(&mut self) {
        self.cursor.disable(&mut self.io);
    }

    fn blank_cell(&self) -> u16 {
        cell_of(b' ', self.config.default_attribute())
    }
}

impl<B: TextBuffer, P: PortIo> fmt::Write for TextConsole<B, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_string(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{VgaColor, BLANK_CELL};
    use crate::config::WrapPolicy;
    use hal::{MemoryTextBuffer, TextBufferInfo, TEXT_CELLS, TEXT_COLUMNS, TEXT_ROWS};
    use hal_x86_64::FakePortIo;

    type TestConsole = TextConsole<MemoryTextBuffer, FakePortIo>;

    fn console() -> TestConsole {
        let mut console = TextConsole::new(MemoryTextBuffer::new(), FakePortIo::new());
        console.initialize();
        console.io_mut().clear_writes();
        console
    }

    fn legacy_console() -> TestConsole {
        let mut console = TextConsole::with_config(
            MemoryTextBuffer::new(),
            FakePortIo::new(),
            ConsoleConfig::legacy(),
        )
        .unwrap();
        console.initialize();
        console
    }

    fn row_string(console: &TestConsole, row: usize) -> String {
        let mut bytes = [0u8; TEXT_COLUMNS];
        console.buffer().row_chars(row, &mut bytes);
        String::from_utf8_lossy(&bytes).trim_end().to_string()
    }

    #[test]
    fn test_new_uses_buffer_geometry() {
        let console = TextConsole::new(MemoryTextBuffer::new(), FakePortIo::new());
        assert_eq!(console.config().columns, TEXT_COLUMNS);
        assert_eq!(console.config().rows, TEXT_ROWS);
        assert_eq!(console.cursor_position(), (0, 0));
        assert_eq!(console.attribute(), 0x0F);
        // Nothing touched before initialize
        assert!(console.buffer().cells().iter().all(|&cell| cell == 0));
        assert!(console.io().writes().is_empty());
    }

    #[test]
    fn test_with_config_rejects_bad_tab() {
        let mut config = ConsoleConfig::default();
        config.tab_width = 3;
        let result = TextConsole::with_config(MemoryTextBuffer::new(), FakePortIo::new(), config);
        assert!(matches!(result, Err(ConfigError::InvalidTabWidth(3))));
    }

    /// Buffer with a configurable geometry and no backing cells
    struct ShapedBuffer(TextBufferInfo);

    impl TextBuffer for ShapedBuffer {
        fn info(&self) -> TextBufferInfo {
            self.0
        }

        fn read_cell(&self, _index: usize) -> Option<u16> {
            None
        }

        fn write_cell(&mut self, _index: usize, _cell: u16) -> bool {
            false
        }
    }

    #[test]
    fn test_with_config_rejects_narrow_screen() {
        let mut config = ConsoleConfig::default();
        config.columns = 40;
        let result = TextConsole::with_config(MemoryTextBuffer::new(), FakePortIo::new(), config);
        assert!(matches!(
            result,
            Err(ConfigError::GeometryMismatch {
                columns: 40,
                buffer_columns: 80,
                ..
            })
        ));
    }

    #[test]
    fn test_with_config_rejects_unusable_buffer() {
        let empty = ShapedBuffer(TextBufferInfo { columns: 80, rows: 0 });
        let result = TextConsole::with_config(empty, FakePortIo::new(), ConsoleConfig::default());
        assert!(matches!(result, Err(ConfigError::EmptyGeometry { .. })));

        let mut config = ConsoleConfig::default();
        config.columns = 8;
        let narrow = ShapedBuffer(TextBufferInfo { columns: 8, rows: 25 });
        let result = TextConsole::with_config(narrow, FakePortIo::new(), config);
        assert!(matches!(result, Err(ConfigError::TabWiderThanRow { .. })));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unusable text buffer geometry")]
    fn test_new_rejects_zero_rows() {
        let empty = ShapedBuffer(TextBufferInfo { columns: 80, rows: 0 });
        let _ = TextConsole::new(empty, FakePortIo::new());
    }

    #[test]
    fn test_short_screen_clears_whole_buffer() {
        let mut config = ConsoleConfig::default();
        config.rows = 10;
        let mut console =
            TextConsole::with_config(MemoryTextBuffer::filled(0x4142), FakePortIo::new(), config)
                .unwrap();
        console.initialize();
        assert!(console.buffer().cells().iter().all(|&cell| cell == BLANK_CELL));

        console.put_string(b"\nX");
        assert_eq!(console.buffer().char_at(0, 1), b'X');
        assert_eq!(console.buffer().char_at(40, 0), b' ');

        for _ in 0..20 {
            console.put_char(b'\n');
        }
        assert_eq!(console.cursor_position(), (0, 9));
    }

    #[test]
    fn test_clear_blanks_every_cell() {
        let mut console = TextConsole::new(MemoryTextBuffer::filled(0x4142), FakePortIo::new());
        console.set_color(VgaColor::Red as u8, VgaColor::Blue as u8);
        console.clear();

        assert_eq!(console.buffer().cells().len(), TEXT_CELLS);
        assert!(console.buffer().cells().iter().all(|&cell| cell == BLANK_CELL));
        assert_eq!(console.cursor_position(), (0, 0));
        assert_eq!(console.attribute(), 0x0F);
        assert_eq!(
            console.io().writes(),
            &[(0x3D4, 0x0E), (0x3D5, 0), (0x3D4, 0x0F), (0x3D5, 0)]
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut console = console();
        console.put_string(b"some text\nmore");
        console.clear();
        let once = console.buffer().clone();
        let state_once = *console.state();

        console.clear();
        assert_eq!(console.buffer(), &once);
        assert_eq!(console.state(), &state_once);
    }

    #[test]
    fn test_put_string_hi() {
        let mut console = console();
        console.put_string(b"Hi");

        let attr = console.attribute();
        assert_eq!(console.buffer().cell_at(0, 0), Some(cell_of(b'H', attr)));
        assert_eq!(console.buffer().cell_at(1, 0), Some(cell_of(b'i', attr)));
        assert_eq!(console.cursor_position(), (2, 0));
    }

    #[test]
    fn test_put_string_stops_at_nul() {
        let mut console = console();
        console.put_string(b"ab\0cd");

        assert_eq!(row_string(&console, 0), "ab");
        assert_eq!(console.cursor_position(), (2, 0));
    }

    #[test]
    fn test_set_color_applies_to_new_chars() {
        let mut console = console();
        console.put_char(b'a');
        console.set_color(VgaColor::Red as u8, VgaColor::LightGray as u8);
        console.put_char(b'b');

        assert_eq!(console.buffer().attr_at(0, 0), 0x0F);
        assert_eq!(console.buffer().attr_at(1, 0), 0x74);
    }

    #[test]
    fn test_every_put_char_syncs_cursor() {
        let mut console = console();
        console.put_char(b'x');
        console.put_char(0x01);

        assert_eq!(
            console.io().writes(),
            &[
                (0x3D4, 0x0E),
                (0x3D5, 0),
                (0x3D4, 0x0F),
                (0x3D5, 1),
                (0x3D4, 0x0E),
                (0x3D5, 0),
                (0x3D4, 0x0F),
                (0x3D5, 1),
            ]
        );
    }

    #[test]
    fn test_tab_stops() {
        let mut console = console();
        console.put_string(b"abc");
        console.put_char(b'\t');
        assert_eq!(console.cursor_position(), (8, 0));

        console.put_char(b'\t');
        assert_eq!(console.cursor_position(), (16, 0));
    }

    #[test]
    fn test_tab_leaves_cells_untouched() {
        let mut console = console();
        console.put_string(b"\tx");
        assert_eq!(console.buffer().char_at(0, 0), b' ');
        assert_eq!(console.buffer().char_at(8, 0), b'x');
    }

    #[test]
    fn test_backspace() {
        let mut console = console();
        console.put_char(0x08);
        assert_eq!(console.cursor_position(), (0, 0));

        console.put_string(b"ab");
        console.put_char(0x08);
        assert_eq!(console.cursor_position(), (1, 0));
        // Backspace moves, it does not erase
        assert_eq!(console.buffer().char_at(1, 0), b'b');

        console.put_char(b'c');
        assert_eq!(row_string(&console, 0), "ac");
    }

    #[test]
    fn test_carriage_return_and_newline() {
        let mut console = console();
        console.put_string(b"hello\rj");
        assert_eq!(row_string(&console, 0), "jello");
        assert_eq!(console.cursor_position(), (1, 0));

        console.put_string(b"\nworld");
        assert_eq!(row_string(&console, 1), "world");
        assert_eq!(console.cursor_position(), (5, 1));
    }

    #[test]
    fn test_control_codes_ignored() {
        let mut console = console();
        console.put_string(&[0x01, 0x07, 0x0B, 0x1B, b'a']);
        assert_eq!(console.cursor_position(), (1, 0));
        assert_eq!(row_string(&console, 0), "a");
    }

    #[test]
    fn test_high_bytes_are_printable() {
        let mut console = console();
        console.put_char(0xDB);
        assert_eq!(console.buffer().char_at(0, 0), 0xDB);
        assert_eq!(console.cursor_position(), (1, 0));
    }

    #[test]
    fn test_wrap_at_width() {
        let mut console = console();
        console.put_string(&[b'A'; TEXT_COLUMNS]);
        assert_eq!(console.cursor_position(), (0, 1));

        console.put_char(b'B');
        assert_eq!(console.buffer().char_at(TEXT_COLUMNS - 1, 0), b'A');
        assert_eq!(console.buffer().char_at(0, 1), b'B');
        assert_eq!(console.cursor_position(), (1, 1));
    }

    #[test]
    fn test_wrap_past_width_legacy() {
        let mut console = legacy_console();
        console.put_string(&[b'A'; TEXT_COLUMNS]);
        assert_eq!(console.cursor_position(), (TEXT_COLUMNS, 0));

        // Column 80 aliases (0, 1), then the cursor wraps onto that same cell
        console.put_char(b'B');
        assert_eq!(console.buffer().char_at(0, 1), b'B');
        assert_eq!(console.cursor_position(), (0, 1));

        console.put_char(b'C');
        assert_eq!(console.buffer().char_at(0, 1), b'C');
        assert_eq!(console.cursor_position(), (1, 1));
    }

    #[test]
    fn test_legacy_overflow_on_last_row_is_dropped() {
        let mut console = legacy_console();
        for _ in 0..TEXT_ROWS - 1 {
            console.put_char(b'\n');
        }
        console.put_string(&[b'A'; TEXT_COLUMNS]);
        console.put_char(b'B');

        // The write at linear index 2000 falls outside the buffer
        assert_eq!(console.buffer().cells().len(), TEXT_CELLS);
        assert_eq!(console.cursor_position(), (0, TEXT_ROWS - 1));
        assert_eq!(row_string(&console, TEXT_ROWS - 2), "A".repeat(TEXT_COLUMNS));
        assert_eq!(row_string(&console, TEXT_ROWS - 1), "");
    }

    #[test]
    fn test_tab_wraps_at_end_of_row() {
        let mut console = console();
        console.put_string(&[b'x'; 75]);
        console.put_char(b'\t');
        assert_eq!(console.cursor_position(), (0, 1));

        let mut console = legacy_console();
        console.put_string(&[b'x'; 75]);
        console.put_char(b'\t');
        assert_eq!(console.cursor_position(), (80, 0));
    }

    #[test]
    fn test_newlines_scroll_and_clamp() {
        let mut console = console();
        console.put_string(b"first");

        for _ in 0..TEXT_ROWS - 1 {
            console.put_char(b'\n');
        }
        assert_eq!(console.cursor_position(), (0, TEXT_ROWS - 1));
        assert_eq!(row_string(&console, 0), "first");

        console.put_char(b'\n');
        assert_eq!(console.cursor_position(), (0, TEXT_ROWS - 1));
        assert_eq!(row_string(&console, 0), "");
        assert!(console.buffer().cells().iter().all(|&cell| cell == BLANK_CELL));
    }

    #[test]
    fn test_scroll_moves_rows_up() {
        let mut console = console();
        for row in 0..TEXT_ROWS {
            console.put_char(b'a' + row as u8);
            if row < TEXT_ROWS - 1 {
                console.put_char(b'\n');
            }
        }
        assert_eq!(row_string(&console, 0), "a");
        assert_eq!(row_string(&console, TEXT_ROWS - 1), "y");

        console.put_char(b'\n');
        assert_eq!(row_string(&console, 0), "b");
        assert_eq!(row_string(&console, TEXT_ROWS - 2), "y");
        assert_eq!(row_string(&console, TEXT_ROWS - 1), "");
        assert_eq!(
            console.buffer().cell_at(0, TEXT_ROWS - 1),
            Some(BLANK_CELL)
        );
    }

    #[test]
    fn test_scroll_keeps_attributes() {
        let mut console = console();
        console.set_color(VgaColor::Green as u8, VgaColor::Black as u8);
        console.put_char(b'g');
        for _ in 0..TEXT_ROWS {
            console.put_char(b'\n');
        }
        // 'g' scrolled off row 0, nothing in the attribute leaks into blanks
        assert!(console.buffer().cells().iter().all(|&cell| cell == BLANK_CELL));

        console.clear();
        console.set_color(VgaColor::Green as u8, VgaColor::Black as u8);
        console.put_string(b"\ng");
        for _ in 0..TEXT_ROWS - 1 {
            console.put_char(b'\n');
        }
        assert_eq!(console.buffer().cell_at(0, 0), Some(cell_of(b'g', 0x02)));
    }

    #[test]
    fn test_scroll_several_rows_at_once() {
        let mut console = console();
        for row in 0..TEXT_ROWS {
            console.write_at(0, row, b'a' + row as u8, 0x0F);
        }
        console.state.y = TEXT_ROWS + 2;
        console.scroll();

        // Overflow by three rows: 'd' moves to the top, three rows blanked
        assert_eq!(console.cursor_position(), (0, TEXT_ROWS - 1));
        assert_eq!(console.buffer().char_at(0, 0), b'd');
        assert_eq!(console.buffer().char_at(0, TEXT_ROWS - 4), b'y');
        for row in TEXT_ROWS - 3..TEXT_ROWS {
            assert_eq!(console.buffer().cell_at(0, row), Some(BLANK_CELL));
        }
    }

    #[test]
    fn test_scroll_past_whole_screen_blanks_everything() {
        let mut console = console();
        console.put_string(b"gone");
        console.state.y = 2 * TEXT_ROWS;
        console.scroll();

        assert_eq!(console.cursor_position(), (4, TEXT_ROWS - 1));
        assert!(console.buffer().cells().iter().all(|&cell| cell == BLANK_CELL));
    }

    #[test]
    fn test_scroll_noop_when_visible() {
        let mut console = console();
        console.put_string(b"keep");
        let before = console.buffer().clone();
        console.scroll();
        assert_eq!(console.buffer(), &before);
        assert_eq!(console.cursor_position(), (4, 0));
    }

    #[test]
    fn test_wrap_on_last_row_scrolls() {
        let mut console = console();
        for _ in 0..TEXT_ROWS - 1 {
            console.put_char(b'\n');
        }
        console.put_string(&[b'z'; TEXT_COLUMNS]);

        assert_eq!(console.cursor_position(), (0, TEXT_ROWS - 1));
        assert_eq!(row_string(&console, TEXT_ROWS - 2), "z".repeat(TEXT_COLUMNS));
        assert_eq!(row_string(&console, TEXT_ROWS - 1), "");
    }

    #[test]
    fn test_cursor_sync_after_scroll() {
        let mut console = console();
        for _ in 0..TEXT_ROWS {
            console.put_char(b'\n');
        }
        let writes = console.io().writes();
        let last = &writes[writes.len() - 4..];
        // 24 * 80 = 1920 = 0x0780
        assert_eq!(last, &[(0x3D4, 0x0E), (0x3D5, 0x07), (0x3D4, 0x0F), (0x3D5, 0x80)]);
    }

    #[test]
    fn test_write_at() {
        let mut console = console();
        assert!(console.write_at(5, 3, b'Q', 0x1E));
        assert_eq!(console.buffer().cell_at(5, 3), Some(0x1E51));
        assert_eq!(console.cursor_position(), (0, 0));

        assert!(!console.write_at(TEXT_COLUMNS, 0, b'X', 0x07));
        assert!(!console.write_at(0, TEXT_ROWS, b'X', 0x07));
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;

        let mut console = console();
        write!(console, "{}+{}={}", 2, 2, 4).unwrap();
        assert_eq!(row_string(&console, 0), "2+2=4");
    }

    #[test]
    fn test_wrap_policy_override() {
        let console = TextConsole::with_config(
            MemoryTextBuffer::new(),
            FakePortIo::new(),
            ConsoleConfig::default().with_wrap(WrapPolicy::PastWidth),
        )
        .unwrap();
        assert_eq!(console.config().wrap, WrapPolicy::PastWidth);
    }

    #[test]
    fn test_cursor_enable_disable() {
        let mut console = console();
        console.disable_cursor();
        assert_eq!(console.io().writes(), &[(0x3D4, 0x0A), (0x3D5, 0x20)]);

        console.io_mut().clear_writes();
        console
            .io_mut()
            .script_reads(&[(0x3D5, 0x20), (0x3D5, 0x00)]);
        console.enable_cursor(13, 14);
        assert_eq!(console.io().writes()[2], (0x3D5, 13));
        assert_eq!(console.io().writes()[5], (0x3D5, 14));
    }

    #[test]
    fn test_into_parts() {
        let mut console = console();
        console.put_char(b'k');
        let (buffer, io) = console.into_parts();
        assert_eq!(buffer.char_at(0, 0), b'k');
        assert_eq!(io.writes().len(), 4);
    }
}
