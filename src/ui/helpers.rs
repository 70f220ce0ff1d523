//! Shared rendering utilities.
//!
//! Components do not print directly. They append to a [`Frame`], which the
//! renderer flushes to stdout in one piece once the whole pane has been drawn.
//! This keeps a render a full replacement of the pane and lets tests inspect the
//! exact output.

use crate::ui::theme::Theme;

/// Output buffer for one render of the pane.
#[derive(Debug, Clone)]
pub struct Frame {
    buf: String,
    rows: usize,
    cols: usize,
}

impl Frame {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            buf: String::new(),
            rows,
            cols,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Positions the cursor at a 1-indexed row and column.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn spaces(&mut self, count: usize) {
        self.buf.push_str(&" ".repeat(count));
    }

    /// Blanks every row of the pane so nothing from the previous render survives.
    pub fn clear(&mut self) {
        for row in 1..=self.rows {
            self.position_cursor(row, 1);
            self.push(Theme::reset());
            self.spaces(self.cols);
        }
    }

    /// Prints `text` centered on `row`, padded to the full width.
    pub fn centered_line(&mut self, row: usize, text: &str, style: &str) {
        let len = text.chars().count().min(self.cols);
        let padding = self.cols.saturating_sub(len) / 2;

        self.position_cursor(row, 1);
        self.push(style);
        self.spaces(padding);
        self.push(&text.chars().take(len).collect::<String>());
        self.spaces(self.cols.saturating_sub(padding + len));
        self.push(Theme::reset());
    }

    #[cfg(test)]
    fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Removes ANSI escape sequences, leaving only printable text.
#[doc(hidden)]
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end with an ASCII letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_text() {
        let mut frame = Frame::new(3, 10);
        frame.centered_line(2, "abcd", "");
        assert_eq!(strip_ansi(frame.as_str()), "   abcd   ");
        assert!(frame.as_str().starts_with("\u{1b}[2;1H"));
    }

    #[test]
    fn clear_blanks_each_row() {
        let mut frame = Frame::new(2, 4);
        frame.clear();
        assert_eq!(strip_ansi(frame.as_str()), " ".repeat(8));
        assert!(frame.as_str().contains("\u{1b}[2;1H"));
    }
}
