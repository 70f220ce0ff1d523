//! Header component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered on `row` and returns the next free row.
///
/// The title is bold in `header_fg`, over `header_bg` when the theme sets one.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme) -> usize {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }

    frame.centered_line(row, &header.title, &style);
    row + 1
}
