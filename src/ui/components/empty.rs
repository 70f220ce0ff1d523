//! Empty state component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the placeholder shown instead of cards when the library is empty.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses `empty_state_fg`; the subtitle is dimmed `text_dim`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme) {
    let message_row = row + 2;

    frame.centered_line(message_row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg));

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    frame.centered_line(message_row + 1, &empty.subtitle, &subtitle_style);
}
