//! Footer component renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered on `row`, dimmed.
///
/// Hints longer than the pane are cut at the right edge.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme) -> usize {
    frame.centered_line(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim));
    row + 1
}
