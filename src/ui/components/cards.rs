//! Book card renderer.
//!
//! Cards are drawn at the positions computed by [`layout::card_layouts`], the
//! same positions mouse clicks are resolved against.

use crate::ui::helpers::Frame;
use crate::ui::layout::{self, CardLayout, CARD_CONTENT_ROWS, CARD_TEXT_COL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardState, CardView};

/// Accent bar drawn down the left edge of every card.
const ACCENT: &str = "▌";

/// Renders all visible cards, stacked from the top of the body.
pub fn render_cards(frame: &mut Frame, cards: &[CardView], theme: &Theme) {
    for (card, position) in cards.iter().zip(layout::card_layouts(cards)) {
        render_card(frame, card, &position, theme);
    }
}

fn render_card(frame: &mut Frame, card: &CardView, position: &CardLayout, theme: &Theme) {
    let accent = if card.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.border
    };
    for row in position.top..position.top + CARD_CONTENT_ROWS {
        frame.position_cursor(row, 1);
        frame.push(&Theme::fg(accent));
        frame.push(ACCENT);
        frame.push(Theme::reset());
    }

    let title_color = if card.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    frame.position_cursor(position.top, CARD_TEXT_COL);
    frame.push(Theme::bold());
    frame.push(&Theme::fg(title_color));
    frame.push(&card.title);
    frame.push(Theme::reset());

    frame.position_cursor(position.top + 1, CARD_TEXT_COL);
    frame.push(&Theme::fg(&theme.colors.text_dim));
    frame.push(&format!("by {}", card.author));
    frame.push(Theme::reset());

    frame.position_cursor(position.top + 2, CARD_TEXT_COL);
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&format!("{} pages", card.pages));
    frame.push(Theme::reset());

    let status_color = match card.state {
        CardState::Read => &theme.colors.read_fg,
        CardState::NotRead => &theme.colors.unread_fg,
    };
    frame.position_cursor(position.top + 3, CARD_TEXT_COL);
    frame.push(&Theme::fg(status_color));
    frame.push(&format!("● {}", card.status_label));
    frame.push(Theme::reset());

    let action_row = position.action_row();
    for (label, start) in [
        (&card.toggle_label, position.toggle.start),
        (&card.remove_label, position.remove.start),
    ] {
        frame.position_cursor(action_row, start);
        frame.push(&Theme::fg(&theme.colors.button_fg));
        frame.push(&layout::button_text(label));
        frame.push(Theme::reset());
    }
}
