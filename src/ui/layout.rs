//! Card geometry and click resolution.
//!
//! The renderer draws cards at the positions computed here, and mouse clicks are
//! resolved against the same positions. This is the single delegated click handler
//! for the card area: a click anywhere in the pane is mapped to the card that
//! contains it and to the part of the card that was hit, and only then is an
//! action chosen.
//!
//! All rows and columns are 1-indexed terminal cells.
//!
//! # Card Layout
//!
//! ```text
//! row top+0  ▌ The Hobbit
//! row top+1  ▌ by J.R.R. Tolkien
//! row top+2  ▌ 295 pages
//! row top+3  ▌ ● Read
//! row top+4  ▌ [ Mark Unread ]  [ Remove ]
//! row top+5  (spacer)
//! ```

use crate::domain::BookId;
use crate::ui::viewmodel::CardView;
use std::ops::Range;

/// First row below the header and its border.
pub const BODY_START_ROW: usize = 4;

/// Rows taken by header chrome (blank, title, border) and footer chrome (border, help).
pub const CHROME_ROWS: usize = 5;

/// Rows per card including the trailing spacer.
pub const CARD_HEIGHT: usize = 6;

/// Rows with card content (the spacer is not part of the card).
pub const CARD_CONTENT_ROWS: usize = 5;

/// Offset of the action row within a card.
pub const ACTION_ROW_OFFSET: usize = 4;

/// Column where card text starts, after the accent bar and a space.
pub const CARD_TEXT_COL: usize = 3;

/// Spaces between the two action buttons.
const BUTTON_GAP: usize = 2;

/// Part of a card that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    /// The toggle-read button.
    Toggle,
    /// The remove button.
    Remove,
    /// Anywhere else on the card.
    Body,
}

/// A resolved click: which book, and which part of its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub id: BookId,
    pub target: CardTarget,
}

/// Screen position of one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub id: BookId,
    /// First row of the card.
    pub top: usize,
    /// Columns covered by the toggle button on the action row.
    pub toggle: Range<usize>,
    /// Columns covered by the remove button on the action row.
    pub remove: Range<usize>,
}

impl CardLayout {
    #[must_use]
    pub const fn action_row(&self) -> usize {
        self.top + ACTION_ROW_OFFSET
    }

    fn contains_row(&self, row: usize) -> bool {
        (self.top..self.top + CARD_CONTENT_ROWS).contains(&row)
    }
}

/// Text of a button as printed, e.g. `[ Remove ]`.
#[must_use]
pub fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// Number of whole cards that fit in a pane of `rows` rows. Always at least one.
#[must_use]
pub const fn cards_per_page(rows: usize) -> usize {
    let available = rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT;
    if available == 0 {
        1
    } else {
        available
    }
}

/// Computes the position of each card, stacked from [`BODY_START_ROW`].
#[must_use]
pub fn card_layouts(cards: &[CardView]) -> Vec<CardLayout> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let toggle_width = button_text(&card.toggle_label).chars().count();
            let remove_width = button_text(&card.remove_label).chars().count();

            let toggle_start = CARD_TEXT_COL;
            let remove_start = toggle_start + toggle_width + BUTTON_GAP;

            CardLayout {
                id: card.id,
                top: BODY_START_ROW + index * CARD_HEIGHT,
                toggle: toggle_start..toggle_start + toggle_width,
                remove: remove_start..remove_start + remove_width,
            }
        })
        .collect()
}

/// Resolves a clicked cell to a card and target.
///
/// Returns `None` for cells outside every card, including the spacer rows.
#[must_use]
pub fn hit_test(layouts: &[CardLayout], row: usize, col: usize) -> Option<CardHit> {
    let card = layouts.iter().find(|layout| layout.contains_row(row))?;

    let target = if row == card.action_row() && card.toggle.contains(&col) {
        CardTarget::Toggle
    } else if row == card.action_row() && card.remove.contains(&col) {
        CardTarget::Remove
    } else {
        CardTarget::Body
    };

    Some(CardHit {
        id: card.id,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::CardState;

    fn card(toggle_label: &str) -> CardView {
        CardView {
            id: BookId::new(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            pages: 412,
            state: CardState::NotRead,
            status_label: "Not Read".to_string(),
            toggle_label: toggle_label.to_string(),
            remove_label: "Remove".to_string(),
            is_selected: false,
        }
    }

    #[test]
    fn cards_stack_from_body_start() {
        let cards = vec![card("Mark Read"), card("Mark Unread")];
        let layouts = card_layouts(&cards);

        assert_eq!(layouts[0].top, BODY_START_ROW);
        assert_eq!(layouts[1].top, BODY_START_ROW + CARD_HEIGHT);
        // "[ Mark Read ]" is 13 cells wide
        assert_eq!(layouts[0].toggle, 3..16);
        assert_eq!(layouts[0].remove, 18..28);
        // "[ Mark Unread ]" is 15 cells wide
        assert_eq!(layouts[1].remove, 20..30);
    }

    #[test]
    fn resolves_buttons_and_body() {
        let cards = vec![card("Mark Read"), card("Mark Read")];
        let layouts = card_layouts(&cards);
        let second = &layouts[1];
        let action_row = second.action_row();

        assert_eq!(
            hit_test(&layouts, action_row, 3),
            Some(CardHit { id: cards[1].id, target: CardTarget::Toggle })
        );
        assert_eq!(
            hit_test(&layouts, action_row, 27),
            Some(CardHit { id: cards[1].id, target: CardTarget::Remove })
        );
        assert_eq!(
            hit_test(&layouts, action_row, 17),
            Some(CardHit { id: cards[1].id, target: CardTarget::Body })
        );
        assert_eq!(
            hit_test(&layouts, second.top, 5),
            Some(CardHit { id: cards[1].id, target: CardTarget::Body })
        );
    }

    #[test]
    fn ignores_spacer_and_chrome() {
        let cards = vec![card("Mark Read")];
        let layouts = card_layouts(&cards);

        assert_eq!(hit_test(&layouts, 2, 5), None);
        assert_eq!(hit_test(&layouts, BODY_START_ROW + CARD_CONTENT_ROWS, 5), None);
        assert_eq!(hit_test(&[], BODY_START_ROW, 5), None);
    }

    #[test]
    fn at_least_one_card_per_page() {
        assert_eq!(cards_per_page(0), 1);
        assert_eq!(cards_per_page(24), 3);
    }
}
