//! Add-book form renderer.
//!
//! Each text field is a bordered input box with its label above and its error
//! message, if any, below. The read flag is a checkbox. A pending alert is drawn
//! over the fields as a banner.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldValue, FieldView, FormView};

/// Horizontal margin for the input boxes (spaces on left and right).
const FORM_MARGIN: usize = 4;

/// Widest an input box gets on large panes.
const MAX_BOX_WIDTH: usize = 48;

/// Renders the form from `row` down.
pub fn render_form(frame: &mut Frame, row: usize, form: &FormView, theme: &Theme) {
    let mut current_row = row;
    for field in &form.fields {
        current_row = match &field.value {
            FieldValue::Text(value) => render_text_field(frame, current_row, field, value, theme),
            FieldValue::Checkbox(checked) => {
                render_checkbox(frame, current_row, field, *checked, theme)
            }
        };
    }

    if let Some(alert) = &form.alert {
        render_alert(frame, row + 1, alert, theme);
    }
}

fn render_text_field(
    frame: &mut Frame,
    row: usize,
    field: &FieldView,
    value: &str,
    theme: &Theme,
) -> usize {
    let box_width = frame
        .cols()
        .saturating_sub(FORM_MARGIN * 2)
        .min(MAX_BOX_WIDTH);
    let inner_width = box_width.saturating_sub(2);
    let border = if field.is_focused {
        &theme.colors.input_focus
    } else {
        &theme.colors.input_border
    };

    frame.position_cursor(row, FORM_MARGIN + 1);
    frame.push(&Theme::fg(&theme.colors.text_normal));
    if field.is_focused {
        frame.push(Theme::bold());
    }
    frame.push(&field.label);
    frame.push(Theme::reset());

    frame.position_cursor(row + 1, FORM_MARGIN + 1);
    frame.push(&Theme::fg(border));
    frame.push(&format!("┌{}┐", "─".repeat(inner_width)));

    // keep the end of the value visible while typing
    let cursor = if field.is_focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(2 + cursor.chars().count());
    let skip = value.chars().count().saturating_sub(room);
    let shown: String = value.chars().skip(skip).collect();
    let text = format!(" {shown}{cursor}");

    frame.position_cursor(row + 2, FORM_MARGIN + 1);
    frame.push("│");
    frame.push(&Theme::fg(&theme.colors.text_normal));
    frame.push(&text);
    frame.spaces(inner_width.saturating_sub(text.chars().count()));
    frame.push(&Theme::fg(border));
    frame.push("│");

    frame.position_cursor(row + 3, FORM_MARGIN + 1);
    frame.push(&format!("└{}┘", "─".repeat(inner_width)));
    frame.push(Theme::reset());

    match &field.error {
        Some(message) => {
            render_error(frame, row + 4, message, theme);
            row + 5
        }
        None => row + 4,
    }
}

fn render_checkbox(
    frame: &mut Frame,
    row: usize,
    field: &FieldView,
    checked: bool,
    theme: &Theme,
) -> usize {
    let color = if field.is_focused {
        &theme.colors.input_focus
    } else {
        &theme.colors.text_normal
    };
    let mark = if checked { "x" } else { " " };

    frame.position_cursor(row, FORM_MARGIN + 1);
    frame.push(&Theme::fg(color));
    if field.is_focused {
        frame.push(Theme::bold());
    }
    frame.push(&format!("[{mark}] {}", field.label));
    frame.push(Theme::reset());

    match &field.error {
        Some(message) => {
            render_error(frame, row + 1, message, theme);
            row + 2
        }
        None => row + 1,
    }
}

fn render_error(frame: &mut Frame, row: usize, message: &str, theme: &Theme) {
    frame.position_cursor(row, FORM_MARGIN + 2);
    frame.push(&Theme::fg(&theme.colors.error_fg));
    frame.push(message);
    frame.push(Theme::reset());
}

fn render_alert(frame: &mut Frame, row: usize, alert: &str, theme: &Theme) {
    let style = format!(
        "{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.alert_fg),
        Theme::bg(&theme.colors.alert_bg)
    );
    let blank = " ".repeat(alert.chars().count() + 4);

    frame.centered_line(row, &blank, &style);
    frame.centered_line(row + 1, &format!("  {alert}  "), &style);
    frame.centered_line(row + 2, &blank, &style);
}
