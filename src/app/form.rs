//! Add-book form state.
//!
//! [`FormState`] holds the raw text of each input, the focused field, and whatever
//! feedback is currently on screen (per-field errors or a single alert). It knows
//! nothing about the library: a successful [`FormState::submit`] hands back a
//! validated [`NewBook`] and the caller decides what to do with it.

use crate::app::modes::ValidationStyle;
use crate::domain::validation::{self, FieldError, FormField, FormInput, NewBook, AGGREGATE_ALERT};
use std::collections::BTreeMap;

/// Contents and feedback of the add-book form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: bool,

    /// Field receiving keystrokes.
    pub focus: FormField,

    /// Errors currently shown, at most one per field.
    pub errors: BTreeMap<FormField, FieldError>,

    /// Blocking notice shown by the aggregate validation style.
    pub alert: Option<&'static str>,
}

impl FormState {
    /// Clears inputs, feedback and focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops any visible errors and alert, keeping the typed text.
    pub fn clear_feedback(&mut self) {
        self.errors.clear();
        self.alert = None;
    }

    #[must_use]
    pub fn input(&self) -> FormInput<'_> {
        FormInput {
            title: &self.title,
            author: &self.author,
            pages: &self.pages,
            read: self.read,
        }
    }

    /// Raw text of a text field. The checkbox has no text and returns `""`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Pages => &self.pages,
            FormField::Read => "",
        }
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Pages => Some(&mut self.pages),
            FormField::Read => None,
        }
    }

    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused field.
    ///
    /// On the checkbox, a space toggles it and other characters are ignored. Text
    /// fields are re-validated immediately under the inline style.
    pub fn insert_char(&mut self, c: char, style: ValidationStyle) {
        let focus = self.focus;
        match self.value_mut(focus) {
            Some(value) => value.push(c),
            None => {
                if c == ' ' {
                    self.read = !self.read;
                }
                return;
            }
        }
        self.revalidate(focus, style);
    }

    /// Deletes the last character of the focused field.
    pub fn delete_char(&mut self, style: ValidationStyle) {
        let focus = self.focus;
        if let Some(value) = self.value_mut(focus) {
            value.pop();
            self.revalidate(focus, style);
        }
    }

    /// Updates the error indicator of one field from its current text.
    fn revalidate(&mut self, field: FormField, style: ValidationStyle) {
        if style != ValidationStyle::Inline {
            return;
        }

        match validation::validate_field(field, self.value(field)) {
            Some(error) => {
                tracing::trace!(field = ?field, error = %error, "live validation failed");
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Validates the whole form.
    ///
    /// On failure the feedback for `style` is recorded, focus moves to the first
    /// invalid field, and `None` is returned. Inputs are never modified.
    pub fn submit(&mut self, style: ValidationStyle) -> Option<NewBook> {
        match validation::validate_submission(&self.input()) {
            Ok(book) => {
                self.clear_feedback();
                Some(book)
            }
            Err(errors) => {
                tracing::debug!(
                    error_count = errors.len(),
                    style = ?style,
                    "form submission rejected"
                );

                if let Some(first) = errors.first() {
                    self.focus = first.field;
                }

                match style {
                    ValidationStyle::Inline => {
                        self.errors = errors.into_iter().map(|e| (e.field, e)).collect();
                    }
                    ValidationStyle::Alert => {
                        self.alert = Some(AGGREGATE_ALERT);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrorKind;

    fn type_str(form: &mut FormState, text: &str, style: ValidationStyle) {
        for c in text.chars() {
            form.insert_char(c, style);
        }
    }

    #[test]
    fn live_validation_tracks_the_edited_field() {
        let mut form = FormState::default();
        type_str(&mut form, "D", ValidationStyle::Inline);
        assert!(form.error(FormField::Title).is_none());

        form.delete_char(ValidationStyle::Inline);
        assert_eq!(
            form.error(FormField::Title).map(|e| e.kind),
            Some(FieldErrorKind::Required)
        );

        form.focus = FormField::Pages;
        type_str(&mut form, "0", ValidationStyle::Inline);
        assert_eq!(
            form.error(FormField::Pages).map(|e| e.kind),
            Some(FieldErrorKind::InvalidPageCount)
        );
        type_str(&mut form, "1", ValidationStyle::Inline);
        assert!(form.error(FormField::Pages).is_none());
    }

    #[test]
    fn alert_style_does_not_validate_while_typing() {
        let mut form = FormState::default();
        type_str(&mut form, "x", ValidationStyle::Alert);
        form.delete_char(ValidationStyle::Alert);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn space_toggles_checkbox() {
        let mut form = FormState {
            focus: FormField::Read,
            ..FormState::default()
        };
        form.insert_char(' ', ValidationStyle::Inline);
        assert!(form.read);
        form.insert_char('z', ValidationStyle::Inline);
        assert!(form.read);
        form.insert_char(' ', ValidationStyle::Inline);
        assert!(!form.read);
    }

    #[test]
    fn inline_submit_marks_fields_and_focuses_first_invalid() {
        let mut form = FormState {
            title: "Dune".to_string(),
            author: String::new(),
            pages: "abc".to_string(),
            focus: FormField::Read,
            ..FormState::default()
        };

        assert!(form.submit(ValidationStyle::Inline).is_none());
        assert_eq!(form.focus, FormField::Author);
        assert!(form.error(FormField::Title).is_none());
        assert!(form.error(FormField::Author).is_some());
        assert!(form.error(FormField::Pages).is_some());
        assert!(form.alert.is_none());
        assert_eq!(form.title, "Dune");
    }

    #[test]
    fn alert_submit_shows_single_notice() {
        let mut form = FormState::default();
        assert!(form.submit(ValidationStyle::Alert).is_none());
        assert_eq!(form.alert, Some(AGGREGATE_ALERT));
        assert!(form.errors.is_empty());
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn successful_submit_clears_feedback() {
        let mut form = FormState {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            pages: "412".to_string(),
            ..FormState::default()
        };
        form.errors.insert(
            FormField::Title,
            FieldError::new(FormField::Title, FieldErrorKind::Required),
        );

        let book = form.submit(ValidationStyle::Inline).unwrap();
        assert_eq!(book.pages, 412);
        assert!(form.errors.is_empty());
    }
}
