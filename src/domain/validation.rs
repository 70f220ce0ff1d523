//! Input validation for book fields.
//!
//! Every user-facing failure in the plugin is a validation failure of one of the
//! form fields. Validators here are pure: they take raw input and return either the
//! cleaned value or a [`FieldError`] naming the field and the problem. The form
//! controller uses them both for live per-field feedback and for the final submit
//! check, and [`Book::new`](crate::domain::Book::new) uses them to guard construction.

use thiserror::Error;

/// Message shown by the aggregate ("alert") validation style.
pub const AGGREGATE_ALERT: &str = "Please fill in all fields correctly!";

/// Identifies one input of the add-book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Pages,
    /// The read-status checkbox. Never fails validation.
    Read,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::Pages, Self::Read];

    /// Label printed in front of the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Pages => "Pages",
            Self::Read => "Read it?",
        }
    }

    /// Next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Pages,
            Self::Pages => Self::Read,
            Self::Read => Self::Title,
        }
    }

    /// Previous field in tab order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Read,
            Self::Author => Self::Title,
            Self::Pages => Self::Author,
            Self::Read => Self::Pages,
        }
    }

    /// Whether the field takes free text input.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Read)
    }
}

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field was empty (or whitespace only).
    Required,
    /// The page count was not an integer, or was below one.
    InvalidPageCount,
}

/// A validation failure tied to a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    #[must_use]
    pub const fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// User-facing message for this error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (FormField::Title, _) => "Title is required",
            (FormField::Author, _) => "Author is required",
            (FormField::Pages, FieldErrorKind::Required) => "Number of pages is required",
            (FormField::Pages, FieldErrorKind::InvalidPageCount) => {
                "Pages must be a whole number of at least 1"
            }
            (FormField::Read, _) => "Invalid read status",
        }
    }
}

/// Raw form contents, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInput<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub pages: &'a str,
    pub read: bool,
}

/// Cleaned, validated fields ready to become a [`Book`](crate::domain::Book).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub read: bool,
}

/// Validates a title, returning it trimmed.
///
/// # Errors
///
/// Returns a `Required` error if the title is empty after trimming.
pub fn validate_title(raw: &str) -> Result<String, FieldError> {
    required_text(FormField::Title, raw)
}

/// Validates an author, returning it trimmed.
///
/// # Errors
///
/// Returns a `Required` error if the author is empty after trimming.
pub fn validate_author(raw: &str) -> Result<String, FieldError> {
    required_text(FormField::Author, raw)
}

/// Parses a page count typed by the user.
///
/// Surrounding whitespace is ignored. Anything other than a plain positive integer
/// (signs, decimals, trailing letters, zero, overflow) is rejected.
///
/// # Errors
///
/// - `Required` if the input is blank
/// - `InvalidPageCount` if it is not an integer ≥ 1
///
/// # Examples
///
/// ```
/// use bookshelf::domain::validation::parse_pages;
///
/// assert_eq!(parse_pages(" 412 "), Ok(412));
/// assert!(parse_pages("0").is_err());
/// assert!(parse_pages("-3").is_err());
/// assert!(parse_pages("ten").is_err());
/// ```
pub fn parse_pages(raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(FormField::Pages, FieldErrorKind::Required));
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new(FormField::Pages, FieldErrorKind::InvalidPageCount));
    }

    trimmed
        .parse::<u32>()
        .map_err(|_| FieldError::new(FormField::Pages, FieldErrorKind::InvalidPageCount))
        .and_then(validate_pages)
}

/// Checks an already-numeric page count.
///
/// # Errors
///
/// Returns `InvalidPageCount` for zero.
pub const fn validate_pages(pages: u32) -> Result<u32, FieldError> {
    if pages == 0 {
        Err(FieldError::new(FormField::Pages, FieldErrorKind::InvalidPageCount))
    } else {
        Ok(pages)
    }
}

/// Re-validates one field from its raw text. Used for live feedback while typing.
///
/// Returns `None` when the field is valid (or is the read checkbox).
#[must_use]
pub fn validate_field(field: FormField, raw: &str) -> Option<FieldError> {
    match field {
        FormField::Title => validate_title(raw).err(),
        FormField::Author => validate_author(raw).err(),
        FormField::Pages => parse_pages(raw).err(),
        FormField::Read => None,
    }
}

/// Validates every field independently.
///
/// # Errors
///
/// Returns all failing fields, in form order, if any field is invalid.
pub fn validate_submission(input: &FormInput<'_>) -> Result<NewBook, Vec<FieldError>> {
    let title = validate_title(input.title);
    let author = validate_author(input.author);
    let pages = parse_pages(input.pages);

    match (title, author, pages) {
        (Ok(title), Ok(author), Ok(pages)) => Ok(NewBook {
            title,
            author,
            pages,
            read: input.read,
        }),
        (title, author, pages) => Err([title.err(), author.err(), pages.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn required_text(field: FormField, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldError::new(field, FieldErrorKind::Required))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(title: &'a str, author: &'a str, pages: &'a str) -> FormInput<'a> {
        FormInput {
            title,
            author,
            pages,
            read: false,
        }
    }

    #[test]
    fn rejects_empty_title_and_author() {
        assert_eq!(
            validate_title("   "),
            Err(FieldError::new(FormField::Title, FieldErrorKind::Required))
        );
        assert_eq!(
            validate_author(""),
            Err(FieldError::new(FormField::Author, FieldErrorKind::Required))
        );
    }

    #[test]
    fn trims_text_fields() {
        assert_eq!(validate_title("  Dune ").as_deref(), Ok("Dune"));
        assert_eq!(validate_author("Frank Herbert\t").as_deref(), Ok("Frank Herbert"));
    }

    #[test]
    fn page_count_rules() {
        assert_eq!(parse_pages("1"), Ok(1));
        assert_eq!(parse_pages("412"), Ok(412));
        assert_eq!(
            parse_pages(""),
            Err(FieldError::new(FormField::Pages, FieldErrorKind::Required))
        );
        for bad in ["0", "-5", "abc", "12abc", "3.5", "+7", "99999999999"] {
            assert_eq!(
                parse_pages(bad),
                Err(FieldError::new(FormField::Pages, FieldErrorKind::InvalidPageCount)),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn submission_reports_each_failing_field_in_order() {
        let errors = validate_submission(&input("", "", "0")).unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Title, FormField::Author, FormField::Pages]);
    }

    #[test]
    fn submission_with_only_title_missing() {
        let errors = validate_submission(&input("", "X", "10")).unwrap_err();
        assert_eq!(errors, vec![FieldError::new(FormField::Title, FieldErrorKind::Required)]);
    }

    #[test]
    fn valid_submission_is_cleaned() {
        let book = validate_submission(&FormInput {
            title: " Dune ",
            author: "Frank Herbert",
            pages: "412",
            read: true,
        })
        .unwrap();

        assert_eq!(
            book,
            NewBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                pages: 412,
                read: true,
            }
        );
    }

    #[test]
    fn read_field_never_fails() {
        assert_eq!(validate_field(FormField::Read, ""), None);
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(FormField::Read.next(), FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Read);
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }
}
