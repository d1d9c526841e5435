//! Syntax validation for raw search-box input.
//!
//! The portal supports at most one `category:value` pair per search term,
//! with no whitespace touching the colon. Validation is pure: the same term
//! always produces the same verdict, and the error's `Display` output doubles
//! as the helper subtext shown under the search box.

use thiserror::Error;

/// Reasons a search term is rejected before submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TermError {
    #[error("searches must contain at least one character")]
    Empty,

    #[error("only one category per search is supported")]
    MultipleCategories,

    /// The term contains a category pair with whitespace around the colon;
    /// `suggestion` is the corrected `category:value` form.
    #[error("did you mean '{suggestion}'? Please remove the spaces around the colon")]
    BadColonSpacing { suggestion: String },
}

/// Validate a raw search term against the category grammar.
///
/// Rules apply in order: emptiness, category count, colon spacing. A term
/// without any colon only has to be non-empty.
pub fn validate(term: &str) -> Result<(), TermError> {
    if term.trim().is_empty() {
        return Err(TermError::Empty);
    }

    let parts: Vec<&str> = term.split(':').collect();
    if parts.len() > 2 {
        return Err(TermError::MultipleCategories);
    }

    if parts.len() == 2 {
        let (category, value) = (parts[0], parts[1]);
        let spaced = category.ends_with(char::is_whitespace)
            || value.starts_with(char::is_whitespace);
        if spaced {
            return Err(TermError::BadColonSpacing {
                suggestion: format!("{}:{}", category.trim(), value.trim()),
            });
        }
    }

    Ok(())
}
