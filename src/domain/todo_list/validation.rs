//! Title and description rules for todo lists

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::CommandResult;

/// Titles must be strictly shorter than this many characters
pub const MAX_TITLE_LENGTH: usize = 50;
/// Descriptions may be at most this many characters
pub const MAX_DESCRIPTION_LENGTH: usize = 300;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_\s()]+$").expect("valid title regex"));

/// Errors that can occur during list validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoListValidationError {
    #[error("Title is required.")]
    EmptyTitle,

    #[error("Title must be less than {0} characters.")]
    TitleTooLong(usize),

    #[error("Title may only contain letters, digits, spaces, hyphens, underscores and parentheses.")]
    InvalidTitleCharacters,

    #[error("Description must be {0} characters or fewer.")]
    DescriptionTooLong(usize),
}

/// Validate a title as given; callers trim first
pub fn validate_title(title: &str) -> Result<(), TodoListValidationError> {
    if title.is_empty() {
        return Err(TodoListValidationError::EmptyTitle);
    }

    if title.chars().count() >= MAX_TITLE_LENGTH {
        return Err(TodoListValidationError::TitleTooLong(MAX_TITLE_LENGTH));
    }

    if !TITLE_RE.is_match(title) {
        return Err(TodoListValidationError::InvalidTitleCharacters);
    }

    Ok(())
}

/// Validate a description as given
pub fn validate_description(description: &str) -> Result<(), TodoListValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(TodoListValidationError::DescriptionTooLong(
            MAX_DESCRIPTION_LENGTH,
        ));
    }

    Ok(())
}

/// Validate create/update arguments, recording failures under `Title` and
/// `Description`. Returns whether `result` is still valid afterwards.
pub fn validate_list_args(
    title: &str,
    description: Option<&str>,
    result: &mut CommandResult,
) -> bool {
    if let Err(e) = validate_title(title) {
        result.add_error("Title", e.to_string());
    }

    if let Some(Err(e)) = description.map(validate_description) {
        result.add_error("Description", e.to_string());
    }

    result.is_valid()
}
