//! Per-call command outcome

use serde::{Deserialize, Serialize};

/// One field-keyed failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of a mutating command
///
/// Built fresh by every operation and handed back to the caller. Valid iff no
/// error has been recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    errors: Vec<FieldError>,
}

impl CommandResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a result holding a single error
    pub fn failure(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.add_error(field, message);
        result
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any error was recorded under `field`
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Messages recorded under `field`, in insertion order
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = CommandResult::new();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_add_error_invalidates() {
        let mut result = CommandResult::new();
        result.add_error("Title", "Title is required.");

        assert!(!result.is_valid());
        assert!(result.has_error("Title"));
        assert!(!result.has_error("Description"));
    }

    #[test]
    fn test_messages_for_field() {
        let mut result = CommandResult::failure("User", "Please log in.");
        result.add_error("Title", "first");
        result.add_error("Title", "second");

        let titles: Vec<&str> = result.messages_for("Title").collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(result.messages_for("User").next(), Some("Please log in."));
    }

    #[test]
    fn test_serializes_errors() {
        let result = CommandResult::failure("Title", "duplicate");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["errors"][0]["field"], "Title");
        assert_eq!(json["errors"][0]["message"], "duplicate");
    }
}
