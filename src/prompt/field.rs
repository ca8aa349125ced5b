use regex::Regex;

use crate::error::Result;

/// What kind of input a field collects
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Plain text input
    Text,
    /// Masked text input
    Secret,
    /// Single selection from a fixed ordered list
    Choice(Vec<String>),
    /// Output of another sub-command, optionally narrowed by a pattern
    Invoke {
        command: String,
        pattern: Option<Regex>,
    },
}

/// A form field with an optional current value
#[derive(Debug, Clone)]
pub struct Field {
    pub kind: FieldKind,
    pub value: Option<String>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Self { kind, value: None }
    }

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn secret() -> Self {
        Self::new(FieldKind::Secret)
    }

    /// Choice field from a `|`-separated list such as `a|b|c`
    pub fn choice(options: &str) -> Self {
        Self::new(FieldKind::Choice(
            options.split('|').map(str::to_string).collect(),
        ))
    }

    pub fn invoke(command: impl Into<String>) -> Self {
        Self::new(FieldKind::Invoke {
            command: command.into(),
            pattern: None,
        })
    }

    /// Invoke field whose output is narrowed to the first capture group of `pattern`
    pub fn invoke_matching(command: impl Into<String>, pattern: &str) -> Result<Self> {
        Ok(Self::new(FieldKind::Invoke {
            command: command.into(),
            pattern: Some(Regex::new(pattern)?),
        }))
    }

    /// Current value; the user is asked before it is replaced
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_splits_on_pipe() {
        match Field::choice("a|b|c").kind {
            FieldKind::Choice(choices) => assert_eq!(choices, vec!["a", "b", "c"]),
            _ => panic!("Expected Choice variant"),
        }
    }

    #[test]
    fn test_choice_keeps_empty_segments() {
        match Field::choice("a||b").kind {
            FieldKind::Choice(choices) => assert_eq!(choices, vec!["a", "", "b"]),
            _ => panic!("Expected Choice variant"),
        }
    }

    #[test]
    fn test_invoke_matching_rejects_bad_pattern() {
        assert!(Field::invoke_matching("version", "(").is_err());
    }

    #[test]
    fn test_with_value() {
        let field = Field::text().with_value("x");
        assert_eq!(field.value.as_deref(), Some("x"));
    }
}
