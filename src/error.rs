use thiserror::Error;

/// Command helper error types
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Sub-command error: {0}")]
    Invoke(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Result type for command helper operations
pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = CommandError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_prompt() {
        let err = CommandError::Prompt("no choices".to_string());
        assert_eq!(err.to_string(), "Prompt error: no choices");
    }

    #[test]
    fn test_error_display_invoke() {
        let err = CommandError::Invoke("exit status 2".to_string());
        assert_eq!(err.to_string(), "Sub-command error: exit status 2");
    }

    #[test]
    fn test_error_from_regex() {
        let err: CommandError = regex::Regex::new("(").unwrap_err().into();
        assert!(err.to_string().starts_with("Regex error:"));
    }
}
