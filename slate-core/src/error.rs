//! Errors shared by hosts and plugins
//!
//! User cancellation is never an error; everything here is a real failure
//! that propagates to whoever drove the call.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_COMMAND_ID: &str = "INVALID_COMMAND_ID";
    pub const DUPLICATE_COMMAND: &str = "DUPLICATE_COMMAND";
    pub const UNKNOWN_COMMAND: &str = "UNKNOWN_COMMAND";
    pub const SURFACE: &str = "SURFACE";
    pub const ACTIVATION: &str = "ACTIVATION";
    pub const CONFIG: &str = "CONFIG";
    pub const IO: &str = "IO";
}

/// Result type for plugin and host operations.
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Invalid command id '{0}': expected dotted segments like 'notifications.info'")]
    InvalidCommandId(String),

    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Unknown command '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownCommand {
        id: String,
        suggestion: Option<String>,
    },

    /// A host-provided service failed.
    #[error("{surface} failed: {message}")]
    Surface {
        surface: &'static str,
        message: String,
    },

    #[error("Plugin '{plugin}' failed to activate: {message}")]
    Activation { plugin: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". {}", s),
        None => String::new(),
    }
}

impl PluginError {
    pub fn surface(surface: &'static str, message: impl Into<String>) -> Self {
        PluginError::Surface { surface, message: message.into() }
    }

    pub fn unknown_command(id: impl Into<String>) -> Self {
        PluginError::UnknownCommand { id: id.into(), suggestion: None }
    }

    pub fn activation(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        PluginError::Activation { plugin: plugin.into(), message: message.into() }
    }

    /// Builder: attach a suggestion to an unknown-command error.
    /// Other variants are returned unchanged.
    pub fn with_suggestion(self, text: impl Into<String>) -> Self {
        match self {
            PluginError::UnknownCommand { id, .. } => PluginError::UnknownCommand {
                id,
                suggestion: Some(text.into()),
            },
            other => other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PluginError::InvalidCommandId(_) => codes::INVALID_COMMAND_ID,
            PluginError::DuplicateCommand(_) => codes::DUPLICATE_COMMAND,
            PluginError::UnknownCommand { .. } => codes::UNKNOWN_COMMAND,
            PluginError::Surface { .. } => codes::SURFACE,
            PluginError::Activation { .. } => codes::ACTIVATION,
            PluginError::Config(_) => codes::CONFIG,
            PluginError::Io(_) => codes::IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(PluginError::DuplicateCommand("a.b".into()).code(), codes::DUPLICATE_COMMAND);
        assert_eq!(PluginError::surface("omnibar", "closed").code(), codes::SURFACE);
        assert_eq!(PluginError::Config("bad".into()).code(), codes::CONFIG);
    }

    #[test]
    fn test_unknown_command_display() {
        let err = PluginError::unknown_command("notifications.inf");
        assert_eq!(err.to_string(), "Unknown command 'notifications.inf'");

        let err = err.with_suggestion("Similar: notifications.info");
        assert_eq!(
            err.to_string(),
            "Unknown command 'notifications.inf'. Similar: notifications.info"
        );
    }

    #[test]
    fn test_with_suggestion_ignores_other_variants() {
        let err = PluginError::DuplicateCommand("a.b".into()).with_suggestion("ignored");
        assert!(matches!(err, PluginError::DuplicateCommand(_)));
    }

    #[test]
    fn test_surface_display() {
        let err = PluginError::surface("notifications", "queue full");
        assert_eq!(err.to_string(), "notifications failed: queue full");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: PluginError = io.into();
        assert_eq!(err.code(), codes::IO);
    }
}
