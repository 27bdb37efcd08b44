//! Error types for the tree, its settings and the interactive shell.
//!
//! [`TreeError`] is not a failure in the usual sense: every variant is an
//! expected outcome of normal use (inserting a value twice, deleting something
//! that isn't there) and leaves the tree exactly as it was.

use std::io;

/// The reasons a [`Tree`](crate::Tree) operation can decline to change the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `insert` was given a value that is already stored.
    #[error("value already exists in the tree")]
    Duplicate,
    /// `delete` was given a value that is not stored.
    #[error("value not found in the tree")]
    NotFound,
    /// `update` was asked to replace a value that is not stored.
    #[error("old value not found in the tree")]
    OldValueNotFound,
    /// `update` was asked to introduce a value that is already stored.
    #[error("new value already exists in the tree")]
    NewValueExists,
}

/// Errors raised while loading, validating or saving [`Settings`](crate::settings::Settings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Errors that end a shell session.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_errors_read_as_outcomes() {
        assert_eq!(TreeError::Duplicate.to_string(), "value already exists in the tree");
        assert_eq!(
            TreeError::NewValueExists.to_string(),
            "new value already exists in the tree"
        );
    }

    #[test]
    fn settings_errors_wrap_io() {
        let err: SettingsError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.to_string().starts_with("failed to write settings file"));
    }
}
