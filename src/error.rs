//! Provides all error types the program uses.

use std::path::PathBuf;
use thiserror::Error;

/// Represents all types of errors that can occur when working with profiles.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A profile name is empty or contains characters that aren't safe to use
    /// as a filesystem path segment.
    #[error("Invalid profile name: {0}")]
    InvalidName(String),
    /// Returned when loading a profile that hasn't been saved.
    #[error("No such profile: {0}")]
    NoSuchProfile(String),
}

/// Represents all types of errors that can occur when launching the server.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The configured server executable doesn't exist in the filesystem.
    #[error("Server executable does not exist: {}", .0.display())]
    MissingExecutable(PathBuf),
    /// The profile has no server executable configured.
    #[error("No server executable configured")]
    NoExecutable,
}
