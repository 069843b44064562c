// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Notification(NotificationError),
}

/// Errors raised when a notification request cannot be honored.
///
/// Dismissal never produces one of these: dismissing an unknown, closing or
/// removed notification is always a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// The category is not present in the registry.
    UnknownCategory(String),

    /// The request carries no usable message.
    MalformedRequest(String),

    /// The auto-dismiss delay is negative.
    InvalidDelay(i64),

    /// `show_notification` was called before a manager was installed.
    NotInstalled,

    /// A manager is already installed for this thread.
    AlreadyInstalled,
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::UnknownCategory(name) => {
                write!(f, "Unknown notification category: {:?}", name)
            }
            NotificationError::MalformedRequest(reason) => {
                write!(f, "Malformed notification request: {}", reason)
            }
            NotificationError::InvalidDelay(delay) => {
                write!(f, "Auto-dismiss delay must be >= 0, got {}", delay)
            }
            NotificationError::NotInstalled => write!(f, "No notification manager installed"),
            NotificationError::AlreadyInstalled => {
                write!(f, "A notification manager is already installed")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Notification(e) => write!(f, "Notification Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for NotificationError {}

impl From<NotificationError> for Error {
    fn from(err: NotificationError) -> Self {
        Error::Notification(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
