// SPDX-License-Identifier: MPL-2.0
//! Input normalization.
//!
//! Callers may describe a notification either positionally
//! (`message`, category or delay, delay) or with a single options object.
//! Both shapes collapse into a canonical [`NotificationRequest`].

use super::category::DEFAULT_CATEGORY;
use crate::error::NotificationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Canonical description of a notification to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub category: String,
    /// 0 means persistent.
    pub auto_dismiss_delay_ms: u64,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>, category: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            message: message.into(),
            category: category.into(),
            auto_dismiss_delay_ms: delay_ms,
        }
    }

    /// A persistent notification stays until dismissed by hand.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.auto_dismiss_delay_ms == 0
    }

    /// Returns the auto-dismiss delay, or `None` when persistent.
    #[must_use]
    pub fn auto_dismiss_delay(&self) -> Option<Duration> {
        (!self.is_persistent()).then(|| Duration::from_millis(self.auto_dismiss_delay_ms))
    }
}

/// Second positional argument: either a category name or a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOrDelay {
    Type(String),
    Delay(i64),
}

impl From<&str> for TypeOrDelay {
    fn from(value: &str) -> Self {
        TypeOrDelay::Type(value.to_string())
    }
}

impl From<String> for TypeOrDelay {
    fn from(value: String) -> Self {
        TypeOrDelay::Type(value)
    }
}

impl From<i64> for TypeOrDelay {
    fn from(value: i64) -> Self {
        TypeOrDelay::Delay(value)
    }
}

impl From<i32> for TypeOrDelay {
    fn from(value: i32) -> Self {
        TypeOrDelay::Delay(i64::from(value))
    }
}

impl From<u32> for TypeOrDelay {
    fn from(value: u32) -> Self {
        TypeOrDelay::Delay(i64::from(value))
    }
}

/// Options object form of a notification request.
///
/// Field names follow the public call contract (`type`, `delayBeforeHide`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(
        rename = "type",
        alias = "category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    #[serde(
        rename = "delayBeforeHide",
        alias = "autoDismissDelayMs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delay_before_hide: Option<i64>,
}

impl NotificationOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn delay_before_hide(mut self, delay_ms: i64) -> Self {
        self.delay_before_hide = Some(delay_ms);
        self
    }
}

/// The two accepted call shapes, plus an already canonical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowArgs {
    Positional {
        message: String,
        type_or_delay: Option<TypeOrDelay>,
        delay: Option<i64>,
    },
    Options(NotificationOptions),
    /// Passed through `normalize` unchanged.
    Request(NotificationRequest),
}

impl ShowArgs {
    pub fn positional(
        message: impl Into<String>,
        type_or_delay: Option<TypeOrDelay>,
        delay: Option<i64>,
    ) -> Self {
        ShowArgs::Positional {
            message: message.into(),
            type_or_delay,
            delay,
        }
    }
}

impl From<&str> for ShowArgs {
    fn from(message: &str) -> Self {
        ShowArgs::positional(message, None, None)
    }
}

impl From<String> for ShowArgs {
    fn from(message: String) -> Self {
        ShowArgs::positional(message, None, None)
    }
}

impl From<(&str, &str)> for ShowArgs {
    fn from((message, category): (&str, &str)) -> Self {
        ShowArgs::positional(message, Some(category.into()), None)
    }
}

impl From<(&str, &str, i64)> for ShowArgs {
    fn from((message, category, delay): (&str, &str, i64)) -> Self {
        ShowArgs::positional(message, Some(category.into()), Some(delay))
    }
}

impl From<(&str, i64)> for ShowArgs {
    fn from((message, delay): (&str, i64)) -> Self {
        ShowArgs::positional(message, Some(TypeOrDelay::Delay(delay)), None)
    }
}

impl From<NotificationOptions> for ShowArgs {
    fn from(options: NotificationOptions) -> Self {
        ShowArgs::Options(options)
    }
}

impl From<NotificationRequest> for ShowArgs {
    fn from(request: NotificationRequest) -> Self {
        ShowArgs::Request(request)
    }
}

/// Collapses either call shape into a canonical request.
///
/// Only the delay range is validated here. An absent message becomes an
/// empty string and an unknown category is passed through, both to be
/// rejected by the manager when the notification is shown.
pub fn normalize(args: ShowArgs) -> Result<NotificationRequest, NotificationError> {
    let (message, category, delay) = match args {
        ShowArgs::Request(request) => return Ok(request),
        ShowArgs::Options(options) => {
            // `type || "default"`: empty counts as absent.
            let category = options
                .category
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            (
                options.message.unwrap_or_default(),
                category,
                options.delay_before_hide.unwrap_or(0),
            )
        }
        ShowArgs::Positional {
            message,
            type_or_delay,
            delay,
        } => match type_or_delay {
            Some(TypeOrDelay::Type(category)) => (message, category, delay.unwrap_or(0)),
            Some(TypeOrDelay::Delay(delay)) => (message, DEFAULT_CATEGORY.to_string(), delay),
            None => (message, DEFAULT_CATEGORY.to_string(), delay.unwrap_or(0)),
        },
    };

    let delay = u64::try_from(delay).map_err(|_| NotificationError::InvalidDelay(delay))?;

    Ok(NotificationRequest {
        message,
        category,
        auto_dismiss_delay_ms: delay,
    })
}
