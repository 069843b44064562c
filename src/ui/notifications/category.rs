// SPDX-License-Identifier: MPL-2.0
//! Category registry.
//!
//! Maps a category name (`"default"`, `"error"`, ...) to the presentation
//! metadata attached to a toast: the glyph identifier handed to the icon
//! collaborator and the style class handed to the style collaborator.

use crate::error::NotificationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the category used when a caller does not pick one.
pub const DEFAULT_CATEGORY: &str = "default";

/// Presentation metadata for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Glyph identifier understood by the icon collaborator.
    pub glyph: String,
    /// Style class understood by the style collaborator.
    pub class: String,
}

impl CategoryStyle {
    pub fn new(glyph: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            class: class.into(),
        }
    }
}

/// What `resolve` does with a category that is not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownCategoryPolicy {
    /// Fail the request with `UnknownCategory`.
    #[default]
    Reject,
    /// Render with the `default` category instead.
    #[serde(alias = "fallback-to-default")]
    Fallback,
}

/// Static mapping from category name to presentation metadata.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    entries: HashMap<String, CategoryStyle>,
    policy: UnknownCategoryPolicy,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryRegistry {
    /// Creates a registry holding the four built-in categories.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = [
            (DEFAULT_CATEGORY, "info"),
            ("error", "error"),
            ("success", "success"),
            ("warning", "warning"),
        ]
        .into_iter()
        .map(|(name, glyph)| (name.to_string(), CategoryStyle::new(glyph, name)))
        .collect();

        Self {
            entries,
            policy: UnknownCategoryPolicy::default(),
        }
    }

    /// Sets the unknown-category policy.
    #[must_use]
    pub fn with_policy(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    /// Adds or replaces a category.
    pub fn register(&mut self, name: impl Into<String>, style: CategoryStyle) {
        self.entries.insert(name.into(), style);
    }

    /// Strict lookup. Never consults the policy.
    pub fn lookup(&self, category: &str) -> Result<&CategoryStyle, NotificationError> {
        self.entries
            .get(category)
            .ok_or_else(|| NotificationError::UnknownCategory(category.to_string()))
    }

    /// Lookup that applies the unknown-category policy.
    ///
    /// Returns the name of the category actually used alongside its style.
    pub fn resolve<'a>(
        &'a self,
        category: &'a str,
    ) -> Result<(&'a str, &'a CategoryStyle), NotificationError> {
        match self.lookup(category) {
            Ok(style) => Ok((category, style)),
            Err(err) => match self.policy {
                UnknownCategoryPolicy::Reject => Err(err),
                UnknownCategoryPolicy::Fallback => {
                    tracing::warn!(category, "unknown notification category, using default");
                    self.lookup(DEFAULT_CATEGORY)
                        .map(|style| (DEFAULT_CATEGORY, style))
                }
            },
        }
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Registered category names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
