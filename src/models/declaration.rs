//! Declaration models for the dispatch engine.
//!
//! This module contains the static description of who/what/how to notify
//! for one operation: the notification kind, literal-or-derived content,
//! and the path expressions locating recipients in the operation's result.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DispatchError, DispatchResult};

// =============================================================================
// Notification Kind Enum
// =============================================================================

/// Category of notification, defined by the surrounding system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Booking,
    Account,
    Payment,
    System,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Booking => write!(f, "booking"),
            NotificationKind::Account => write!(f, "account"),
            NotificationKind::Payment => write!(f, "payment"),
            NotificationKind::System => write!(f, "system"),
        }
    }
}

// =============================================================================
// Content (literal or derived)
// =============================================================================

/// Function deriving message/title text from an operation's result tree
pub type ContentFn = Arc<dyn Fn(&Value) -> DispatchResult<String> + Send + Sync>;

/// Message or title content: a fixed string, or a function of the
/// operation's result
#[derive(Clone)]
pub enum Content {
    Literal(String),
    Derived(ContentFn),
}

impl Content {
    /// Creates literal content
    pub fn literal(text: impl Into<String>) -> Self {
        Content::Literal(text.into())
    }

    /// Creates content derived from the operation's result
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&Value) -> DispatchResult<String> + Send + Sync + 'static,
    {
        Content::Derived(Arc::new(f))
    }

    /// Resolves the content against an operation's result
    pub fn resolve(&self, result: &Value) -> DispatchResult<String> {
        match self {
            Content::Literal(text) => Ok(text.clone()),
            Content::Derived(f) => f(result),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Content::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Literal(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Literal(text)
    }
}

// =============================================================================
// Target Declaration
// =============================================================================

/// Static description of who/what/how to notify after one operation.
///
/// Declarations are built at process start, registered once, and never
/// mutated afterwards. `target_path` absent means "notify the invoking
/// actor only"; `title` absent falls back to the configured default.
#[derive(Debug, Clone)]
pub struct TargetDeclaration {
    pub kind: NotificationKind,
    pub message: Option<Content>,
    pub title: Option<Content>,
    pub target_path: Option<String>,
    pub additional: Vec<AdditionalTarget>,
}

impl TargetDeclaration {
    /// Creates an empty declaration for the given kind
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            kind,
            message: None,
            title: None,
            target_path: None,
            additional: Vec::new(),
        }
    }

    /// Sets the message content
    pub fn message(mut self, message: impl Into<Content>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the title content
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the path expression locating the primary recipients
    pub fn target_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Appends a secondary target
    pub fn additional(mut self, target: AdditionalTarget) -> Self {
        self.additional.push(target);
        self
    }
}

/// Secondary target with its own path, content and kind
#[derive(Debug, Clone)]
pub struct AdditionalTarget {
    pub kind: NotificationKind,
    pub target_path: String,
    pub message: Option<Content>,
    pub title: Option<Content>,
}

impl AdditionalTarget {
    /// Creates a secondary target for the given kind and path
    pub fn new(kind: NotificationKind, target_path: impl Into<String>) -> Self {
        Self {
            kind,
            target_path: target_path.into(),
            message: None,
            title: None,
        }
    }

    /// Sets the message content
    pub fn message(mut self, message: impl Into<Content>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the title content
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }
}

// Content-derivation helpers shared by declaration authors.
impl Content {
    /// Derived content that reads a string field from the result tree,
    /// erroring when the field is missing
    pub fn from_field(key: &'static str) -> Self {
        Content::derived(move |result| {
            result
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .ok_or_else(|| DispatchError::Content(format!("Missing result field '{}'", key)))
        })
    }
}
