//! Priority levels and the card accent mapping derived from them.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};

/// Priority level carried by a task document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine work.
    Low,
    /// Elevated attention.
    Medium,
    /// Urgent work.
    High,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a wire priority, degrading missing or unrecognized values
    /// to `None`.
    ///
    /// Unlike status parsing, priority parsing is lenient: an unknown
    /// value falls back to the neutral card accent instead of failing
    /// the whole task.
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::try_from(raw).ok())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Visual accent of a rendered card.
///
/// The accent is a pure function of the recognized priority: three fixed
/// cases plus a neutral fallback for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAccent {
    /// Accent for high-priority cards.
    High,
    /// Accent for medium-priority cards.
    Medium,
    /// Accent for low-priority cards.
    Low,
    /// Fallback for a missing or unrecognized priority.
    Neutral,
}

impl CardAccent {
    /// Maps a recognized priority to its fixed accent.
    #[must_use]
    pub const fn for_priority(priority: Option<Priority>) -> Self {
        match priority {
            Some(Priority::High) => Self::High,
            Some(Priority::Medium) => Self::Medium,
            Some(Priority::Low) => Self::Low,
            None => Self::Neutral,
        }
    }

    /// Returns the style token consumed by the rendering layer.
    #[must_use]
    pub const fn style_token(self) -> &'static str {
        match self {
            Self::High => "accent-high",
            Self::Medium => "accent-medium",
            Self::Low => "accent-low",
            Self::Neutral => "accent-neutral",
        }
    }
}
