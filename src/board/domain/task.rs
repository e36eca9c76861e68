//! Task aggregate rendered as one draggable card.

use super::{BoardDomainError, CardId, Priority, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work rendered as one card on the board.
///
/// Tasks are created by the backend and loaded in bulk when the board
/// mounts. The board mutates only the status field, and only through
/// [`Task::move_to`]; every other field is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: CardId,
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    status: TaskStatus,
    moved_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task from backend document fields.
    ///
    /// `priority` is `None` when the document carried no recognized
    /// priority; such tasks render with the neutral accent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        description: Option<String>,
        priority: Option<Priority>,
        status: TaskStatus,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        if raw_title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle(id));
        }

        Ok(Self {
            id,
            title: raw_title,
            description,
            priority,
            status,
            moved_at: None,
        })
    }

    /// Returns the card identity.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the recognized priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the current status, i.e. the column the task renders in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns when the task was last moved on this board, if ever.
    #[must_use]
    pub const fn moved_at(&self) -> Option<DateTime<Utc>> {
        self.moved_at
    }

    /// Moves the task to a new status column.
    ///
    /// Returns `false` without touching the task when the destination
    /// equals the current status, so redundant drops stay free of side
    /// effects.
    pub fn move_to(&mut self, destination: TaskStatus, clock: &impl Clock) -> bool {
        if self.status == destination {
            return false;
        }
        self.status = destination;
        self.moved_at = Some(clock.utc());
        true
    }
}
