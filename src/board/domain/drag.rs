//! Drag-completion events raised by the pointer-capture collaborator.

use super::{CardId, TaskStatus};

/// The signal produced by pointer release, carrying the dragged card and
/// the resolved drop target, if any.
///
/// The board performs no hit-testing itself: the drag surface resolves
/// the destination column geometrically and reports it here. A `None`
/// destination means the card was released outside every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    card: CardId,
    destination: Option<TaskStatus>,
}

impl DragEvent {
    /// Creates an event for a card dropped onto a recognized column.
    #[must_use]
    pub const fn dropped_on(card: CardId, destination: TaskStatus) -> Self {
        Self {
            card,
            destination: Some(destination),
        }
    }

    /// Creates an event for a drag released outside every column.
    #[must_use]
    pub const fn released_outside(card: CardId) -> Self {
        Self {
            card,
            destination: None,
        }
    }

    /// Returns the dragged card identity.
    #[must_use]
    pub const fn card(&self) -> &CardId {
        &self.card
    }

    /// Returns the resolved destination column key, if any.
    #[must_use]
    pub const fn destination(&self) -> Option<TaskStatus> {
        self.destination
    }

    /// Splits the event into the dragged card and its destination.
    #[must_use]
    pub fn into_parts(self) -> (CardId, Option<TaskStatus>) {
        (self.card, self.destination)
    }
}
