//! Board controller owning the authoritative task collection.

use crate::board::{
    domain::{CardId, ColumnView, DragEvent, Priority, Task, TaskStatus},
    ports::{DocumentGateway, DocumentKind, DocumentRecord, UpdateNotifier},
};
use mockable::Clock;
use std::sync::Arc;

/// Result of applying one drag-completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the outcome reports whether local and backend state diverged"]
pub enum DropOutcome {
    /// The card moved and the backend acknowledged the update.
    Moved,
    /// The card was dropped on its current column; nothing changed and
    /// no update was sent.
    AlreadyInPlace,
    /// The drag ended outside every column; nothing changed.
    NoDestination,
    /// The event referenced a card that is not on the board.
    UnknownCard,
    /// The card moved locally but the backend update failed; the local
    /// move is retained and now diverges from the backend.
    SyncFailed,
}

/// Board controller: owns the task collection and synchronizes status
/// moves with the document backend.
///
/// The controller is the single writer of the collection (mutation
/// requires `&mut self`); columns and cards are stateless projections
/// computed from it on demand. The remote side of a move is applied
/// optimistically: the local list mutates before the backend update is
/// awaited, and a failed update keeps the local move. That divergence
/// is deliberate and is reported through [`DropOutcome::SyncFailed`]
/// and a failure notification rather than rolled back.
pub struct BoardService<G, N, C>
where
    G: DocumentGateway,
    N: UpdateNotifier,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    notifier: Arc<N>,
    clock: Arc<C>,
    tasks: Vec<Task>,
}

impl<G, N, C> BoardService<G, N, C>
where
    G: DocumentGateway,
    N: UpdateNotifier,
    C: Clock + Send + Sync,
{
    /// Creates a board controller with an empty task collection.
    #[must_use]
    pub const fn new(gateway: Arc<G>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            notifier,
            clock,
            tasks: Vec::new(),
        }
    }

    /// Loads the board from the backend.
    ///
    /// Fetches every document once, keeps the records flagged as tasks,
    /// and replaces the owned collection. A failed fetch is logged and
    /// leaves the board empty; no retry is attempted and nothing is
    /// surfaced to the user. Records with an unusable status or title
    /// are skipped with a warning and therefore render in no column.
    pub async fn load(&mut self) {
        let records = match self.gateway.fetch_documents().await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(error = %err, "board load failed, starting empty");
                self.tasks = Vec::new();
                return;
            }
        };

        self.tasks = records
            .into_iter()
            .filter(|record| record.kind == DocumentKind::Task)
            .filter_map(task_from_record)
            .collect();
    }

    /// Applies one drag-completion event.
    ///
    /// This is the sole mutation entry point of the board. A
    /// status-changing drop mutates the local task before the backend
    /// update is awaited, emits an "updating" notification, and resolves
    /// it to success or failure once the update completes. Drops without
    /// a destination, onto the current column, or for an unknown card
    /// are no-ops; the same-column case sends no update, so repeating a
    /// drop is idempotent.
    pub async fn handle_drop(&mut self, event: DragEvent) -> DropOutcome {
        let (card, target) = event.into_parts();
        let Some(destination) = target else {
            return DropOutcome::NoDestination;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == &card) else {
            tracing::warn!(card = %card, "drop event for a card that is not on the board");
            return DropOutcome::UnknownCard;
        };
        if !task.move_to(destination, &*self.clock) {
            return DropOutcome::AlreadyInPlace;
        }

        let token = self.notifier.updating(&card);
        match self.gateway.update_status(&card, destination).await {
            Ok(()) => {
                self.notifier.succeeded(token);
                DropOutcome::Moved
            }
            Err(err) => {
                tracing::warn!(
                    card = %card,
                    error = %err,
                    "status update failed, keeping optimistic local move"
                );
                self.notifier.failed(token, &err);
                DropOutcome::SyncFailed
            }
        }
    }

    /// Returns every board column projected from the current collection.
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnView> {
        ColumnView::project_board(&self.tasks)
    }

    /// Returns the owned task collection in fetch order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with the given identity, if present.
    #[must_use]
    pub fn task(&self, id: &CardId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }
}

/// Converts a task-flagged document record into a domain task, skipping
/// records the board cannot render.
fn task_from_record(record: DocumentRecord) -> Option<Task> {
    let status = match TaskStatus::try_from(record.status.as_str()) {
        Ok(status) => status,
        Err(err) => {
            tracing::warn!(card = %record.id, error = %err, "skipping task with unrecognized status");
            return None;
        }
    };
    let priority = Priority::parse_lenient(record.priority.as_deref());

    match Task::new(record.id, record.title, record.description, priority, status) {
        Ok(task) => Some(task),
        Err(err) => {
            tracing::warn!(error = %err, "skipping unrenderable task document");
            None
        }
    }
}
