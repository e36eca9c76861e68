//! Shared world state for board drag-and-drop BDD scenarios.

use std::sync::Arc;

use docket::board::{
    adapters::memory::{InMemoryDocumentGateway, RecordingNotifier},
    services::{BoardService, DropOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Board service type used by the BDD world.
pub type TestBoard = BoardService<InMemoryDocumentGateway, RecordingNotifier, DefaultClock>;

/// Scenario world for board drag behaviour tests.
pub struct BoardWorld {
    /// Backend double seeded by Given steps.
    pub gateway: InMemoryDocumentGateway,
    /// Notification recorder inspected by Then steps.
    pub notifier: RecordingNotifier,
    /// Board under test.
    pub board: TestBoard,
    /// Outcome of the most recent drop, if any.
    pub last_outcome: Option<DropOutcome>,
}

impl BoardWorld {
    /// Creates a world with an empty backend and board.
    #[must_use]
    pub fn new() -> Self {
        let gateway = InMemoryDocumentGateway::new();
        let notifier = RecordingNotifier::new();
        let board = BoardService::new(
            Arc::new(gateway.clone()),
            Arc::new(notifier.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            gateway,
            notifier,
            board,
            last_outcome: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
