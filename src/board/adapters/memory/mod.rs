//! In-memory adapters for board tests and demos.

mod gateway;
mod notifier;

pub use gateway::InMemoryDocumentGateway;
pub use notifier::{NotificationEvent, RecordingNotifier};
