//! Document gateway port for the remote case-document backend.
//!
//! The backend owns all durable state. The board consumes two endpoints:
//! a bulk document fetch (`GET /documents`) and a single-field status
//! update (`PUT /documents/{id}` with a [`StatusUpdate`] body). The two
//! trait methods mirror that contract; how requests travel is an adapter
//! concern.

use crate::board::domain::{CardId, TaskStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for document gateway operations.
pub type DocumentGatewayResult<T> = Result<T, DocumentGatewayError>;

/// Discriminator naming the record type of a backend document.
///
/// The board renders only `task` documents; every other kind is ignored
/// at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// A board task.
    Task,
    /// Any other document kind (cases, contacts, payments, ...).
    #[serde(other)]
    Other,
}

/// Wire shape of one backend document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Backend-assigned identity.
    pub id: CardId,
    /// Record type discriminator.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Document title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw priority value; the board parses it leniently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Raw status value; the board parses it strictly.
    pub status: String,
}

/// Wire body of a status update: `{"status": "<new-status>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// The new status value.
    pub status: TaskStatus,
}

/// Backend access contract for board documents.
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    /// Fetches every document record.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentGatewayError`] when the backend rejects the
    /// request or transport fails.
    async fn fetch_documents(&self) -> DocumentGatewayResult<Vec<DocumentRecord>>;

    /// Persists a status change for one document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentGatewayError::UnknownDocument`] when `id` does
    /// not name a stored document, [`DocumentGatewayError::Rejected`]
    /// when the backend answers with a non-success status, or
    /// [`DocumentGatewayError::Transport`] when the request never
    /// completes.
    async fn update_status(&self, id: &CardId, status: TaskStatus) -> DocumentGatewayResult<()>;
}

/// Errors returned by document gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum DocumentGatewayError {
    /// The backend answered with a non-success status code.
    #[error("backend rejected the request with status {0}")]
    Rejected(u16),

    /// The document does not exist on the backend.
    #[error("unknown document: {0}")]
    UnknownDocument(CardId),

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DocumentGatewayError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
