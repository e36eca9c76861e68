//! In-memory document gateway with failure injection.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{CardId, TaskStatus},
    ports::{DocumentGateway, DocumentGatewayError, DocumentGatewayResult, DocumentRecord},
};

/// Thread-safe in-memory document store standing in for the backend.
///
/// Records keep insertion order so board projections observe the same
/// ordering contract as the backend's bulk fetch. Failure injection
/// covers both endpoints, and every accepted status update is logged
/// for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentGateway {
    state: Arc<RwLock<GatewayState>>,
}

#[derive(Debug, Default)]
struct GatewayState {
    documents: Vec<DocumentRecord>,
    updates: Vec<(CardId, TaskStatus)>,
    fail_fetches: bool,
    reject_updates: Option<u16>,
}

impl InMemoryDocumentGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-populated with the given records.
    #[must_use]
    pub fn with_documents(documents: impl IntoIterator<Item = DocumentRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState {
                documents: documents.into_iter().collect(),
                ..GatewayState::default()
            })),
        }
    }

    /// Appends a record to the store.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn push_document(&self, record: DocumentRecord) -> DocumentGatewayResult<()> {
        let mut state = self.write_state()?;
        state.documents.push(record);
        Ok(())
    }

    /// Makes every subsequent fetch fail with a transport error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn fail_fetches(&self) -> DocumentGatewayResult<()> {
        let mut state = self.write_state()?;
        state.fail_fetches = true;
        Ok(())
    }

    /// Makes every subsequent status update fail with the given backend
    /// status code.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn reject_updates(&self, http_status: u16) -> DocumentGatewayResult<()> {
        let mut state = self.write_state()?;
        state.reject_updates = Some(http_status);
        Ok(())
    }

    /// Returns every accepted status update in call order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the store lock is poisoned.
    pub fn update_log(&self) -> DocumentGatewayResult<Vec<(CardId, TaskStatus)>> {
        let state = self.read_state()?;
        Ok(state.updates.clone())
    }

    fn read_state(&self) -> DocumentGatewayResult<RwLockReadGuard<'_, GatewayState>> {
        self.state
            .read()
            .map_err(|err| DocumentGatewayError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> DocumentGatewayResult<RwLockWriteGuard<'_, GatewayState>> {
        self.state
            .write()
            .map_err(|err| DocumentGatewayError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl DocumentGateway for InMemoryDocumentGateway {
    async fn fetch_documents(&self) -> DocumentGatewayResult<Vec<DocumentRecord>> {
        let state = self.read_state()?;
        if state.fail_fetches {
            return Err(DocumentGatewayError::transport(std::io::Error::other(
                "injected fetch failure",
            )));
        }
        Ok(state.documents.clone())
    }

    async fn update_status(&self, id: &CardId, status: TaskStatus) -> DocumentGatewayResult<()> {
        let mut state = self.write_state()?;
        if let Some(code) = state.reject_updates {
            return Err(DocumentGatewayError::Rejected(code));
        }

        let record = state
            .documents
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| DocumentGatewayError::UnknownDocument(id.clone()))?;
        record.status = status.as_str().to_owned();
        state.updates.push((id.clone(), status));
        Ok(())
    }
}
