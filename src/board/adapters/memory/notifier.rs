//! Recording notifier capturing the transient-notification stream.

use std::sync::{Arc, Mutex};

use crate::board::{
    domain::CardId,
    ports::{DocumentGatewayError, NotificationToken, UpdateNotifier},
};

/// One captured notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A status update started for `card`.
    Updating {
        /// Card being persisted.
        card: CardId,
        /// Token identifying the pending notification.
        token: NotificationToken,
    },
    /// The pending notification resolved successfully.
    Succeeded {
        /// Token of the replaced notification.
        token: NotificationToken,
    },
    /// The pending notification resolved with a failure.
    Failed {
        /// Token of the replaced notification.
        token: NotificationToken,
        /// Rendered failure reason.
        reason: String,
    },
}

/// Notifier that records every event for test assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotificationEvent>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the captured events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: NotificationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl UpdateNotifier for RecordingNotifier {
    fn updating(&self, card: &CardId) -> NotificationToken {
        let token = NotificationToken::new();
        self.record(NotificationEvent::Updating {
            card: card.clone(),
            token,
        });
        token
    }

    fn succeeded(&self, token: NotificationToken) {
        self.record(NotificationEvent::Succeeded { token });
    }

    fn failed(&self, token: NotificationToken, reason: &DocumentGatewayError) {
        self.record(NotificationEvent::Failed {
            token,
            reason: reason.to_string(),
        });
    }
}
