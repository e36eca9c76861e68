//! Notifier port for transient status-update notifications.
//!
//! Models the notification surface of the host application: a drop
//! shows an "updating" notice that is later replaced in place by a
//! success or failure notice carrying the same token. Rendering is the
//! implementation's concern and must not block.

use crate::board::domain::CardId;
use crate::board::ports::gateway::DocumentGatewayError;
use std::fmt;
use uuid::Uuid;

/// Identity of one pending transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationToken(Uuid);

impl NotificationToken {
    /// Creates a fresh random token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient-notification contract for status updates.
pub trait UpdateNotifier: Send + Sync {
    /// Announces that `card` is being persisted and returns the token
    /// identifying the pending notification.
    fn updating(&self, card: &CardId) -> NotificationToken;

    /// Replaces the pending notification with a success notice.
    fn succeeded(&self, token: NotificationToken);

    /// Replaces the pending notification with a failure notice.
    fn failed(&self, token: NotificationToken, reason: &DocumentGatewayError);
}
