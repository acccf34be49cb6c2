//! Notification Store
//!
//! Process-wide holder for a single pending error banner. Any failing store
//! action sets it; the presentation layer reads it reactively and dismisses
//! it explicitly.

use tokio::sync::RwLock;

/// Fallback banner message when a failure carries no message of its own
pub const DEFAULT_MESSAGE: &str = "an unexpected error occurred";

/// Default banner title
pub const DEFAULT_TITLE: &str = "Error";

/// A user-visible error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub title: String,
    pub is_visible: bool,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            message: String::new(),
            title: DEFAULT_TITLE.to_string(),
            is_visible: false,
        }
    }
}

/// Holder for the pending notification
#[derive(Debug, Default)]
pub struct NotificationStore {
    state: RwLock<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner with the given message and title
    pub async fn notify(&self, message: impl Into<String>, title: impl Into<String>) {
        let message = message.into();
        let title = title.into();

        tracing::debug!(message = %message, title = %title, "Showing error notification");

        let mut state = self.state.write().await;
        state.message = message;
        state.title = title;
        state.is_visible = true;
    }

    /// Show a banner with the default message and title
    pub async fn notify_default(&self) {
        self.notify(DEFAULT_MESSAGE, DEFAULT_TITLE).await;
    }

    /// Hide the banner
    ///
    /// Message and title are retained so the closing animation still has
    /// content to render.
    pub async fn dismiss(&self) {
        let mut state = self.state.write().await;
        state.is_visible = false;
    }

    /// Snapshot of the current banner state
    pub async fn current(&self) -> Notification {
        self.state.read().await.clone()
    }

    pub async fn is_visible(&self) -> bool {
        self.state.read().await.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty_and_hidden() {
        let store = NotificationStore::new();
        let state = store.current().await;
        assert_eq!(state.message, "");
        assert_eq!(state.title, "Error");
        assert!(!state.is_visible);
    }

    #[tokio::test]
    async fn notify_sets_content_and_shows() {
        let store = NotificationStore::new();
        store.notify("it broke", "Error Loading Characters").await;

        let state = store.current().await;
        assert_eq!(state.message, "it broke");
        assert_eq!(state.title, "Error Loading Characters");
        assert!(state.is_visible);
    }

    #[tokio::test]
    async fn notify_default_uses_fixed_strings() {
        let store = NotificationStore::new();
        store.notify_default().await;

        let state = store.current().await;
        assert_eq!(state.message, DEFAULT_MESSAGE);
        assert_eq!(state.title, DEFAULT_TITLE);
        assert!(state.is_visible);
    }

    #[tokio::test]
    async fn dismiss_hides_but_keeps_content() {
        let store = NotificationStore::new();
        store.notify("it broke", "Error").await;
        store.dismiss().await;

        let state = store.current().await;
        assert!(!state.is_visible);
        assert_eq!(state.message, "it broke");
        assert_eq!(state.title, "Error");
    }
}
