//! Detail Store
//!
//! State container for the single-character view. Mirrors the collection
//! store's state machine for one record, and clears the previously held
//! record at fetch start so a new identifier never shows stale content.
//!
//! `clear_detail` bumps the generation counter, so a fetch still in flight
//! when the view navigates away is discarded on resolution.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::characters::{Character, CharacterId, CharacterSource};

use super::notification::NotificationStore;

#[derive(Debug, Default)]
struct DetailState {
    character: Option<Character>,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
}

/// State container for the character detail view
pub struct DetailStore {
    source: Arc<dyn CharacterSource>,
    notifications: Arc<NotificationStore>,
    state: RwLock<DetailState>,
}

impl DetailStore {
    pub fn new(source: Arc<dyn CharacterSource>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            source,
            notifications,
            state: RwLock::new(DetailState::default()),
        }
    }

    /// Fetch a single character into the store
    ///
    /// Never returns an error - failures land in the store's error field and
    /// the notification store, with the id in the banner title.
    pub async fn fetch_by_id(&self, id: impl Into<CharacterId>) {
        let id = id.into();

        let token = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.is_loading = true;
            state.error = None;
            // Clear the previous record so a new id never shows stale content
            state.character = None;
            state.generation
        };

        let result = self.source.get_by_id(&id).await;

        let mut state = self.state.write().await;
        if state.generation != token {
            tracing::debug!(
                character_id = %id,
                generation = token,
                current = state.generation,
                "Discarding stale character detail resolution"
            );
            return;
        }
        state.is_loading = false;

        match result {
            Ok(character) => {
                tracing::info!(character_id = %id, "Character detail loaded");
                state.character = Some(character);
                state.error = None;
            }
            Err(e) => {
                let message = e.to_string();
                state.error = Some(message.clone());
                drop(state);

                self.notifications
                    .notify(message, format!("Error Loading Character {id}"))
                    .await;
            }
        }
    }

    /// Reset record, error, and loading flag to their initial values
    ///
    /// Idempotent. Used when navigating away or when the identifying route
    /// parameter changes.
    pub async fn clear_detail(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.character = None;
        state.error = None;
        state.is_loading = false;
    }

    /// Snapshot of the currently held record
    pub async fn character(&self) -> Option<Character> {
        self.state.read().await.character.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }
}
