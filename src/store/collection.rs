//! Collection Store
//!
//! State container for the character list view. Each fetch runs the
//! `idle -> loading -> (success | error)` machine: success stores the fetched
//! page plus the synthetic placeholders, failure clears the collection and
//! raises a notification. The loading flag is reset in every outcome.
//!
//! Overlapping fetches are resolved with a generation counter: each fetch
//! captures a token at start, and a resolution whose token no longer matches
//! the current generation is discarded. The most recently started fetch wins,
//! not the one that happens to resolve last.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::characters::{
    placeholder_characters, Character, CharacterId, CharacterSource, DEFAULT_LIMIT, DEFAULT_PAGE,
};

use super::notification::NotificationStore;

/// Banner title for list-fetch failures
const LIST_ERROR_TITLE: &str = "Error Loading Characters";

/// Fallback error message when a failure carries an empty message
const LIST_ERROR_FALLBACK: &str = "failed to load characters";

#[derive(Debug, Default)]
struct CollectionState {
    characters: Vec<Character>,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
}

/// State container for the character list view
pub struct CollectionStore {
    source: Arc<dyn CharacterSource>,
    notifications: Arc<NotificationStore>,
    state: RwLock<CollectionState>,
}

impl CollectionStore {
    pub fn new(source: Arc<dyn CharacterSource>, notifications: Arc<NotificationStore>) -> Self {
        Self {
            source,
            notifications,
            state: RwLock::new(CollectionState::default()),
        }
    }

    /// Fetch one page of characters into the store
    ///
    /// Defaults: page 1, limit 20. Never returns an error - failures land in
    /// the store's error field and the notification store.
    pub async fn fetch_list(&self, page: Option<u32>, limit: Option<u32>) {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let token = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.is_loading = true;
            state.error = None;
            state.generation
        };

        let result = self.source.list(page, limit).await;

        let mut state = self.state.write().await;
        if state.generation != token {
            tracing::debug!(
                generation = token,
                current = state.generation,
                "Discarding stale character list resolution"
            );
            return;
        }
        state.is_loading = false;

        match result {
            Ok(items) => {
                tracing::info!(page, limit, count = items.len(), "Character list loaded");
                let mut characters = items;
                characters.extend(placeholder_characters());
                state.characters = characters;
                state.error = None;
            }
            Err(e) => {
                let mut message = e.to_string();
                if message.is_empty() {
                    message = LIST_ERROR_FALLBACK.to_string();
                }
                state.characters = Vec::new();
                state.error = Some(message.clone());
                drop(state);

                self.notifications.notify(message, LIST_ERROR_TITLE).await;
            }
        }
    }

    /// Look up a character already held in the collection
    ///
    /// Pure in-memory lookup, string-normalized id comparison, no network.
    pub async fn get_by_local_id(&self, id: impl Into<CharacterId>) -> Option<Character> {
        let id = id.into();
        let state = self.state.read().await;
        state.characters.iter().find(|c| c.id == id).cloned()
    }

    /// True iff the collection holds at least one record
    pub async fn has_characters(&self) -> bool {
        !self.state.read().await.characters.is_empty()
    }

    /// Snapshot of the current collection
    pub async fn characters(&self) -> Vec<Character> {
        self.state.read().await.characters.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }
}
