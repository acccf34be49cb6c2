//! Kamedex Demo Driver
//!
//! Loads configuration from the environment, wires the client, service, and
//! stores together, and exercises a list fetch, a detail fetch, and a local
//! lookup against the configured character API.

use std::sync::Arc;

use kamedex::{
    ApiClient, CharacterService, CollectionStore, Config, DetailStore, NotificationStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "kamedex=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Kamedex v{}", env!("CARGO_PKG_VERSION"));

    // Missing base URL fails here, before any request is attempted
    let config = Config::from_env()?;
    tracing::info!(base_url = %config.api.base_url, "Configured character API");

    let client = ApiClient::new(&config.api)?;
    let service = Arc::new(CharacterService::new(client));
    let notifications = Arc::new(NotificationStore::new());
    let collection = CollectionStore::new(service.clone(), notifications.clone());
    let detail = DetailStore::new(service, notifications.clone());

    // List fetch
    collection.fetch_list(None, Some(config.api.page_size)).await;
    let characters = collection.characters().await;
    match collection.error().await {
        Some(error) => tracing::warn!(%error, "List fetch failed"),
        None => tracing::info!(count = characters.len(), "Fetched character list"),
    }

    for character in characters.iter().take(5) {
        tracing::info!(
            id = %character.id,
            name = character.name.as_deref().unwrap_or("<unnamed>"),
            race = character.race.as_deref().unwrap_or("-"),
            "Character"
        );
    }

    // Detail fetch for the first real record
    if let Some(first) = characters.first() {
        detail.fetch_by_id(first.id.clone()).await;
        match detail.character().await {
            Some(character) => tracing::info!(
                id = %character.id,
                name = character.name.as_deref().unwrap_or("<unnamed>"),
                description = character.description.as_deref().unwrap_or("-"),
                "Character detail"
            ),
            None => tracing::warn!(error = ?detail.error().await, "Detail fetch failed"),
        }

        // Local lookup, no network
        let found = collection.get_by_local_id(first.id.clone()).await;
        tracing::info!(found = found.is_some(), "Local lookup for first character");
    }

    // A failing fetch would have raised the banner; show and clear it
    if notifications.is_visible().await {
        let banner = notifications.current().await;
        tracing::warn!(title = %banner.title, message = %banner.message, "Pending notification");
        notifications.dismiss().await;
    }

    Ok(())
}
