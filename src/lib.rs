//! # Kamedex
//!
//! Client core for a character REST API - a typed HTTP client, a validated
//! service layer, and injectable state stores that drive a reactive
//! presentation layer.
//!
//! ## Features
//!
//! - **Typed HTTP client**: reqwest wrapper with a normalized error taxonomy
//! - **Validated services**: response shapes checked at the service boundary
//! - **Explicit state stores**: loading/error state machines, no ambient singletons
//! - **Error notifications**: process-wide banner state set by failing actions
//!
//! ## Modules
//!
//! - [`client`]: HTTP client wrapper over the remote API
//! - [`characters`]: character DTOs, service, and placeholder generation
//! - [`store`]: collection, detail, and notification state containers
//! - [`config`]: configuration loading from files and environment
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kamedex::{ApiClient, CharacterService, CollectionStore, Config, NotificationStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Base URL is required; missing configuration fails here, not on first call
//!     let config = Config::from_env()?;
//!
//!     let client = ApiClient::new(&config.api)?;
//!     let service = Arc::new(CharacterService::new(client));
//!     let notifications = Arc::new(NotificationStore::new());
//!     let collection = CollectionStore::new(service, notifications.clone());
//!
//!     collection.fetch_list(None, None).await;
//!     println!("loaded {} characters", collection.characters().await.len());
//!
//!     Ok(())
//! }
//! ```

pub mod characters;
pub mod client;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use client::{ApiClient, ClientError};

pub use characters::{
    placeholder_characters, Character, CharacterId, CharacterService, CharacterSource,
    ServiceError, PLACEHOLDER_COUNT,
};

pub use store::{CollectionStore, DetailStore, Notification, NotificationStore};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
