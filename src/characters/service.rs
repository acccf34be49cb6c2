//! Character Service
//!
//! Domain operations over the API client. The service is the validation
//! boundary: response shapes are checked here, so stores only ever see typed
//! `Character` values. Failures are logged with call context and rethrown -
//! the service never swallows an error.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::client::{ApiClient, ClientError};

use super::types::{Character, CharacterId};

/// Collection path on the remote API
const CHARACTERS_PATH: &str = "/characters";

/// Default page requested when the caller does not specify one
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size requested when the caller does not specify one
pub const DEFAULT_LIMIT: u32 = 20;

/// Fixed message for a list response that is not a JSON array
const UNEXPECTED_LIST_SHAPE: &str = "unexpected API response when fetching characters";

/// Source of character records
///
/// Implemented by [`CharacterService`] for the real API; stores depend on
/// this trait so they can be driven by a stub in tests.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch one page of characters
    async fn list(&self, page: u32, limit: u32) -> Result<Vec<Character>, ServiceError>;

    /// Fetch a single character by id
    async fn get_by_id(&self, id: &CharacterId) -> Result<Character, ServiceError>;
}

/// Character operations against the remote API
#[derive(Debug, Clone)]
pub struct CharacterService {
    client: ApiClient,
}

impl CharacterService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CharacterSource for CharacterService {
    async fn list(&self, page: u32, limit: u32) -> Result<Vec<Character>, ServiceError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];

        let body = self
            .client
            .get(CHARACTERS_PATH, &query)
            .await
            .map_err(|e| {
                tracing::error!(
                    path = CHARACTERS_PATH,
                    page,
                    limit,
                    error = %e,
                    "Failed to fetch character list"
                );
                e
            })?;

        let items = match body {
            Some(Value::Array(items)) => items,
            other => {
                tracing::error!(
                    path = CHARACTERS_PATH,
                    page,
                    limit,
                    body = ?other,
                    "Expected a JSON array of characters"
                );
                return Err(ServiceError::UnexpectedShape(
                    UNEXPECTED_LIST_SHAPE.to_string(),
                ));
            }
        };

        items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    tracing::error!(
                        path = CHARACTERS_PATH,
                        page,
                        limit,
                        error = %e,
                        "Character entry failed to decode"
                    );
                    ServiceError::Decode(e.to_string())
                })
            })
            .collect()
    }

    async fn get_by_id(&self, id: &CharacterId) -> Result<Character, ServiceError> {
        // No network call for a missing id
        if id.is_empty() {
            tracing::error!("Character fetch requested without an id");
            return Err(ServiceError::MissingId);
        }

        let path = format!("{CHARACTERS_PATH}/{id}");

        let body = self.client.get(&path, &[]).await.map_err(|e| {
            tracing::error!(
                character_id = %id,
                error = %e,
                "Failed to fetch character"
            );
            e
        })?;

        let Some(value) = body else {
            tracing::error!(character_id = %id, "Empty response where a character was expected");
            return Err(ServiceError::UnexpectedShape(format!(
                "empty API response when fetching character {id}"
            )));
        };

        serde_json::from_value(value).map_err(|e| {
            tracing::error!(character_id = %id, error = %e, "Character failed to decode");
            ServiceError::Decode(e.to_string())
        })
    }
}

/// Errors produced by the character service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A character id is required but none was supplied
    #[error("a character id is required")]
    MissingId,

    /// The response was well-formed JSON of the wrong shape
    #[error("{0}")]
    UnexpectedShape(String),

    /// The response did not decode into the expected type
    #[error("invalid character payload: {0}")]
    Decode(String),

    /// The underlying HTTP call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn service() -> CharacterService {
        let config = ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            ..Default::default()
        };
        CharacterService::new(ApiClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn get_by_id_with_empty_id_fails_without_network() {
        // Nothing listens on the base URL; a network attempt would surface
        // as a transport error instead of MissingId.
        let err = service()
            .get_by_id(&CharacterId::from(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingId));

        let err = service()
            .get_by_id(&CharacterId::from("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingId));
    }

    #[test]
    fn unexpected_shape_message_is_fixed() {
        let err = ServiceError::UnexpectedShape(UNEXPECTED_LIST_SHAPE.to_string());
        assert_eq!(
            err.to_string(),
            "unexpected API response when fetching characters"
        );
    }
}
