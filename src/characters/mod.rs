//! Characters Domain
//!
//! Everything specific to the character resource of the remote API.
//!
//! ## Architecture
//!
//! - **Types**: `Character` DTO and the string-normalizing `CharacterId`
//! - **Service**: validated list/get-by-id operations over the API client
//! - **Placeholders**: synthetic records appended to fetched pages
//!
//! ## Data Flow
//!
//! 1. Stores call [`CharacterSource`] operations
//! 2. [`CharacterService`] builds requests through the API client
//! 3. Response shapes are validated here, at the service boundary
//! 4. Decoded `Character` values flow back into store state

mod placeholders;
mod service;
mod types;

pub use placeholders::{placeholder_characters, PLACEHOLDER_COUNT};
pub use service::{CharacterService, CharacterSource, ServiceError, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use types::{Character, CharacterId};
