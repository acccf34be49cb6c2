//! State Stores
//!
//! Explicit state containers for the presentation layer. Stores are
//! constructed once at startup and passed by `Arc` to whatever needs them -
//! there are no ambient singletons.
//!
//! ## Architecture
//!
//! - **CollectionStore**: list view state (`idle -> loading -> success | error`)
//! - **DetailStore**: single-record state, same machine
//! - **NotificationStore**: pending user-visible error banner
//!
//! Store actions are the error termination point: every failure is converted
//! into state fields plus a notification, the loading flag is reset in all
//! outcomes, and no error escapes to the caller.

mod collection;
mod detail;
mod notification;

pub use collection::CollectionStore;
pub use detail::DetailStore;
pub use notification::{Notification, NotificationStore};
