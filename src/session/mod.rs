//! Guide conversation persistence: a versionless JSON record behind a small
//! key-value style store.

pub mod record;
pub mod store;

pub use record::{SessionRecord, decode, encode, is_expired, restore};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
