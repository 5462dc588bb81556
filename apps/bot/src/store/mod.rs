//! In-memory state: the session store.

pub mod sessions;

pub use sessions::SessionStore;
