//! Data stores injected into the application state

pub mod avatars;
pub mod catalog;

pub use avatars::{AvatarStore, InMemoryAvatarStore};
pub use catalog::Catalog;
