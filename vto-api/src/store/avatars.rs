//! Avatar storage
//!
//! Avatars are produced by the external modelling service and handed to this
//! process already resolved. The store only keeps them addressable by id.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use vto_common::Avatar;

/// Lookup and registration of generated avatars
pub trait AvatarStore: Send + Sync {
    /// Fetch an avatar by id
    fn get(&self, id: &str) -> Option<Avatar>;

    /// Register an avatar, replacing any previous one with the same id
    fn insert(&self, avatar: Avatar);
}

/// Process-local avatar store
#[derive(Debug, Default)]
pub struct InMemoryAvatarStore {
    avatars: RwLock<HashMap<String, Avatar>>,
}

impl InMemoryAvatarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with fixtures
    pub fn with_avatars(avatars: impl IntoIterator<Item = Avatar>) -> Self {
        let store = Self::new();
        for avatar in avatars {
            store.insert(avatar);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.avatars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AvatarStore for InMemoryAvatarStore {
    fn get(&self, id: &str) -> Option<Avatar> {
        self.avatars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn insert(&self, avatar: Avatar) {
        self.avatars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(avatar.id.clone(), avatar);
    }
}
