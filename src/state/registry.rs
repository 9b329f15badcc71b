use tracing::debug;

use super::data::{Friend, FriendId};
use crate::error::ValidationError;

/// The FriendRegistry owns the ordered list of friends.
/// Friends are only ever appended; there is no removal.
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a friend, keeping ids unique
    pub fn add(&mut self, friend: Friend) -> Result<(), ValidationError> {
        if self.contains(friend.id) {
            return Err(ValidationError::DuplicateId(friend.id));
        }

        debug!(id = friend.id, name = %friend.name, "friend added to registry");
        self.friends.push(friend);
        Ok(())
    }

    /// All friends in insertion order
    pub fn list(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FriendId) -> Option<&mut Friend> {
        self.friends.iter_mut().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
