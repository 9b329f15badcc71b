//! Friend id generation
//!
//! The add-friend workflow takes its ids from an `IdGenerator` so that
//! tests can supply deterministic ids instead of random ones.

use super::data::FriendId;

pub trait IdGenerator {
    fn next_id(&mut self) -> FriendId;
}

/// Uniformly random u32 ids. Not cryptographic.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> FriendId {
        rand::random::<FriendId>()
    }
}

/// Counts up from a starting id
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: FriendId,
}

#[cfg(test)]
impl SequentialIds {
    pub fn starting_at(first: FriendId) -> Self {
        Self { next: first }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}
