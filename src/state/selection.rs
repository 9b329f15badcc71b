use super::data::{Friend, FriendId};
use super::registry::FriendRegistry;

/// Which friend, if any, the split-bill form targets.
/// The split form is visible iff this is `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(FriendId),
}

impl Selection {
    /// Select `id`, or clear the selection if `id` is already selected
    pub fn select(&mut self, id: FriendId) -> Selection {
        *self = match *self {
            Selection::Selected(current) if current == id => Selection::None,
            _ => Selection::Selected(id),
        };
        *self
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn current_id(&self) -> Option<FriendId> {
        match self {
            Selection::Selected(id) => Some(*id),
            Selection::None => None,
        }
    }

    /// Resolve the selection against the registry
    pub fn current<'a>(&self, registry: &'a FriendRegistry) -> Option<&'a Friend> {
        self.current_id().and_then(|id| registry.get(id))
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.current_id() == Some(id)
    }
}
