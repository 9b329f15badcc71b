//! Add-friend workflow
//!
//! Holds the raw text of the add-friend form and turns a submit into a
//! new settled `Friend` appended to the registry. This is the only place
//! friends are created after startup.

use tracing::{info, warn};

use super::data::{Friend, FriendId};
use super::ids::IdGenerator;
use super::registry::FriendRegistry;
use crate::error::ValidationError;

/// How many fresh ids to try before giving up on a colliding generator
const MAX_ID_ATTEMPTS: usize = 8;

/// The add-friend form fields
#[derive(Debug, Clone, PartialEq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    /// Value the image field resets to
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_image(&mut self, image: String) {
        self.image = image;
    }

    /// Restore both fields to their defaults
    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }

    /// Create a friend from the current fields.
    ///
    /// On rejection nothing changes, fields included. On success the new
    /// friend is appended with a zero balance and the fields are reset.
    pub fn submit(
        &mut self,
        registry: &mut FriendRegistry,
        ids: &mut dyn IdGenerator,
    ) -> Result<FriendId, ValidationError> {
        // Whitespace-only counts as empty, but fields are stored as typed
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::EmptyImage);
        }

        let name = self.name.clone();
        let image = self.image.clone();

        let mut attempt = 1;
        loop {
            let id = ids.next_id();
            // The id suffix keeps avatar URLs distinct per friend
            let friend = Friend::new(id, name.as_str(), format!("{}?random={}", image, id));

            match registry.add(friend) {
                Ok(()) => {
                    info!(id, name = %name, "🤗 added friend");
                    self.reset();
                    return Ok(id);
                }
                Err(err) if attempt >= MAX_ID_ATTEMPTS => return Err(err),
                Err(_) => {
                    warn!(id, attempt, "generated friend id already taken, retrying");
                    attempt += 1;
                }
            }
        }
    }
}
