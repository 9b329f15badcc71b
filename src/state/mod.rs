/// State management module
///
/// This module handles all application state, including:
/// - Friend records and the payer choice (data.rs)
/// - The ordered friend list (registry.rs)
/// - Which friend is selected for splitting (selection.rs)
/// - Friend id generation (ids.rs)
/// - The add-friend form and workflow (add_friend.rs)
/// - Bill-split arithmetic and form (split.rs)
/// - The session that owns all of the above (session.rs)

pub mod add_friend;
pub mod data;
pub mod ids;
pub mod registry;
pub mod selection;
pub mod session;
pub mod split;

pub use session::Session;
