/// View helpers
///
/// Pure functions from session state to iced elements. User input comes
/// back as `crate::Message` values; nothing here mutates state.

pub mod forms;
pub mod friends;
