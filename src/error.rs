//! Error types for the app
//!
//! Validation errors are recovered locally: the intent is rejected and
//! state is left exactly as it was. Config errors only ever cause a
//! fallback to defaults.

use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::FriendId;

/// A rejected user intent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("friend name must not be empty")]
    EmptyName,

    #[error("image URL must not be empty")]
    EmptyImage,

    #[error("a friend with id {0} already exists")]
    DuplicateId(FriendId),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("bill value must be greater than zero")]
    NonPositiveBill,

    #[error("your expense cannot be negative")]
    NegativeExpense,

    #[error("your expense cannot exceed the bill value")]
    ExpenseExceedsBill,

    #[error("amount is too large")]
    AmountOutOfRange,

    #[error("select a friend to split the bill with")]
    NoFriendSelected,
}

/// Failure to read or parse the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
