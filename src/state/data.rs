//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the state layer and the UI layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique friend id, stable for the lifetime of the registry
pub type FriendId = u32;

/// Represents a single friend in the sidebar
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL
    pub image: String,
    /// Running balance
    /// - Negative: you owe this friend
    /// - Positive: this friend owes you
    /// - Zero: settled
    pub balance: Decimal,
}

impl Friend {
    /// Create a settled friend
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Builder-style balance override, used for seed data
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Add a signed delta to the running balance.
    /// The balance is untouched if the sum does not fit.
    pub fn apply(&mut self, delta: Decimal) -> Result<(), ValidationError> {
        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or(ValidationError::AmountOutOfRange)?;
        Ok(())
    }

    /// Who owes whom, for display
    pub fn standing(&self) -> Standing {
        if self.balance < Decimal::ZERO {
            Standing::YouOwe(self.balance.abs())
        } else if self.balance > Decimal::ZERO {
            Standing::OwesYou(self.balance)
        } else {
            Standing::Even
        }
    }
}

/// Balance interpreted from the user's point of view.
/// Amounts are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    YouOwe(Decimal),
    OwesYou(Decimal),
    Even,
}

impl Standing {
    /// Human-readable line, e.g. "You owe Clark 7₹"
    pub fn describe(&self, name: &str, currency: &str) -> String {
        match self {
            Standing::YouOwe(amount) => format!("You owe {} {}{}", name, amount.normalize(), currency),
            Standing::OwesYou(amount) => format!("{} owes you {}{}", name, amount.normalize(), currency),
            Standing::Even => format!("You and {} are even", name),
        }
    }
}

/// Who fronted the bill being split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Payer {
    #[default]
    You,
    Friend,
}
