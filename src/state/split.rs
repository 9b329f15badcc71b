//! Bill splitting
//!
//! `compute` turns a bill into the signed delta for the selected friend's
//! balance. `BillSplitForm` holds the raw text the user typed.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::data::Payer;
use crate::error::ValidationError;

/// Signed change to the friend's balance for one bill.
///
/// - `Payer::You`: the friend owes their share, `bill - your_expense`
/// - `Payer::Friend`: you owe your share, `-your_expense`
///
/// Requires `bill > 0` and `0 <= your_expense <= bill`.
pub fn compute(bill: Decimal, your_expense: Decimal, payer: Payer) -> Result<Decimal, ValidationError> {
    if bill <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveBill);
    }
    if your_expense < Decimal::ZERO {
        return Err(ValidationError::NegativeExpense);
    }
    if your_expense > bill {
        return Err(ValidationError::ExpenseExceedsBill);
    }

    // Cannot overflow: 0 <= your_expense <= bill
    Ok(match payer {
        Payer::You => bill - your_expense,
        Payer::Friend => -your_expense,
    })
}

/// Parse a user-typed amount
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(input.trim()).map_err(|_| ValidationError::InvalidAmount(input.to_string()))
}

/// The split-bill form fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillSplitForm {
    pub bill_value: String,
    pub your_expense: String,
    pub payer: Payer,
}

impl BillSplitForm {
    /// Both amounts, parsed
    pub fn parse(&self) -> Result<(Decimal, Decimal), ValidationError> {
        Ok((parse_amount(&self.bill_value)?, parse_amount(&self.your_expense)?))
    }

    /// The friend's part of the bill, shown read-only next to the inputs.
    /// `None` until both amounts parse, or if the difference does not fit.
    pub fn friend_expense(&self) -> Option<Decimal> {
        let (bill, yours) = self.parse().ok()?;
        bill.checked_sub(yours)
    }

    /// Delta for the current inputs
    pub fn delta(&self) -> Result<Decimal, ValidationError> {
        let (bill, yours) = self.parse()?;
        compute(bill, yours, self.payer)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
