//! Shared value types, plus re-exports from external crates for convenience.
//!
//! The re-exported types are used throughout this SDK so users don't need to
//! add these dependencies to their `Cargo.toml`.

use bon::Builder;
/// Local date and time (no zone), the format the API uses for schedule and audit fields.
pub use chrono::NaiveDateTime;
/// Arbitrary precision decimal type for bids, goals and budgets.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use searchads_client_sdk::types::dec;
/// let bid = dec!(1.25);
/// ```
pub use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A monetary amount in a given currency.
///
/// The amount is transmitted as a decimal string, e.g. `{"amount": "1.25", "currency": "USD"}`.
///
/// # Example
///
/// ```
/// use searchads_client_sdk::types::{Amount, dec};
///
/// let bid = Amount::builder().amount(dec!(1.25)).currency("USD").build();
/// assert_eq!(bid.currency, "USD");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Amount {
    pub amount: Decimal,
    #[builder(into)]
    pub currency: String,
}
