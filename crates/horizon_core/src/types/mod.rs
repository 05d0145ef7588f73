//! Core value types: currencies, amounts, dates and errors.

pub mod amount;
pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod time;

pub use amount::{CurrencyAmount, MultiCurrencyAmount};
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, DateError};
pub use time::{Date, DayCount};
