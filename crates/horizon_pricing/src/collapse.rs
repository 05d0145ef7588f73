//! Collapse of a two-currency theta into a single number.
//!
//! FX-style positions produce a theta with one entry per leg currency.
//! Reporting wants one figure, signed from the market-convention base
//! side of the pair.

use horizon_core::market_data::FxMatrix;
use horizon_core::types::{Currency, CurrencyPair, MultiCurrencyAmount};

use crate::error::PricingError;

/// Collapses a two-currency amount into one number.
///
/// The pair's market-convention ordering fixes the sign: `scale` is +1
/// when the pay currency is the base and -1 otherwise, and the result
/// is `scale * (pay_amount + spot * receive_amount)` with `spot` the
/// rate of the resolved base/quote pair.
///
/// # Errors
///
/// Fails unless the amount holds exactly the two expected currencies,
/// the pair ordering resolves, and the FX matrix knows the pair.
///
/// # Examples
///
/// ```
/// use horizon_core::market_data::FxMatrix;
/// use horizon_core::types::{Currency, MultiCurrencyAmount};
/// use horizon_pricing::collapse_theta;
///
/// let theta = MultiCurrencyAmount::of_currency(Currency::EUR, -100.0)
///     .plus(&MultiCurrencyAmount::of_currency(Currency::USD, 95.0));
/// let mut fx = FxMatrix::new();
/// fx.add_rate(Currency::EUR, Currency::USD, 1.10).unwrap();
///
/// let single = collapse_theta(&theta, Currency::EUR, Currency::USD, &fx).unwrap();
/// assert!((single - 4.5).abs() < 1e-12);
/// ```
pub fn collapse_theta(
    theta: &MultiCurrencyAmount,
    pay_currency: Currency,
    receive_currency: Currency,
    fx: &FxMatrix,
) -> Result<f64, PricingError> {
    if theta.len() != 2 {
        return Err(PricingError::WrongCurrencyCount {
            expected: 2,
            got: theta.len(),
        });
    }
    let pay_amount = theta
        .amount_for(pay_currency)
        .ok_or(PricingError::MissingCollapseCurrency(pay_currency))?;
    let receive_amount = theta
        .amount_for(receive_currency)
        .ok_or(PricingError::MissingCollapseCurrency(receive_currency))?;

    let pair = CurrencyPair::market_convention(pay_currency, receive_currency)?;
    let spot = fx.rate(pair.base(), pair.quote())?;
    let scale = if pay_currency == pair.base() { 1.0 } else { -1.0 };
    Ok(scale * (pay_amount + spot * receive_amount))
}
