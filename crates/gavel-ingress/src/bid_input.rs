//! Bid input parsing.
//!
//! Users type a bidding amount and a limit price as decimal text in whole
//! token units; the price is bidding-asset units per auctioned-asset unit.
//! Parsing turns that into integer atom amounts without any float step:
//!
//! ```text
//! sell = amount × 10^bidding_decimals                      (must be integral)
//! buy  = ⌊ sell × 10^auctioning_decimals / (price × 10^bidding_decimals) ⌋
//! ```

use alloy_primitives::U256;
use gavel_types::{BidCandidate, TokenPair, ValidationError, constants};
use rust_decimal::Decimal;

/// A bid as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidInput<'a> {
    /// Bidding-asset units to spend.
    pub amount: &'a str,
    /// Bidding-asset units per auctioned-asset unit.
    pub price: &'a str,
}

impl<'a> BidInput<'a> {
    #[must_use]
    pub fn new(amount: &'a str, price: &'a str) -> Self {
        Self { amount, price }
    }

    /// Convert to integer amounts for `tokens`.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidAmount`] for an unparsable, non-positive or
    ///   over-precise amount, or one that does not fit 96 bits
    /// - [`ValidationError::InvalidPrice`] for an unparsable or non-positive
    ///   price, or one whose buy amount truncates to zero or overflows
    pub fn to_candidate(&self, tokens: &TokenPair) -> Result<BidCandidate, ValidationError> {
        let auctioning_decimals = tokens.auctioning.decimals;
        let bidding_decimals = tokens.bidding.decimals;
        if auctioning_decimals > constants::MAX_TOKEN_DECIMALS
            || bidding_decimals > constants::MAX_TOKEN_DECIMALS
        {
            return Err(ValidationError::InvalidAmount);
        }

        let amount = parse_positive(self.amount).ok_or(ValidationError::InvalidAmount)?;
        let sell = scale_exact(amount, bidding_decimals).ok_or(ValidationError::InvalidAmount)?;

        let price = parse_positive(self.price).ok_or(ValidationError::InvalidPrice)?;
        let buy = buy_amount(sell, &price, auctioning_decimals, bidding_decimals)
            .ok_or(ValidationError::InvalidPrice)?;

        Ok(BidCandidate::new(sell, buy))
    }
}

fn parse_positive(text: &str) -> Option<Decimal> {
    Decimal::from_str_exact(text.trim())
        .ok()
        .filter(|d| d.is_sign_positive() && !d.is_zero())
}

fn pow10(exp: u32) -> u128 {
    10u128.pow(exp)
}

fn mantissa(d: &Decimal) -> Option<u128> {
    u128::try_from(d.mantissa()).ok()
}

/// `d × 10^decimals` as an integer no wider than a packed amount, or `None`
/// if it has a fractional part.
fn scale_exact(d: Decimal, decimals: u32) -> Option<u128> {
    let m = mantissa(&d)?;
    let scale = d.scale();
    let atoms = if scale <= decimals {
        U256::from(m).checked_mul(U256::from(pow10(decimals - scale)))?
    } else {
        let divisor = pow10(scale - decimals);
        if m % divisor != 0 {
            return None;
        }
        U256::from(m / divisor)
    };
    to_amount(atoms)
}

fn buy_amount(
    sell: u128,
    price: &Decimal,
    auctioning_decimals: u32,
    bidding_decimals: u32,
) -> Option<u128> {
    let numerator = U256::from(sell)
        .checked_mul(U256::from(pow10(auctioning_decimals)))?
        .checked_mul(U256::from(pow10(price.scale())))?;
    let denominator =
        U256::from(mantissa(price)?).checked_mul(U256::from(pow10(bidding_decimals)))?;
    let buy = numerator.checked_div(denominator)?;
    if buy.is_zero() {
        return None;
    }
    to_amount(buy)
}

fn to_amount(value: U256) -> Option<u128> {
    u128::try_from(value)
        .ok()
        .filter(|v| *v <= constants::MAX_AMOUNT)
}
