//! The order record shared by bidders, the clearing step and settlement.
//!
//! An order offers `sell_amount` of the bidding asset in exchange for at
//! least `buy_amount` of the auctioned asset. Its competitiveness ratio is
//! `q = buy_amount / sell_amount`; a smaller `q` pays more per auctioned unit.
//! Exact comparison of ratios lives in `gavel-matchcore`; this module only
//! holds the value type.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{GavelError, OwnerId, Result, TokenPair};

/// Immutable order value.
///
/// Two orders are the same order only if owner and both amounts match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub owner_id: OwnerId,
    /// Bidding-asset atoms offered.
    pub sell_amount: u128,
    /// Auctioned-asset atoms requested.
    pub buy_amount: u128,
}

impl Order {
    #[must_use]
    pub const fn new(owner_id: OwnerId, sell_amount: u128, buy_amount: u128) -> Self {
        Self {
            owner_id,
            sell_amount,
            buy_amount,
        }
    }

    /// Human-readable limit price in whole bidding tokens per whole
    /// auctioned token. For display only; never compare with this.
    pub fn price_in_bidding_units(&self, tokens: &TokenPair) -> Result<Decimal> {
        if self.buy_amount == 0 {
            return Err(GavelError::DegenerateOrder {
                reason: format!("{self} has zero buy amount"),
            });
        }
        let sell = to_decimal(self.sell_amount, tokens.bidding.decimals)?;
        let buy = to_decimal(self.buy_amount, tokens.auctioning.decimals)?;
        sell.checked_div(buy)
            .map(|price| price.normalize())
            .ok_or_else(|| GavelError::ArithmeticOverflow {
                reason: format!("price of {self} is out of decimal range"),
            })
    }
}

fn to_decimal(atoms: u128, decimals: u32) -> Result<Decimal> {
    i128::try_from(atoms)
        .ok()
        .and_then(|atoms| Decimal::try_from_i128_with_scale(atoms, decimals).ok())
        .ok_or_else(|| GavelError::ArithmeticOverflow {
            reason: format!("{atoms} with {decimals} decimals is out of decimal range"),
        })
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} sell={} buy={}]",
            self.owner_id, self.sell_amount, self.buy_amount
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    /// A random order with amounts in `1..=max_amount`.
    pub fn random(rng: &mut impl rand::Rng, max_amount: u128) -> Self {
        Self {
            owner_id: OwnerId(rng.gen_range(1..=1_000)),
            sell_amount: rng.gen_range(1..=max_amount),
            buy_amount: rng.gen_range(1..=max_amount),
        }
    }

    pub fn dummy(owner: u64, sell_amount: u128, buy_amount: u128) -> Self {
        Self::new(OwnerId(owner), sell_amount, buy_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    fn pair(auctioning_decimals: u32, bidding_decimals: u32) -> TokenPair {
        TokenPair::new(
            Token::new("GNO", auctioning_decimals),
            Token::new("USDC", bidding_decimals),
        )
    }

    #[test]
    fn identity_includes_owner() {
        let a = Order::dummy(1, 1000, 500);
        let b = Order::dummy(2, 1000, 500);
        assert_ne!(a, b);
        assert_eq!(a, Order::new(OwnerId(1), 1000, 500));
    }

    #[test]
    fn display_price_scales_decimals() {
        // 1500 USDC (6 decimals) for 2 GNO (18 decimals) → 750 USDC per GNO.
        let order = Order::dummy(1, 1_500_000_000, 2_000_000_000_000_000_000);
        let price = order.price_in_bidding_units(&pair(18, 6)).unwrap();
        assert_eq!(price, Decimal::new(750, 0));
    }

    #[test]
    fn display_price_zero_buy_is_degenerate() {
        let err = Order::dummy(1, 10, 0)
            .price_in_bidding_units(&pair(18, 18))
            .unwrap_err();
        assert!(matches!(err, GavelError::DegenerateOrder { .. }));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            Order::dummy(3, 10, 5).to_string(),
            "[owner:3 sell=10 buy=5]"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::dummy(9, 123_456_789, 987_654_321);
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
