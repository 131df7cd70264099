//! Exact price comparison between orders.
//!
//! Orders are ranked by `q = buy_amount / sell_amount`. Ratios are never
//! materialized: `q(a)` vs `q(b)` is decided by the sign of
//! `a.buy * b.sell - b.buy * a.sell`, computed in 256-bit integers so that
//! two 128-bit amounts multiply without overflow or rounding.

use std::cmp::Ordering;

use alloy_primitives::U256;
use gavel_types::{GavelError, Order, Result};

/// Compare `q(a)` with `q(b)`.
///
/// `Less` means `a` asks for fewer auctioned units per bidding unit, i.e. `a`
/// is the more competitive bid.
///
/// # Errors
/// [`GavelError::DegenerateOrder`] if either order has a zero sell amount.
pub fn compare(a: &Order, b: &Order) -> Result<Ordering> {
    for order in [a, b] {
        if order.sell_amount == 0 {
            return Err(GavelError::DegenerateOrder {
                reason: format!("{order} has zero sell amount"),
            });
        }
    }
    Ok(cross_cmp(a, b))
}

/// `compare(a, b) == Less`.
pub fn is_more_competitive_than(a: &Order, b: &Order) -> Result<bool> {
    Ok(compare(a, b)? == Ordering::Less)
}

fn cross_cmp(a: &Order, b: &Order) -> Ordering {
    let lhs = U256::from(a.buy_amount) * U256::from(b.sell_amount);
    let rhs = U256::from(b.buy_amount) * U256::from(a.sell_amount);
    lhs.cmp(&rhs)
}

/// Total order used to queue bids: ascending `q`, then smaller buy amount,
/// then smaller owner, then smaller sell amount.
///
/// Only built for orders with a non-zero sell amount, so the ratio
/// comparison is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueKey(Order);

impl QueueKey {
    /// # Errors
    /// [`GavelError::DegenerateOrder`] for a zero sell amount.
    pub fn new(order: Order) -> Result<Self> {
        if order.sell_amount == 0 {
            return Err(GavelError::DegenerateOrder {
                reason: format!("{order} has zero sell amount"),
            });
        }
        Ok(Self(order))
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.0
    }

    #[must_use]
    pub fn into_order(self) -> Order {
        self.0
    }
}

impl Ord for QueueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cross_cmp(&self.0, &other.0)
            .then(self.0.buy_amount.cmp(&other.0.buy_amount))
            .then(self.0.owner_id.cmp(&other.0.owner_id))
            .then(self.0.sell_amount.cmp(&other.0.sell_amount))
    }
}

impl PartialOrd for QueueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
