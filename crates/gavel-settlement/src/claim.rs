//! Participant claim computation.
//!
//! Given a participant's orders and one published clearing snapshot,
//! compute what they can withdraw:
//! 1. Threshold not met: every order is refunded in full
//! 2. The marginal order: unfilled remainder refunded, executed part filled
//! 3. Orders less competitive than the clearing price: refunded
//! 4. All other orders: filled at the clearing price
//!
//! Each order lands in exactly one branch. Fills truncate toward zero, so
//! the sum of claims never exceeds what the auction produced.

use std::cmp::Ordering;

use alloy_primitives::U256;
use gavel_matchcore::compare;
use gavel_types::{ClaimResult, ClearingResult, GavelError, Order, Result};

/// Compute the claim of one participant's orders against `clearing`.
///
/// # Errors
/// [`GavelError::DegenerateOrder`] if a price comparison or conversion
/// involves a zero sell amount.
pub fn compute_claim(orders: &[Order], clearing: &ClearingResult) -> Result<ClaimResult> {
    let mut claim = ClaimResult::default();

    if !clearing.funding_threshold_met {
        for order in orders {
            claim.claimable_bid_funds += U256::from(order.sell_amount);
        }
        return Ok(claim);
    }

    let marginal = &clearing.clearing_order;
    for order in orders {
        if order == marginal {
            if order.sell_amount > clearing.executed_volume {
                claim.claimable_bid_funds +=
                    U256::from(order.sell_amount - clearing.executed_volume);
            }
            claim.claimable_auctioned_asset += fill(clearing.executed_volume, marginal)?;
        } else if compare(marginal, order)? == Ordering::Less {
            claim.claimable_bid_funds += U256::from(order.sell_amount);
        } else {
            claim.claimable_auctioned_asset += fill(order.sell_amount, marginal)?;
        }
    }
    Ok(claim)
}

/// Auctioned-asset atoms bought by `volume` bidding atoms at the clearing
/// price, truncated.
fn fill(volume: u128, marginal: &Order) -> Result<U256> {
    if marginal.sell_amount == 0 {
        return Err(GavelError::DegenerateOrder {
            reason: format!("clearing order {marginal} has zero sell amount"),
        });
    }
    Ok(U256::from(volume) * U256::from(marginal.buy_amount) / U256::from(marginal.sell_amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clearing(met: bool) -> ClearingResult {
        ClearingResult {
            clearing_order: Order::dummy(1, 1000, 500),
            executed_volume: 400,
            funding_threshold_met: met,
        }
    }

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn marginal_order_split() {
        let c = clearing(true);
        let claim = compute_claim(&[c.clearing_order], &c).unwrap();
        assert_eq!(claim.claimable_bid_funds, u(600));
        assert_eq!(claim.claimable_auctioned_asset, u(200));
    }

    #[test]
    fn more_competitive_order_filled() {
        let claim = compute_claim(&[Order::dummy(2, 300, 100)], &clearing(true)).unwrap();
        assert_eq!(claim.claimable_bid_funds, U256::ZERO);
        assert_eq!(claim.claimable_auctioned_asset, u(150));
    }

    #[test]
    fn less_competitive_order_refunded() {
        let claim = compute_claim(&[Order::dummy(3, 200, 500)], &clearing(true)).unwrap();
        assert_eq!(claim.claimable_bid_funds, u(200));
        assert_eq!(claim.claimable_auctioned_asset, U256::ZERO);
    }

    #[test]
    fn claims_accumulate_across_orders() {
        let c = clearing(true);
        let orders = [
            c.clearing_order,
            Order::dummy(1, 300, 100),
            Order::dummy(1, 200, 500),
        ];
        let claim = compute_claim(&orders, &c).unwrap();
        assert_eq!(claim.claimable_bid_funds, u(800));
        assert_eq!(claim.claimable_auctioned_asset, u(350));
    }

    #[test]
    fn same_amounts_other_owner_is_not_marginal() {
        // Equal ratio to the clearing order but not identical: filled in full.
        let claim = compute_claim(&[Order::dummy(9, 1000, 500)], &clearing(true)).unwrap();
        assert_eq!(claim.claimable_bid_funds, U256::ZERO);
        assert_eq!(claim.claimable_auctioned_asset, u(500));
    }

    #[test]
    fn threshold_not_met_refunds_everything() {
        let c = clearing(false);
        let orders = [
            c.clearing_order,
            Order::dummy(2, 300, 100),
            Order::dummy(3, 200, 500),
        ];
        let claim = compute_claim(&orders, &c).unwrap();
        assert_eq!(claim.claimable_bid_funds, u(1500));
        assert_eq!(claim.claimable_auctioned_asset, U256::ZERO);
    }

    #[test]
    fn threshold_not_met_ignores_degenerate_orders() {
        let mut c = clearing(false);
        c.clearing_order = Order::dummy(1, 0, 0);
        let claim = compute_claim(&[Order::dummy(2, 0, 5)], &c).unwrap();
        assert!(claim.is_empty());
    }

    #[test]
    fn executed_volume_above_sell_skips_refund() {
        let mut c = clearing(true);
        c.executed_volume = 1200;
        let claim = compute_claim(&[c.clearing_order], &c).unwrap();
        assert_eq!(claim.claimable_bid_funds, U256::ZERO);
        assert_eq!(claim.claimable_auctioned_asset, u(600));
    }

    #[test]
    fn zero_sell_clearing_order_is_degenerate() {
        let mut c = clearing(true);
        c.clearing_order = Order::dummy(1, 0, 500);
        let err = compute_claim(&[Order::dummy(2, 300, 100)], &c).unwrap_err();
        assert!(matches!(err, GavelError::DegenerateOrder { .. }));
        // Also when the only order is the clearing order itself.
        let err = compute_claim(&[c.clearing_order], &c).unwrap_err();
        assert!(matches!(err, GavelError::DegenerateOrder { .. }));
    }

    #[test]
    fn no_orders_no_claim() {
        assert!(compute_claim(&[], &clearing(true)).unwrap().is_empty());
    }

    #[test]
    fn fills_truncate() {
        let c = ClearingResult {
            clearing_order: Order::dummy(1, 3, 1),
            executed_volume: 0,
            funding_threshold_met: true,
        };
        // 2 * 1 / 3 = 0.66 → 0
        let claim = compute_claim(&[Order::dummy(2, 2, 0)], &c).unwrap();
        assert_eq!(claim.claimable_auctioned_asset, U256::ZERO);
    }
}
