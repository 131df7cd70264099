//! Clearing computation for a closed batch auction.
//!
//! Given the auctioneer's parameters and every live bid, finds the marginal
//! order, how much of it executed, and whether the funding threshold was
//! reached. This is the computation a settlement source publishes; it is
//! provided here so claims can be checked end to end against it.
//!
//! The computation is deterministic: same inputs → same [`ClearingOutcome`].

use alloy_primitives::U256;
use gavel_types::{
    AuctionParams, ClearingResult, GavelError, Order, OwnerId, Result, constants::MAX_AMOUNT,
};

use crate::queue::BidQueue;

/// What the auctioneer receives once the auction is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuctioneerProceeds {
    /// Auctioned-asset atoms that were not sold and go back.
    pub auctioned_returned: U256,
    /// Bidding-asset atoms paid by the filled bids.
    pub bidding_received: U256,
}

/// Result of clearing one auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearingOutcome {
    /// The snapshot a settlement source would publish.
    pub clearing: ClearingResult,
    /// Bidding-asset atoms raised at the clearing price.
    pub raised: U256,
    pub auctioneer: AuctioneerProceeds,
}

/// Clear an auction.
///
/// ## Algorithm
///
/// 1. Admit bids into a [`BidQueue`] (most competitive first)
/// 2. Accumulate bid volume until, at the current bid's price, the
///    accumulated volume buys the whole lot
/// 3. If that bid can absorb the surplus it is the marginal order and
///    executes partially; otherwise the price falls between it and the
///    previous bid and the clearing order is synthetic
/// 4. If no bid covers the lot, clear at the raised amount, or at the
///    reserve when too little was raised (the auctioneer then sells less)
/// 5. Compare the raised amount to the funding threshold
///
/// # Errors
/// - [`GavelError::Configuration`] for a zero lot or zero reserve
/// - [`GavelError::InvalidBid`] for zero or oversized amounts, synthetic
///   owners, tied prices, or bids not strictly better than the reserve
/// - [`GavelError::DuplicateOrder`] for a bid listed twice
/// - [`GavelError::ArithmeticOverflow`] if the raised amount does not fit a
///   packed order
pub fn compute_clearing(params: &AuctionParams, bids: &[Order]) -> Result<ClearingOutcome> {
    if params.auctioned_sell_amount == 0 || params.min_buy_amount == 0 {
        return Err(GavelError::Configuration(
            "auctioned_sell_amount and min_buy_amount must be positive".into(),
        ));
    }

    let queue = BidQueue::from_bids(params, bids)?;
    tracing::debug!(bids = queue.len(), "walking bid queue");

    let auctioned = U256::from(params.auctioned_sell_amount);
    let mut raised = U256::ZERO;
    let mut covering = None;
    for bid in queue.iter() {
        raised += U256::from(bid.sell_amount);
        if raised * U256::from(bid.buy_amount) >= auctioned * U256::from(bid.sell_amount) {
            covering = Some(*bid);
            break;
        }
    }

    // Auctioned atoms actually sold; less than the lot only when the
    // reserve binds.
    let mut auctioneer_fill = auctioned;
    let (clearing_order, executed_volume) = if let Some(bid) = covering {
        let sell = U256::from(bid.sell_amount);
        let uncovered = raised - auctioned * sell / U256::from(bid.buy_amount);
        if sell >= uncovered {
            raised -= uncovered;
            (bid, to_amount(sell - uncovered, "executed volume")?)
        } else {
            raised -= sell;
            (synthetic(params, raised)?, 0)
        }
    } else if raised > U256::from(params.min_buy_amount) {
        (synthetic(params, raised)?, 0)
    } else {
        auctioneer_fill = raised * auctioned / U256::from(params.min_buy_amount);
        (synthetic(params, U256::from(params.min_buy_amount))?, 0)
    };

    let funding_threshold_met = raised >= U256::from(params.min_funding_threshold);
    let auctioneer = if funding_threshold_met {
        AuctioneerProceeds {
            auctioned_returned: auctioned - auctioneer_fill,
            bidding_received: auctioneer_fill * U256::from(clearing_order.sell_amount)
                / U256::from(clearing_order.buy_amount),
        }
    } else {
        tracing::warn!(
            %raised,
            threshold = params.min_funding_threshold,
            "funding threshold not reached, auction void"
        );
        AuctioneerProceeds {
            auctioned_returned: auctioned,
            bidding_received: U256::ZERO,
        }
    };

    let clearing = ClearingResult {
        clearing_order,
        executed_volume,
        funding_threshold_met,
    };
    tracing::info!(
        clearing_order = %clearing.clearing_order,
        executed_volume,
        funding_threshold_met,
        %raised,
        "auction cleared"
    );

    Ok(ClearingOutcome {
        clearing,
        raised,
        auctioneer,
    })
}

/// Clearing order for a price that no real bid sits at.
fn synthetic(params: &AuctionParams, sell: U256) -> Result<Order> {
    Ok(Order::new(
        OwnerId::SYNTHETIC,
        to_amount(sell, "clearing sell amount")?,
        params.auctioned_sell_amount,
    ))
}

fn to_amount(value: U256, what: &str) -> Result<u128> {
    u128::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_AMOUNT)
        .ok_or_else(|| GavelError::ArithmeticOverflow {
            reason: format!("{what} {value} does not fit 96 bits"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(auctioned: u128, min_buy: u128, threshold: u128) -> AuctionParams {
        AuctionParams {
            auctioneer: OwnerId(1),
            auctioned_sell_amount: auctioned,
            min_buy_amount: min_buy,
            min_funding_threshold: threshold,
            minimum_bidding_amount_per_order: 1,
        }
    }

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn single_bid_exactly_covering() {
        let bid = Order::dummy(2, 300, 100);
        let out = compute_clearing(&params(100, 50, 0), &[bid]).unwrap();
        assert_eq!(out.clearing.clearing_order, bid);
        assert_eq!(out.clearing.executed_volume, 300);
        assert!(out.clearing.funding_threshold_met);
        assert_eq!(out.raised, u(300));
        assert_eq!(out.auctioneer.auctioned_returned, U256::ZERO);
        assert_eq!(out.auctioneer.bidding_received, u(300));
    }

    #[test]
    fn oversubscribed_marginal_partially_fills() {
        let a = Order::dummy(2, 600, 400);
        let b = Order::dummy(3, 800, 1000);
        // Input order must not matter.
        let out = compute_clearing(&params(1000, 100, 0), &[b, a]).unwrap();
        assert_eq!(out.clearing.clearing_order, b);
        assert_eq!(out.clearing.executed_volume, 200);
        assert_eq!(out.raised, u(800));
        assert_eq!(out.auctioneer.bidding_received, u(800));
        assert_eq!(out.auctioneer.auctioned_returned, U256::ZERO);
    }

    #[test]
    fn undersubscribed_clears_at_raised_amount() {
        let a = Order::dummy(2, 200, 500);
        let out = compute_clearing(&params(1000, 100, 0), &[a]).unwrap();
        assert_eq!(
            out.clearing.clearing_order,
            Order::new(OwnerId::SYNTHETIC, 200, 1000)
        );
        assert_eq!(out.clearing.executed_volume, 0);
        assert_eq!(out.auctioneer.bidding_received, u(200));
        assert_eq!(out.auctioneer.auctioned_returned, U256::ZERO);
    }

    #[test]
    fn reserve_binds_and_auctioneer_sells_less() {
        let a = Order::dummy(2, 100, 150);
        let out = compute_clearing(&params(1000, 500, 0), &[a]).unwrap();
        assert_eq!(
            out.clearing.clearing_order,
            Order::new(OwnerId::SYNTHETIC, 500, 1000)
        );
        assert_eq!(out.auctioneer.auctioned_returned, u(800));
        assert_eq!(out.auctioneer.bidding_received, u(100));
    }

    #[test]
    fn clearing_price_between_orders() {
        let a = Order::dummy(2, 90, 10);
        let b = Order::dummy(3, 5, 100);
        let out = compute_clearing(&params(100, 1, 0), &[a, b]).unwrap();
        assert_eq!(
            out.clearing.clearing_order,
            Order::new(OwnerId::SYNTHETIC, 90, 100)
        );
        assert_eq!(out.clearing.executed_volume, 0);
        assert_eq!(out.raised, u(90));
        assert_eq!(out.auctioneer.bidding_received, u(90));
    }

    #[test]
    fn threshold_not_met_voids_auction() {
        let a = Order::dummy(2, 300, 100);
        let out = compute_clearing(&params(100, 50, 1_000), &[a]).unwrap();
        assert!(!out.clearing.funding_threshold_met);
        assert_eq!(out.auctioneer.auctioned_returned, u(100));
        assert_eq!(out.auctioneer.bidding_received, U256::ZERO);
    }

    #[test]
    fn no_bids_clears_at_reserve() {
        let out = compute_clearing(&params(1000, 400, 0), &[]).unwrap();
        assert_eq!(
            out.clearing.clearing_order,
            Order::new(OwnerId::SYNTHETIC, 400, 1000)
        );
        assert_eq!(out.raised, U256::ZERO);
        assert_eq!(out.auctioneer.auctioned_returned, u(1000));

        let out = compute_clearing(&params(1000, 400, 1), &[]).unwrap();
        assert!(!out.clearing.funding_threshold_met);
    }

    #[test]
    fn bid_at_reserve_rejected() {
        // Reserve q = 1000 / 500 = 2; this bid's q is exactly 2.
        let err = compute_clearing(&params(1000, 500, 0), &[Order::dummy(2, 50, 100)]).unwrap_err();
        assert!(matches!(err, GavelError::InvalidBid { .. }));
    }

    #[test]
    fn zero_amount_bid_rejected() {
        let err = compute_clearing(&params(1000, 500, 0), &[Order::dummy(2, 0, 1)]).unwrap_err();
        assert!(matches!(err, GavelError::InvalidBid { .. }));
    }

    #[test]
    fn duplicate_bid_rejected() {
        let bid = Order::dummy(2, 600, 400);
        let err = compute_clearing(&params(1000, 100, 0), &[bid, bid]).unwrap_err();
        assert_eq!(err, GavelError::DuplicateOrder(bid));
    }

    #[test]
    fn tied_marginal_price_rejected() {
        // b and c share q = 1.25; b would queue behind the marginal c and
        // be filled in full by the claim rule without ever being counted.
        let a = Order::dummy(2, 600, 400);
        let c = Order::dummy(4, 400, 500);
        let b = Order::dummy(3, 800, 1000);
        let err = compute_clearing(&params(1000, 100, 0), &[a, c, b]).unwrap_err();
        assert!(
            matches!(err, GavelError::InvalidBid { order, ref reason }
                if order == b && reason.starts_with("ties the price"))
        );

        // Without the tied bid, c is the marginal order.
        let out = compute_clearing(&params(1000, 100, 0), &[a, c]).unwrap();
        assert_eq!(out.clearing.clearing_order, c);
        assert_eq!(out.clearing.executed_volume, 200);
        assert_eq!(out.raised, u(800));
    }

    #[test]
    fn synthetic_owner_bid_rejected() {
        let bid = Order::new(OwnerId::SYNTHETIC, 600, 400);
        let err = compute_clearing(&params(1000, 100, 0), &[bid]).unwrap_err();
        assert!(
            matches!(err, GavelError::InvalidBid { ref reason, .. } if reason == "synthetic owner")
        );
    }

    #[test]
    fn zero_lot_is_configuration_error() {
        let err = compute_clearing(&params(0, 100, 0), &[]).unwrap_err();
        assert!(matches!(err, GavelError::Configuration(_)));
    }
}
