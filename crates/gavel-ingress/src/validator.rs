//! Bid validator — gate for prospective bids.
//!
//! Checks a bid before it is placed and reports the single most precise
//! reason it would be rejected. Rules run in a fixed order and the first
//! failing rule wins:
//!
//! 1. zero bidding amount → `InvalidAmount`
//! 2. zero buy amount or degenerate price → `InvalidPrice`
//! 3. during `ORDER_PLACING_AND_CANCELING`: must beat the reserve price
//! 4. during `ORDER_PLACING` with a known clearing price: must beat it
//! 5. bidding amount below the per-order minimum → `BelowMinimumBidSize`
//!
//! Phase gating of placement itself is the bid book's job. An
//! [`OrderValidator`] refuses priceless boundaries up front, so through it a
//! price failure always blames the bid.

use gavel_matchcore::is_more_competitive_than;
use gavel_types::{
    AuctionBoundaries, AuctionPhase, BidCandidate, GavelError, Order, OwnerId, TokenPair,
    ValidationError,
};

use crate::bid_input::BidInput;

/// Check a bid candidate against the auction's boundaries.
///
/// # Errors
/// The first [`ValidationError`] rule the candidate fails.
pub fn validate(
    candidate: &BidCandidate,
    boundaries: &AuctionBoundaries,
    phase: AuctionPhase,
) -> Result<(), ValidationError> {
    if candidate.sell_amount == 0 {
        return Err(ValidationError::InvalidAmount);
    }
    if candidate.buy_amount == 0 {
        return Err(ValidationError::InvalidPrice);
    }

    let bid = candidate.into_order(OwnerId::SYNTHETIC);
    match (phase, boundaries.current_clearing_price) {
        (AuctionPhase::OrderPlacingAndCanceling, _) => {
            if !beats(&bid, &boundaries.reserve_price)? {
                return Err(ValidationError::PriceBelowReserve);
            }
        }
        (AuctionPhase::OrderPlacing, Some(clearing)) => {
            if !beats(&bid, &clearing)? {
                return Err(ValidationError::PriceBelowClearing);
            }
        }
        _ => {}
    }

    if candidate.sell_amount < boundaries.minimum_bid_total {
        return Err(ValidationError::BelowMinimumBidSize {
            minimum: boundaries.minimum_bid_total,
        });
    }
    Ok(())
}

/// A boundary with a zero sell amount has no defined price.
fn beats(bid: &Order, boundary: &Order) -> Result<bool, ValidationError> {
    is_more_competitive_than(bid, boundary).map_err(|_| ValidationError::InvalidPrice)
}

fn priced(what: &str, boundary: &Order) -> gavel_types::Result<()> {
    if boundary.sell_amount == 0 || boundary.buy_amount == 0 {
        return Err(GavelError::Configuration(format!("{what} {boundary} has a zero amount")));
    }
    Ok(())
}

/// Validator bound to one auction's tokens and boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderValidator {
    tokens: TokenPair,
    boundaries: AuctionBoundaries,
}

impl OrderValidator {
    /// # Errors
    /// `Configuration` if the reserve or clearing price has a zero amount.
    pub fn new(tokens: TokenPair, boundaries: AuctionBoundaries) -> gavel_types::Result<Self> {
        priced("reserve price", &boundaries.reserve_price)?;
        if let Some(clearing) = &boundaries.current_clearing_price {
            priced("clearing price", clearing)?;
        }
        Ok(Self { tokens, boundaries })
    }

    /// Update the clearing price of the live book.
    ///
    /// # Errors
    /// `Configuration` if the new clearing price has a zero amount; the
    /// previous price is kept.
    pub fn set_clearing_price(&mut self, clearing: Option<Order>) -> gavel_types::Result<()> {
        if let Some(order) = &clearing {
            priced("clearing price", order)?;
        }
        self.boundaries.current_clearing_price = clearing;
        Ok(())
    }

    #[must_use]
    pub fn boundaries(&self) -> &AuctionBoundaries {
        &self.boundaries
    }

    /// Validate integer amounts.
    ///
    /// # Errors
    /// See [`validate`].
    pub fn validate(
        &self,
        candidate: &BidCandidate,
        phase: AuctionPhase,
    ) -> Result<(), ValidationError> {
        validate(candidate, &self.boundaries, phase)
    }

    /// Parse user input and validate it, returning the amounts to place.
    ///
    /// Parsing failures surface as `InvalidAmount` or `InvalidPrice`, so the
    /// rule order is unchanged.
    ///
    /// # Errors
    /// The first [`ValidationError`] rule the input fails.
    pub fn validate_input(
        &self,
        input: &BidInput<'_>,
        phase: AuctionPhase,
    ) -> Result<BidCandidate, ValidationError> {
        let candidate = input.to_candidate(&self.tokens)?;
        self.validate(&candidate, phase)?;
        Ok(candidate)
    }
}
