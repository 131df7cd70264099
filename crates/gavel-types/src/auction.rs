//! Auction lifecycle and settlement value types.
//!
//! An auction moves through five phases:
//! **NOT_YET_STARTED → ORDER_PLACING_AND_CANCELING → ORDER_PLACING →
//! NEEDS_SETTLED → CLAIMING**
//!
//! The first three are driven purely by the [`AuctionWindow`]. Once the
//! window closes the auction waits for a settlement source to publish a
//! [`ClearingResult`]; after that, participants claim.

use std::fmt;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GavelError, Order, Result};

/// The phases of one auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionPhase {
    /// Window has not opened.
    NotYetStarted,
    /// Bids may be placed and cancelled.
    OrderPlacingAndCanceling,
    /// Bids may be placed but no longer cancelled.
    OrderPlacing,
    /// Window closed; waiting for a published clearing result.
    NeedsSettled,
    /// Clearing result published; participants claim.
    Claiming,
}

impl fmt::Display for AuctionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotYetStarted => write!(f, "NOT_YET_STARTED"),
            Self::OrderPlacingAndCanceling => write!(f, "ORDER_PLACING_AND_CANCELING"),
            Self::OrderPlacing => write!(f, "ORDER_PLACING"),
            Self::NeedsSettled => write!(f, "NEEDS_SETTLED"),
            Self::Claiming => write!(f, "CLAIMING"),
        }
    }
}

impl AuctionPhase {
    #[must_use]
    pub fn accepts_orders(self) -> bool {
        matches!(self, Self::OrderPlacingAndCanceling | Self::OrderPlacing)
    }

    #[must_use]
    pub fn allows_cancellation(self) -> bool {
        self == Self::OrderPlacingAndCanceling
    }
}

// ---------------------------------------------------------------------------
// AuctionWindow
// ---------------------------------------------------------------------------

/// The three instants that bound the bidding phases.
///
/// Invariant: `start_time <= cancellation_end_time <= end_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAuctionWindow")]
pub struct AuctionWindow {
    start_time: DateTime<Utc>,
    cancellation_end_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl AuctionWindow {
    /// # Errors
    /// [`GavelError::InvalidAuctionWindow`] if the instants are out of order.
    pub fn new(
        start_time: DateTime<Utc>,
        cancellation_end_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self> {
        if start_time > cancellation_end_time {
            return Err(GavelError::InvalidAuctionWindow {
                reason: format!(
                    "start {start_time} is after cancellation end {cancellation_end_time}"
                ),
            });
        }
        if cancellation_end_time > end_time {
            return Err(GavelError::InvalidAuctionWindow {
                reason: format!(
                    "cancellation end {cancellation_end_time} is after end {end_time}"
                ),
            });
        }
        Ok(Self {
            start_time,
            cancellation_end_time,
            end_time,
        })
    }

    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[must_use]
    pub fn cancellation_end_time(&self) -> DateTime<Utc> {
        self.cancellation_end_time
    }

    #[must_use]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }
}

#[derive(Deserialize)]
struct RawAuctionWindow {
    start_time: DateTime<Utc>,
    cancellation_end_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl TryFrom<RawAuctionWindow> for AuctionWindow {
    type Error = GavelError;

    fn try_from(raw: RawAuctionWindow) -> Result<Self> {
        Self::new(raw.start_time, raw.cancellation_end_time, raw.end_time)
    }
}

// ---------------------------------------------------------------------------
// ClearingResult — published by the settlement source
// ---------------------------------------------------------------------------

/// One published settlement snapshot.
///
/// `executed_volume` is the bidding-asset volume taken from
/// `clearing_order` and means nothing when paired with any other snapshot's
/// clearing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearingResult {
    /// The marginal order; its ratio is the clearing price.
    pub clearing_order: Order,
    /// Volume of `clearing_order.sell_amount` that was filled.
    pub executed_volume: u128,
    /// Whether the minimum funding threshold was reached.
    pub funding_threshold_met: bool,
}

/// Settlement availability as seen by the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettlementSignal {
    pub settlement_published: bool,
    /// Buy amount of the published clearing order; zero means unsettled.
    pub marginal_order_buy_amount: u128,
}

impl SettlementSignal {
    /// Signal derived from an optional published snapshot.
    #[must_use]
    pub fn from_clearing(clearing: Option<&ClearingResult>) -> Self {
        clearing.map_or_else(Self::default, |c| Self {
            settlement_published: true,
            marginal_order_buy_amount: c.clearing_order.buy_amount,
        })
    }
}

// ---------------------------------------------------------------------------
// ClaimResult — what a participant can withdraw
// ---------------------------------------------------------------------------

/// Amounts a participant can claim after settlement.
///
/// Sums over many orders are kept in 256 bits so they cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimResult {
    /// Bidding-asset atoms refunded.
    pub claimable_bid_funds: U256,
    /// Auctioned-asset atoms received.
    pub claimable_auctioned_asset: U256,
}

impl ClaimResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimable_bid_funds.is_zero() && self.claimable_auctioned_asset.is_zero()
    }
}

// ---------------------------------------------------------------------------
// Bid validation inputs
// ---------------------------------------------------------------------------

/// Amounts of a bid that has not been placed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BidCandidate {
    pub sell_amount: u128,
    pub buy_amount: u128,
}

impl BidCandidate {
    #[must_use]
    pub fn new(sell_amount: u128, buy_amount: u128) -> Self {
        Self {
            sell_amount,
            buy_amount,
        }
    }

    /// The order this bid becomes once placed by `owner_id`.
    #[must_use]
    pub fn into_order(self, owner_id: crate::OwnerId) -> Order {
        Order::new(owner_id, self.sell_amount, self.buy_amount)
    }
}

/// Limits a new bid is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionBoundaries {
    /// Reserve expressed as an order: bids must beat its ratio.
    pub reserve_price: Order,
    /// Clearing order of the live book, if known.
    pub current_clearing_price: Option<Order>,
    /// Minimum bidding-asset amount per bid.
    pub minimum_bid_total: u128,
}

/// Parameters of the auctioneer's side, as needed by clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionParams {
    pub auctioneer: crate::OwnerId,
    /// Auctioned-asset atoms on offer.
    pub auctioned_sell_amount: u128,
    /// Minimum bidding-asset atoms the auctioneer accepts for the whole lot.
    pub min_buy_amount: u128,
    /// Raised amount below which the auction is void.
    pub min_funding_threshold: u128,
    /// Minimum bidding-asset atoms per bid.
    pub minimum_bidding_amount_per_order: u128,
}

impl AuctionParams {
    /// The reserve price as an order in bid orientation
    /// (`buy` = auctioned atoms, `sell` = bidding atoms).
    #[must_use]
    pub fn reserve_order(&self) -> Order {
        Order::new(self.auctioneer, self.min_buy_amount, self.auctioned_sell_amount)
    }

    /// Boundaries for validating a new bid.
    #[must_use]
    pub fn boundaries(&self, current_clearing_price: Option<Order>) -> AuctionBoundaries {
        AuctionBoundaries {
            reserve_price: self.reserve_order(),
            current_clearing_price,
            minimum_bid_total: self.minimum_bidding_amount_per_order,
        }
    }
}
