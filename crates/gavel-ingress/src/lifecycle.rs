//! Auction lifecycle: which phase an auction is in at a given instant.
//!
//! ```text
//! NOT_YET_STARTED → ORDER_PLACING_AND_CANCELING → ORDER_PLACING
//!     → NEEDS_SETTLED → CLAIMING
//! ```
//!
//! The bidding phases follow the window. Leaving `NEEDS_SETTLED` depends on
//! the settlement source alone, so the lifecycle never reads a clock itself;
//! callers pass `now` and use [`next_boundary`] to schedule re-evaluation.

use chrono::{DateTime, Utc};
use gavel_types::{AuctionPhase, AuctionWindow, SettlementSignal};

/// Phase of the auction at `now`.
#[must_use]
pub fn transition(
    now: DateTime<Utc>,
    window: &AuctionWindow,
    signal: SettlementSignal,
) -> AuctionPhase {
    if now < window.start_time() {
        AuctionPhase::NotYetStarted
    } else if now < window.cancellation_end_time() {
        AuctionPhase::OrderPlacingAndCanceling
    } else if now < window.end_time() {
        AuctionPhase::OrderPlacing
    } else if signal.settlement_published && signal.marginal_order_buy_amount > 0 {
        AuctionPhase::Claiming
    } else {
        AuctionPhase::NeedsSettled
    }
}

/// Next instant after which [`transition`] may return a different phase
/// for the same settlement signal.
///
/// `None` once the window has closed: from there on only a settlement
/// signal moves the auction forward.
#[must_use]
pub fn next_boundary(now: DateTime<Utc>, window: &AuctionWindow) -> Option<DateTime<Utc>> {
    [
        window.start_time(),
        window.cancellation_end_time(),
        window.end_time(),
    ]
    .into_iter()
    .find(|boundary| now < *boundary)
}
