//! Live bid book for one auction.
//!
//! Bids that passed validation are placed here while the auction accepts
//! orders. The book admits them under the same rules clearing applies, so a
//! live book can always be cleared, and keeps them in queue order (most
//! competitive first) so its clearing order can be recomputed at any time
//! and fed back to the validator as the current clearing price.

use gavel_matchcore::{BidQueue, compute_clearing};
use gavel_types::{AuctionParams, AuctionPhase, GavelError, Order, OwnerId, Result, constants};

/// Queue of live bids for one auction.
#[derive(Debug, Clone)]
pub struct BidBook {
    params: AuctionParams,
    /// Bids in queue order.
    queue: BidQueue,
    /// Maximum number of live bids.
    max_orders: usize,
}

impl BidBook {
    /// Create an empty book with the default capacity.
    #[must_use]
    pub fn new(params: AuctionParams) -> Self {
        Self::with_capacity(params, constants::MAX_ORDERS_PER_AUCTION)
    }

    /// Create an empty book holding at most `max_orders` bids.
    #[must_use]
    pub fn with_capacity(params: AuctionParams, max_orders: usize) -> Self {
        Self {
            queue: BidQueue::new(&params),
            params,
            max_orders,
        }
    }

    /// Place a bid.
    ///
    /// # Errors
    /// - `WrongAuctionPhase` outside the bidding phases
    /// - `InvalidBid` for a zero or oversized amount, the synthetic owner,
    ///   a price not above the reserve, or a price another live bid holds
    /// - `DuplicateOrder` if the identical bid is already live
    /// - `BookFull` at capacity
    pub fn place(&mut self, order: Order, phase: AuctionPhase) -> Result<()> {
        if !phase.accepts_orders() {
            return Err(GavelError::WrongAuctionPhase {
                operation: "place",
                actual: phase,
            });
        }
        self.queue.admit(&order)?;
        if self.queue.len() >= self.max_orders {
            return Err(GavelError::BookFull {
                capacity: self.max_orders,
            });
        }
        self.queue.insert(order)?;
        tracing::debug!(%order, live = self.queue.len(), "bid placed");
        Ok(())
    }

    /// Cancel a live bid.
    ///
    /// # Errors
    /// - `WrongAuctionPhase` once cancellation has closed
    /// - `OrderNotFound` if the bid is not live
    pub fn cancel(&mut self, order: &Order, phase: AuctionPhase) -> Result<()> {
        if !phase.allows_cancellation() {
            return Err(GavelError::WrongAuctionPhase {
                operation: "cancel",
                actual: phase,
            });
        }
        if !self.queue.remove(order) {
            return Err(GavelError::OrderNotFound(*order));
        }
        tracing::debug!(%order, live = self.queue.len(), "bid cancelled");
        Ok(())
    }

    /// Whether the identical bid is live.
    #[must_use]
    pub fn contains(&self, order: &Order) -> bool {
        self.queue.contains(order)
    }

    /// Live bids in queue order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.queue.iter()
    }

    /// Live bids of one participant, in queue order.
    #[must_use]
    pub fn orders_of(&self, owner: OwnerId) -> Vec<Order> {
        self.orders()
            .filter(|o| o.owner_id == owner)
            .copied()
            .collect()
    }

    /// Clearing order the live book would settle at right now.
    ///
    /// # Errors
    /// `Configuration` for a zero lot or zero reserve, or
    /// `ArithmeticOverflow` if the raised amount outgrows 96 bits.
    pub fn current_clearing_order(&self) -> Result<Order> {
        let bids: Vec<Order> = self.orders().copied().collect();
        Ok(compute_clearing(&self.params, &bids)?.clearing.clearing_order)
    }

    #[must_use]
    pub fn params(&self) -> &AuctionParams {
        &self.params
    }

    /// Number of live bids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
