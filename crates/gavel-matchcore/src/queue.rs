//! Admission-checked bid queue.
//!
//! Every bid in a [`BidQueue`] has positive amounts that fit 96 bits, comes
//! from a real participant, is strictly more competitive than the reserve,
//! and sits at a price no other queued bid shares. Without ties, each bid is
//! strictly better than the clearing price, is the marginal order, or is
//! strictly worse; the clearing walk and the claim rule agree on all three.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use gavel_types::{AuctionParams, GavelError, Order, Result, constants::MAX_AMOUNT};

use crate::price::{QueueKey, compare, is_more_competitive_than};

/// Bids of one auction in queue order, most competitive first.
#[derive(Debug, Clone)]
pub struct BidQueue {
    reserve: Order,
    keys: BTreeSet<QueueKey>,
}

impl BidQueue {
    /// Empty queue for the auction described by `params`.
    #[must_use]
    pub fn new(params: &AuctionParams) -> Self {
        Self {
            reserve: params.reserve_order(),
            keys: BTreeSet::new(),
        }
    }

    /// Queue every bid in `bids`, failing on the first one refused.
    ///
    /// # Errors
    /// See [`BidQueue::admit`].
    pub fn from_bids(params: &AuctionParams, bids: &[Order]) -> Result<Self> {
        let mut queue = Self::new(params);
        for bid in bids {
            queue.insert(*bid)?;
        }
        Ok(queue)
    }

    /// Check that `bid` may join the queue, without inserting it.
    ///
    /// # Errors
    /// - `InvalidBid` for a zero or oversized amount, the synthetic owner,
    ///   a price not strictly above the reserve, or a price another queued
    ///   bid already holds
    /// - `DuplicateOrder` if the identical bid is queued
    /// - `DegenerateOrder` if the reserve itself has a zero sell amount
    pub fn admit(&self, bid: &Order) -> Result<QueueKey> {
        let reason = if bid.sell_amount == 0 || bid.buy_amount == 0 {
            Some("zero amount")
        } else if bid.sell_amount > MAX_AMOUNT || bid.buy_amount > MAX_AMOUNT {
            Some("amount exceeds 96 bits")
        } else if bid.owner_id.is_synthetic() {
            Some("synthetic owner")
        } else if !is_more_competitive_than(bid, &self.reserve)? {
            Some("not above the reserve price")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(GavelError::InvalidBid {
                order: *bid,
                reason: reason.into(),
            });
        }

        let key = QueueKey::new(*bid)?;
        if self.keys.contains(&key) {
            return Err(GavelError::DuplicateOrder(*bid));
        }
        if let Some(tied) = self.tied_with(&key)? {
            return Err(GavelError::InvalidBid {
                order: *bid,
                reason: format!("ties the price of {tied}"),
            });
        }
        Ok(key)
    }

    /// Admit and insert `bid`.
    ///
    /// # Errors
    /// See [`BidQueue::admit`].
    pub fn insert(&mut self, bid: Order) -> Result<()> {
        let key = self.admit(&bid)?;
        self.keys.insert(key);
        Ok(())
    }

    /// Remove the identical bid; `false` if it was not queued.
    pub fn remove(&mut self, bid: &Order) -> bool {
        QueueKey::new(*bid).is_ok_and(|key| self.keys.remove(&key))
    }

    #[must_use]
    pub fn contains(&self, bid: &Order) -> bool {
        QueueKey::new(*bid).is_ok_and(|key| self.keys.contains(&key))
    }

    /// Queued bids, most competitive first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.keys.iter().map(QueueKey::order)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Equal prices are adjacent in queue order, so only the two
    /// neighbours of `key` can tie it.
    fn tied_with(&self, key: &QueueKey) -> Result<Option<Order>> {
        let before = self.keys.range(..key).next_back();
        let after = self.keys.range(key..).next();
        for neighbour in before.into_iter().chain(after) {
            if compare(neighbour.order(), key.order())? == Ordering::Equal {
                return Ok(Some(*neighbour.order()));
            }
        }
        Ok(None)
    }
}
