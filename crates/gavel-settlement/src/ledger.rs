//! Claim ledger — prevents double-claiming.
//!
//! Each order can be claimed once, and only against the clearing snapshot
//! the ledger was opened for. Claims against any other snapshot return
//! [`GavelError::SnapshotMismatch`]; a second claim of the same order
//! returns [`GavelError::OrderAlreadyClaimed`].

use std::collections::HashSet;

use gavel_matchcore::{snapshot_digest, snapshot_hex};
use gavel_types::{ClaimResult, ClearingResult, GavelError, Order, OwnerId, Result};

use crate::claim::compute_claim;

/// Records claimed orders for one settled auction.
#[derive(Debug, Clone)]
pub struct ClaimLedger {
    /// Digest of the snapshot claims are computed against.
    digest: [u8; 32],
    /// Orders already claimed.
    claimed: HashSet<Order>,
    /// Running total of everything paid out.
    paid: ClaimResult,
}

impl ClaimLedger {
    /// Open a ledger pinned to `clearing`.
    #[must_use]
    pub fn new(clearing: &ClearingResult) -> Self {
        Self::pinned(snapshot_digest(clearing))
    }

    /// Open a ledger pinned to a published digest.
    #[must_use]
    pub fn pinned(digest: [u8; 32]) -> Self {
        Self {
            digest,
            claimed: HashSet::new(),
            paid: ClaimResult::default(),
        }
    }

    /// Claim `orders` on behalf of `owner`.
    ///
    /// All-or-nothing: if any order is rejected, nothing is recorded.
    ///
    /// # Errors
    /// - `SnapshotMismatch` if `clearing` is not the pinned snapshot
    /// - `ForeignOrder` if an order belongs to someone else
    /// - `OrderAlreadyClaimed` if an order was claimed before or appears twice
    /// - `DegenerateOrder` from the claim computation
    pub fn claim(
        &mut self,
        owner: OwnerId,
        orders: &[Order],
        clearing: &ClearingResult,
    ) -> Result<ClaimResult> {
        let actual = snapshot_digest(clearing);
        if actual != self.digest {
            tracing::warn!(%owner, "claim against a different clearing snapshot");
            return Err(GavelError::SnapshotMismatch {
                expected: snapshot_hex(&self.digest),
                actual: snapshot_hex(&actual),
            });
        }

        let mut batch = HashSet::with_capacity(orders.len());
        for order in orders {
            if order.owner_id != owner {
                return Err(GavelError::ForeignOrder {
                    order: *order,
                    owner,
                });
            }
            if self.claimed.contains(order) || !batch.insert(*order) {
                return Err(GavelError::OrderAlreadyClaimed(*order));
            }
        }

        let claim = compute_claim(orders, clearing)?;
        self.claimed.extend(batch);
        self.paid.claimable_bid_funds += claim.claimable_bid_funds;
        self.paid.claimable_auctioned_asset += claim.claimable_auctioned_asset;

        tracing::debug!(
            %owner,
            orders = orders.len(),
            refund = %claim.claimable_bid_funds,
            proceeds = %claim.claimable_auctioned_asset,
            "claim recorded"
        );
        Ok(claim)
    }

    /// Whether `order` has been claimed.
    #[must_use]
    pub fn is_claimed(&self, order: &Order) -> bool {
        self.claimed.contains(order)
    }

    /// Number of orders claimed so far.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    /// Everything paid out so far.
    #[must_use]
    pub fn total_paid(&self) -> ClaimResult {
        self.paid
    }

    #[must_use]
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }
}
