//! Supply conservation invariant checker.
//!
//! Invariant enforced after settlement:
//! ```text
//! ∀ asset: Σ(payouts) ≤ Σ(deposits)
//! ```
//!
//! Deposits are the auctioneer's lot and every bid's bidding amount.
//! Payouts are claims plus the auctioneer's proceeds. Truncation may leave
//! dust behind; paying out more than was deposited never happens.

use std::collections::HashMap;

use alloy_primitives::U256;
use gavel_matchcore::AuctioneerProceeds;
use gavel_types::{ClaimResult, GavelError, Result, TokenPair};

/// Tracks per-asset deposits and payouts for one auction.
#[derive(Debug, Clone, Default)]
pub struct SupplyConservation {
    deposits: HashMap<String, U256>,
    payouts: HashMap<String, U256>,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_deposit(&mut self, asset: &str, amount: U256) {
        *self.deposits.entry(asset.to_string()).or_default() += amount;
    }

    pub fn record_payout(&mut self, asset: &str, amount: U256) {
        *self.payouts.entry(asset.to_string()).or_default() += amount;
    }

    /// Record a participant claim: refunds in the bidding asset, proceeds in
    /// the auctioned asset.
    pub fn record_claim(&mut self, tokens: &TokenPair, claim: &ClaimResult) {
        self.record_payout(&tokens.bidding.symbol, claim.claimable_bid_funds);
        self.record_payout(&tokens.auctioning.symbol, claim.claimable_auctioned_asset);
    }

    /// Record what the auctioneer takes out.
    pub fn record_auctioneer(&mut self, tokens: &TokenPair, proceeds: &AuctioneerProceeds) {
        self.record_payout(&tokens.auctioning.symbol, proceeds.auctioned_returned);
        self.record_payout(&tokens.bidding.symbol, proceeds.bidding_received);
    }

    #[must_use]
    pub fn deposited(&self, asset: &str) -> U256 {
        self.deposits.get(asset).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn paid_out(&self, asset: &str) -> U256 {
        self.payouts.get(asset).copied().unwrap_or_default()
    }

    /// Deposits not (yet) paid out; zero if the invariant is broken.
    #[must_use]
    pub fn remaining(&self, asset: &str) -> U256 {
        self.deposited(asset).saturating_sub(self.paid_out(asset))
    }

    /// Verify the invariant for one asset.
    ///
    /// # Errors
    /// Returns [`GavelError::SupplyInvariantViolation`] if payouts exceed
    /// deposits.
    pub fn verify(&self, asset: &str) -> Result<()> {
        let deposited = self.deposited(asset);
        let paid = self.paid_out(asset);
        if paid > deposited {
            tracing::warn!(asset, %deposited, %paid, "supply invariant violated");
            return Err(GavelError::SupplyInvariantViolation {
                reason: format!("Asset {asset}: paid out {paid} > deposited {deposited}"),
            });
        }
        Ok(())
    }

    /// Verify every asset that has seen a deposit or payout.
    ///
    /// # Errors
    /// The first violation found, in asset-name order.
    pub fn verify_all(&self) -> Result<()> {
        let mut assets: Vec<&String> = self.deposits.keys().chain(self.payouts.keys()).collect();
        assets.sort();
        assets.dedup();
        for asset in assets {
            self.verify(asset)?;
        }
        Ok(())
    }
}
