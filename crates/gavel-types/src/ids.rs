//! Identifiers used throughout Gavel.
//!
//! Owners are the 64-bit account identifiers carried in the packed order
//! record; the auction core treats them as opaque.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

// ---------------------------------------------------------------------------
// OwnerId
// ---------------------------------------------------------------------------

/// Identifier of the account that placed an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

impl OwnerId {
    /// Owner of synthetic clearing orders (no real participant).
    pub const SYNTHETIC: Self = Self(constants::SYNTHETIC_OWNER_ID);

    #[must_use]
    pub fn is_synthetic(self) -> bool {
        self == Self::SYNTHETIC
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AuctionId
// ---------------------------------------------------------------------------

/// Identifier of one auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AuctionId(pub u64);

impl fmt::Display for AuctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "auction:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// An ERC-20 style token: a symbol and the number of decimals in one unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub decimals: u32,
}

impl Token {
    #[must_use]
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The two assets of an auction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    /// Asset being sold by the auctioneer.
    pub auctioning: Token,
    /// Asset bidders pay with.
    pub bidding: Token,
}

impl TokenPair {
    #[must_use]
    pub fn new(auctioning: Token, bidding: Token) -> Self {
        Self {
            auctioning,
            bidding,
        }
    }

    /// Returns the pair symbol (e.g., "GNO/WETH").
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.auctioning.symbol, self.bidding.symbol)
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.auctioning, self.bidding)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
