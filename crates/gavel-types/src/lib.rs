//! # gavel-types
//!
//! Shared types, errors, codec, and configuration for the **Gavel**
//! sealed-bid batch auction core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OwnerId`], [`AuctionId`], [`Token`], [`TokenPair`]
//! - **Order model**: [`Order`] and its packed form [`EncodedOrder`]
//! - **Auction model**: [`AuctionPhase`], [`AuctionWindow`], [`AuctionParams`],
//!   [`AuctionBoundaries`], [`BidCandidate`]
//! - **Settlement model**: [`ClearingResult`], [`SettlementSignal`], [`ClaimResult`]
//! - **Configuration**: [`AuctionConfig`]
//! - **Errors**: [`GavelError`] and [`ValidationError`] with `GV_ERR_` prefix codes
//! - **Constants**: packed layout widths and system-wide limits

pub mod auction;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use gavel_types::{Order, ClearingResult, AuctionPhase, ...};

pub use auction::*;
pub use codec::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `gavel_types::constants::FOO`
// (not re-exported to avoid name collisions).
