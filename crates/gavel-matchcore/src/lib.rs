//! # gavel-matchcore
//!
//! **Pure deterministic price and clearing computation for Gavel.**
//!
//! MatchCore is the compute plane. It ranks bids by exact rational price and
//! clears a closed auction into a [`gavel_types::ClearingResult`]. It has:
//!
//! - **Zero side effects**: no balances, no book phases, no clock
//! - **Admission rules**: a [`BidQueue`] refuses bids clearing cannot settle
//! - **Exact arithmetic**: 256-bit cross-multiplication, never floats
//! - **Deterministic output**: same bids → same clearing on every node
//! - **Snapshot digests**: bind executed volume to its clearing order

pub mod clearing;
pub mod price;
pub mod queue;
pub mod snapshot;

pub use clearing::{AuctioneerProceeds, ClearingOutcome, compute_clearing};
pub use price::{QueueKey, compare, is_more_competitive_than};
pub use queue::BidQueue;
pub use snapshot::{snapshot_digest, snapshot_hex, verify_snapshot};
