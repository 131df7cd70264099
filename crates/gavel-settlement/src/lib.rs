//! # gavel-settlement
//!
//! **Finality Plane**: participant claims, double-claim protection, and
//! supply conservation.
//!
//! ## Architecture
//!
//! The Finality Plane receives a published [`ClearingResult`] and:
//! 1. Pins it by digest in a [`ClaimLedger`]
//! 2. Computes each participant's claim ([`compute_claim`])
//! 3. Refuses repeated or foreign claims
//! 4. Checks that payouts never exceed deposits ([`SupplyConservation`])
//!
//! [`ClearingResult`]: gavel_types::ClearingResult

pub mod claim;
pub mod conservation;
pub mod ledger;

pub use claim::compute_claim;
pub use conservation::SupplyConservation;
pub use ledger::ClaimLedger;
