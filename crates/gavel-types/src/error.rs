//! Error types for the Gavel auction core.
//!
//! All errors use the `GV_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Codec and order errors
//! - 2xx: Bid validation outcomes ([`ValidationError`])
//! - 4xx: Auction lifecycle and bid book errors
//! - 6xx: Settlement errors
//! - 9xx: General / configuration errors
//!
//! [`GavelError`] covers fatal failures that must propagate immediately.
//! [`ValidationError`] covers the ordinary reasons a prospective bid is
//! rejected; those are expected outcomes, not faults.

use thiserror::Error;

use crate::{AuctionPhase, Order, OwnerId};

/// Central error enum for fatal Gavel failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GavelError {
    // =================================================================
    // Codec / Order Errors (1xx)
    // =================================================================
    /// A packed order record has the wrong width or cannot be parsed.
    #[error("GV_ERR_100: Malformed order: {reason}")]
    MalformedOrder { reason: String },

    /// An amount does not fit its packed field.
    #[error("GV_ERR_101: Field overflow: {field} = {value} exceeds {max}")]
    FieldOverflow {
        field: &'static str,
        value: u128,
        max: u128,
    },

    /// A price ratio with a zero denominator was used in a comparison or
    /// conversion.
    #[error("GV_ERR_102: Degenerate order: {reason}")]
    DegenerateOrder { reason: String },

    /// A bid cannot take part in clearing (zero amounts, below reserve).
    #[error("GV_ERR_103: Invalid bid {order}: {reason}")]
    InvalidBid { order: Order, reason: String },

    // =================================================================
    // Auction / Book Errors (4xx)
    // =================================================================
    /// Auction window instants are out of order.
    #[error("GV_ERR_400: Invalid auction window: {reason}")]
    InvalidAuctionWindow { reason: String },

    /// An operation was attempted in a phase that does not allow it.
    #[error("GV_ERR_401: Wrong auction phase: {operation} not allowed during {actual}")]
    WrongAuctionPhase {
        operation: &'static str,
        actual: AuctionPhase,
    },

    /// The identical order is already in the book.
    #[error("GV_ERR_402: Order already exists: {0}")]
    DuplicateOrder(Order),

    /// The order is not in the book.
    #[error("GV_ERR_403: Order not found: {0}")]
    OrderNotFound(Order),

    /// The bid book is at capacity.
    #[error("GV_ERR_404: Bid book full ({capacity} orders)")]
    BookFull { capacity: usize },

    // =================================================================
    // Settlement Errors (6xx)
    // =================================================================
    /// The order has already been claimed against this snapshot.
    #[error("GV_ERR_600: Order already claimed: {0}")]
    OrderAlreadyClaimed(Order),

    /// A claim was computed against a different clearing snapshot.
    #[error("GV_ERR_601: Clearing snapshot mismatch: expected {expected}, got {actual}")]
    SnapshotMismatch { expected: String, actual: String },

    /// Payouts exceed deposits for an asset.
    #[error("GV_ERR_602: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    /// An intermediate result does not fit the target integer type.
    #[error("GV_ERR_603: Arithmetic overflow: {reason}")]
    ArithmeticOverflow { reason: String },

    /// An order was submitted for claiming by someone other than its owner.
    #[error("GV_ERR_604: Order {order} does not belong to {owner}")]
    ForeignOrder { order: Order, owner: OwnerId },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (inconsistent amounts, bad decimals, etc.).
    #[error("GV_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GavelError>;

/// Why a prospective bid was rejected.
///
/// Rules are evaluated in a fixed order and only the first failing rule is
/// reported, so each variant is the single most precise reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Zero, negative, or unparsable bidding amount.
    #[error("GV_ERR_200: Invalid amount")]
    InvalidAmount,

    /// Zero buy amount or a price that implies no auctioned units.
    #[error("GV_ERR_201: Invalid price")]
    InvalidPrice,

    /// Price is not strictly better than the auction's reserve price.
    #[error("GV_ERR_202: Price must be higher than the reserve price")]
    PriceBelowReserve,

    /// Price is not strictly better than the current clearing price.
    #[error("GV_ERR_203: Price must be higher than the current clearing price")]
    PriceBelowClearing,

    /// Bidding amount is smaller than the per-order minimum.
    #[error("GV_ERR_204: Amount below the minimum bid size of {minimum}")]
    BelowMinimumBidSize { minimum: u128 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GavelError::MalformedOrder {
            reason: "expected 32 bytes, got 31".into(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("GV_ERR_100"), "Got: {msg}");
        assert!(msg.contains("31"));
    }

    #[test]
    fn field_overflow_display() {
        let err = GavelError::FieldOverflow {
            field: "sell_amount",
            value: u128::MAX,
            max: crate::constants::MAX_AMOUNT,
        };
        let msg = format!("{err}");
        assert!(msg.contains("GV_ERR_101"));
        assert!(msg.contains("sell_amount"));
    }

    #[test]
    fn wrong_phase_display() {
        let err = GavelError::WrongAuctionPhase {
            operation: "cancel",
            actual: AuctionPhase::OrderPlacing,
        };
        let msg = format!("{err}");
        assert!(msg.contains("GV_ERR_401"));
        assert!(msg.contains("ORDER_PLACING"));
    }

    #[test]
    fn minimum_bid_display() {
        let msg = format!("{}", ValidationError::BelowMinimumBidSize { minimum: 500 });
        assert!(msg.starts_with("GV_ERR_204"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn all_errors_have_gv_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GavelError::DegenerateOrder {
                reason: "zero sell amount".into(),
            }),
            Box::new(GavelError::BookFull { capacity: 1 }),
            Box::new(GavelError::Configuration("test".into())),
            Box::new(GavelError::SnapshotMismatch {
                expected: "a".into(),
                actual: "b".into(),
            }),
            Box::new(ValidationError::InvalidAmount),
            Box::new(ValidationError::PriceBelowReserve),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GV_ERR_"),
                "Error missing GV_ERR_ prefix: {msg}"
            );
        }
    }
}
