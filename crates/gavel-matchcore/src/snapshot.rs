//! Clearing snapshot digests.
//!
//! `executed_volume` only means something next to the clearing order it was
//! computed against. The digest binds the two so a claim computed against one
//! published snapshot cannot be replayed against another.

use gavel_types::{ClearingResult, constants::SNAPSHOT_DOMAIN_TAG};
use sha2::{Digest, Sha256};

/// Compute the digest of a clearing snapshot.
///
/// Depends on:
/// - clearing order owner, buy amount and sell amount
/// - executed volume
/// - funding threshold flag
///
/// All integers are hashed big-endian at full width.
#[must_use]
pub fn snapshot_digest(clearing: &ClearingResult) -> [u8; 32] {
    let order = &clearing.clearing_order;
    let mut hasher = Sha256::new();
    hasher.update(SNAPSHOT_DOMAIN_TAG);
    hasher.update(order.owner_id.0.to_be_bytes());
    hasher.update(order.buy_amount.to_be_bytes());
    hasher.update(order.sell_amount.to_be_bytes());
    hasher.update(clearing.executed_volume.to_be_bytes());
    hasher.update([u8::from(clearing.funding_threshold_met)]);
    hasher.finalize().into()
}

/// Verify that a digest matches the snapshot.
#[must_use]
pub fn verify_snapshot(clearing: &ClearingResult, expected: &[u8; 32]) -> bool {
    snapshot_digest(clearing) == *expected
}

/// `0x`-prefixed hex form of a digest, for logs and error messages.
#[must_use]
pub fn snapshot_hex(digest: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use gavel_types::Order;

    use super::*;

    fn clearing(executed: u128) -> ClearingResult {
        ClearingResult {
            clearing_order: Order::dummy(1, 1000, 500),
            executed_volume: executed,
            funding_threshold_met: true,
        }
    }

    #[test]
    fn same_snapshot_same_digest() {
        assert_eq!(snapshot_digest(&clearing(400)), snapshot_digest(&clearing(400)));
    }

    #[test]
    fn executed_volume_changes_digest() {
        assert_ne!(snapshot_digest(&clearing(400)), snapshot_digest(&clearing(401)));
    }

    #[test]
    fn clearing_order_changes_digest() {
        let mut other = clearing(400);
        other.clearing_order = Order::dummy(2, 1000, 500);
        assert_ne!(snapshot_digest(&clearing(400)), snapshot_digest(&other));
    }

    #[test]
    fn threshold_flag_changes_digest() {
        let mut other = clearing(400);
        other.funding_threshold_met = false;
        assert_ne!(snapshot_digest(&clearing(400)), snapshot_digest(&other));
    }

    #[test]
    fn verify_correct_and_wrong() {
        let digest = snapshot_digest(&clearing(400));
        assert!(verify_snapshot(&clearing(400), &digest));
        assert!(!verify_snapshot(&clearing(0), &digest));
        assert!(!verify_snapshot(&clearing(400), &[0u8; 32]));
    }

    #[test]
    fn hex_form() {
        let s = snapshot_hex(&[0xab; 32]);
        assert_eq!(s.len(), 66);
        assert!(s.starts_with("0xabab"));
    }
}
