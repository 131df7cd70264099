//! System-wide constants for the Gavel auction core.

/// Width of a packed order record in bytes.
pub const ORDER_ENCODED_LEN: usize = 32;

/// Width of the owner identifier field in a packed order (64 bits).
pub const OWNER_ID_BYTES: usize = 8;

/// Width of each amount field in a packed order (96 bits).
pub const AMOUNT_BYTES: usize = 12;

/// Byte offset of the buy amount inside a packed order.
pub const BUY_AMOUNT_OFFSET: usize = OWNER_ID_BYTES;

/// Byte offset of the sell amount inside a packed order.
pub const SELL_AMOUNT_OFFSET: usize = OWNER_ID_BYTES + AMOUNT_BYTES;

/// Largest amount representable in a 96-bit packed field.
pub const MAX_AMOUNT: u128 = (1u128 << 96) - 1;

/// Largest token decimals accepted by bid input parsing.
pub const MAX_TOKEN_DECIMALS: u32 = 18;

/// Maximum live bids held by one bid book.
pub const MAX_ORDERS_PER_AUCTION: usize = 100_000;

/// Owner identifier used for synthetic clearing orders.
pub const SYNTHETIC_OWNER_ID: u64 = 0;

/// Domain tag prefixed to clearing snapshot digests.
pub const SNAPSHOT_DOMAIN_TAG: &[u8] = b"gavel:clearing_snapshot:v1:";
