//! Packed binary order records.
//!
//! An order travels as a single 32-byte word, big-endian:
//!
//! ```text
//!  0        8                    20                   32
//!  | owner  |     buy_amount     |     sell_amount    |
//!  | u64    |     u96            |     u96            |
//! ```
//!
//! Its text form is `0x` followed by 64 hex digits. Raw offsets never leave
//! this module: callers get an [`Order`] or an [`EncodedOrder`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    GavelError, Order, OwnerId, Result,
    constants::{
        AMOUNT_BYTES, BUY_AMOUNT_OFFSET, MAX_AMOUNT, ORDER_ENCODED_LEN, OWNER_ID_BYTES,
        SELL_AMOUNT_OFFSET,
    },
};

/// A packed 32-byte order record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EncodedOrder(pub [u8; ORDER_ENCODED_LEN]);

impl EncodedOrder {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ORDER_ENCODED_LEN] {
        &self.0
    }

    /// Decode into an [`Order`].
    pub fn decode(&self) -> Result<Order> {
        Order::decode(&self.0)
    }
}

impl fmt::Display for EncodedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EncodedOrder {
    type Err = GavelError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ORDER_ENCODED_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|err| GavelError::MalformedOrder {
            reason: format!("bad hex order {s:?}: {err}"),
        })?;
        Ok(Self(bytes))
    }
}

impl Order {
    /// Parse a packed order record.
    ///
    /// # Errors
    /// [`GavelError::MalformedOrder`] unless `bytes` is exactly
    /// [`ORDER_ENCODED_LEN`] long.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ORDER_ENCODED_LEN {
            return Err(GavelError::MalformedOrder {
                reason: format!(
                    "expected {ORDER_ENCODED_LEN} bytes, got {}",
                    bytes.len()
                ),
            });
        }

        let mut owner = [0u8; OWNER_ID_BYTES];
        owner.copy_from_slice(&bytes[..OWNER_ID_BYTES]);

        Ok(Self {
            owner_id: OwnerId(u64::from_be_bytes(owner)),
            buy_amount: read_amount(bytes, BUY_AMOUNT_OFFSET, "buy_amount")?,
            sell_amount: read_amount(bytes, SELL_AMOUNT_OFFSET, "sell_amount")?,
        })
    }

    /// Pack this order into its 32-byte record.
    ///
    /// # Errors
    /// [`GavelError::FieldOverflow`] if an amount exceeds 96 bits.
    pub fn encode(&self) -> Result<EncodedOrder> {
        let mut bytes = [0u8; ORDER_ENCODED_LEN];
        bytes[..OWNER_ID_BYTES].copy_from_slice(&self.owner_id.0.to_be_bytes());
        write_amount(&mut bytes, BUY_AMOUNT_OFFSET, "buy_amount", self.buy_amount)?;
        write_amount(&mut bytes, SELL_AMOUNT_OFFSET, "sell_amount", self.sell_amount)?;
        Ok(EncodedOrder(bytes))
    }

    /// Parse the `0x`-prefixed hex form of a packed order.
    pub fn decode_hex(s: &str) -> Result<Self> {
        s.parse::<EncodedOrder>()?.decode()
    }
}

fn read_amount(bytes: &[u8], offset: usize, field: &'static str) -> Result<u128> {
    let mut wide = [0u8; 16];
    wide[16 - AMOUNT_BYTES..].copy_from_slice(&bytes[offset..offset + AMOUNT_BYTES]);
    let value = u128::from_be_bytes(wide);
    // Unreachable for a 12-byte field; kept so a layout change cannot
    // silently widen an amount.
    if value > MAX_AMOUNT {
        return Err(GavelError::MalformedOrder {
            reason: format!("{field} {value} exceeds 96 bits"),
        });
    }
    Ok(value)
}

fn write_amount(
    bytes: &mut [u8; ORDER_ENCODED_LEN],
    offset: usize,
    field: &'static str,
    value: u128,
) -> Result<()> {
    if value > MAX_AMOUNT {
        return Err(GavelError::FieldOverflow {
            field,
            value,
            max: MAX_AMOUNT,
        });
    }
    bytes[offset..offset + AMOUNT_BYTES].copy_from_slice(&value.to_be_bytes()[16 - AMOUNT_BYTES..]);
    Ok(())
}
