//! Configuration types for one auction.

use serde::{Deserialize, Serialize};

use crate::{
    AuctionBoundaries, AuctionId, AuctionParams, AuctionWindow, GavelError, Order, OwnerId,
    Result, Token, TokenPair, constants,
};

/// Everything the core needs to know about one auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    pub auction_id: AuctionId,
    /// Account that receives the raised funds.
    pub auctioneer: OwnerId,
    pub tokens: TokenPair,
    /// Auctioned-asset atoms on offer.
    pub auctioned_sell_amount: u128,
    /// Minimum bidding-asset atoms accepted for the whole lot (reserve).
    pub min_buy_amount: u128,
    /// Minimum bidding-asset atoms per bid.
    pub minimum_bidding_amount_per_order: u128,
    /// Raised amount below which the auction is void.
    pub min_funding_threshold: u128,
    pub window: AuctionWindow,
}

impl AuctionConfig {
    /// A GNO/WETH auction selling `auctioned_sell_amount` atoms with an
    /// 18-decimal bidding token and no funding threshold.
    #[must_use]
    pub fn gno_weth(
        auction_id: AuctionId,
        auctioneer: OwnerId,
        auctioned_sell_amount: u128,
        min_buy_amount: u128,
        window: AuctionWindow,
    ) -> Self {
        Self {
            auction_id,
            auctioneer,
            tokens: TokenPair::new(Token::new("GNO", 18), Token::new("WETH", 18)),
            auctioned_sell_amount,
            min_buy_amount,
            minimum_bidding_amount_per_order: 1,
            min_funding_threshold: 0,
            window,
        }
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// [`GavelError::Configuration`] naming the first inconsistent field.
    pub fn validate(&self) -> Result<()> {
        if self.auctioned_sell_amount == 0 {
            return Err(GavelError::Configuration(
                "auctioned_sell_amount must be positive".into(),
            ));
        }
        if self.min_buy_amount == 0 {
            return Err(GavelError::Configuration(
                "min_buy_amount must be positive".into(),
            ));
        }
        for (name, value) in [
            ("auctioned_sell_amount", self.auctioned_sell_amount),
            ("min_buy_amount", self.min_buy_amount),
            ("minimum_bidding_amount_per_order", self.minimum_bidding_amount_per_order),
            ("min_funding_threshold", self.min_funding_threshold),
        ] {
            if value > constants::MAX_AMOUNT {
                return Err(GavelError::Configuration(format!(
                    "{name} {value} exceeds the 96-bit order field"
                )));
            }
        }
        for token in [&self.tokens.auctioning, &self.tokens.bidding] {
            if token.decimals > constants::MAX_TOKEN_DECIMALS {
                return Err(GavelError::Configuration(format!(
                    "{} has {} decimals (max {})",
                    token.symbol,
                    token.decimals,
                    constants::MAX_TOKEN_DECIMALS
                )));
            }
        }
        if self.auctioneer.is_synthetic() {
            return Err(GavelError::Configuration(format!(
                "auctioneer cannot be the synthetic owner {}",
                self.auctioneer
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn params(&self) -> AuctionParams {
        AuctionParams {
            auctioneer: self.auctioneer,
            auctioned_sell_amount: self.auctioned_sell_amount,
            min_buy_amount: self.min_buy_amount,
            min_funding_threshold: self.min_funding_threshold,
            minimum_bidding_amount_per_order: self.minimum_bidding_amount_per_order,
        }
    }

    /// Reserve price in bid orientation.
    #[must_use]
    pub fn reserve_order(&self) -> Order {
        self.params().reserve_order()
    }

    #[must_use]
    pub fn boundaries(&self, current_clearing_price: Option<Order>) -> AuctionBoundaries {
        self.params().boundaries(current_clearing_price)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn window() -> AuctionWindow {
        let t = |s| DateTime::<Utc>::from_timestamp(s, 0).unwrap();
        AuctionWindow::new(t(100), t(200), t(300)).unwrap()
    }

    fn config() -> AuctionConfig {
        AuctionConfig::gno_weth(AuctionId(1), OwnerId(1), 1_000, 500, window())
    }

    #[test]
    fn preset_is_valid() {
        let cfg = config();
        cfg.validate().unwrap();
        assert_eq!(cfg.tokens.symbol(), "GNO/WETH");
    }

    #[test]
    fn reserve_derived_from_amounts() {
        let reserve = config().reserve_order();
        assert_eq!(reserve, Order::new(OwnerId(1), 500, 1_000));
    }

    #[test]
    fn zero_supply_rejected() {
        let mut cfg = config();
        cfg.auctioned_sell_amount = 0;
        assert!(matches!(cfg.validate(), Err(GavelError::Configuration(_))));
    }

    #[test]
    fn oversized_threshold_rejected() {
        let mut cfg = config();
        cfg.min_funding_threshold = constants::MAX_AMOUNT + 1;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("min_funding_threshold"));
    }

    #[test]
    fn too_many_decimals_rejected() {
        let mut cfg = config();
        cfg.tokens.bidding.decimals = 30;
        assert!(matches!(cfg.validate(), Err(GavelError::Configuration(_))));
    }

    #[test]
    fn synthetic_auctioneer_rejected() {
        let mut cfg = config();
        cfg.auctioneer = OwnerId::SYNTHETIC;
        assert!(matches!(cfg.validate(), Err(GavelError::Configuration(_))));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = config();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AuctionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
