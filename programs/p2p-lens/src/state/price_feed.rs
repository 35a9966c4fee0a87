use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::{LastUpdate, BASE_CURRENCY_DECIMALS};
use crate::utils::math::pow10;

/// Price of one whole token in the base currency, owned by the oracle program.
/// The price is `price * 10^expo`.
#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PriceFeed {
    /// Asset mint the price is quoted for
    pub mint: Pubkey,
    /// Raw price
    pub price: u64,
    /// Exponent for decimal precision (e.g., -8 for 8 decimal places)
    pub expo: i32,
    /// Last slot when the price was published
    pub last_update: LastUpdate,
}

impl PriceFeed {
    pub fn get_price(&self) -> (u64, i32) {
        (self.price, self.expo)
    }

    /// Price of one whole token with `BASE_CURRENCY_DECIMALS` decimals
    pub fn base_currency_price(&self) -> Result<u128> {
        let price = self.price as u128;
        let adjustment = BASE_CURRENCY_DECIMALS as i64 + self.expo as i64;

        if adjustment >= 0 {
            price
                .checked_mul(pow10(adjustment as u32)?)
                .ok_or(ErrorCode::MathOverflow.into())
        } else {
            let exp = u32::try_from(-adjustment).map_err(|_| ErrorCode::MathOverflow)?;
            if exp > 38 {
                return Ok(0);
            }
            Ok(price / pow10(exp)?)
        }
    }
}
