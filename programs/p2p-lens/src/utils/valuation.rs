use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;
use crate::state::PriceFeed;
use crate::utils::math::decimals_scale;

/// Value of `amount` (in the asset's smallest units) in the base currency, rounded down
pub fn base_currency_value(amount: U256, decimals: u8, price_feed: &PriceFeed) -> Result<U256> {
    let price = U256::from(price_feed.base_currency_price()?);
    Ok(amount.checked_mul(price).ok_or(ErrorCode::MathOverflow)? / decimals_scale(decimals)?)
}

/// Value of `amount` in the base currency, rounded up
pub fn base_currency_value_up(amount: U256, decimals: u8, price_feed: &PriceFeed) -> Result<U256> {
    let price = U256::from(price_feed.base_currency_price()?);
    let unit = decimals_scale(decimals)?;
    Ok(amount
        .checked_mul(price)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(unit - 1)
        .ok_or(ErrorCode::MathOverflow)?
        / unit)
}
