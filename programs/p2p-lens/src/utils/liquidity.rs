use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::*;
use crate::safe_math::SafeMath;
use crate::state::{Market, PoolReserve, PriceFeed, UserPosition};
use crate::utils::valuation::{base_currency_value, base_currency_value_up};

/// A user's position on one market together with what is needed to price it
#[derive(Clone, Copy, Debug)]
pub struct PositionValuation<'a> {
    pub market: &'a Market,
    pub position: &'a UserPosition,
    pub pool_reserve: &'a PoolReserve,
    pub price_feed: &'a PriceFeed,
    pub decimals: u8,
}

/// A user's liquidity across markets, in the base currency
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiquidityData {
    /// Value of the collateral
    pub collateral: u128,
    /// Debt allowed by the loan to value ratios
    pub borrowable: u128,
    /// Debt above which the user can be liquidated
    pub max_debt: u128,
    /// Value of the debt
    pub debt: u128,
    /// `max_debt / debt` (in wad), `u128::MAX` without debt
    pub health_factor: u128,
}

pub fn liquidity_data<'a>(positions: impl IntoIterator<Item = PositionValuation<'a>>) -> Result<LiquidityData> {
    let mut collateral = U256::zero();
    let mut borrowable = U256::zero();
    let mut max_debt = U256::zero();
    let mut debt = U256::zero();

    for valuation in positions {
        let PositionValuation { market, position, pool_reserve, price_feed, decimals } = valuation;

        let collateral_value =
            base_currency_value(position.collateral_balance(market)?, decimals, price_feed)?;
        let debt_value =
            base_currency_value_up(position.total_borrow_balance(market)?, decimals, price_feed)?;

        collateral = collateral
            .checked_add(collateral_value)
            .ok_or(ErrorCode::MathOverflow)?;
        borrowable = borrowable
            .checked_add(percent_mul(collateral_value, pool_reserve.ltv)?)
            .ok_or(ErrorCode::MathOverflow)?;
        max_debt = max_debt
            .checked_add(percent_mul(collateral_value, pool_reserve.liquidation_threshold)?)
            .ok_or(ErrorCode::MathOverflow)?;
        debt = debt.checked_add(debt_value).ok_or(ErrorCode::MathOverflow)?;
    }

    let health_factor = if debt.is_zero() {
        u128::MAX
    } else {
        // Saturates for a dust debt against a large collateral
        wad_div(max_debt, debt)?.min(U256::from(u128::MAX)).try_to_u128()?
    };

    Ok(LiquidityData {
        collateral: collateral.try_to_u128()?,
        borrowable: borrowable.try_to_u128()?,
        max_debt: max_debt.try_to_u128()?,
        debt: debt.try_to_u128()?,
        health_factor,
    })
}
