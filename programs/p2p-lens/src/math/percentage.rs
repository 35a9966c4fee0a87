use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;
use crate::state::scaler::{HALF_PERCENTAGE_FACTOR, PERCENTAGE_FACTOR};

/// Multiply a value by a percentage, rounding down: floor(value * percentage / 10_000)
pub fn percent_mul(value: U256, percentage: u16) -> Result<U256> {
    Ok(value
        .checked_mul(U256::from(percentage))
        .ok_or(ErrorCode::MathOverflow)?
        / U256::from(PERCENTAGE_FACTOR))
}

/// Weighted average of `x` and `y`, with `y` weighted by `percentage` and `x` by its
/// complement. Rounds half up.
pub fn weighted_avg(x: U256, y: U256, percentage: u16) -> Result<U256> {
    if percentage > PERCENTAGE_FACTOR {
        return Err(ErrorCode::MathOverflow.into());
    }
    let x_weight = U256::from(PERCENTAGE_FACTOR - percentage);
    let y_weight = U256::from(percentage);

    let weighted = x
        .checked_mul(x_weight)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(y.checked_mul(y_weight).ok_or(ErrorCode::MathOverflow)?)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(U256::from(HALF_PERCENTAGE_FACTOR))
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(weighted / U256::from(PERCENTAGE_FACTOR))
}
