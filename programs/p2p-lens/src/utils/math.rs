use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;

const MAX_SAFE_EXPONENT: u32 = 38; // 10^38 is within u128 capacity

pub fn pow10(exp: u32) -> Result<u128> {
    if exp > MAX_SAFE_EXPONENT {
        msg!("Exponent too large, potential overflow");
        return Err(ErrorCode::MathOverflow.into());
    }
    10u128.checked_pow(exp).ok_or(ErrorCode::MathOverflow.into())
}

/// One whole token in its smallest units
pub fn decimals_scale(decimals: u8) -> Result<U256> {
    Ok(U256::from(pow10(decimals as u32)?))
}
