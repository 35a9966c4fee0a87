use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;
use crate::state::scaler::{RAY, WAD};

pub fn ray() -> U256 {
    U256::from(RAY)
}

pub fn wad() -> U256 {
    U256::from(WAD)
}

/// Multiply two RAY values, rounding down: floor(a * b / RAY)
pub fn ray_mul(a: U256, b: U256) -> Result<U256> {
    Ok(a.checked_mul(b).ok_or(ErrorCode::MathOverflow)? / ray())
}

/// Multiply two RAY values, rounding up: ceil(a * b / RAY)
pub fn ray_mul_up(a: U256, b: U256) -> Result<U256> {
    let product = a.checked_mul(b).ok_or(ErrorCode::MathOverflow)?;
    Ok(product
        .checked_add(ray() - 1)
        .ok_or(ErrorCode::MathOverflow)?
        / ray())
}

/// Divide two RAY values, rounding down: floor(a * RAY / b)
pub fn ray_div(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(ErrorCode::ZeroDivisionError.into());
    }
    Ok(a.checked_mul(ray()).ok_or(ErrorCode::MathOverflow)? / b)
}

/// Divide two RAY values, rounding up: ceil(a * RAY / b)
pub fn ray_div_up(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(ErrorCode::ZeroDivisionError.into());
    }
    Ok(a.checked_mul(ray())
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(b - 1)
        .ok_or(ErrorCode::MathOverflow)?
        / b)
}

/// Divide two WAD values, rounding down: floor(a * WAD / b)
pub fn wad_div(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(ErrorCode::ZeroDivisionError.into());
    }
    Ok(a.checked_mul(wad()).ok_or(ErrorCode::MathOverflow)? / b)
}
