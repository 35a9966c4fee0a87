// safe_math/mod.rs
use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;

pub trait SafeMath {
    /// Floor-at-zero subtraction. If `rhs > self`, returns 0.
    fn zero_floor_sub(self, rhs: Self) -> Self;
    /// Narrow to u128. Errors with `MathOverflow` if the value does not fit.
    fn try_to_u128(self) -> Result<u128>;
}

impl SafeMath for U256 {
    fn zero_floor_sub(self, rhs: U256) -> U256 {
        if self < rhs {
            U256::zero()
        } else {
            self - rhs
        }
    }

    fn try_to_u128(self) -> Result<u128> {
        u128::try_from(self).map_err(|_| ErrorCode::MathOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_floor_sub_never_underflows() {
        assert_eq!(U256::from(5u64).zero_floor_sub(U256::from(3u64)), U256::from(2u64));
        assert_eq!(U256::from(3u64).zero_floor_sub(U256::from(5u64)), U256::zero());
        assert_eq!(U256::from(3u64).zero_floor_sub(U256::from(3u64)), U256::zero());
    }

    #[test]
    fn try_to_u128_bounds() {
        assert_eq!(U256::from(u128::MAX).try_to_u128().unwrap(), u128::MAX);
        assert_eq!(
            (U256::from(u128::MAX) + 1).try_to_u128().unwrap_err(),
            ErrorCode::MathOverflow.into()
        );
    }
}
