use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::*;

/// Balance-weighted blend of a P2P rate and a pool rate (in ray).
/// Returns zero when there is no balance at all.
pub fn compute_weighted_rate(
    p2p_rate: U256,
    pool_rate: U256,
    balance_in_p2p: U256,
    balance_on_pool: U256,
) -> Result<U256> {
    let total_balance = balance_in_p2p
        .checked_add(balance_on_pool)
        .ok_or(ErrorCode::MathOverflow)?;
    if total_balance.is_zero() {
        return Ok(U256::zero());
    }

    let mut weighted_rate = U256::zero();
    if !balance_in_p2p.is_zero() {
        weighted_rate = weighted_rate
            .checked_add(ray_mul(p2p_rate, ray_div(balance_in_p2p, total_balance)?)?)
            .ok_or(ErrorCode::MathOverflow)?;
    }
    if !balance_on_pool.is_zero() {
        weighted_rate = weighted_rate
            .checked_add(ray_mul(pool_rate, ray_div(balance_on_pool, total_balance)?)?)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    Ok(weighted_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scaler::RAY;

    #[test]
    fn no_balance_yields_zero() {
        let rate = compute_weighted_rate(
            U256::from(RAY),
            U256::from(RAY),
            U256::zero(),
            U256::zero(),
        )
        .unwrap();
        assert_eq!(rate, U256::zero());
    }

    #[test]
    fn one_sided_balances_yield_that_rate() {
        let p2p_rate = U256::from(RAY / 100 * 4);
        let pool_rate = U256::from(RAY / 100 * 2);
        let balance = U256::from(123_456u64);
        assert_eq!(
            compute_weighted_rate(p2p_rate, pool_rate, U256::zero(), balance).unwrap(),
            pool_rate
        );
        assert_eq!(
            compute_weighted_rate(p2p_rate, pool_rate, balance, U256::zero()).unwrap(),
            p2p_rate
        );
    }

    #[test]
    fn quarter_in_p2p() {
        let rate = compute_weighted_rate(
            U256::from(RAY / 100 * 4),
            U256::from(RAY / 100 * 2),
            U256::from(100u64),
            U256::from(300u64),
        )
        .unwrap();
        assert_eq!(rate, U256::from(RAY / 1_000 * 25));
    }

    #[test]
    fn thirds_round_down_per_term() {
        // 1/3 and 2/3 of one ray each round down before the sum.
        let rate = compute_weighted_rate(
            U256::from(RAY),
            U256::from(RAY),
            U256::from(1u64),
            U256::from(2u64),
        )
        .unwrap();
        assert_eq!(rate, U256::from(RAY / 3 + RAY * 2 / 3));
        assert!(rate < U256::from(RAY));
    }
}
