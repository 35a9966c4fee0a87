use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::*;
use crate::safe_math::SafeMath;

/// Snapshot of one side of a market, as consumed by the P2P rate computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P2PRateComputeParams {
    /// Pool supply rate per year (in ray)
    pub pool_supply_rate_per_year: U256,
    /// Pool borrow rate per year (in ray)
    pub pool_borrow_rate_per_year: U256,
    /// Pool index of the side (in ray)
    pub pool_index: U256,
    /// P2P index of the side (in ray)
    pub p2p_index: U256,
    /// Share of the P2P supply sitting idle (in ray). Always zero on the borrow side.
    pub proportion_idle: U256,
    /// Scaled delta resting on the pool
    pub p2p_delta: U256,
    /// Scaled total matched peer-to-peer
    pub p2p_amount: U256,
    /// Position of the P2P rate between the pool supply and borrow rates (in percent)
    pub p2p_index_cursor: u16,
    /// Protocol's cut of the P2P spread (in percent)
    pub reserve_factor: u16,
}

/// Rate earned by a peer-to-peer supplier, per year (in ray).
pub fn compute_p2p_supply_rate(params: &P2PRateComputeParams) -> Result<U256> {
    let pool_supply_rate = params.pool_supply_rate_per_year;
    let pool_borrow_rate = params.pool_borrow_rate_per_year;

    let mut p2p_supply_rate = if pool_supply_rate > pool_borrow_rate {
        // No spread to share: a P2P supplier must never earn more than a P2P borrower pays.
        pool_borrow_rate
    } else {
        let p2p_rate = weighted_avg(pool_supply_rate, pool_borrow_rate, params.p2p_index_cursor)?;
        let reserve_cut = percent_mul(
            p2p_rate.zero_floor_sub(pool_supply_rate),
            params.reserve_factor,
        )?;
        p2p_rate.zero_floor_sub(reserve_cut)
    };

    if (!params.p2p_delta.is_zero() || !params.proportion_idle.is_zero())
        && !params.p2p_amount.is_zero()
    {
        let total_p2p = ray_mul(params.p2p_amount, params.p2p_index)?;
        if !total_p2p.is_zero() {
            let proportion_idle = params.proportion_idle;
            let proportion_delta = ray_div_up(ray_mul(params.p2p_delta, params.pool_index)?, total_p2p)?
                .min(ray().zero_floor_sub(proportion_idle));

            let p2p_share = ray()
                .zero_floor_sub(proportion_delta)
                .zero_floor_sub(proportion_idle);
            p2p_supply_rate = ray_mul(p2p_supply_rate, p2p_share)?
                .checked_add(ray_mul(pool_supply_rate, proportion_delta)?)
                .ok_or(ErrorCode::MathOverflow)?;
        }
    }

    Ok(p2p_supply_rate)
}

/// Rate paid by a peer-to-peer borrower, per year (in ray).
pub fn compute_p2p_borrow_rate(params: &P2PRateComputeParams) -> Result<U256> {
    let pool_supply_rate = params.pool_supply_rate_per_year;
    let pool_borrow_rate = params.pool_borrow_rate_per_year;

    let mut p2p_borrow_rate = if pool_supply_rate > pool_borrow_rate {
        pool_borrow_rate
    } else {
        let p2p_rate = weighted_avg(pool_supply_rate, pool_borrow_rate, params.p2p_index_cursor)?;
        let reserve_cut = percent_mul(
            pool_borrow_rate.zero_floor_sub(p2p_rate),
            params.reserve_factor,
        )?;
        p2p_rate
            .checked_add(reserve_cut)
            .ok_or(ErrorCode::MathOverflow)?
    };

    if !params.p2p_delta.is_zero() && !params.p2p_amount.is_zero() {
        let total_p2p = ray_mul(params.p2p_amount, params.p2p_index)?;
        if !total_p2p.is_zero() {
            let proportion_delta =
                ray_div_up(ray_mul(params.p2p_delta, params.pool_index)?, total_p2p)?.min(ray());

            p2p_borrow_rate = ray_mul(p2p_borrow_rate, ray().zero_floor_sub(proportion_delta))?
                .checked_add(ray_mul(pool_borrow_rate, proportion_delta)?)
                .ok_or(ErrorCode::MathOverflow)?;
        }
    }

    Ok(p2p_borrow_rate)
}
