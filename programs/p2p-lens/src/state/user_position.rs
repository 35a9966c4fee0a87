use super::*;
use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::*;
use crate::rates::compute_weighted_rate;
use crate::safe_math::SafeMath;

/// A user's balances on one overlay market, owned by the overlay program
#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct UserPosition {
    /// Owner of the position
    pub owner: Pubkey,
    /// Market the position belongs to
    pub market: Pubkey,
    /// Supply matched peer-to-peer, scaled by the P2P supply index
    pub scaled_p2p_supply: u128,
    /// Supply on the pool, scaled by the pool supply index
    pub scaled_pool_supply: u128,
    /// Debt matched peer-to-peer, scaled by the P2P borrow index
    pub scaled_p2p_borrow: u128,
    /// Debt on the pool, scaled by the pool borrow index
    pub scaled_pool_borrow: u128,
    /// Collateral on the pool, scaled by the pool supply index
    pub scaled_collateral: u128,
}

/// A user's balances on one market, in underlying units
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserBalances {
    pub supply_in_p2p: u128,
    pub supply_on_pool: u128,
    pub total_supply: u128,
    pub borrow_in_p2p: u128,
    pub borrow_on_pool: u128,
    pub total_borrow: u128,
    pub collateral: u128,
}

/// Rates per year experienced by a user on one market (in ray)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserRates {
    pub supply_rate: u128,
    pub borrow_rate: u128,
}

impl UserPosition {
    /// (in P2P, on pool) supply balances, rounded down
    pub fn supply_balances(&self, market: &Market) -> Result<(U256, U256)> {
        let in_p2p = ray_mul(
            U256::from(self.scaled_p2p_supply),
            U256::from(market.indexes.supply.p2p_index),
        )?;
        let on_pool = ray_mul(
            U256::from(self.scaled_pool_supply),
            U256::from(market.indexes.supply.pool_index),
        )?;
        Ok((in_p2p, on_pool))
    }

    /// (in P2P, on pool) debt balances, rounded up
    pub fn borrow_balances(&self, market: &Market) -> Result<(U256, U256)> {
        let in_p2p = ray_mul_up(
            U256::from(self.scaled_p2p_borrow),
            U256::from(market.indexes.borrow.p2p_index),
        )?;
        let on_pool = ray_mul_up(
            U256::from(self.scaled_pool_borrow),
            U256::from(market.indexes.borrow.pool_index),
        )?;
        Ok((in_p2p, on_pool))
    }

    /// Collateral balance, rounded down
    pub fn collateral_balance(&self, market: &Market) -> Result<U256> {
        ray_mul(
            U256::from(self.scaled_collateral),
            U256::from(market.indexes.supply.pool_index),
        )
    }

    /// Total debt balance, rounded up
    pub fn total_borrow_balance(&self, market: &Market) -> Result<U256> {
        let (in_p2p, on_pool) = self.borrow_balances(market)?;
        in_p2p
            .checked_add(on_pool)
            .ok_or(ErrorCode::MathOverflow.into())
    }

    pub fn balances(&self, market: &Market) -> Result<UserBalances> {
        let (supply_in_p2p, supply_on_pool) = self.supply_balances(market)?;
        let (borrow_in_p2p, borrow_on_pool) = self.borrow_balances(market)?;
        let total_supply = supply_in_p2p
            .checked_add(supply_on_pool)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_borrow = borrow_in_p2p
            .checked_add(borrow_on_pool)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(UserBalances {
            supply_in_p2p: supply_in_p2p.try_to_u128()?,
            supply_on_pool: supply_on_pool.try_to_u128()?,
            total_supply: total_supply.try_to_u128()?,
            borrow_in_p2p: borrow_in_p2p.try_to_u128()?,
            borrow_on_pool: borrow_on_pool.try_to_u128()?,
            total_borrow: total_borrow.try_to_u128()?,
            collateral: self.collateral_balance(market)?.try_to_u128()?,
        })
    }

    /// Supply rate per year experienced by the user (in ray)
    pub fn supply_rate(&self, market: &Market, pool_reserve: &PoolReserve) -> Result<U256> {
        let (in_p2p, on_pool) = self.supply_balances(market)?;
        compute_weighted_rate(
            market.p2p_supply_rate(pool_reserve)?,
            pool_reserve.supply_rate(),
            in_p2p,
            on_pool,
        )
    }

    /// Borrow rate per year experienced by the user (in ray)
    pub fn borrow_rate(&self, market: &Market, pool_reserve: &PoolReserve) -> Result<U256> {
        let (in_p2p, on_pool) = self.borrow_balances(market)?;
        compute_weighted_rate(
            market.p2p_borrow_rate(pool_reserve)?,
            pool_reserve.borrow_rate(),
            in_p2p,
            on_pool,
        )
    }

    pub fn rates(&self, market: &Market, pool_reserve: &PoolReserve) -> Result<UserRates> {
        Ok(UserRates {
            supply_rate: self.supply_rate(market, pool_reserve)?.try_to_u128()?,
            borrow_rate: self.borrow_rate(market, pool_reserve)?.try_to_u128()?,
        })
    }
}
