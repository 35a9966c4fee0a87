use super::*;
use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::*;
use crate::rates::*;
use crate::safe_math::SafeMath;

/// Pool and peer-to-peer indexes of one market side (in ray)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct MarketSideIndexes {
    pub pool_index: u128,
    pub p2p_index: u128,
}

/// Supply and borrow indexes of a market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct MarketIndexes {
    pub supply: MarketSideIndexes,
    pub borrow: MarketSideIndexes,
}

/// Peer-to-peer accounting of one market side, in scaled units
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct MarketSideDelta {
    /// Scaled (by the pool index) liquidity matched on paper but resting on the pool
    pub scaled_delta: u128,
    /// Scaled (by the P2P index) total matched peer-to-peer
    pub scaled_p2p_total: u128,
}

/// Supply and borrow deltas of a market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Deltas {
    pub supply: MarketSideDelta,
    pub borrow: MarketSideDelta,
}

/// Overlay market state, owned by the overlay program. The lens only reads it.
#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Market {
    /// Version of the struct
    pub version: u8,
    /// Underlying asset mint
    pub underlying_mint: Pubkey,
    /// Pool reserve of the underlying asset
    pub pool_reserve: Pubkey,
    /// Current indexes
    pub indexes: MarketIndexes,
    /// Current deltas
    pub deltas: Deltas,
    /// Scaled (by the pool supply index) supply the overlay holds on the pool, delta included
    pub scaled_pool_supply: u128,
    /// Scaled (by the pool borrow index) debt the overlay owes the pool, delta included
    pub scaled_pool_borrow: u128,
    /// Supply neither matched nor on the pool, in underlying units
    pub idle_supply: u128,
    /// Protocol's cut of the P2P spread (in percent)
    pub reserve_factor: u16,
    /// Position of the P2P rate between the pool rates (in percent)
    pub p2p_index_cursor: u16,
    /// Last slot when indexes and deltas were updated
    pub last_update: LastUpdate,
}

/// Market amounts split by where the liquidity sits, in underlying units
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketAmounts {
    pub p2p_supply: u128,
    pub pool_supply: u128,
    pub idle_supply: u128,
    pub total_supply: u128,
    pub p2p_borrow: u128,
    pub pool_borrow: u128,
    pub total_borrow: u128,
}

/// Rates per year of a market (in ray)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketRates {
    pub pool_supply_rate: u128,
    pub pool_borrow_rate: u128,
    pub p2p_supply_rate: u128,
    pub p2p_borrow_rate: u128,
    pub average_supply_rate: u128,
    pub average_borrow_rate: u128,
}

impl Market {
    /// Total supplied peer-to-peer, delta included, in underlying units
    pub fn total_p2p_supplied(&self) -> Result<U256> {
        ray_mul(
            U256::from(self.deltas.supply.scaled_p2p_total),
            U256::from(self.indexes.supply.p2p_index),
        )
    }

    /// Share of the peer-to-peer supply sitting idle (in ray), capped at 100%
    pub fn proportion_idle(&self) -> Result<U256> {
        if self.idle_supply == 0 {
            return Ok(U256::zero());
        }
        let total_p2p_supplied = self.total_p2p_supplied()?;
        if total_p2p_supplied.is_zero() {
            return Ok(U256::zero());
        }
        Ok(ray_div_up(U256::from(self.idle_supply), total_p2p_supplied)?.min(ray()))
    }

    /// Inputs of the P2P supply rate computation
    pub fn supply_rate_params(&self, pool_reserve: &PoolReserve) -> Result<P2PRateComputeParams> {
        Ok(P2PRateComputeParams {
            pool_supply_rate_per_year: pool_reserve.supply_rate(),
            pool_borrow_rate_per_year: pool_reserve.borrow_rate(),
            pool_index: U256::from(self.indexes.supply.pool_index),
            p2p_index: U256::from(self.indexes.supply.p2p_index),
            proportion_idle: self.proportion_idle()?,
            p2p_delta: U256::from(self.deltas.supply.scaled_delta),
            p2p_amount: U256::from(self.deltas.supply.scaled_p2p_total),
            p2p_index_cursor: self.p2p_index_cursor,
            reserve_factor: self.reserve_factor,
        })
    }

    /// Inputs of the P2P borrow rate computation. There is no idle borrow.
    pub fn borrow_rate_params(&self, pool_reserve: &PoolReserve) -> P2PRateComputeParams {
        P2PRateComputeParams {
            pool_supply_rate_per_year: pool_reserve.supply_rate(),
            pool_borrow_rate_per_year: pool_reserve.borrow_rate(),
            pool_index: U256::from(self.indexes.borrow.pool_index),
            p2p_index: U256::from(self.indexes.borrow.p2p_index),
            proportion_idle: U256::zero(),
            p2p_delta: U256::from(self.deltas.borrow.scaled_delta),
            p2p_amount: U256::from(self.deltas.borrow.scaled_p2p_total),
            p2p_index_cursor: self.p2p_index_cursor,
            reserve_factor: self.reserve_factor,
        }
    }

    /// P2P supply rate per year experienced by a P2P supplier (in ray)
    pub fn p2p_supply_rate(&self, pool_reserve: &PoolReserve) -> Result<U256> {
        compute_p2p_supply_rate(&self.supply_rate_params(pool_reserve)?)
    }

    /// P2P borrow rate per year experienced by a P2P borrower (in ray)
    pub fn p2p_borrow_rate(&self, pool_reserve: &PoolReserve) -> Result<U256> {
        compute_p2p_borrow_rate(&self.borrow_rate_params(pool_reserve))
    }

    /// Supply actually matched peer-to-peer, in underlying units
    pub fn p2p_supply_amount(&self) -> Result<U256> {
        let delta = ray_mul(
            U256::from(self.deltas.supply.scaled_delta),
            U256::from(self.indexes.supply.pool_index),
        )?;
        Ok(self.total_p2p_supplied()?.zero_floor_sub(delta))
    }

    /// Supply the overlay holds on the pool, in underlying units
    pub fn pool_supply_amount(&self) -> Result<U256> {
        ray_mul(
            U256::from(self.scaled_pool_supply),
            U256::from(self.indexes.supply.pool_index),
        )
    }

    /// Debt actually matched peer-to-peer, in underlying units (rounded up)
    pub fn p2p_borrow_amount(&self) -> Result<U256> {
        let total_p2p_borrowed = ray_mul_up(
            U256::from(self.deltas.borrow.scaled_p2p_total),
            U256::from(self.indexes.borrow.p2p_index),
        )?;
        let delta = ray_mul_up(
            U256::from(self.deltas.borrow.scaled_delta),
            U256::from(self.indexes.borrow.pool_index),
        )?;
        Ok(total_p2p_borrowed.zero_floor_sub(delta))
    }

    /// Debt the overlay owes the pool, in underlying units (rounded up)
    pub fn pool_borrow_amount(&self) -> Result<U256> {
        ray_mul_up(
            U256::from(self.scaled_pool_borrow),
            U256::from(self.indexes.borrow.pool_index),
        )
    }

    /// Supply and borrow split of the market
    pub fn market_amounts(&self) -> Result<MarketAmounts> {
        let p2p_supply = self.p2p_supply_amount()?;
        let pool_supply = self.pool_supply_amount()?;
        let idle_supply = U256::from(self.idle_supply);
        let total_supply = p2p_supply
            .checked_add(pool_supply)
            .and_then(|v| v.checked_add(idle_supply))
            .ok_or(ErrorCode::MathOverflow)?;

        let p2p_borrow = self.p2p_borrow_amount()?;
        let pool_borrow = self.pool_borrow_amount()?;
        let total_borrow = p2p_borrow
            .checked_add(pool_borrow)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(MarketAmounts {
            p2p_supply: p2p_supply.try_to_u128()?,
            pool_supply: pool_supply.try_to_u128()?,
            idle_supply: self.idle_supply,
            total_supply: total_supply.try_to_u128()?,
            p2p_borrow: p2p_borrow.try_to_u128()?,
            pool_borrow: pool_borrow.try_to_u128()?,
            total_borrow: total_borrow.try_to_u128()?,
        })
    }

    /// Average supply rate per year over the market's P2P and pool supply (in ray).
    /// Delta and idle are already reflected in the amounts, so the P2P rate is taken without them.
    pub fn average_supply_rate(&self, pool_reserve: &PoolReserve) -> Result<U256> {
        let params = P2PRateComputeParams {
            p2p_delta: U256::zero(),
            proportion_idle: U256::zero(),
            ..self.supply_rate_params(pool_reserve)?
        };
        compute_weighted_rate(
            compute_p2p_supply_rate(&params)?,
            pool_reserve.supply_rate(),
            self.p2p_supply_amount()?,
            self.pool_supply_amount()?,
        )
    }

    /// Average borrow rate per year over the market's P2P and pool debt (in ray)
    pub fn average_borrow_rate(&self, pool_reserve: &PoolReserve) -> Result<U256> {
        let params = P2PRateComputeParams {
            p2p_delta: U256::zero(),
            ..self.borrow_rate_params(pool_reserve)
        };
        compute_weighted_rate(
            compute_p2p_borrow_rate(&params)?,
            pool_reserve.borrow_rate(),
            self.p2p_borrow_amount()?,
            self.pool_borrow_amount()?,
        )
    }

    pub fn rates(&self, pool_reserve: &PoolReserve) -> Result<MarketRates> {
        Ok(MarketRates {
            pool_supply_rate: pool_reserve.liquidity_rate,
            pool_borrow_rate: pool_reserve.variable_borrow_rate,
            p2p_supply_rate: self.p2p_supply_rate(pool_reserve)?.try_to_u128()?,
            p2p_borrow_rate: self.p2p_borrow_rate(pool_reserve)?.try_to_u128()?,
            average_supply_rate: self.average_supply_rate(pool_reserve)?.try_to_u128()?,
            average_borrow_rate: self.average_borrow_rate(pool_reserve)?.try_to_u128()?,
        })
    }
}
