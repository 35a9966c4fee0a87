use anchor_lang::prelude::*;
use crate::math::U256;

/// Underlying pool reserve, owned by the pool program. The lens only reads it.
#[account]
#[derive(Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PoolReserve {
    /// Underlying asset mint
    pub mint: Pubkey,
    /// Current pool supply rate per year (in ray)
    pub liquidity_rate: u128,
    /// Current pool variable borrow rate per year (in ray)
    pub variable_borrow_rate: u128,
    /// Loan to value of the asset as collateral (in percent)
    pub ltv: u16,
    /// Liquidation threshold of the asset as collateral (in percent)
    pub liquidation_threshold: u16,
}

impl PoolReserve {
    /// Pool supply rate per year (in ray)
    pub fn supply_rate(&self) -> U256 {
        U256::from(self.liquidity_rate)
    }

    /// Pool borrow rate per year (in ray)
    pub fn borrow_rate(&self) -> U256 {
        U256::from(self.variable_borrow_rate)
    }
}
