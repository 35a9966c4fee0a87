use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod math;
pub mod rates;
pub mod safe_math;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;
pub use utils::*;

declare_id!("GGEtbB3GcEdho91U3SWC4pv5J4KQDcZJ9t47deioKZEJ");

#[program]
pub mod p2p_lens {
    use super::*;

    pub fn init_lens_config(ctx: Context<LensConfigInit>, sources: LensSources) -> Result<()> {
        msg!("Instruction: init_lens_config");
        handle_init_lens_config(ctx, sources)
    }

    pub fn set_lens_config(
        ctx: Context<LensConfigSet>,
        new_admin: Pubkey,
        sources: LensSources,
    ) -> Result<()> {
        msg!("Instruction: set_lens_config");
        handle_set_lens_config(ctx, new_admin, sources)
    }

    pub fn get_market_rates(ctx: Context<MarketQuery>) -> Result<MarketRates> {
        msg!("Instruction: get_market_rates");
        handle_get_market_rates(ctx)
    }

    pub fn get_market_amounts(ctx: Context<MarketAmountsQuery>) -> Result<MarketAmounts> {
        msg!("Instruction: get_market_amounts");
        handle_get_market_amounts(ctx)
    }

    pub fn get_user_balances(ctx: Context<UserQuery>, user: Pubkey) -> Result<UserBalances> {
        msg!("Instruction: get_user_balances");
        handle_get_user_balances(ctx, user)
    }

    pub fn get_user_rates(ctx: Context<UserQuery>, user: Pubkey) -> Result<UserRates> {
        msg!("Instruction: get_user_rates");
        handle_get_user_rates(ctx, user)
    }

    pub fn get_total_supply<'info>(
        ctx: Context<'_, '_, 'info, 'info, TotalsQuery<'info>>,
    ) -> Result<MarketTotals> {
        msg!("Instruction: get_total_supply");
        handle_get_total_supply(ctx)
    }

    pub fn get_total_borrow<'info>(
        ctx: Context<'_, '_, 'info, 'info, TotalsQuery<'info>>,
    ) -> Result<MarketTotals> {
        msg!("Instruction: get_total_borrow");
        handle_get_total_borrow(ctx)
    }

    pub fn get_user_health_factor<'info>(
        ctx: Context<'_, '_, 'info, 'info, HealthFactorQuery<'info>>,
        user: Pubkey,
    ) -> Result<LiquidityData> {
        msg!("Instruction: get_user_health_factor");
        handle_get_user_health_factor(ctx, user)
    }
}
