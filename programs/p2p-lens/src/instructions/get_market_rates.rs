use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::SnapshotLoader;

/// Single market query context
#[derive(Accounts)]
pub struct MarketQuery<'info> {
    #[account(seeds = [LENS_CONFIG_SEED], bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,

    /// CHECK: owner and discriminator checked on load
    pub market: UncheckedAccount<'info>,

    /// CHECK: owner, discriminator and market reference checked on load
    pub pool_reserve: UncheckedAccount<'info>,
}

pub fn handle_get_market_rates(ctx: Context<MarketQuery>) -> Result<MarketRates> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let market = loader.market(&ctx.accounts.market)?;
    let pool_reserve = loader.pool_reserve(&ctx.accounts.pool_reserve, &market)?;

    let rates = market.rates(&pool_reserve)?;
    msg!("p2p_supply_rate: {}", rates.p2p_supply_rate);
    msg!("p2p_borrow_rate: {}", rates.p2p_borrow_rate);
    Ok(rates)
}
