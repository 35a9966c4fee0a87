use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::SnapshotLoader;

#[derive(Accounts)]
pub struct MarketAmountsQuery<'info> {
    #[account(seeds = [LENS_CONFIG_SEED], bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,

    /// CHECK: owner and discriminator checked on load
    pub market: UncheckedAccount<'info>,
}

pub fn handle_get_market_amounts(ctx: Context<MarketAmountsQuery>) -> Result<MarketAmounts> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let market = loader.market(&ctx.accounts.market)?;

    market.market_amounts()
}
