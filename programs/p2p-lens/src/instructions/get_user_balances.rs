use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::SnapshotLoader;

/// User position query context
#[derive(Accounts)]
pub struct UserQuery<'info> {
    #[account(seeds = [LENS_CONFIG_SEED], bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,

    /// CHECK: owner and discriminator checked on load
    pub market: UncheckedAccount<'info>,

    /// CHECK: owner, discriminator, market and user checked on load
    pub user_position: UncheckedAccount<'info>,

    /// CHECK: owner, discriminator and market reference checked on load
    pub pool_reserve: UncheckedAccount<'info>,
}

pub fn handle_get_user_balances(ctx: Context<UserQuery>, user: Pubkey) -> Result<UserBalances> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let market = loader.market(&ctx.accounts.market)?;
    let position = loader.user_position(&ctx.accounts.user_position, ctx.accounts.market.key, &user)?;

    position.balances(&market)
}
