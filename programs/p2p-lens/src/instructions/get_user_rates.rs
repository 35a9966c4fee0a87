use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::SnapshotLoader;

use super::UserQuery;

pub fn handle_get_user_rates(ctx: Context<UserQuery>, user: Pubkey) -> Result<UserRates> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let market = loader.market(&ctx.accounts.market)?;
    let position = loader.user_position(&ctx.accounts.user_position, ctx.accounts.market.key, &user)?;
    let pool_reserve = loader.pool_reserve(&ctx.accounts.pool_reserve, &market)?;

    let rates = position.rates(&market, &pool_reserve)?;
    msg!("supply_rate: {}", rates.supply_rate);
    msg!("borrow_rate: {}", rates.borrow_rate);
    Ok(rates)
}
