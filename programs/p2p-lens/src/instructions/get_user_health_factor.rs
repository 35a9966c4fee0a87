use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::*;
use crate::utils::*;

/// Number of remaining accounts describing one position: market, user position, pool reserve, price feed, mint
pub const POSITION_ACCOUNTS_LEN: usize = 5;

/// User liquidity query context
#[derive(Accounts)]
pub struct HealthFactorQuery<'info> {
    #[account(seeds = [LENS_CONFIG_SEED], bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,
    // Remaining accounts: [market, user_position, pool_reserve, price_feed, mint] for every market the user is in
}

struct PricedPosition {
    market: Market,
    position: UserPosition,
    pool_reserve: PoolReserve,
    price_feed: PriceFeed,
    decimals: u8,
}

pub fn handle_get_user_health_factor<'info>(
    ctx: Context<'_, '_, 'info, 'info, HealthFactorQuery<'info>>,
    user: Pubkey,
) -> Result<LiquidityData> {
    msg!("Computing liquidity of {}", user);
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let remaining_accounts = ctx.remaining_accounts;

    require!(
        remaining_accounts.len() % POSITION_ACCOUNTS_LEN == 0,
        ErrorCode::InvalidAccountInput
    );

    let mut seen: Vec<Pubkey> = Vec::with_capacity(remaining_accounts.len() / POSITION_ACCOUNTS_LEN);
    let mut positions = Vec::with_capacity(seen.capacity());
    for accounts in remaining_accounts.chunks(POSITION_ACCOUNTS_LEN) {
        let market_info = &accounts[0];
        if seen.contains(market_info.key) {
            msg!("Market {} passed twice", market_info.key());
            return Err(ErrorCode::InvalidAccountInput.into());
        }
        seen.push(market_info.key());

        let market = loader.market(market_info)?;
        let position = loader.user_position(&accounts[1], market_info.key, &user)?;
        let pool_reserve = loader.pool_reserve(&accounts[2], &market)?;
        let price_feed = loader.price_feed(&accounts[3], &market)?;
        let decimals = loader.decimals(&accounts[4], &market)?;

        positions.push(PricedPosition { market, position, pool_reserve, price_feed, decimals });
    }

    let data = liquidity_data(positions.iter().map(|priced| PositionValuation {
        market: &priced.market,
        position: &priced.position,
        pool_reserve: &priced.pool_reserve,
        price_feed: &priced.price_feed,
        decimals: priced.decimals,
    }))?;
    msg!("debt: {}", data.debt);
    msg!("health_factor: {}", data.health_factor);
    Ok(data)
}
