use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::*;
use crate::utils::*;

/// Number of remaining accounts describing one market: market, pool reserve, price feed, mint
pub const MARKET_ACCOUNTS_LEN: usize = 4;

/// Cross-market query context
#[derive(Accounts)]
pub struct TotalsQuery<'info> {
    #[account(seeds = [LENS_CONFIG_SEED], bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,
    // Remaining accounts: [market, pool_reserve, price_feed, mint] for every market to include
}

struct PricedMarket {
    market: Market,
    price_feed: PriceFeed,
    decimals: u8,
}

fn load_priced_markets(loader: &SnapshotLoader, remaining_accounts: &[AccountInfo]) -> Result<Vec<PricedMarket>> {
    require!(
        remaining_accounts.len() % MARKET_ACCOUNTS_LEN == 0,
        ErrorCode::InvalidAccountInput
    );

    let mut seen: Vec<Pubkey> = Vec::with_capacity(remaining_accounts.len() / MARKET_ACCOUNTS_LEN);
    let mut priced_markets = Vec::with_capacity(seen.capacity());
    for accounts in remaining_accounts.chunks(MARKET_ACCOUNTS_LEN) {
        let market_info = &accounts[0];
        if seen.contains(market_info.key) {
            msg!("Market {} passed twice", market_info.key());
            return Err(ErrorCode::InvalidAccountInput.into());
        }
        seen.push(market_info.key());

        let market = loader.market(market_info)?;
        loader.pool_reserve(&accounts[1], &market)?;
        let price_feed = loader.price_feed(&accounts[2], &market)?;
        let decimals = loader.decimals(&accounts[3], &market)?;

        priced_markets.push(PricedMarket { market, price_feed, decimals });
    }
    Ok(priced_markets)
}

fn valuations(priced_markets: &[PricedMarket]) -> impl Iterator<Item = MarketValuation<'_>> {
    priced_markets.iter().map(|priced| MarketValuation {
        market: &priced.market,
        price_feed: &priced.price_feed,
        decimals: priced.decimals,
    })
}

pub fn handle_get_total_supply<'info>(
    ctx: Context<'_, '_, 'info, 'info, TotalsQuery<'info>>,
) -> Result<MarketTotals> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let priced_markets = load_priced_markets(&loader, ctx.remaining_accounts)?;

    let totals = total_supply(valuations(&priced_markets))?;
    msg!("total_supply: {}", totals.total);
    Ok(totals)
}

pub fn handle_get_total_borrow<'info>(
    ctx: Context<'_, '_, 'info, 'info, TotalsQuery<'info>>,
) -> Result<MarketTotals> {
    let loader = SnapshotLoader::new(&ctx.accounts.lens_config, Clock::get()?.slot);
    let priced_markets = load_priced_markets(&loader, ctx.remaining_accounts)?;

    let totals = total_borrow(valuations(&priced_markets))?;
    msg!("total_borrow: {}", totals.total);
    Ok(totals)
}
