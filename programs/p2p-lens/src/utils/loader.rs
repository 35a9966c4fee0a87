use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use solana_program::clock::Slot;
use crate::error::ErrorCode;
use crate::state::{LastUpdate, LensConfig, Market, PoolReserve, PriceFeed, UserPosition};

/// Deserialize an account owned by another program, checking its owner first.
/// The discriminator is checked by `try_deserialize`.
pub fn load_external<T: AccountDeserialize>(info: &AccountInfo, expected_owner: &Pubkey) -> Result<T> {
    if info.owner != expected_owner {
        msg!("Account {} is not owned by {}", info.key(), expected_owner);
        return Err(ErrorCode::ProgramNotAccountOwner.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Reject snapshots older than `max_age_slots`
pub fn require_fresh(last_update: &LastUpdate, current_slot: Slot, max_age_slots: u64) -> Result<()> {
    if last_update.is_stale(current_slot, max_age_slots) {
        msg!(
            "Snapshot from slot {} is older than {} slots at slot {}",
            last_update.slot,
            max_age_slots,
            current_slot
        );
        return Err(ErrorCode::StaleSnapshot.into());
    }
    Ok(())
}

/// Loads the snapshots of the source programs named by the lens configuration
/// and checks that they reference each other.
pub struct SnapshotLoader<'a> {
    pub lens_config: &'a LensConfig,
    pub current_slot: Slot,
}

impl<'a> SnapshotLoader<'a> {
    pub fn new(lens_config: &'a LensConfig, current_slot: Slot) -> Self {
        Self { lens_config, current_slot }
    }

    pub fn market(&self, info: &AccountInfo) -> Result<Market> {
        let market: Market = load_external(info, &self.lens_config.overlay_program)?;
        require_fresh(&market.last_update, self.current_slot, self.lens_config.max_snapshot_age_slots)?;
        Ok(market)
    }

    pub fn pool_reserve(&self, info: &AccountInfo, market: &Market) -> Result<PoolReserve> {
        require_keys_eq!(info.key(), market.pool_reserve, ErrorCode::InvalidAccountInput);
        let pool_reserve: PoolReserve = load_external(info, &self.lens_config.pool_program)?;
        require_keys_eq!(pool_reserve.mint, market.underlying_mint, ErrorCode::InvalidAccountInput);
        Ok(pool_reserve)
    }

    pub fn price_feed(&self, info: &AccountInfo, market: &Market) -> Result<PriceFeed> {
        let price_feed: PriceFeed = load_external(info, &self.lens_config.oracle_program)?;
        require_keys_eq!(price_feed.mint, market.underlying_mint, ErrorCode::InvalidAccountInput);
        require_fresh(&price_feed.last_update, self.current_slot, self.lens_config.max_snapshot_age_slots)?;
        Ok(price_feed)
    }

    /// Decimals of the market's underlying mint
    pub fn decimals(&self, info: &AccountInfo, market: &Market) -> Result<u8> {
        require_keys_eq!(info.key(), market.underlying_mint, ErrorCode::InvalidAccountInput);
        let mint: Mint = load_external(info, &anchor_spl::token::ID)?;
        Ok(mint.decimals)
    }

    pub fn user_position(&self, info: &AccountInfo, market_key: &Pubkey, user: &Pubkey) -> Result<UserPosition> {
        let position: UserPosition = load_external(info, &self.lens_config.overlay_program)?;
        require_keys_eq!(position.market, *market_key, ErrorCode::InvalidAccountInput);
        require_keys_eq!(position.owner, *user, ErrorCode::InvalidAccountInput);
        Ok(position)
    }
}
