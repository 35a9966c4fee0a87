use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::ErrorCode;

/// Lens configuration context
#[derive(Accounts)]
pub struct LensConfigSet<'info> {
    #[account(mut,
        seeds = [LENS_CONFIG_SEED],
        bump = lens_config.bump_seed)]
    pub lens_config: Account<'info, LensConfig>,

    pub signer: Signer<'info>,
}

pub fn handle_set_lens_config(
    ctx: Context<LensConfigSet>,
    new_admin: Pubkey,
    sources: LensSources,
) -> Result<()> {
    let lens_config = &mut ctx.accounts.lens_config;
    let signer = &ctx.accounts.signer;

    require_keys_eq!(signer.key(), lens_config.admin, ErrorCode::Unauthorized);

    lens_config.set_sources(sources)?;
    lens_config.set_admin(new_admin)?;

    msg!("Lens admin set to {}", new_admin);
    Ok(())
}
