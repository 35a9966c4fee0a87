use anchor_lang::prelude::*;
use crate::state::*;

/// Lens configuration context
#[derive(Accounts)]
pub struct LensConfigInit<'info> {
    #[account(init,
        payer = signer,
        space = LensConfig::INIT_SPACE + 8,
        seeds = [LENS_CONFIG_SEED],
        bump)]
    pub lens_config: Account<'info, LensConfig>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_init_lens_config(ctx: Context<LensConfigInit>, sources: LensSources) -> Result<()> {
    let lens_config = &mut ctx.accounts.lens_config;
    let signer = &ctx.accounts.signer;

    lens_config.init(InitLensConfigParams {
        bump_seed: ctx.bumps.lens_config,
        admin: signer.key(),
        sources,
    })?;

    msg!("Lens configured, admin {}", lens_config.admin);
    Ok(())
}
