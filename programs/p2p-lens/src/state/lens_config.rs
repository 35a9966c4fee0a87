use super::*;
use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// Seed of the lens configuration PDA
pub const LENS_CONFIG_SEED: &[u8] = b"lens-config";

/// Lens configuration state
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct LensConfig {
    /// Version of the lens configuration
    pub version: u8,
    /// Bump seed for the configuration PDA
    pub bump_seed: u8,
    /// Authority which can update the configuration
    pub admin: Pubkey,
    /// Program owning the overlay markets and user positions
    pub overlay_program: Pubkey,
    /// Program owning the underlying pool reserves
    pub pool_program: Pubkey,
    /// Program owning the price feeds
    pub oracle_program: Pubkey,
    /// Maximum age of a market or price snapshot, in slots. Zero disables the check.
    pub max_snapshot_age_slots: u64,
}

impl LensConfig {
    /// Create a new lens configuration
    pub fn new(params: InitLensConfigParams) -> Result<Self> {
        let mut lens_config = Self::default();
        Self::init(&mut lens_config, params)?;
        Ok(lens_config)
    }

    /// Initialize a lens configuration
    pub fn init(&mut self, params: InitLensConfigParams) -> Result<()> {
        self.version = PROGRAM_VERSION;
        self.bump_seed = params.bump_seed;
        self.admin = params.admin;
        self.set_sources(params.sources)
    }

    /// Point the lens at a new set of source programs
    pub fn set_sources(&mut self, sources: LensSources) -> Result<()> {
        sources.validate()?;
        self.overlay_program = sources.overlay_program;
        self.pool_program = sources.pool_program;
        self.oracle_program = sources.oracle_program;
        self.max_snapshot_age_slots = sources.max_snapshot_age_slots;
        Ok(())
    }

    /// Hand the configuration over to a new admin
    pub fn set_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::InvalidArgument);
        self.admin = new_admin;
        Ok(())
    }
}

/// Source programs read by the lens
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LensSources {
    pub overlay_program: Pubkey,
    pub pool_program: Pubkey,
    pub oracle_program: Pubkey,
    pub max_snapshot_age_slots: u64,
}

impl LensSources {
    pub fn validate(&self) -> Result<()> {
        let default = Pubkey::default();
        if self.overlay_program == default
            || self.pool_program == default
            || self.oracle_program == default
        {
            msg!("Source programs must be set");
            return Err(ErrorCode::InvalidConfig.into());
        }
        Ok(())
    }
}

/// Initialize a lens configuration
pub struct InitLensConfigParams {
    /// Bump seed for the configuration PDA
    pub bump_seed: u8,
    /// Authority which can update the configuration
    pub admin: Pubkey,
    /// Source programs read by the lens
    pub sources: LensSources,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> LensSources {
        LensSources {
            overlay_program: Pubkey::new_unique(),
            pool_program: Pubkey::new_unique(),
            oracle_program: Pubkey::new_unique(),
            max_snapshot_age_slots: 150,
        }
    }

    #[test]
    fn init_sets_version_and_sources() {
        let admin = Pubkey::new_unique();
        let sources = sources();
        let lens_config = LensConfig::new(InitLensConfigParams {
            bump_seed: 254,
            admin,
            sources,
        })
        .unwrap();
        assert_eq!(lens_config.version, PROGRAM_VERSION);
        assert_eq!(lens_config.admin, admin);
        assert_eq!(lens_config.overlay_program, sources.overlay_program);
        assert_eq!(lens_config.max_snapshot_age_slots, 150);
    }

    #[test]
    fn unset_source_program_is_rejected() {
        let sources = LensSources {
            pool_program: Pubkey::default(),
            ..sources()
        };
        let result = LensConfig::new(InitLensConfigParams {
            bump_seed: 254,
            admin: Pubkey::new_unique(),
            sources,
        });
        assert_eq!(result.unwrap_err(), ErrorCode::InvalidConfig.into());
    }

    #[test]
    fn admin_cannot_be_cleared() {
        let mut lens_config = LensConfig::default();
        let new_admin = Pubkey::new_unique();
        lens_config.set_admin(new_admin).unwrap();
        assert_eq!(lens_config.admin, new_admin);
        assert_eq!(
            lens_config.set_admin(Pubkey::default()).unwrap_err(),
            ErrorCode::InvalidArgument.into()
        );
        assert_eq!(lens_config.admin, new_admin);
    }
}
