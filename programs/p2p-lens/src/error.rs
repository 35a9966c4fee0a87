use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("MathOverflow")]
    MathOverflow,

    #[msg("Zero division error")]
    ZeroDivisionError,

    #[msg("Invalid Argument")]
    InvalidArgument,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Program is not the owner of the account")]
    ProgramNotAccountOwner,

    #[msg("Invalid account input")]
    InvalidAccountInput,

    #[msg("Snapshot is older than the configured maximum age")]
    StaleSnapshot,

    #[msg("Invalid Config")]
    InvalidConfig,
}
