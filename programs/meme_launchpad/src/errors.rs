use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // validation
    #[msg("Name cannot be empty")]
    EmptyName,
    #[msg("Symbol cannot be empty")]
    EmptySymbol,
    #[msg("Name is too long (max 32 bytes)")]
    NameTooLong,
    #[msg("Symbol is too long (max 10 bytes)")]
    SymbolTooLong,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Invalid launchpad configuration")]
    InvalidConfig,

    // funds
    #[msg("Insufficient creation fee")]
    InsufficientFee,
    #[msg("Insufficient payment for requested amount")]
    InsufficientPayment,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Fee pool cannot cover payout")]
    InsufficientPoolFunds,
    #[msg("No seed liquidity to withdraw")]
    NoSeedLiquidity,

    // capacity
    #[msg("Exceeds max supply")]
    ExceedsMaxSupply,
    #[msg("Cannot sell more than total sold")]
    InsufficientSoldUnits,

    // authorization
    #[msg("Not owner")]
    NotOwner,

    // registry
    #[msg("Token not found or inactive")]
    UnknownToken,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

/// Broad failure classes a client can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Funds,
    Capacity,
    Authorization,
    Registry,
    Arithmetic,
}

impl LaunchpadError {
    pub fn kind(&self) -> ErrorKind {
        use LaunchpadError::*;
        match self {
            EmptyName | EmptySymbol | NameTooLong | SymbolTooLong | ZeroAmount | InvalidConfig => {
                ErrorKind::Validation
            }
            InsufficientFee | InsufficientPayment | InsufficientBalance | InsufficientPoolFunds
            | NoSeedLiquidity => ErrorKind::Funds,
            ExceedsMaxSupply | InsufficientSoldUnits => ErrorKind::Capacity,
            NotOwner => ErrorKind::Authorization,
            UnknownToken => ErrorKind::Registry,
            ArithmeticOverflow => ErrorKind::Arithmetic,
        }
    }
}
