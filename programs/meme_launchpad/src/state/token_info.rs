use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH};
use crate::errors::LaunchpadError;

/// Registry entry for a launched token.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    pub token_mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub creator: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    pub creation_time: i64,
    /// position in the token registry
    pub index: u64,
    pub is_active: bool,
    pub bump: u8,
}

impl TokenInfo {
    pub fn validate_metadata(name: &str, symbol: &str) -> Result<()> {
        require!(!name.is_empty(), LaunchpadError::EmptyName);
        require!(!symbol.is_empty(), LaunchpadError::EmptySymbol);
        require!(name.len() <= MAX_NAME_LENGTH, LaunchpadError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LENGTH, LaunchpadError::SymbolTooLong);
        Ok(())
    }

    pub fn ensure_tradable(&self) -> Result<()> {
        require!(self.is_active, LaunchpadError::UnknownToken);
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<()> {
        self.ensure_tradable()?;
        self.is_active = false;
        Ok(())
    }
}
