use anchor_lang::prelude::*;

/// Every launched mint, in creation order. Entries are never removed.
#[account]
#[derive(Debug, Default)]
pub struct TokenRegistry {
    pub tokens: Vec<Pubkey>,
    pub bump: u8,
}

impl TokenRegistry {
    /// Account size (without discriminator) holding `len` mints.
    pub fn space_for(len: usize) -> usize {
        4 + len * 32 + 1
    }

    pub fn register(&mut self, mint: Pubkey) -> u64 {
        self.tokens.push(mint);
        (self.tokens.len() - 1) as u64
    }

    pub fn page(&self, start: u32, limit: u8) -> Vec<Pubkey> {
        self.tokens
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .copied()
            .collect()
    }
}
