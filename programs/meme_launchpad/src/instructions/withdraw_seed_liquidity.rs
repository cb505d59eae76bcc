use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::state::GlobalState;

/// # Withdraw Seed Liquidity Instruction
///
/// Hands the DEX seeding portion of past liquidity provisions to the factory
/// owner, who creates the DEX pools with it. The locked portion has its own
/// vault and no instruction can move it.
#[derive(Accounts)]
pub struct WithdrawSeedLiquidity<'info> {
    /// The factory owner, acting as the DEX migrator
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [SEED_VAULT_SEED],
        bump = global_state.seed_vault_bump,
    )]
    pub seed_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawSeedLiquidity<'info> {
    pub fn withdraw_seed_liquidity(&mut self) -> Result<()> {
        self.global_state.ensure_owner(&self.owner.key())?;

        let lamports = self.seed_vault.lamports();
        require!(lamports > 0, LaunchpadError::NoSeedLiquidity);

        let seeds = &[SEED_VAULT_SEED, &[self.global_state.seed_vault_bump]];
        let signer_seeds = &[&seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.seed_vault.to_account_info(),
                    to: self.owner.to_account_info(),
                },
                signer_seeds,
            ),
            lamports,
        )?;

        msg!("Withdrew {} lamports of seed liquidity", lamports);

        emit!(SeedLiquidityWithdrawn {
            owner: self.owner.key(),
            amount: lamports,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

#[event]
pub struct SeedLiquidityWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
