use anchor_lang::prelude::*;
use anchor_spl::token_interface::{burn, mint_to, Burn, Mint, MintTo, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::state::{BondingCurve, GlobalState, TokenInfo};

/// Owner-gated mint and burn on a token's curve reserve.
#[derive(Accounts)]
pub struct ManageSupply<'info> {
    /// Must be the factory owner
    pub owner: Signer<'info>,

    /// Holds the owner key
    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    /// Mint and burn authority over the reserve
    #[account(
        seeds = [BONDING_CURVE_SEED, token_mint.key().as_ref()],
        bump = bonding_curve.bump,
        has_one = token_mint,
    )]
    pub bonding_curve: Account<'info, BondingCurve>,

    /// Unsold supply, owned by the bonding curve
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub curve_reserve: InterfaceAccount<'info, TokenAccount>,

    /// Mint whose supply changes
    #[account(mut)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// SPL Token or Token-2022
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ManageSupply<'info> {
    pub fn mint_supply(&mut self, amount: u64) -> Result<()> {
        self.global_state.ensure_owner(&self.owner.key())?;
        require!(amount > 0, LaunchpadError::ZeroAmount);

        let token_mint_key = self.token_mint.key();
        let seeds = &[
            BONDING_CURVE_SEED,
            token_mint_key.as_ref(),
            &[self.bonding_curve.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.token_mint.to_account_info(),
                    to: self.curve_reserve.to_account_info(),
                    authority: self.bonding_curve.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Minted {} units of {} into the curve reserve", amount, token_mint_key);
        Ok(())
    }

    /// Burns from the reserve. Units the curve can still sell are kept.
    pub fn burn_supply(&mut self, amount: u64) -> Result<()> {
        self.global_state.ensure_owner(&self.owner.key())?;
        self.bonding_curve
            .ensure_burnable(self.curve_reserve.amount, amount)?;

        let token_mint_key = self.token_mint.key();
        let seeds = &[
            BONDING_CURVE_SEED,
            token_mint_key.as_ref(),
            &[self.bonding_curve.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        burn(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.token_mint.to_account_info(),
                    from: self.curve_reserve.to_account_info(),
                    authority: self.bonding_curve.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Burned {} units of {} from the curve reserve", amount, token_mint_key);
        Ok(())
    }
}

/// Owner-gated switch that stops a token from trading.
#[derive(Accounts)]
pub struct DeactivateToken<'info> {
    /// Must be the factory owner
    pub owner: Signer<'info>,

    /// Holds the owner key
    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    /// Registry entry whose active flag is cleared
    #[account(
        mut,
        seeds = [TOKEN_INFO_SEED, token_info.token_mint.as_ref()],
        bump = token_info.bump,
    )]
    pub token_info: Account<'info, TokenInfo>,
}

impl<'info> DeactivateToken<'info> {
    pub fn deactivate_token(&mut self) -> Result<()> {
        self.global_state.ensure_owner(&self.owner.key())?;
        self.token_info.deactivate()?;

        emit!(TokenDeactivated {
            token_mint: self.token_info.token_mint,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

#[event]
pub struct TokenDeactivated {
    pub token_mint: Pubkey,
    pub timestamp: i64,
}
