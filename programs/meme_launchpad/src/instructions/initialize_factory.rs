use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::state::{GlobalState, LaunchpadConfig, TokenRegistry};

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// Becomes the factory owner and platform fee recipient.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(init,
    payer = payer,
    space = 8 + GlobalState::INIT_SPACE,
    seeds = [GLOBAL_STATE_SEED],
    bump,
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(init,
    payer = payer,
    space = 8 + TokenRegistry::space_for(0),
    seeds = [TOKEN_REGISTRY_SEED],
    bump,
    )]
    pub token_registry: Account<'info, TokenRegistry>,

    /// Holds trade proceeds until they are provided as liquidity.
    #[account(
        mut,
        seeds = [FEE_POOL_SEED],
        bump,
    )]
    pub fee_pool: SystemAccount<'info>,

    #[account(
        seeds = [LIQUIDITY_LOCK_SEED],
        bump,
    )]
    pub liquidity_lock: SystemAccount<'info>,

    #[account(
        seeds = [SEED_VAULT_SEED],
        bump,
    )]
    pub seed_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFactory<'info> {
    pub fn initialize_factory(&mut self, config: LaunchpadConfig, bumps: InitializeFactoryBumps) -> Result<()> {
        config.validate()?;
        let rent_floor = Rent::get()?.minimum_balance(0);
        config.ensure_rent_exempt_vaults(rent_floor)?;

        self.global_state.set_inner(GlobalState {
            owner: self.payer.key(),
            config,
            total_tokens_created: 0,
            total_fees_collected: 0,
            pending_liquidity: 0,
            total_liquidity_locked: 0,
            total_liquidity_seeded: 0,
            last_liquidity_provision: 0,
            bump: bumps.global_state,
            fee_pool_bump: bumps.fee_pool,
            liquidity_lock_bump: bumps.liquidity_lock,
            seed_vault_bump: bumps.seed_vault,
        });

        self.token_registry.set_inner(TokenRegistry {
            tokens: Vec::new(),
            bump: bumps.token_registry,
        });

        // keep the pool rent exempt so small buys can always land in it;
        // pending_liquidity never counts these lamports
        let top_up = rent_floor.saturating_sub(self.fee_pool.lamports());
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.payer.to_account_info(),
                        to: self.fee_pool.to_account_info(),
                    },
                ),
                top_up,
            )?;
        }

        msg!(
            "Launchpad initialized: fee {} lamports, threshold {} lamports",
            config.creation_fee,
            config.liquidity_threshold
        );

        Ok(())
    }
}
