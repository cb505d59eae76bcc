use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::*;
use crate::state::{BondingCurve, GlobalState, LiquiditySplit, TokenInfo};

/// Buys from or sells back to a token's bonding curve. Proceeds settle
/// against the shared fee pool.
#[derive(Accounts)]
pub struct TradeToken<'info> {
    /// Pays for buys and receives sell proceeds
    #[account(mut)]
    pub trader: Signer<'info>,

    /// Trader's holding of the token, created on first buy
    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = token_mint,
        associated_token::authority = trader,
        associated_token::token_program = token_program,
    )]
    pub trader_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Fee pool ledger and liquidity stats
    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Box<Account<'info, GlobalState>>,

    /// Registry entry, must be active
    #[account(
        seeds = [TOKEN_INFO_SEED, token_mint.key().as_ref()],
        bump = token_info.bump,
        has_one = bonding_curve,
    )]
    pub token_info: Box<Account<'info, TokenInfo>>,

    /// Curve state and reserve authority
    #[account(
        mut,
        seeds = [BONDING_CURVE_SEED, token_mint.key().as_ref()],
        bump = bonding_curve.bump,
        has_one = token_mint,
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,

    /// Unsold supply, owned by the bonding curve
    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub curve_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Lamport vault holding trade proceeds
    #[account(
        mut,
        seeds = [FEE_POOL_SEED],
        bump = global_state.fee_pool_bump,
    )]
    pub fee_pool: SystemAccount<'info>,

    /// Receives the locked share of a provision
    #[account(
        mut,
        seeds = [LIQUIDITY_LOCK_SEED],
        bump = global_state.liquidity_lock_bump,
    )]
    pub liquidity_lock: SystemAccount<'info>,

    /// Receives the DEX seed share of a provision
    #[account(
        mut,
        seeds = [SEED_VAULT_SEED],
        bump = global_state.seed_vault_bump,
    )]
    pub seed_vault: SystemAccount<'info>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,
    /// SPL Token or Token-2022
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> TradeToken<'info> {
    /// Buys `amount` units at the current curve price.
    ///
    /// `max_sol_cost` caps what the trader pays; the exact quote is charged,
    /// so overpayment is never taken.
    pub fn buy_tokens(&mut self, amount: u64, max_sol_cost: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let receipt = self.global_state.settle_buy(
            &self.token_info,
            &mut self.bonding_curve,
            amount,
            max_sol_cost,
            now,
        )?;
        let cost = receipt.lamports;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.trader.to_account_info(),
                    to: self.fee_pool.to_account_info(),
                },
            ),
            cost,
        )?;

        let token_mint_key = self.token_mint.key();
        let seeds = &[
            BONDING_CURVE_SEED,
            token_mint_key.as_ref(),
            &[self.bonding_curve.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let accounts = TransferChecked {
            from: self.curve_reserve.to_account_info(),
            mint: self.token_mint.to_account_info(),
            to: self.trader_token_account.to_account_info(),
            authority: self.bonding_curve.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(self.token_program.to_account_info(), accounts, signer_seeds);
        transfer_checked(cpi_ctx, amount, self.token_mint.decimals)?;

        msg!("Bought {} units of {} for {} lamports", amount, token_mint_key, cost);

        emit!(TokensBought {
            token_mint: token_mint_key,
            buyer: self.trader.key(),
            amount,
            cost,
            total_sold: self.bonding_curve.total_sold,
            pending_liquidity: self.global_state.pending_liquidity,
        });

        self.provide_liquidity(receipt.liquidity, now)
    }

    /// Sells `amount` units back to the curve and pays the trader out of the
    /// fee pool.
    pub fn sell_tokens(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let pool_available = self
            .fee_pool
            .lamports()
            .saturating_sub(Rent::get()?.minimum_balance(0));
        let receipt = self.global_state.settle_sell(
            &self.token_info,
            &mut self.bonding_curve,
            self.trader_token_account.amount,
            amount,
            pool_available,
            now,
        )?;
        let payout = receipt.lamports;

        let accounts = TransferChecked {
            from: self.trader_token_account.to_account_info(),
            mint: self.token_mint.to_account_info(),
            to: self.curve_reserve.to_account_info(),
            authority: self.trader.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), accounts);
        transfer_checked(cpi_ctx, amount, self.token_mint.decimals)?;

        self.pay_from_fee_pool(self.trader.to_account_info(), payout)?;

        let token_mint_key = self.token_mint.key();
        msg!("Sold {} units of {} for {} lamports", amount, token_mint_key, payout);

        emit!(TokensSold {
            token_mint: token_mint_key,
            seller: self.trader.key(),
            amount,
            payout,
            total_sold: self.bonding_curve.total_sold,
            pending_liquidity: self.global_state.pending_liquidity,
        });

        self.provide_liquidity(receipt.liquidity, now)
    }

    // Ledger side already ran in settlement; this moves the lamports.
    fn provide_liquidity(&self, split: Option<LiquiditySplit>, now: i64) -> Result<()> {
        let Some(split) = split else {
            return Ok(());
        };

        self.pay_from_fee_pool(self.liquidity_lock.to_account_info(), split.lock_amount)?;
        self.pay_from_fee_pool(self.seed_vault.to_account_info(), split.seed_amount)?;

        let (first_dex, second_dex) = split.dex_allocation();
        msg!(
            "Liquidity threshold reached: {} locked, {} for DEX seeding",
            split.lock_amount,
            split.seed_amount
        );

        emit!(LiquidityProvided {
            lock_amount: split.lock_amount,
            seed_amount: split.seed_amount,
            first_dex_amount: first_dex,
            second_dex_amount: second_dex,
            total_locked: self.global_state.total_liquidity_locked,
            timestamp: now,
        });

        Ok(())
    }

    fn pay_from_fee_pool(&self, to: AccountInfo<'info>, lamports: u64) -> Result<()> {
        if lamports == 0 {
            return Ok(());
        }

        let seeds = &[FEE_POOL_SEED, &[self.global_state.fee_pool_bump]];
        let signer_seeds = &[&seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.fee_pool.to_account_info(),
                    to,
                },
                signer_seeds,
            ),
            lamports,
        )
    }
}

#[event]
pub struct TokensBought {
    pub token_mint: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    /// lamports paid
    pub cost: u64,
    pub total_sold: u64,
    pub pending_liquidity: u64,
}

#[event]
pub struct TokensSold {
    pub token_mint: Pubkey,
    pub seller: Pubkey,
    pub amount: u64,
    /// lamports received
    pub payout: u64,
    pub total_sold: u64,
    pub pending_liquidity: u64,
}

/// Emitted when pooled proceeds cross the liquidity threshold.
#[event]
pub struct LiquidityProvided {
    pub lock_amount: u64,
    pub seed_amount: u64,
    pub first_dex_amount: u64,
    pub second_dex_amount: u64,
    pub total_locked: u64,
    pub timestamp: i64,
}
