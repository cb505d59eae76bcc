use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata as Metaplex,
    },
    token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface},
};

use crate::constants::*;
use crate::state::{BondingCurve, FeeSplit, GlobalState, LaunchReceipt, TokenInfo, TokenRegistry};

/// # CreateToken Instruction
///
/// Launches a new meme token paired with its own linear bonding curve.
/// The creator pays the creation fee, which is split between the platform,
/// the creator and an optional referrer.
///
/// ## Accounts created
/// - the SPL mint, with the bonding curve PDA as mint and freeze authority
/// - Metaplex metadata holding the name and symbol
/// - the curve reserve, which receives the whole initial supply
/// - the `BondingCurve` and `TokenInfo` PDAs, both keyed by the mint
#[derive(Accounts)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
    )]
    pub global_state: Box<Account<'info, GlobalState>>,

    #[account(
        mut,
        seeds = [TOKEN_REGISTRY_SEED],
        bump = token_registry.bump,
        realloc = 8 + TokenRegistry::space_for(token_registry.tokens.len() + 1),
        realloc::payer = creator,
        realloc::zero = false,
    )]
    pub token_registry: Box<Account<'info, TokenRegistry>>,

    #[account(init,
    payer = creator,
    space = 8 + TokenInfo::INIT_SPACE,
    seeds = [TOKEN_INFO_SEED, token_mint.key().as_ref()],
    bump,
    )]
    pub token_info: Box<Account<'info, TokenInfo>>,

    #[account(init,
    payer = creator,
    space = 8 + BondingCurve::INIT_SPACE,
    seeds = [BONDING_CURVE_SEED, token_mint.key().as_ref()],
    bump,
    )]
    pub bonding_curve: Box<Account<'info, BondingCurve>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = bonding_curve,
        mint::freeze_authority = bonding_curve,
        mint::token_program = token_program,
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Unsold supply, owned by the bonding curve
    #[account(
        init,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve,
        associated_token::token_program = token_program,
    )]
    pub curve_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: initialized by the metadata program, address checked by seeds
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), token_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// Receives the platform share of the creation fee
    #[account(mut, address = global_state.owner)]
    pub platform: SystemAccount<'info>,

    /// Receives the referrer share when present
    #[account(mut)]
    pub referrer: Option<SystemAccount<'info>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub token_metadata_program: Program<'info, Metaplex>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateToken<'info> {
    /// Launches a token.
    ///
    /// `max_fee` is the most the creator is willing to pay. Exactly the
    /// configured creation fee is charged; anything above it never leaves
    /// the creator's account.
    pub fn create_token(&mut self, name: String, symbol: String, max_fee: u64, bumps: CreateTokenBumps) -> Result<()> {
        let config = self.global_state.config;
        let token_mint_key = self.token_mint.key();

        let LaunchReceipt { index, split } = self.global_state.settle_launch(
            &mut self.token_registry,
            token_mint_key,
            &name,
            &symbol,
            max_fee,
            self.referrer.is_some(),
        )?;
        self.distribute_fee(&split)?;

        let seeds = &[
            BONDING_CURVE_SEED,
            token_mint_key.as_ref(),
            &[bumps.bonding_curve],
        ];
        let signer = &[&seeds[..]];

        let token_data = DataV2 {
            name: name.clone(),
            symbol: symbol.clone(),
            uri: String::new(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };

        let metadata_ctx = CpiContext::new_with_signer(
            self.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: self.metadata.to_account_info(),
                mint: self.token_mint.to_account_info(),
                mint_authority: self.bonding_curve.to_account_info(),
                update_authority: self.bonding_curve.to_account_info(),
                payer: self.creator.to_account_info(),
                system_program: self.system_program.to_account_info(),
                rent: self.rent.to_account_info(),
            },
            signer,
        );

        // immutable metadata, curve PDA signs as update authority
        create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

        // the whole sellable supply sits in the reserve from the start
        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.token_mint.to_account_info(),
                    to: self.curve_reserve.to_account_info(),
                    authority: self.bonding_curve.to_account_info(),
                },
                signer,
            ),
            config.max_supply,
        )?;

        self.bonding_curve.set_inner(BondingCurve {
            token_mint: token_mint_key,
            total_sold: 0,
            max_supply: config.max_supply,
            initial_price: config.initial_price,
            price_increment: config.price_increment,
            bump: bumps.bonding_curve,
        });

        let now = Clock::get()?.unix_timestamp;
        self.token_info.set_inner(TokenInfo {
            token_mint: token_mint_key,
            bonding_curve: self.bonding_curve.key(),
            creator: self.creator.key(),
            name,
            symbol,
            creation_time: now,
            index,
            is_active: true,
            bump: bumps.token_info,
        });

        msg!("Token {} created by {}", token_mint_key, self.creator.key());

        self.emit_created_event(&split, now);

        Ok(())
    }

    // The creator share is the creator's own payment, so only the platform
    // and referrer shares move.
    fn distribute_fee(&self, split: &FeeSplit) -> Result<()> {
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.creator.to_account_info(),
                    to: self.platform.to_account_info(),
                },
            ),
            split.platform,
        )?;

        if let Some(referrer) = &self.referrer {
            if split.referrer > 0 {
                transfer(
                    CpiContext::new(
                        self.system_program.to_account_info(),
                        Transfer {
                            from: self.creator.to_account_info(),
                            to: referrer.to_account_info(),
                        },
                    ),
                    split.referrer,
                )?;
            }
        }

        Ok(())
    }
}

/// Emitted when a token and its curve are launched.
#[event]
pub struct TokenCreated {
    pub token_mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub index: u64,
    pub max_supply: u64,
    pub timestamp: i64,
}

/// Emitted with the creation fee breakdown.
#[event]
pub struct FeesDistributed {
    pub token_mint: Pubkey,
    pub platform: Pubkey,
    pub referrer: Option<Pubkey>,
    pub platform_amount: u64,
    pub creator_amount: u64,
    pub referrer_amount: u64,
}

impl<'info> CreateToken<'info> {
    pub fn emit_created_event(&self, split: &FeeSplit, timestamp: i64) {
        emit!(TokenCreated {
            token_mint: self.token_mint.key(),
            bonding_curve: self.bonding_curve.key(),
            creator: self.creator.key(),
            name: self.token_info.name.clone(),
            symbol: self.token_info.symbol.clone(),
            index: self.token_info.index,
            max_supply: self.bonding_curve.max_supply,
            timestamp,
        });

        emit!(FeesDistributed {
            token_mint: self.token_mint.key(),
            platform: self.platform.key(),
            referrer: self.referrer.as_ref().map(|r| r.key()),
            platform_amount: split.platform,
            creator_amount: split.creator,
            referrer_amount: split.referrer,
        });
    }
}
