use anchor_lang::prelude::*;

use crate::constants::*;
use crate::math::{quote_to_lamports_ceil, quote_to_lamports_floor};
use crate::state::{BondingCurve, TokenInfo, TokenRegistry};

/// Read-only access to a curve. Lamport figures use the same rounding as
/// settlement, so a quote here is what a trade at the same state would
/// charge or pay.
#[derive(Accounts)]
pub struct CurveView<'info> {
    #[account(
        seeds = [BONDING_CURVE_SEED, bonding_curve.token_mint.as_ref()],
        bump = bonding_curve.bump,
    )]
    pub bonding_curve: Account<'info, BondingCurve>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveInfo {
    pub total_sold: u64,
    pub max_supply: u64,
    /// lamports for the next unit
    pub current_price: u64,
}

impl CurveInfo {
    pub fn from_curve(curve: &BondingCurve) -> Result<Self> {
        Ok(Self {
            total_sold: curve.total_sold,
            max_supply: curve.max_supply,
            current_price: quote_to_lamports_floor(curve.current_price()?)?,
        })
    }
}

impl<'info> CurveView<'info> {
    pub fn get_buy_price(&self, amount: u64) -> Result<u64> {
        quote_to_lamports_ceil(self.bonding_curve.quote_buy(amount)?)
    }

    pub fn get_sell_price(&self, amount: u64) -> Result<u64> {
        quote_to_lamports_floor(self.bonding_curve.quote_sell(amount)?)
    }

    pub fn current_price(&self) -> Result<u64> {
        quote_to_lamports_floor(self.bonding_curve.current_price()?)
    }

    pub fn get_curve_info(&self) -> Result<CurveInfo> {
        CurveInfo::from_curve(&self.bonding_curve)
    }
}

#[derive(Accounts)]
pub struct TokenInfoView<'info> {
    #[account(
        seeds = [TOKEN_INFO_SEED, token_info.token_mint.as_ref()],
        bump = token_info.bump,
    )]
    pub token_info: Account<'info, TokenInfo>,
}

impl<'info> TokenInfoView<'info> {
    pub fn get_token_info(&self) -> Result<TokenInfo> {
        Ok((*self.token_info).clone())
    }
}

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(
        seeds = [TOKEN_REGISTRY_SEED],
        bump = token_registry.bump,
    )]
    pub token_registry: Account<'info, TokenRegistry>,
}

impl<'info> RegistryView<'info> {
    pub fn get_tokens(&self, start: u32, limit: u8) -> Result<Vec<Pubkey>> {
        Ok(self.token_registry.page(start, limit.min(MAX_TOKENS_PER_PAGE)))
    }
}
