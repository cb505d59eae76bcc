/*
 ███╗   ███╗███████╗███╗   ███╗███████╗    ██╗      █████╗ ██╗   ██╗███╗   ██╗ ██████╗██╗  ██╗
 ████╗ ████║██╔════╝████╗ ████║██╔════╝    ██║     ██╔══██╗██║   ██║████╗  ██║██╔════╝██║  ██║
 ██╔████╔██║█████╗  ██╔████╔██║█████╗      ██║     ███████║██║   ██║██╔██╗ ██║██║     ███████║
 ██║╚██╔╝██║██╔══╝  ██║╚██╔╝██║██╔══╝      ██║     ██╔══██║██║   ██║██║╚██╗██║██║     ██╔══██║
 ██║ ╚═╝ ██║███████╗██║ ╚═╝ ██║███████╗    ███████╗██║  ██║╚██████╔╝██║ ╚████║╚██████╗██║  ██║
 ╚═╝     ╚═╝╚══════╝╚═╝     ╚═╝╚══════╝    ╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝╚═╝  ╚═╝

  Linear Bonding Curve Meme Token Launchpad

 Price
   ^
   |                                      /
   |                                  /
   |                              /
   |                          /
   |                      /
   |                  /
   |              /
   |          /
   |      /
   |  /
   +---------------------------------> Tokens Sold

 price(n) = 0.0001 + n * 0.00001

 - 0.1 SOL to launch: 40% platform, 40% creator, 20% referrer
 - every trade settles against the shared fee pool
 - at 80 SOL pooled, 36 SOL is locked for good and the rest seeds DEX pools
*/

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
use state::{LaunchpadConfig, TokenInfo};

declare_id!("3RWFCdehrDn84TXj19tVrKJg8DFkeaLR8CCjikPW9th7");

#[program]
pub mod meme_launchpad {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>, config: LaunchpadConfig) -> Result<()> {
        ctx.accounts.initialize_factory(config, ctx.bumps)
    }

    pub fn create_token(ctx: Context<CreateToken>, name: String, symbol: String, max_fee: u64) -> Result<()> {
        ctx.accounts.create_token(name, symbol, max_fee, ctx.bumps)
    }

    pub fn buy_tokens(ctx: Context<TradeToken>, amount: u64, max_sol_cost: u64) -> Result<()> {
        ctx.accounts.buy_tokens(amount, max_sol_cost)
    }

    pub fn sell_tokens(ctx: Context<TradeToken>, amount: u64) -> Result<()> {
        ctx.accounts.sell_tokens(amount)
    }

    pub fn withdraw_seed_liquidity(ctx: Context<WithdrawSeedLiquidity>) -> Result<()> {
        ctx.accounts.withdraw_seed_liquidity()
    }

    pub fn mint_supply(ctx: Context<ManageSupply>, amount: u64) -> Result<()> {
        ctx.accounts.mint_supply(amount)
    }

    pub fn burn_supply(ctx: Context<ManageSupply>, amount: u64) -> Result<()> {
        ctx.accounts.burn_supply(amount)
    }

    pub fn deactivate_token(ctx: Context<DeactivateToken>) -> Result<()> {
        ctx.accounts.deactivate_token()
    }

    pub fn get_buy_price(ctx: Context<CurveView>, amount: u64) -> Result<u64> {
        ctx.accounts.get_buy_price(amount)
    }

    pub fn get_sell_price(ctx: Context<CurveView>, amount: u64) -> Result<u64> {
        ctx.accounts.get_sell_price(amount)
    }

    pub fn current_price(ctx: Context<CurveView>) -> Result<u64> {
        ctx.accounts.current_price()
    }

    pub fn get_curve_info(ctx: Context<CurveView>) -> Result<CurveInfo> {
        ctx.accounts.get_curve_info()
    }

    pub fn get_token_info(ctx: Context<TokenInfoView>) -> Result<TokenInfo> {
        ctx.accounts.get_token_info()
    }

    pub fn get_tokens(ctx: Context<RegistryView>, start: u32, limit: u8) -> Result<Vec<Pubkey>> {
        ctx.accounts.get_tokens(start, limit)
    }
}
