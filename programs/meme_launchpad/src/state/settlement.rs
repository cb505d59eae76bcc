use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;
use crate::math::{quote_to_lamports_ceil, quote_to_lamports_floor};
use crate::state::{BondingCurve, FeeSplit, GlobalState, LiquiditySplit, TokenInfo, TokenRegistry};

/// Ledger outcome of a launch. The handler moves the fee shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub index: u64,
    pub split: FeeSplit,
}

/// Ledger outcome of a trade. The handler moves `lamports` between the trader
/// and the fee pool, then pays out `liquidity` when the threshold fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeReceipt {
    pub lamports: u64,
    pub liquidity: Option<LiquiditySplit>,
}

impl GlobalState {
    /// Charges the creation fee and records `mint` in the registry.
    /// Nothing is booked if any check fails.
    pub fn settle_launch(
        &mut self,
        registry: &mut TokenRegistry,
        mint: Pubkey,
        name: &str,
        symbol: &str,
        max_fee: u64,
        has_referrer: bool,
    ) -> Result<LaunchReceipt> {
        let split = self.config.charge_creation(max_fee, has_referrer)?;
        TokenInfo::validate_metadata(name, symbol)?;

        let index = self.record_creation()?;
        registry.register(mint);

        Ok(LaunchReceipt { index, split })
    }

    /// Prices `amount` units, checks the buyer's ceiling and commits the sale
    /// to the curve and the pool.
    pub fn settle_buy(
        &mut self,
        token: &TokenInfo,
        curve: &mut BondingCurve,
        amount: u64,
        max_cost: u64,
        now: i64,
    ) -> Result<TradeReceipt> {
        require!(amount > 0, LaunchpadError::ZeroAmount);
        token.ensure_tradable()?;

        let cost = quote_to_lamports_ceil(curve.quote_buy(amount)?)?;
        require!(max_cost >= cost, LaunchpadError::InsufficientPayment);

        curve.execute_buy(amount)?;
        self.record_buy(cost)?;

        Ok(TradeReceipt {
            lamports: cost,
            liquidity: self.take_liquidity(now)?,
        })
    }

    /// Prices a sell of `amount` units held in `balance` and commits it.
    ///
    /// `pool_available` is what the fee pool can pay out above its rent
    /// floor; the ledger and the vault must both cover the payout.
    pub fn settle_sell(
        &mut self,
        token: &TokenInfo,
        curve: &mut BondingCurve,
        balance: u64,
        amount: u64,
        pool_available: u64,
        now: i64,
    ) -> Result<TradeReceipt> {
        require!(amount > 0, LaunchpadError::ZeroAmount);
        token.ensure_tradable()?;
        require!(balance >= amount, LaunchpadError::InsufficientBalance);

        let payout = quote_to_lamports_floor(curve.quote_sell(amount)?)?;
        require!(pool_available >= payout, LaunchpadError::InsufficientPoolFunds);

        self.record_sell(payout)?;
        curve.execute_sell(amount)?;

        Ok(TradeReceipt {
            lamports: payout,
            liquidity: self.take_liquidity(now)?,
        })
    }
}
