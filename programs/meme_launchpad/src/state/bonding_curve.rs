use anchor_lang::prelude::*;

use crate::errors::LaunchpadError;

/// Linear bonding curve for a single token.
///
/// The n-th unit sold (0-indexed) costs `initial_price + n * price_increment`,
/// with prices in 18-decimal fixed point. Pricing parameters are copied from
/// the factory config at launch and never change afterwards.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct BondingCurve {
    pub token_mint: Pubkey,
    pub total_sold: u64,
    pub max_supply: u64,
    pub initial_price: u64,
    pub price_increment: u64,
    pub bump: u8,
}

impl BondingCurve {
    /// Price of the unit that would be sold next.
    pub fn current_price(&self) -> Result<u128> {
        self.price_at(self.total_sold)
    }

    pub fn price_at(&self, sold: u64) -> Result<u128> {
        (sold as u128)
            .checked_mul(self.price_increment as u128)
            .and_then(|step| step.checked_add(self.initial_price as u128))
            .ok_or(LaunchpadError::ArithmeticOverflow.into())
    }

    pub fn remaining_supply(&self) -> u64 {
        self.max_supply.saturating_sub(self.total_sold)
    }

    /// Reserve units beyond what the curve can still sell may be burned.
    pub fn ensure_burnable(&self, reserve_balance: u64, amount: u64) -> Result<()> {
        require!(amount > 0, LaunchpadError::ZeroAmount);
        let burnable = reserve_balance.saturating_sub(self.remaining_supply());
        require!(amount <= burnable, LaunchpadError::InsufficientBalance);
        Ok(())
    }

    /// Cost of the next `amount` units.
    pub fn quote_buy(&self, amount: u64) -> Result<u128> {
        let end = self
            .total_sold
            .checked_add(amount)
            .ok_or(LaunchpadError::ExceedsMaxSupply)?;
        require!(end <= self.max_supply, LaunchpadError::ExceedsMaxSupply);

        self.sum_prices(self.total_sold, amount)
    }

    /// Proceeds for returning the last `amount` units sold.
    pub fn quote_sell(&self, amount: u64) -> Result<u128> {
        require!(amount <= self.total_sold, LaunchpadError::InsufficientSoldUnits);

        self.sum_prices(self.total_sold - amount, amount)
    }

    pub fn execute_buy(&mut self, amount: u64) -> Result<u128> {
        let quote = self.quote_buy(amount)?;
        self.total_sold = self
            .total_sold
            .checked_add(amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        Ok(quote)
    }

    pub fn execute_sell(&mut self, amount: u64) -> Result<u128> {
        let quote = self.quote_sell(amount)?;
        self.total_sold = self
            .total_sold
            .checked_sub(amount)
            .ok_or(LaunchpadError::InsufficientSoldUnits)?;
        Ok(quote)
    }

    // sum of price(start) .. price(start + amount - 1):
    // amount * p0 + inc * (amount * start + amount * (amount - 1) / 2)
    fn sum_prices(&self, start: u64, amount: u64) -> Result<u128> {
        if amount == 0 {
            return Ok(0);
        }

        let a = amount as u128;
        let base = a
            .checked_mul(self.initial_price as u128)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;

        // one of a, a - 1 is even so the halving is exact
        let triangle = a
            .checked_mul(a - 1)
            .ok_or(LaunchpadError::ArithmeticOverflow)?
            / 2;
        let steps = a
            .checked_mul(start as u128)
            .and_then(|v| v.checked_add(triangle))
            .ok_or(LaunchpadError::ArithmeticOverflow)?;

        steps
            .checked_mul(self.price_increment as u128)
            .and_then(|v| v.checked_add(base))
            .ok_or(LaunchpadError::ArithmeticOverflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INITIAL_PRICE, MAX_SUPPLY, PRICE_INCREMENT};

    fn curve_at(total_sold: u64) -> BondingCurve {
        BondingCurve {
            token_mint: Pubkey::new_unique(),
            total_sold,
            max_supply: MAX_SUPPLY,
            initial_price: INITIAL_PRICE,
            price_increment: PRICE_INCREMENT,
            bump: 255,
        }
    }

    fn naive_sum(start: u64, amount: u64) -> u128 {
        (0..amount)
            .map(|i| INITIAL_PRICE as u128 + (start + i) as u128 * PRICE_INCREMENT as u128)
            .sum()
    }

    #[test]
    fn fresh_curve_starts_at_initial_price() {
        let curve = curve_at(0);
        assert_eq!(curve.current_price().unwrap(), INITIAL_PRICE as u128);
        assert_eq!(curve.quote_buy(1).unwrap(), INITIAL_PRICE as u128);
    }

    #[test]
    fn single_unit_quote_is_price_at_total_sold() {
        for sold in [0, 1, 7, 12_345, MAX_SUPPLY - 1] {
            let curve = curve_at(sold);
            assert_eq!(
                curve.quote_buy(1).unwrap(),
                INITIAL_PRICE as u128 + sold as u128 * PRICE_INCREMENT as u128
            );
        }
    }

    #[test]
    fn closed_form_matches_unit_by_unit_sum() {
        for (sold, amount) in [(0, 100), (3, 1), (50, 250), (999_000, 1_000), (0, 0)] {
            let curve = curve_at(sold);
            assert_eq!(curve.quote_buy(amount).unwrap(), naive_sum(sold, amount));
        }
    }

    #[test]
    fn hundred_units_from_zero() {
        let curve = curve_at(0);
        let expected = 100 * INITIAL_PRICE as u128 + PRICE_INCREMENT as u128 * 100 * 99 / 2;
        assert_eq!(curve.quote_buy(100).unwrap(), expected);
    }

    #[test]
    fn buy_then_sell_round_trips_exactly() {
        let mut curve = curve_at(42_000);
        let paid = curve.execute_buy(777).unwrap();
        assert_eq!(curve.total_sold, 42_777);
        assert_eq!(curve.quote_sell(777).unwrap(), paid);

        let received = curve.execute_sell(777).unwrap();
        assert_eq!(received, paid);
        assert_eq!(curve.total_sold, 42_000);
    }

    #[test]
    fn buying_past_max_supply_fails_without_mutation() {
        let mut curve = curve_at(MAX_SUPPLY - 10);
        let err = curve.execute_buy(11).unwrap_err();
        assert_eq!(err, LaunchpadError::ExceedsMaxSupply.into());
        assert_eq!(curve.total_sold, MAX_SUPPLY - 10);

        assert_eq!(curve_at(0).quote_buy(MAX_SUPPLY + 1).unwrap_err(), LaunchpadError::ExceedsMaxSupply.into());
        assert_eq!(curve_at(1).quote_buy(u64::MAX).unwrap_err(), LaunchpadError::ExceedsMaxSupply.into());
    }

    #[test]
    fn whole_supply_can_be_bought() {
        let mut curve = curve_at(0);
        let quote = curve.execute_buy(MAX_SUPPLY).unwrap();
        assert_eq!(curve.remaining_supply(), 0);
        let n = MAX_SUPPLY as u128;
        assert_eq!(
            quote,
            n * INITIAL_PRICE as u128 + PRICE_INCREMENT as u128 * (n * (n - 1) / 2)
        );
    }

    #[test]
    fn selling_more_than_sold_fails_without_mutation() {
        let mut curve = curve_at(100);
        let err = curve.execute_sell(101).unwrap_err();
        assert_eq!(err, LaunchpadError::InsufficientSoldUnits.into());
        assert_eq!(curve.total_sold, 100);
    }

    #[test]
    fn zero_amount_is_a_free_no_op() {
        let mut curve = curve_at(500);
        assert_eq!(curve.execute_buy(0).unwrap(), 0);
        assert_eq!(curve.execute_sell(0).unwrap(), 0);
        assert_eq!(curve.total_sold, 500);
    }

    #[test]
    fn price_rises_after_buy() {
        let mut curve = curve_at(0);
        curve.execute_buy(100).unwrap();
        assert!(curve.current_price().unwrap() > INITIAL_PRICE as u128);
    }

    #[test]
    fn only_surplus_reserve_can_be_burned() {
        let curve = curve_at(400);
        let remaining = MAX_SUPPLY - 400;
        // reserve holds exactly the unsold supply
        assert_eq!(
            curve.ensure_burnable(remaining, 1).unwrap_err(),
            LaunchpadError::InsufficientBalance.into()
        );
        // 50 extra units minted on top
        curve.ensure_burnable(remaining + 50, 50).unwrap();
        assert_eq!(
            curve.ensure_burnable(remaining + 50, 51).unwrap_err(),
            LaunchpadError::InsufficientBalance.into()
        );
        assert_eq!(
            curve.ensure_burnable(remaining + 50, 0).unwrap_err(),
            LaunchpadError::ZeroAmount.into()
        );
    }
}
