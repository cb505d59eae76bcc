use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LaunchpadError;
use crate::math::bps_share;
use crate::state::liquidity::{check_threshold, LiquiditySplit};

/// Economic parameters of the launchpad, fixed when the factory is initialized.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LaunchpadConfig {
    /// lamports
    pub creation_fee: u64,
    pub platform_fee_bps: u16,
    pub creator_fee_bps: u16,
    pub referrer_fee_bps: u16,
    /// 18-decimal price of the first unit
    pub initial_price: u64,
    /// 18-decimal price step per unit sold
    pub price_increment: u64,
    pub max_supply: u64,
    /// lamports
    pub liquidity_threshold: u64,
    /// lamports
    pub locked_liquidity: u64,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            creation_fee: TOKEN_CREATION_FEE,
            platform_fee_bps: PLATFORM_FEE_BPS,
            creator_fee_bps: CREATOR_FEE_BPS,
            referrer_fee_bps: REFERRER_FEE_BPS,
            initial_price: INITIAL_PRICE,
            price_increment: PRICE_INCREMENT,
            max_supply: MAX_SUPPLY,
            liquidity_threshold: LIQUIDITY_THRESHOLD,
            locked_liquidity: LOCKED_LIQUIDITY,
        }
    }
}

impl LaunchpadConfig {
    pub fn validate(&self) -> Result<()> {
        let total_bps = self.platform_fee_bps as u64
            + self.creator_fee_bps as u64
            + self.referrer_fee_bps as u64;
        require!(total_bps == BPS_DENOMINATOR, LaunchpadError::InvalidConfig);
        require!(self.creation_fee > 0, LaunchpadError::InvalidConfig);
        require!(self.initial_price > 0, LaunchpadError::InvalidConfig);
        require!(self.price_increment > 0, LaunchpadError::InvalidConfig);
        require!(self.max_supply > 0, LaunchpadError::InvalidConfig);
        // the seed portion of a provision can never go negative
        require!(
            self.liquidity_threshold > self.locked_liquidity,
            LaunchpadError::InvalidConfig
        );
        Ok(())
    }

    /// Both vault deposits of a provision must leave a fresh system account
    /// rent exempt, or the transfer into an empty vault fails.
    pub fn ensure_rent_exempt_vaults(&self, rent_floor: u64) -> Result<()> {
        require!(self.locked_liquidity >= rent_floor, LaunchpadError::InvalidConfig);
        let min_seed = self
            .liquidity_threshold
            .checked_sub(self.locked_liquidity)
            .ok_or(LaunchpadError::InvalidConfig)?;
        require!(min_seed >= rent_floor, LaunchpadError::InvalidConfig);
        Ok(())
    }

    /// Checks the creator's fee ceiling and returns how the fee is split.
    pub fn charge_creation(&self, max_fee: u64, has_referrer: bool) -> Result<FeeSplit> {
        require!(max_fee >= self.creation_fee, LaunchpadError::InsufficientFee);
        self.fee_split(has_referrer)
    }

    /// Splits the creation fee. Without a referrer the referrer share goes to
    /// the platform; rounding dust stays with the creator share.
    pub fn fee_split(&self, has_referrer: bool) -> Result<FeeSplit> {
        let mut platform = bps_share(self.creation_fee, self.platform_fee_bps)?;
        let mut referrer = bps_share(self.creation_fee, self.referrer_fee_bps)?;
        let creator = self
            .creation_fee
            .checked_sub(platform)
            .and_then(|rest| rest.checked_sub(referrer))
            .ok_or(LaunchpadError::ArithmeticOverflow)?;

        if !has_referrer {
            platform = platform
                .checked_add(referrer)
                .ok_or(LaunchpadError::ArithmeticOverflow)?;
            referrer = 0;
        }

        Ok(FeeSplit {
            platform,
            creator,
            referrer,
        })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub platform: u64,
    pub creator: u64,
    pub referrer: u64,
}

impl FeeSplit {
    pub fn total(&self) -> u64 {
        self.platform + self.creator + self.referrer
    }
}

/// Factory-wide state: owner, config and fee pool accounting.
#[account]
#[derive(InitSpace, Debug)]
pub struct GlobalState {
    pub owner: Pubkey,
    pub config: LaunchpadConfig,
    pub total_tokens_created: u64,
    pub total_fees_collected: u64,
    /// Trade proceeds held in the fee pool vault and not yet provided as liquidity.
    pub pending_liquidity: u64,
    pub total_liquidity_locked: u64,
    pub total_liquidity_seeded: u64,
    pub last_liquidity_provision: i64,
    pub bump: u8,
    pub fee_pool_bump: u8,
    pub liquidity_lock_bump: u8,
    pub seed_vault_bump: u8,
}

impl GlobalState {
    pub fn ensure_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, LaunchpadError::NotOwner);
        Ok(())
    }

    /// Books a paid creation fee and returns the token's registry index.
    pub fn record_creation(&mut self) -> Result<u64> {
        let index = self.total_tokens_created;
        self.total_tokens_created = index
            .checked_add(1)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.total_fees_collected = self
            .total_fees_collected
            .checked_add(self.config.creation_fee)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        Ok(index)
    }

    pub fn record_buy(&mut self, lamports: u64) -> Result<()> {
        self.pending_liquidity = self
            .pending_liquidity
            .checked_add(lamports)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_sell(&mut self, lamports: u64) -> Result<()> {
        self.pending_liquidity = self
            .pending_liquidity
            .checked_sub(lamports)
            .ok_or(LaunchpadError::InsufficientPoolFunds)?;
        Ok(())
    }

    /// Runs the threshold check. When it fires, the pending balance is
    /// consumed and the stats are updated; the caller moves the lamports.
    pub fn take_liquidity(&mut self, now: i64) -> Result<Option<LiquiditySplit>> {
        let Some(split) = check_threshold(
            self.pending_liquidity,
            self.config.liquidity_threshold,
            self.config.locked_liquidity,
        ) else {
            return Ok(None);
        };

        self.pending_liquidity = 0;
        self.total_liquidity_locked = self
            .total_liquidity_locked
            .checked_add(split.lock_amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.total_liquidity_seeded = self
            .total_liquidity_seeded
            .checked_add(split.seed_amount)
            .ok_or(LaunchpadError::ArithmeticOverflow)?;
        self.last_liquidity_provision = now;

        Ok(Some(split))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

    fn state() -> GlobalState {
        GlobalState {
            owner: Pubkey::new_unique(),
            config: LaunchpadConfig::default(),
            total_tokens_created: 0,
            total_fees_collected: 0,
            pending_liquidity: 0,
            total_liquidity_locked: 0,
            total_liquidity_seeded: 0,
            last_liquidity_provision: 0,
            bump: 255,
            fee_pool_bump: 254,
            liquidity_lock_bump: 253,
            seed_vault_bump: 252,
        }
    }

    #[test]
    fn default_config_is_valid() {
        LaunchpadConfig::default().validate().unwrap();
    }

    #[test]
    fn config_rejects_bad_fee_shares() {
        let config = LaunchpadConfig {
            referrer_fee_bps: 2_500,
            ..LaunchpadConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), LaunchpadError::InvalidConfig.into());
    }

    #[test]
    fn config_rejects_lock_not_below_threshold() {
        let config = LaunchpadConfig {
            locked_liquidity: LIQUIDITY_THRESHOLD,
            ..LaunchpadConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), LaunchpadError::InvalidConfig.into());
    }

    #[test]
    fn config_rejects_flat_curve() {
        let config = LaunchpadConfig {
            price_increment: 0,
            ..LaunchpadConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), LaunchpadError::InvalidConfig.into());
    }

    #[test]
    fn vault_deposits_must_cover_rent() {
        // 0-byte system account rent floor
        let rent_floor = 890_880;
        LaunchpadConfig::default().ensure_rent_exempt_vaults(rent_floor).unwrap();

        let tiny_lock = LaunchpadConfig {
            liquidity_threshold: 10 * rent_floor,
            locked_liquidity: rent_floor - 1,
            ..LaunchpadConfig::default()
        };
        tiny_lock.validate().unwrap();
        assert_eq!(
            tiny_lock.ensure_rent_exempt_vaults(rent_floor).unwrap_err(),
            LaunchpadError::InvalidConfig.into()
        );

        let tiny_seed = LaunchpadConfig {
            liquidity_threshold: 2 * rent_floor - 1,
            locked_liquidity: rent_floor,
            ..LaunchpadConfig::default()
        };
        tiny_seed.validate().unwrap();
        assert_eq!(
            tiny_seed.ensure_rent_exempt_vaults(rent_floor).unwrap_err(),
            LaunchpadError::InvalidConfig.into()
        );
    }

    #[test]
    fn creation_charge_respects_fee_ceiling() {
        let config = LaunchpadConfig::default();
        assert_eq!(
            config.charge_creation(TOKEN_CREATION_FEE - 1, false).unwrap_err(),
            LaunchpadError::InsufficientFee.into()
        );
        let split = config.charge_creation(TOKEN_CREATION_FEE * 3, true).unwrap();
        assert_eq!(split.total(), TOKEN_CREATION_FEE);
    }

    #[test]
    fn fee_split_with_referrer() {
        let split = LaunchpadConfig::default().fee_split(true).unwrap();
        assert_eq!(split.platform, 40_000_000);
        assert_eq!(split.creator, 40_000_000);
        assert_eq!(split.referrer, 20_000_000);
        assert_eq!(split.total(), TOKEN_CREATION_FEE);
    }

    #[test]
    fn fee_split_without_referrer_folds_into_platform() {
        let split = LaunchpadConfig::default().fee_split(false).unwrap();
        assert_eq!(split.platform, 60_000_000);
        assert_eq!(split.creator, 40_000_000);
        assert_eq!(split.referrer, 0);
        assert_eq!(split.total(), TOKEN_CREATION_FEE);
    }

    #[test]
    fn fee_split_dust_stays_with_creator() {
        let config = LaunchpadConfig {
            creation_fee: 7,
            ..LaunchpadConfig::default()
        };
        let split = config.fee_split(true).unwrap();
        assert_eq!(split, FeeSplit { platform: 2, creator: 4, referrer: 1 });
        assert_eq!(split.total(), 7);
    }

    #[test]
    fn creation_books_fee_and_index() {
        let mut gs = state();
        assert_eq!(gs.record_creation().unwrap(), 0);
        assert_eq!(gs.record_creation().unwrap(), 1);
        assert_eq!(gs.total_tokens_created, 2);
        assert_eq!(gs.total_fees_collected, 2 * TOKEN_CREATION_FEE);
    }

    #[test]
    fn only_owner_passes_owner_check() {
        let gs = state();
        let owner = gs.owner;
        gs.ensure_owner(&owner).unwrap();
        assert_eq!(
            gs.ensure_owner(&Pubkey::new_unique()).unwrap_err(),
            LaunchpadError::NotOwner.into()
        );
    }

    #[test]
    fn sells_cannot_overdraw_the_pool() {
        let mut gs = state();
        gs.record_buy(1_000).unwrap();
        assert_eq!(gs.record_sell(1_001).unwrap_err(), LaunchpadError::InsufficientPoolFunds.into());
        assert_eq!(gs.pending_liquidity, 1_000);
        gs.record_sell(1_000).unwrap();
        assert_eq!(gs.pending_liquidity, 0);
    }

    #[test]
    fn liquidity_is_taken_once_threshold_is_reached() {
        let mut gs = state();
        gs.record_buy(79 * LAMPORTS_PER_SOL).unwrap();
        assert_eq!(gs.take_liquidity(10).unwrap(), None);
        assert_eq!(gs.pending_liquidity, 79 * LAMPORTS_PER_SOL);

        gs.record_buy(2 * LAMPORTS_PER_SOL).unwrap();
        let split = gs.take_liquidity(20).unwrap().unwrap();
        assert_eq!(split.lock_amount, 36 * LAMPORTS_PER_SOL);
        assert_eq!(split.seed_amount, 45 * LAMPORTS_PER_SOL);
        assert_eq!(gs.pending_liquidity, 0);
        assert_eq!(gs.total_liquidity_locked, 36 * LAMPORTS_PER_SOL);
        assert_eq!(gs.total_liquidity_seeded, 45 * LAMPORTS_PER_SOL);
        assert_eq!(gs.last_liquidity_provision, 20);
    }
}
