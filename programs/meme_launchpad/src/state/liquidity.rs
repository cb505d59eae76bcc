use anchor_lang::prelude::*;

/// Partition of pooled proceeds once the liquidity threshold is crossed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquiditySplit {
    /// Moved into the liquidity lock vault for good.
    pub lock_amount: u64,
    /// Handed to the DEX migrator through the seed vault.
    pub seed_amount: u64,
}

impl LiquiditySplit {
    /// Seed liquidity is spread evenly over two DEX pools; an odd lamport
    /// goes to the first.
    pub fn dex_allocation(&self) -> (u64, u64) {
        let second = self.seed_amount / 2;
        (self.seed_amount - second, second)
    }
}

/// Returns the split when `pending` has reached `threshold`.
///
/// `threshold > lock_amount` is guaranteed by config validation, so the seed
/// portion of a triggered split is always positive.
pub fn check_threshold(pending: u64, threshold: u64, lock_amount: u64) -> Option<LiquiditySplit> {
    if pending < threshold {
        return None;
    }

    Some(LiquiditySplit {
        lock_amount,
        seed_amount: pending - lock_amount,
    })
}
