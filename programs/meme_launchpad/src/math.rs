use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, PRICE_UNITS_PER_LAMPORT};
use crate::errors::LaunchpadError;

/// ceil(a / b)
pub fn ceil_div(a: u128, b: u128) -> Result<u128> {
    require!(b > 0, LaunchpadError::ArithmeticOverflow);
    a.checked_add(b - 1)
        .ok_or(LaunchpadError::ArithmeticOverflow)?
        .checked_div(b)
        .ok_or(LaunchpadError::ArithmeticOverflow.into())
}

/// Lamports a buyer owes for a curve quote. Rounds up.
pub fn quote_to_lamports_ceil(quote: u128) -> Result<u64> {
    let lamports = ceil_div(quote, PRICE_UNITS_PER_LAMPORT)?;
    u64::try_from(lamports).map_err(|_| LaunchpadError::ArithmeticOverflow.into())
}

/// Lamports a seller receives for a curve quote. Rounds down.
pub fn quote_to_lamports_floor(quote: u128) -> Result<u64> {
    u64::try_from(quote / PRICE_UNITS_PER_LAMPORT)
        .map_err(|_| LaunchpadError::ArithmeticOverflow.into())
}

/// `amount * bps / 10_000`, floored.
pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(LaunchpadError::ArithmeticOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(share).map_err(|_| LaunchpadError::ArithmeticOverflow.into())
}
