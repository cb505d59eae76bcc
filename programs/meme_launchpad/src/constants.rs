use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

// ===== Seeds =====
pub const GLOBAL_STATE_SEED: &[u8] = b"global_state";
pub const TOKEN_REGISTRY_SEED: &[u8] = b"token_registry";
pub const TOKEN_INFO_SEED: &[u8] = b"token_info";
pub const BONDING_CURVE_SEED: &[u8] = b"bonding_curve";
pub const FEE_POOL_SEED: &[u8] = b"fee_pool";
pub const LIQUIDITY_LOCK_SEED: &[u8] = b"liquidity_lock";
pub const SEED_VAULT_SEED: &[u8] = b"seed_vault";

// ===== Token =====
/// One base unit of a launched token is one unit on the curve.
pub const TOKEN_DECIMALS: u8 = 0;

/// Metaplex limits for the on-chain metadata strings.
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;

// ===== Fixed point =====
/// Curve prices carry 18 decimals.
pub const PRICE_DECIMALS: u32 = 18;

/// Lamports per SOL carry 9 decimals.
pub const LAMPORT_DECIMALS: u32 = 9;

/// Price units per lamport.
pub const PRICE_UNITS_PER_LAMPORT: u128 = 10u128.pow(PRICE_DECIMALS - LAMPORT_DECIMALS);

pub const BPS_DENOMINATOR: u64 = 10_000;

// ===== Default economics =====
/// 0.1 SOL
pub const TOKEN_CREATION_FEE: u64 = LAMPORTS_PER_SOL / 10;

/// 0.0001 per unit
pub const INITIAL_PRICE: u64 = 100_000_000_000_000;

/// 0.00001 per unit sold
pub const PRICE_INCREMENT: u64 = 10_000_000_000_000;

pub const MAX_SUPPLY: u64 = 1_000_000_000;

pub const PLATFORM_FEE_BPS: u16 = 4_000;
pub const CREATOR_FEE_BPS: u16 = 4_000;
pub const REFERRER_FEE_BPS: u16 = 2_000;

/// 80 SOL of pooled proceeds triggers liquidity provision.
pub const LIQUIDITY_THRESHOLD: u64 = 80 * LAMPORTS_PER_SOL;

/// 36 SOL of every provision is locked for good.
pub const LOCKED_LIQUIDITY: u64 = 36 * LAMPORTS_PER_SOL;

// ===== Views =====
/// Return data is capped at 1 KiB, 30 keys plus the vec prefix fit.
pub const MAX_TOKENS_PER_PAGE: u8 = 30;
