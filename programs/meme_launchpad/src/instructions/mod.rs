pub mod create_token;
pub mod initialize_factory;
pub mod token_admin;
pub mod trade_token;
pub mod views;
pub mod withdraw_seed_liquidity;

pub use create_token::*;
pub use initialize_factory::*;
pub use token_admin::*;
pub use trade_token::*;
pub use views::*;
pub use withdraw_seed_liquidity::*;
