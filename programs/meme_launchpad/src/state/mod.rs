pub mod bonding_curve;
pub mod global_state;
pub mod liquidity;
pub mod settlement;
pub mod token_info;
pub mod token_registry;

pub use bonding_curve::*;
pub use global_state::*;
pub use liquidity::*;
pub use settlement::*;
pub use token_info::*;
pub use token_registry::*;
