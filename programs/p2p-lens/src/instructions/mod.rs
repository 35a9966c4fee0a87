pub mod init_lens_config;
pub mod set_lens_config;
pub mod get_market_rates;
pub mod get_market_amounts;
pub mod get_user_balances;
pub mod get_user_rates;
pub mod get_totals;
pub mod get_user_health_factor;

pub use init_lens_config::*;
pub use set_lens_config::*;
pub use get_market_rates::*;
pub use get_market_amounts::*;
pub use get_user_balances::*;
pub use get_user_rates::*;
pub use get_totals::*;
pub use get_user_health_factor::*;
