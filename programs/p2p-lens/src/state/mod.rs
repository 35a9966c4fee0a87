pub mod last_update;
pub mod lens_config;
pub mod market;
pub mod pool_reserve;
pub mod price_feed;
pub mod scaler;
pub mod user_position;

pub use last_update::*;
pub use lens_config::*;
pub use market::*;
pub use pool_reserve::*;
pub use price_feed::*;
pub use scaler::*;
pub use user_position::*;

/// Current version of the program and all new accounts created
pub const PROGRAM_VERSION: u8 = 1;
