pub mod p2p_rates;
pub mod weighted_rate;

pub use p2p_rates::*;
pub use weighted_rate::*;
