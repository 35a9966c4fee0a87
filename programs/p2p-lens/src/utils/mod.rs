pub mod aggregation;
pub mod liquidity;
pub mod loader;
pub mod math;
pub mod valuation;

pub use aggregation::*;
pub use liquidity::*;
pub use loader::*;
pub use math::*;
pub use valuation::*;
