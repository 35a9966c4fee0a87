/// Identity (RAY) with 27 decimal places. Rates, indexes and proportions.
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000; // 1e27

/// Identity (WAD) with 18 decimal places. Health factors.
pub const WAD: u128 = 1_000_000_000_000_000_000; // 1e18

/// Scale for percentages (e.g., 100% = 10_000)
pub const PERCENTAGE_FACTOR: u16 = 10_000; // 1e4

/// Half of the percentage scale, used to round weighted averages half-up
pub const HALF_PERCENTAGE_FACTOR: u16 = 5_000;

/// Decimals of values quoted in the base currency (USD)
pub const BASE_CURRENCY_DECIMALS: u32 = 8;
