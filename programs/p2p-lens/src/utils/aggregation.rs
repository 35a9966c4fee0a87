use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::U256;
use crate::safe_math::SafeMath;
use crate::state::{Market, PriceFeed};
use crate::utils::valuation::base_currency_value;

/// A market together with what is needed to price it
#[derive(Clone, Copy, Debug)]
pub struct MarketValuation<'a> {
    pub market: &'a Market,
    pub price_feed: &'a PriceFeed,
    pub decimals: u8,
}

/// Cross-market totals in the base currency
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketTotals {
    pub p2p: u128,
    pub pool: u128,
    pub idle: u128,
    pub total: u128,
}

#[derive(Default)]
struct Accumulator {
    p2p: U256,
    pool: U256,
    idle: U256,
}

impl Accumulator {
    fn add(&mut self, p2p: U256, pool: U256, idle: U256) -> Result<()> {
        self.p2p = self.p2p.checked_add(p2p).ok_or(ErrorCode::MathOverflow)?;
        self.pool = self.pool.checked_add(pool).ok_or(ErrorCode::MathOverflow)?;
        self.idle = self.idle.checked_add(idle).ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    fn into_totals(self) -> Result<MarketTotals> {
        let total = self
            .p2p
            .checked_add(self.pool)
            .and_then(|v| v.checked_add(self.idle))
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(MarketTotals {
            p2p: self.p2p.try_to_u128()?,
            pool: self.pool.try_to_u128()?,
            idle: self.idle.try_to_u128()?,
            total: total.try_to_u128()?,
        })
    }
}

/// Total supply across markets in the base currency. Each market is priced and
/// rounded down before summing, so the result does not depend on market order.
pub fn total_supply<'a>(markets: impl IntoIterator<Item = MarketValuation<'a>>) -> Result<MarketTotals> {
    let mut acc = Accumulator::default();
    for valuation in markets {
        let market = valuation.market;
        let price_feed = valuation.price_feed;
        let decimals = valuation.decimals;

        acc.add(
            base_currency_value(market.p2p_supply_amount()?, decimals, price_feed)?,
            base_currency_value(market.pool_supply_amount()?, decimals, price_feed)?,
            base_currency_value(U256::from(market.idle_supply), decimals, price_feed)?,
        )?;
    }
    acc.into_totals()
}

/// Total borrow across markets in the base currency. There is no idle borrow.
pub fn total_borrow<'a>(markets: impl IntoIterator<Item = MarketValuation<'a>>) -> Result<MarketTotals> {
    let mut acc = Accumulator::default();
    for valuation in markets {
        let market = valuation.market;
        let price_feed = valuation.price_feed;
        let decimals = valuation.decimals;

        acc.add(
            base_currency_value(market.p2p_borrow_amount()?, decimals, price_feed)?,
            base_currency_value(market.pool_borrow_amount()?, decimals, price_feed)?,
            U256::zero(),
        )?;
    }
    acc.into_totals()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{test_market, test_price_feed};
    use crate::state::MarketSideDelta;

    const DOLLAR: u128 = 100_000_000;

    fn usdc_market() -> Market {
        let mut market = test_market();
        market.deltas.supply = MarketSideDelta { scaled_delta: 100_000_000, scaled_p2p_total: 400_000_000 };
        market.scaled_pool_supply = 600_000_000;
        market.idle_supply = 50_000_000;
        market.deltas.borrow = MarketSideDelta { scaled_delta: 0, scaled_p2p_total: 300_000_000 };
        market.scaled_pool_borrow = 200_000_000;
        market
    }

    fn eth_market() -> Market {
        let mut market = test_market();
        market.deltas.supply = MarketSideDelta { scaled_delta: 0, scaled_p2p_total: 2_000_000_000_000_000_000 };
        market.scaled_pool_supply = 1_000_000_000_000_000_000;
        market.deltas.borrow = MarketSideDelta { scaled_delta: 0, scaled_p2p_total: 500_000_000_000_000_000 };
        market
    }

    #[test]
    fn sums_priced_markets() {
        let usdc = usdc_market();
        let eth = eth_market();
        let one_dollar = test_price_feed(1);
        let two_thousand = test_price_feed(2_000);
        let markets = [
            MarketValuation { market: &usdc, price_feed: &one_dollar, decimals: 6 },
            MarketValuation { market: &eth, price_feed: &two_thousand, decimals: 18 },
        ];

        let supply = total_supply(markets).unwrap();
        // usdc: 300 p2p, 600 pool, 50 idle; eth: 2 p2p, 1 pool at $2000
        assert_eq!(supply.p2p, (300 + 4_000) * DOLLAR);
        assert_eq!(supply.pool, (600 + 2_000) * DOLLAR);
        assert_eq!(supply.idle, 50 * DOLLAR);
        assert_eq!(supply.total, 6_950 * DOLLAR);

        let borrow = total_borrow(markets).unwrap();
        assert_eq!(borrow.p2p, (300 + 1_000) * DOLLAR);
        assert_eq!(borrow.pool, 200 * DOLLAR);
        assert_eq!(borrow.idle, 0);
        assert_eq!(borrow.total, 1_500 * DOLLAR);
    }

    #[test]
    fn order_does_not_matter() {
        let usdc = usdc_market();
        let eth = eth_market();
        let one_dollar = test_price_feed(1);
        let two_thousand = test_price_feed(2_000);
        let a = MarketValuation { market: &usdc, price_feed: &one_dollar, decimals: 6 };
        let b = MarketValuation { market: &eth, price_feed: &two_thousand, decimals: 18 };

        assert_eq!(total_supply([a, b]).unwrap(), total_supply([b, a]).unwrap());
        assert_eq!(total_borrow([a, b]).unwrap(), total_borrow([b, a]).unwrap());
    }

    #[test]
    fn no_markets_is_zero() {
        assert_eq!(
            total_supply(std::iter::empty::<MarketValuation>()).unwrap(),
            MarketTotals::default()
        );
    }
}
