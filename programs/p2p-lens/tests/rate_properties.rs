//! Algebraic properties of the P2P rate engine and the weighted rate.

use p2p_lens::math::*;
use p2p_lens::rates::*;
use p2p_lens::state::RAY;
use proptest::prelude::*;

fn u(value: u128) -> U256 {
    U256::from(value)
}

fn params(
    pool_supply_rate: u128,
    pool_borrow_rate: u128,
    cursor: u16,
    reserve_factor: u16,
) -> P2PRateComputeParams {
    P2PRateComputeParams {
        pool_supply_rate_per_year: u(pool_supply_rate),
        pool_borrow_rate_per_year: u(pool_borrow_rate),
        pool_index: ray(),
        p2p_index: ray(),
        proportion_idle: U256::zero(),
        p2p_delta: U256::zero(),
        p2p_amount: U256::zero(),
        p2p_index_cursor: cursor,
        reserve_factor,
    }
}

#[test]
fn reference_market_example() {
    let params = params(RAY / 100 * 2, RAY / 100 * 5, 5_000, 1_000);
    assert_eq!(compute_p2p_supply_rate(&params).unwrap(), u(RAY / 10_000 * 335));
    assert_eq!(compute_p2p_borrow_rate(&params).unwrap(), u(RAY / 10_000 * 365));
}

#[test]
fn reference_weighted_example() {
    let rate = compute_weighted_rate(u(RAY / 100 * 4), u(RAY / 100 * 2), u(100), u(300)).unwrap();
    assert_eq!(rate, u(RAY / 1_000 * 25));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn weighted_rate_without_balance_is_zero(p2p_rate in 0..RAY, pool_rate in 0..RAY) {
        prop_assert_eq!(
            compute_weighted_rate(u(p2p_rate), u(pool_rate), U256::zero(), U256::zero()).unwrap(),
            U256::zero()
        );
    }

    #[test]
    fn weighted_rate_one_sided_is_exact(
        p2p_rate in 0..RAY,
        pool_rate in 0..RAY,
        balance in 1u128..u64::MAX as u128,
    ) {
        prop_assert_eq!(
            compute_weighted_rate(u(p2p_rate), u(pool_rate), U256::zero(), u(balance)).unwrap(),
            u(pool_rate)
        );
        prop_assert_eq!(
            compute_weighted_rate(u(p2p_rate), u(pool_rate), u(balance), U256::zero()).unwrap(),
            u(p2p_rate)
        );
    }

    #[test]
    fn weighted_rate_lies_between_rates(
        p2p_rate in 0..RAY,
        pool_rate in 0..RAY,
        in_p2p in 1u128..u64::MAX as u128,
        on_pool in 1u128..u64::MAX as u128,
    ) {
        let rate = compute_weighted_rate(u(p2p_rate), u(pool_rate), u(in_p2p), u(on_pool)).unwrap();
        let total = u(in_p2p + on_pool);
        prop_assert_eq!(
            rate,
            ray_mul(u(p2p_rate), ray_div(u(in_p2p), total).unwrap()).unwrap()
                + ray_mul(u(pool_rate), ray_div(u(on_pool), total).unwrap()).unwrap()
        );

        let low = u(p2p_rate.min(pool_rate));
        let high = u(p2p_rate.max(pool_rate));
        prop_assert!(rate <= high);
        // Each share and each term is floored
        prop_assert!(rate + u(3) >= low);
    }

    #[test]
    fn inverted_market_collapses_to_pool_borrow_rate(
        pool_borrow_rate in 0..RAY,
        spread in 1..RAY,
        cursor in 0u16..=10_000,
        reserve_factor in 0u16..=10_000,
    ) {
        let params = params(pool_borrow_rate + spread, pool_borrow_rate, cursor, reserve_factor);
        prop_assert_eq!(compute_p2p_supply_rate(&params).unwrap(), u(pool_borrow_rate));
        prop_assert_eq!(compute_p2p_borrow_rate(&params).unwrap(), u(pool_borrow_rate));
    }

    #[test]
    fn closed_form_without_delta_or_idle(
        pool_supply_rate in 0..RAY,
        spread in 0..RAY,
        cursor in 0u16..=10_000,
        reserve_factor in 0u16..=10_000,
    ) {
        let pool_borrow_rate = pool_supply_rate + spread;
        let params = params(pool_supply_rate, pool_borrow_rate, cursor, reserve_factor);
        let base = weighted_avg(u(pool_supply_rate), u(pool_borrow_rate), cursor).unwrap();

        let supply_rate = compute_p2p_supply_rate(&params).unwrap();
        let borrow_rate = compute_p2p_borrow_rate(&params).unwrap();
        prop_assert_eq!(
            supply_rate,
            base - percent_mul(base - u(pool_supply_rate), reserve_factor).unwrap()
        );
        prop_assert_eq!(
            borrow_rate,
            base + percent_mul(u(pool_borrow_rate) - base, reserve_factor).unwrap()
        );
        prop_assert!(u(pool_supply_rate) <= supply_rate);
        prop_assert!(supply_rate <= borrow_rate);
        prop_assert!(borrow_rate <= u(pool_borrow_rate));
    }

    #[test]
    fn saturated_delta_converges_to_pool_rates(
        pool_supply_rate in 0..RAY,
        spread in 0..RAY,
        cursor in 0u16..=10_000,
        reserve_factor in 0u16..=10_000,
        p2p_amount in 1u128..u64::MAX as u128,
        excess in 0u128..u64::MAX as u128,
    ) {
        let pool_borrow_rate = pool_supply_rate + spread;
        let params = P2PRateComputeParams {
            p2p_amount: u(p2p_amount),
            p2p_delta: u(p2p_amount + excess),
            ..params(pool_supply_rate, pool_borrow_rate, cursor, reserve_factor)
        };
        prop_assert_eq!(compute_p2p_supply_rate(&params).unwrap(), u(pool_supply_rate));
        prop_assert_eq!(compute_p2p_borrow_rate(&params).unwrap(), u(pool_borrow_rate));
    }

    #[test]
    fn idle_and_delta_never_raise_supply_rate(
        pool_supply_rate in 0..RAY,
        spread in 0..RAY,
        cursor in 0u16..=10_000,
        reserve_factor in 0u16..=10_000,
        p2p_amount in 1u128..u64::MAX as u128,
        p2p_delta in 0u128..u64::MAX as u128,
        proportion_idle in 0..=RAY,
    ) {
        let pool_borrow_rate = pool_supply_rate + spread;
        let undiluted = params(pool_supply_rate, pool_borrow_rate, cursor, reserve_factor);
        let diluted = P2PRateComputeParams {
            p2p_amount: u(p2p_amount),
            p2p_delta: u(p2p_delta),
            proportion_idle: u(proportion_idle),
            ..undiluted
        };
        let supply_rate = compute_p2p_supply_rate(&diluted).unwrap();
        prop_assert!(supply_rate <= compute_p2p_supply_rate(&undiluted).unwrap());
        if proportion_idle == RAY {
            // Fully idle: nothing is left to earn the P2P or pool rate
            prop_assert_eq!(supply_rate, U256::zero());
        }
    }

    #[test]
    fn borrow_rate_stays_between_p2p_and_pool(
        pool_supply_rate in 0..RAY,
        spread in 0..RAY,
        cursor in 0u16..=10_000,
        reserve_factor in 0u16..=10_000,
        p2p_amount in 1u128..u64::MAX as u128,
        p2p_delta in 0u128..u64::MAX as u128,
    ) {
        let pool_borrow_rate = pool_supply_rate + spread;
        let undiluted = params(pool_supply_rate, pool_borrow_rate, cursor, reserve_factor);
        let with_delta = P2PRateComputeParams {
            p2p_amount: u(p2p_amount),
            p2p_delta: u(p2p_delta),
            ..undiluted
        };
        let borrow_rate = compute_p2p_borrow_rate(&with_delta).unwrap();
        prop_assert!(borrow_rate <= u(pool_borrow_rate));
        // Flooring both terms loses at most one unit each
        prop_assert!(borrow_rate + u(2) >= compute_p2p_borrow_rate(&undiluted).unwrap());
    }
}
