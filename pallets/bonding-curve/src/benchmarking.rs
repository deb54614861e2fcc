#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::deps::frame_support::traits::fungible::Mutate;
use pallet_meme_token::TokenLedger;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::params::{SETTLEMENT_UNIT, launch};

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn buy() {
    let creator: T::AccountId = account("creator", 0, 0);
    let buyer: T::AccountId = whitelisted_caller();

    let token = T::Ledger::issue(&creator, launch::INITIAL_SUPPLY).expect("issue failed");
    let (curve, reserve) = <Pallet<T> as CurveDeployer<T::AccountId>>::deploy(
      token,
      &creator,
      launch::CURVE_SUPPLY,
      launch::BASE_PRICE,
      launch::PRICE_PER_UNIT,
    )
    .expect("deploy failed");
    T::Ledger::transfer(token, &creator, &reserve, launch::CURVE_SUPPLY).expect("funding failed");

    // The measured purchase takes the last units and completes the curve.
    let amount = 1_000;
    let preceding = launch::CURVE_SUPPLY - amount;
    let budget = SETTLEMENT_UNIT.saturating_mul(1_000_000_000);
    T::Currency::set_balance(&buyer, budget);
    Pallet::<T>::do_buy(&buyer, curve, preceding, budget / 2).expect("priming buy failed");
    let cost = Pallet::<T>::get_cost(curve, preceding, amount).expect("cost failed");

    #[extrinsic_call]
    buy(RawOrigin::Signed(buyer.clone()), curve, amount, cost);

    assert_eq!(Pallet::<T>::remaining(curve), Some(0));
    assert_eq!(T::Ledger::balance_of(token, &buyer), launch::CURVE_SUPPLY);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
