#![cfg(feature = "runtime-benchmarks")]

use super::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn transfer() {
    let caller: T::AccountId = whitelisted_caller();
    let dest: T::AccountId = account("dest", 0, 0);
    let token = Pallet::<T>::do_issue(&caller, 1_000_000).expect("issue failed");

    #[extrinsic_call]
    transfer(RawOrigin::Signed(caller.clone()), token, dest.clone(), 400_000);

    assert_eq!(Pallet::<T>::balance_of(token, &dest), 400_000);
    assert_eq!(Pallet::<T>::balance_of(token, &caller), 600_000);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
