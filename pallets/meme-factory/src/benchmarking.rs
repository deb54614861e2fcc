#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::vec;
use frame::deps::frame_support::traits::{Get, fungible::Mutate};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::params::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, SETTLEMENT_UNIT};

fn install_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = account("owner", 0, 0);
  Owner::<T>::put(&owner);
  owner
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_token() {
    install_owner::<T>();
    let caller: T::AccountId = whitelisted_caller();
    let fee = DeployFee::<T>::get();
    T::Currency::set_balance(&caller, fee.saturating_add(SETTLEMENT_UNIT));
    let params = LaunchParams::default();
    let name = vec![b'n'; T::MaxNameLength::get().min(MAX_NAME_LENGTH) as usize];
    let symbol = vec![b'S'; T::MaxSymbolLength::get().min(MAX_SYMBOL_LENGTH) as usize];

    #[extrinsic_call]
    create_token(
      RawOrigin::Signed(caller.clone()),
      name,
      symbol,
      params.base_price,
      params.price_per_unit,
      params.initial_supply,
      params.curve_supply,
      fee,
    );

    assert_eq!(MemesCount::<T>::get(), 1);
    assert_eq!(Pallet::<T>::memes(0).map(|record| record.creator), Ok(caller));
  }

  #[benchmark]
  fn set_deploy_fee() {
    let owner = install_owner::<T>();

    #[extrinsic_call]
    set_deploy_fee(RawOrigin::Signed(owner), 42);

    assert_eq!(DeployFee::<T>::get(), 42);
  }

  #[benchmark]
  fn set_fee_recipient() {
    let owner = install_owner::<T>();
    let recipient: T::AccountId = account("recipient", 0, 0);

    #[extrinsic_call]
    set_fee_recipient(RawOrigin::Signed(owner), recipient.clone());

    assert_eq!(FeeRecipient::<T>::get(), Some(recipient));
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = install_owner::<T>();
    let successor: T::AccountId = account("successor", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), successor.clone());

    assert_eq!(Owner::<T>::get(), Some(successor));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
