use crate as pallet_bonding_curve;
use crate::CurveDeployer;
use pallet_meme_token::TokenLedger;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{Balance, CurveId, TokenId, pallet_ids::BONDING_CURVE_PALLET_ID};

type Block = frame_system::mocking::MockBlock<Test>;

// Wide enough that curve sub-accounts keep their curve id after truncation.
pub type AccountId = u128;

pub const CREATOR: AccountId = 1;
pub const BUYER: AccountId = 2;
pub const OTHER_BUYER: AccountId = 3;
pub const POOR_BUYER: AccountId = 4;

pub const INITIAL_NATIVE: Balance = 1_000_000_000_000_000_000_000;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    MemeToken: pallet_meme_token,
    BondingCurve: pallet_bonding_curve,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl pallet_meme_token::Config for Test {
  type WeightInfo = ();
}

pub struct CurvePalletId;
impl Get<PalletId> for CurvePalletId {
  fn get() -> PalletId {
    PalletId(*BONDING_CURVE_PALLET_ID)
  }
}

impl pallet_bonding_curve::Config for Test {
  type Currency = Balances;
  type Ledger = MemeToken;
  type PalletId = CurvePalletId;
  type WeightInfo = ();
}

/// Issue a token to CREATOR, deploy a curve for it and fund the curve account,
/// the same sequence the factory runs.
pub fn launch_curve(
  base_price: Balance,
  price_per_unit: Balance,
  initial_supply: Balance,
  curve_supply: Balance,
) -> (TokenId, CurveId) {
  let token = <MemeToken as TokenLedger<AccountId>>::issue(&CREATOR, initial_supply).unwrap();
  let (curve, reserve) = <BondingCurve as CurveDeployer<AccountId>>::deploy(
    token,
    &CREATOR,
    curve_supply,
    base_price,
    price_per_unit,
  )
  .unwrap();
  <MemeToken as TokenLedger<AccountId>>::transfer(token, &CREATOR, &reserve, curve_supply).unwrap();
  (token, curve)
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (CREATOR, INITIAL_NATIVE),
      (BUYER, INITIAL_NATIVE),
      (OTHER_BUYER, INITIAL_NATIVE),
      (POOR_BUYER, 20),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
