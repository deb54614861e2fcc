use crate as pallet_meme_factory;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, parameter_types,
  traits::{ConstU32, ConstU64},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, Permill,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  Balance, LaunchParams, Network,
  pallet_ids::{BONDING_CURVE_PALLET_ID, MEME_FACTORY_PALLET_ID},
  params::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH},
};

type Block = frame_system::mocking::MockBlock<Test>;

// Wide enough that curve sub-accounts keep their curve id after truncation.
pub type AccountId = u128;

pub const OWNER: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const BUYER: AccountId = 4;
pub const POOR: AccountId = 5;
pub const FEE_SINK: AccountId = 8;
pub const TREASURY: AccountId = 9;

pub const INITIAL_NATIVE: Balance = 1_000_000_000_000;
pub const POOR_NATIVE: Balance = 50;
pub const DEPLOY_FEE: Balance = 1_000;
pub const LAUNCH_TIME: u64 = 1_700_000_000_000;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Timestamp: polkadot_sdk::pallet_timestamp,
    MemeToken: pallet_meme_token,
    BondingCurve: pallet_bonding_curve,
    MemeFactory: pallet_meme_factory,
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
  type ExistentialDeposit = ExistentialDeposit;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

impl pallet_meme_token::Config for Test {
  type WeightInfo = ();
}

parameter_types! {
  pub static ExistentialDeposit: Balance = 1;
  pub const CurvePalletId: PalletId = PalletId(*BONDING_CURVE_PALLET_ID);
  pub const FactoryPalletId: PalletId = PalletId(*MEME_FACTORY_PALLET_ID);
  pub const TreasuryAccount: AccountId = TREASURY;
  pub const ProtocolFeeShare: Permill = Permill::from_percent(10);
}

impl pallet_bonding_curve::Config for Test {
  type Currency = Balances;
  type Ledger = MemeToken;
  type PalletId = CurvePalletId;
  type WeightInfo = ();
}

impl pallet_meme_factory::Config for Test {
  type Currency = Balances;
  type Ledger = MemeToken;
  type Curves = BondingCurve;
  type PalletId = FactoryPalletId;
  type Time = Timestamp;
  type MaxNameLength = ConstU32<MAX_NAME_LENGTH>;
  type MaxSymbolLength = ConstU32<MAX_SYMBOL_LENGTH>;
  type ProtocolFeeShare = ProtocolFeeShare;
  type TreasuryAccount = TreasuryAccount;
  type WeightInfo = ();
}

/// Small curve used by most tests: 10 + n per unit, 600 of 1000 units on sale.
pub fn small_launch() -> LaunchParams {
  LaunchParams {
    base_price: 10,
    price_per_unit: 1,
    initial_supply: 1_000,
    curve_supply: 600,
  }
}

pub fn factory_genesis() -> pallet_meme_factory::GenesisConfig<Test> {
  pallet_meme_factory::GenesisConfig {
    owner: Some(OWNER),
    fee_recipient: None,
    deploy_fee: Some(DEPLOY_FEE),
    network: Network::CeloSepolia,
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  new_test_ext_with(factory_genesis())
}

pub fn new_test_ext_with(
  factory: pallet_meme_factory::GenesisConfig<Test>,
) -> polkadot_sdk::sp_io::TestExternalities {
  ExistentialDeposit::set(1);
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (OWNER, INITIAL_NATIVE),
      (ALICE, INITIAL_NATIVE),
      (BOB, INITIAL_NATIVE),
      (BUYER, INITIAL_NATIVE),
      (POOR, POOR_NATIVE),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  factory.assimilate_storage(&mut t).unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    Timestamp::set_timestamp(LAUNCH_TIME);
  });
  ext
}
