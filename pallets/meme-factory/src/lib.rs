//! Meme Factory Pallet
//!
//! Entry point for launching a meme token. A single `create_token` call collects
//! the deploy fee, issues the token, deploys a bonding curve for it, hands the
//! curve its allotment and the creator the rest, then appends a deployment
//! record to an append-only registry.
//!
//! ## Fees
//!
//! The caller offers a `payment` of at least the current [`DeployFee`]. The whole
//! payment is collected: `ProtocolFeeShare` of it goes to `TreasuryAccount` and
//! the remainder to the fee recipient (the owner unless one has been set).
//! The owner may change the fee at any time; records keep the fee they paid.
//!
//! ## Registry
//!
//! Records are indexed from zero in creation order and never modified or
//! removed.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use primitives::{Balance, CurveId, LaunchParams, MemeIndex, TokenId};

pub const LOG_TARGET: &str = "runtime::meme-factory";

#[frame::pallet]
pub mod pallet {
  use super::*;
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      CloneNoBound, DebugNoBound, EqNoBound, PalletId, PartialEqNoBound,
      storage::with_storage_layer,
      traits::{
        UnixTime,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        tokens::{Preservation, Provenance},
      },
    },
    sp_runtime::{
      DispatchError, Permill,
      traits::{AccountIdConversion, SaturatedConversion, Zero},
    },
  };
  use frame::prelude::*;
  use pallet_bonding_curve::{CurveDeployer, math};
  use pallet_meme_token::TokenLedger;
  use primitives::Network;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Asset the deploy fee is paid in
    type Currency: NativeMutate<Self::AccountId, Balance = Balance>
      + NativeInspect<Self::AccountId, Balance = Balance>;

    /// Ledger new tokens are issued on
    type Ledger: TokenLedger<Self::AccountId>;

    /// Deploys the curve paired with each token
    type Curves: CurveDeployer<Self::AccountId>;

    /// Pallet ID for the account that holds a token's supply during launch
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Source of record timestamps
    type Time: UnixTime;

    #[pallet::constant]
    type MaxNameLength: Get<u32>;

    #[pallet::constant]
    type MaxSymbolLength: Get<u32>;

    /// Part of every deploy payment routed to the treasury
    #[pallet::constant]
    type ProtocolFeeShare: Get<Permill>;

    type TreasuryAccount: Get<Self::AccountId>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  pub type NameOf<T> = BoundedVec<u8, <T as Config>::MaxNameLength>;
  pub type SymbolOf<T> = BoundedVec<u8, <T as Config>::MaxSymbolLength>;

  /// One launched token and its curve
  #[derive(
    CloneNoBound,
    DebugNoBound,
    Decode,
    Encode,
    EqNoBound,
    PartialEqNoBound,
    TypeInfo,
    MaxEncodedLen,
  )]
  #[scale_info(skip_type_params(T))]
  #[codec(mel_bound())]
  pub struct DeploymentRecord<T: Config> {
    pub index: MemeIndex,
    pub token: TokenId,
    pub curve: CurveId,
    /// Holds the curve's unsold units
    pub curve_account: T::AccountId,
    pub creator: T::AccountId,
    pub name: NameOf<T>,
    pub symbol: SymbolOf<T>,
    pub initial_supply: Balance,
    pub curve_supply: Balance,
    pub base_price: Balance,
    pub price_per_unit: Balance,
    /// Payment collected at creation
    pub fee_paid: Balance,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
  }

  #[pallet::storage]
  pub type Memes<T: Config> = StorageMap<_, Blake2_128Concat, MemeIndex, DeploymentRecord<T>>;

  /// Number of records, also the index of the next one
  #[pallet::storage]
  pub type MemesCount<T: Config> = StorageValue<_, MemeIndex, ValueQuery>;

  #[pallet::storage]
  pub type DeployFee<T: Config> = StorageValue<_, Balance, ValueQuery>;

  #[pallet::storage]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId>;

  /// Receives deploy fees when set; otherwise the owner does
  #[pallet::storage]
  pub type FeeRecipient<T: Config> = StorageValue<_, T::AccountId>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A token and its curve were launched
    MemeCreated {
      index: MemeIndex,
      token: TokenId,
      curve: CurveId,
      curve_account: T::AccountId,
      creator: T::AccountId,
      symbol: SymbolOf<T>,
      fee_paid: Balance,
    },
    DeployFeeUpdated {
      old_fee: Balance,
      new_fee: Balance,
    },
    FeeRecipientUpdated {
      recipient: T::AccountId,
    },
    OwnershipTransferred {
      old_owner: T::AccountId,
      new_owner: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Empty or oversized name/symbol, inconsistent supplies, or a curve too
    /// expensive to price
    InvalidParameters,
    /// Payment is below the deploy fee
    InsufficientFee,
    /// Caller is not the registry owner
    Unauthorized,
    /// No record at this index
    IndexOutOfRange,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Launch a token with its bonding curve.
    ///
    /// The whole `payment` is collected and must cover the current deploy fee.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_token())]
    pub fn create_token(
      origin: OriginFor<T>,
      name: Vec<u8>,
      symbol: Vec<u8>,
      base_price: Balance,
      price_per_unit: Balance,
      initial_supply: Balance,
      curve_supply: Balance,
      payment: Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let params = LaunchParams {
        base_price,
        price_per_unit,
        initial_supply,
        curve_supply,
      };
      Self::do_create_token(&who, name, symbol, params, payment).map(|_| ())
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_deploy_fee())]
    pub fn set_deploy_fee(origin: OriginFor<T>, new_fee: Balance) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_fee = DeployFee::<T>::get();
      DeployFee::<T>::put(new_fee);
      log::debug!(target: LOG_TARGET, "deploy fee {old_fee} -> {new_fee}");
      Self::deposit_event(Event::DeployFeeUpdated { old_fee, new_fee });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_fee_recipient())]
    pub fn set_fee_recipient(origin: OriginFor<T>, recipient: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      FeeRecipient::<T>::put(&recipient);
      Self::deposit_event(Event::FeeRecipientUpdated { recipient });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let old_owner = Self::ensure_owner(origin)?;
      Owner::<T>::put(&new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        old_owner,
        new_owner,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn memes_count() -> MemeIndex {
      MemesCount::<T>::get()
    }

    pub fn memes(index: MemeIndex) -> Result<DeploymentRecord<T>, DispatchError> {
      Memes::<T>::get(index).ok_or_else(|| Error::<T>::IndexOutOfRange.into())
    }

    /// Up to `limit` records, most recent first
    pub fn memes_newest_first(limit: u32) -> Vec<DeploymentRecord<T>> {
      (0..MemesCount::<T>::get())
        .rev()
        .take(limit as usize)
        .filter_map(|index| Memes::<T>::get(index))
        .collect()
    }

    pub fn deploy_fee() -> Balance {
      DeployFee::<T>::get()
    }

    pub fn owner() -> Option<T::AccountId> {
      Owner::<T>::get()
    }

    /// The explicit recipient, else the owner set at genesis.
    pub fn fee_recipient() -> T::AccountId {
      FeeRecipient::<T>::get()
        .or_else(|| Owner::<T>::get())
        .unwrap_or_else(Self::account_id)
    }

    /// Holds a token's supply between issue and allocation
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(
        Owner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Ok(who)
    }

    /// Launch a token for `creator`, returning `(token, curve, index)`.
    ///
    /// Runs in its own storage layer: on error no fee is kept and nothing is issued.
    pub fn do_create_token(
      creator: &T::AccountId,
      name: Vec<u8>,
      symbol: Vec<u8>,
      params: LaunchParams,
      payment: Balance,
    ) -> Result<(TokenId, CurveId, MemeIndex), DispatchError> {
      with_storage_layer(|| Self::launch(creator, name, symbol, params, payment))
    }

    fn launch(
      creator: &T::AccountId,
      name: Vec<u8>,
      symbol: Vec<u8>,
      params: LaunchParams,
      payment: Balance,
    ) -> Result<(TokenId, CurveId, MemeIndex), DispatchError> {
      ensure!(
        !name.is_empty() && !symbol.is_empty(),
        Error::<T>::InvalidParameters
      );
      let name: NameOf<T> = name
        .try_into()
        .map_err(|_| Error::<T>::InvalidParameters)?;
      let symbol: SymbolOf<T> = symbol
        .try_into()
        .map_err(|_| Error::<T>::InvalidParameters)?;
      ensure!(params.has_valid_supplies(), Error::<T>::InvalidParameters);
      ensure!(
        math::linear_cost(params.base_price, params.price_per_unit, 0, params.curve_supply)
          .is_some(),
        Error::<T>::InvalidParameters
      );
      ensure!(payment >= DeployFee::<T>::get(), Error::<T>::InsufficientFee);

      let index = MemesCount::<T>::get();
      let next_count = index
        .checked_add(1)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      Self::collect_fee(creator, payment)?;

      let holding = Self::account_id();
      let token = T::Ledger::issue(&holding, params.initial_supply)?;
      let (curve, curve_account) = T::Curves::deploy(
        token,
        creator,
        params.curve_supply,
        params.base_price,
        params.price_per_unit,
      )?;
      T::Ledger::transfer(token, &holding, &curve_account, params.curve_supply)?;
      T::Ledger::transfer(token, &holding, creator, params.creator_allocation())?;

      let record = DeploymentRecord::<T> {
        index,
        token,
        curve,
        curve_account: curve_account.clone(),
        creator: creator.clone(),
        name,
        symbol: symbol.clone(),
        initial_supply: params.initial_supply,
        curve_supply: params.curve_supply,
        base_price: params.base_price,
        price_per_unit: params.price_per_unit,
        fee_paid: payment,
        timestamp: T::Time::now().as_millis().saturated_into::<u64>(),
      };
      Memes::<T>::insert(index, record);
      MemesCount::<T>::put(next_count);

      log::debug!(
        target: LOG_TARGET,
        "meme #{index}: token {token}, curve {curve}, fee {payment}"
      );
      Self::deposit_event(Event::MemeCreated {
        index,
        token,
        curve,
        curve_account,
        creator: creator.clone(),
        symbol,
        fee_paid: payment,
      });

      Ok((token, curve, index))
    }

    fn collect_fee(payer: &T::AccountId, payment: Balance) -> DispatchResult {
      let treasury = T::TreasuryAccount::get();
      let mut protocol_cut = T::ProtocolFeeShare::get() * payment;
      // A cut the treasury cannot receive (dust below the existential deposit)
      // goes to the fee recipient with the rest.
      if !protocol_cut.is_zero()
        && T::Currency::can_deposit(&treasury, protocol_cut, Provenance::Extant)
          .into_result()
          .is_err()
      {
        protocol_cut = Zero::zero();
      }
      let recipient_cut = payment.saturating_sub(protocol_cut);

      for (dest, amount) in [
        (treasury, protocol_cut),
        (Self::fee_recipient(), recipient_cut),
      ] {
        if !amount.is_zero() {
          T::Currency::transfer(payer, &dest, amount, Preservation::Expendable)?;
        }
      }
      Ok(())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Required; only the owner can change the fee or the fee recipient
    pub owner: Option<T::AccountId>,
    pub fee_recipient: Option<T::AccountId>,
    /// Overrides the network's default deploy fee
    pub deploy_fee: Option<Balance>,
    pub network: Network,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      let Some(owner) = &self.owner else {
        panic!("meme factory genesis requires an owner");
      };
      Owner::<T>::put(owner);
      if let Some(recipient) = &self.fee_recipient {
        FeeRecipient::<T>::put(recipient);
      }
      DeployFee::<T>::put(
        self
          .deploy_fee
          .unwrap_or_else(|| self.network.default_deploy_fee()),
      );
    }
  }
}
