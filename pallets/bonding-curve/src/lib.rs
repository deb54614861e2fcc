//! Bonding Curve Pallet
//!
//! Primary issuance of launched tokens along a linear price curve. Each curve owns a
//! fixed allotment of one token in a dedicated account and sells it unit by unit,
//! the n-th unit costing `base_price + price_per_unit * n`. Proceeds go to the
//! curve's creator. There is no sell side: once the allotment is sold the curve is
//! exhausted for good.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod math;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::deps::sp_runtime::DispatchError;
use primitives::{Balance, CurveId, TokenId};

pub const LOG_TARGET: &str = "runtime::bonding-curve";

/// Curve creation as seen by the factory.
pub trait CurveDeployer<AccountId> {
  /// Register a curve selling `curve_supply` units of `token` on behalf of `creator`.
  ///
  /// Returns the curve id and the account that must hold the allotment.
  fn deploy(
    token: TokenId,
    creator: &AccountId,
    curve_supply: Balance,
    base_price: Balance,
    price_per_unit: Balance,
  ) -> Result<(CurveId, AccountId), DispatchError>;

  /// Account holding the unsold units of `curve`.
  fn curve_account(curve: CurveId) -> AccountId;
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use frame::deps::{
    frame_support::{
      PalletId,
      storage::with_storage_layer,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        tokens::Preservation,
      },
    },
    sp_runtime::traits::{AccountIdConversion, Zero},
  };
  use frame::prelude::*;
  use pallet_meme_token::TokenLedger;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Settlement asset buyers pay in
    type Currency: NativeMutate<Self::AccountId, Balance = Balance>
      + NativeInspect<Self::AccountId, Balance = Balance>;

    /// Ledger holding the tokens sold by the curves
    type Ledger: TokenLedger<Self::AccountId>;

    /// Pallet ID curve reserve accounts are derived from
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// State of one curve
  #[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
  pub struct CurveState<AccountId> {
    /// Token sold by this curve
    pub token: TokenId,
    /// Receives purchase proceeds
    pub creator: AccountId,
    /// Units the curve may sell in total
    pub curve_supply: Balance,
    /// Units sold so far, never above `curve_supply`
    pub sold: Balance,
    /// Price of the first unit
    pub base_price: Balance,
    /// Price increment per unit sold
    pub price_per_unit: Balance,
  }

  impl<AccountId> CurveState<AccountId> {
    pub fn remaining(&self) -> Balance {
      self.curve_supply.saturating_sub(self.sold)
    }

    pub fn is_exhausted(&self) -> bool {
      self.sold >= self.curve_supply
    }
  }

  /// Outcome of a successful purchase
  #[derive(Clone, Copy, Debug, Eq, PartialEq)]
  pub struct PurchaseReceipt {
    pub units_received: Balance,
    /// Withdrawn from the buyer and paid to the creator
    pub cost: Balance,
    /// Part of the offered payment left with the buyer
    pub refund: Balance,
  }

  #[pallet::storage]
  pub type NextCurveId<T: Config> = StorageValue<_, CurveId, ValueQuery>;

  #[pallet::storage]
  pub type Curves<T: Config> = StorageMap<_, Blake2_128Concat, CurveId, CurveState<T::AccountId>>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A curve was registered for a token
    CurveDeployed {
      curve: CurveId,
      token: TokenId,
      creator: T::AccountId,
      curve_supply: Balance,
      base_price: Balance,
      price_per_unit: Balance,
    },
    /// Units were bought from a curve
    Purchased {
      curve: CurveId,
      buyer: T::AccountId,
      amount: Balance,
      cost: Balance,
      refund: Balance,
    },
    /// The last unit of the allotment was sold
    CurveCompleted { curve: CurveId, token: TokenId },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No curve with this id
    UnknownCurve,
    /// Purchase amount must be greater than zero
    InvalidAmount,
    /// Purchase exceeds the units left on the curve
    CurveSupplyExhausted,
    /// Offered payment is below the cost of the purchase
    InsufficientPayment,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Buy `amount` units from `curve`.
    ///
    /// `payment` is the most the caller is willing to spend. Only the exact cost is
    /// withdrawn; the difference stays with the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::buy())]
    pub fn buy(
      origin: OriginFor<T>,
      curve: CurveId,
      amount: Balance,
      payment: Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_buy(&who, curve, amount, payment).map(|_| ())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn curve(curve: CurveId) -> Option<CurveState<T::AccountId>> {
      Curves::<T>::get(curve)
    }

    /// Units sold so far by `curve`
    pub fn sold(curve: CurveId) -> Option<Balance> {
      Curves::<T>::get(curve).map(|state| state.sold)
    }

    /// Units still available on `curve`
    pub fn remaining(curve: CurveId) -> Option<Balance> {
      Curves::<T>::get(curve).map(|state| state.remaining())
    }

    pub fn curve_account(curve: CurveId) -> T::AccountId {
      T::PalletId::get().into_sub_account_truncating(curve)
    }

    /// Cost of buying `amount` units of `curve` starting from `sold`.
    ///
    /// Reads only the curve's prices; `sold` need not be the current counter.
    pub fn get_cost(curve: CurveId, sold: Balance, amount: Balance) -> Result<Balance, DispatchError> {
      let state = Curves::<T>::get(curve).ok_or(Error::<T>::UnknownCurve)?;
      math::linear_cost(state.base_price, state.price_per_unit, sold, amount)
        .ok_or_else(|| Error::<T>::ArithmeticOverflow.into())
    }

    /// Cost of the next single unit
    pub fn spot_price(curve: CurveId) -> Result<Balance, DispatchError> {
      let state = Curves::<T>::get(curve).ok_or(Error::<T>::UnknownCurve)?;
      math::unit_price(state.base_price, state.price_per_unit, state.sold)
        .ok_or_else(|| Error::<T>::ArithmeticOverflow.into())
    }

    /// Buy `amount` units for `buyer`. Either every transfer lands or none does.
    pub fn do_buy(
      buyer: &T::AccountId,
      curve: CurveId,
      amount: Balance,
      payment: Balance,
    ) -> Result<PurchaseReceipt, DispatchError> {
      with_storage_layer(|| Self::settle_purchase(buyer, curve, amount, payment))
    }

    fn settle_purchase(
      buyer: &T::AccountId,
      curve: CurveId,
      amount: Balance,
      payment: Balance,
    ) -> Result<PurchaseReceipt, DispatchError> {
      let mut state = Curves::<T>::get(curve).ok_or(Error::<T>::UnknownCurve)?;
      ensure!(!amount.is_zero(), Error::<T>::InvalidAmount);

      let sold_after = state
        .sold
        .checked_add(amount)
        .filter(|sold_after| *sold_after <= state.curve_supply)
        .ok_or(Error::<T>::CurveSupplyExhausted)?;

      let cost = math::linear_cost(state.base_price, state.price_per_unit, state.sold, amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      ensure!(payment >= cost, Error::<T>::InsufficientPayment);
      let refund = payment - cost;

      if !cost.is_zero() {
        T::Currency::transfer(buyer, &state.creator, cost, Preservation::Expendable)?;
      }
      T::Ledger::transfer(state.token, &Self::curve_account(curve), buyer, amount)?;

      state.sold = sold_after;
      let completed = state.is_exhausted();
      Curves::<T>::insert(curve, &state);

      log::debug!(
        target: LOG_TARGET,
        "curve {curve}: sold {amount} for {cost}, {} left",
        state.remaining()
      );
      Self::deposit_event(Event::Purchased {
        curve,
        buyer: buyer.clone(),
        amount,
        cost,
        refund,
      });
      if completed {
        Self::deposit_event(Event::CurveCompleted {
          curve,
          token: state.token,
        });
      }

      Ok(PurchaseReceipt {
        units_received: amount,
        cost,
        refund,
      })
    }
  }

  impl<T: Config> CurveDeployer<T::AccountId> for Pallet<T> {
    fn deploy(
      token: TokenId,
      creator: &T::AccountId,
      curve_supply: Balance,
      base_price: Balance,
      price_per_unit: Balance,
    ) -> Result<(CurveId, T::AccountId), DispatchError> {
      ensure!(!curve_supply.is_zero(), Error::<T>::InvalidAmount);
      // Pricing the whole allotment bounds every later purchase.
      ensure!(
        math::linear_cost(base_price, price_per_unit, 0, curve_supply).is_some(),
        Error::<T>::ArithmeticOverflow
      );

      let curve = NextCurveId::<T>::get();
      let next = curve
        .checked_add(1)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      Curves::<T>::insert(
        curve,
        CurveState {
          token,
          creator: creator.clone(),
          curve_supply,
          sold: 0,
          base_price,
          price_per_unit,
        },
      );
      NextCurveId::<T>::put(next);

      Self::deposit_event(Event::CurveDeployed {
        curve,
        token,
        creator: creator.clone(),
        curve_supply,
        base_price,
        price_per_unit,
      });

      Ok((curve, Self::curve_account(curve)))
    }

    fn curve_account(curve: CurveId) -> T::AccountId {
      Self::curve_account(curve)
    }
  }
}
