//! Meme Token Pallet
//!
//! Fungible-balance ledger for every token launched through the meme factory.
//! Each token has a fixed total supply set at issue time; balances only move
//! between holders, so the sum of all balances of a token always equals its supply.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::deps::sp_runtime::{DispatchError, DispatchResult};
use primitives::{Balance, TokenId};

pub const LOG_TARGET: &str = "runtime::meme-token";

/// Ledger operations consumed by the bonding curve and the factory.
pub trait TokenLedger<AccountId> {
  /// Create a new token and credit its whole supply to `owner`.
  fn issue(owner: &AccountId, total_supply: Balance) -> Result<TokenId, DispatchError>;

  /// Move `amount` of `token` from `from` to `to`.
  fn transfer(token: TokenId, from: &AccountId, to: &AccountId, amount: Balance)
  -> DispatchResult;

  fn balance_of(token: TokenId, who: &AccountId) -> Balance;

  fn total_supply(token: TokenId) -> Option<Balance>;
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use alloc::vec::Vec;
  use frame::deps::sp_runtime::traits::Zero;
  use frame::prelude::*;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Issue-time facts about a token
  #[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen)]
  pub struct TokenDetails<AccountId> {
    /// Account the supply was first credited to
    pub issuer: AccountId,
    /// Fixed at issue, never changes
    pub total_supply: Balance,
  }

  /// Id handed to the next issued token
  #[pallet::storage]
  pub type NextTokenId<T: Config> = StorageValue<_, TokenId, ValueQuery>;

  #[pallet::storage]
  pub type Tokens<T: Config> =
    StorageMap<_, Blake2_128Concat, TokenId, TokenDetails<T::AccountId>>;

  /// Holder balances per token. Zero balances are not stored.
  #[pallet::storage]
  pub type Accounts<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    TokenId,
    Blake2_128Concat,
    T::AccountId,
    Balance,
    ValueQuery,
  >;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A token was issued with its full supply credited to `owner`
    Issued {
      token: TokenId,
      owner: T::AccountId,
      total_supply: Balance,
    },
    /// Units moved between two holders
    Transferred {
      token: TokenId,
      from: T::AccountId,
      to: T::AccountId,
      amount: Balance,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No token with this id
    UnknownToken,
    /// Sender holds fewer units than requested
    InsufficientBalance,
    /// Tokens must be issued with a non-zero supply
    ZeroSupply,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Transfer units of a token to another holder
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(
      origin: OriginFor<T>,
      token: TokenId,
      dest: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_transfer(token, &who, &dest, amount)
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn token_details(token: TokenId) -> Option<TokenDetails<T::AccountId>> {
      Tokens::<T>::get(token)
    }

    pub fn balance_of(token: TokenId, who: &T::AccountId) -> Balance {
      Accounts::<T>::get(token, who)
    }

    pub fn total_supply(token: TokenId) -> Option<Balance> {
      Tokens::<T>::get(token).map(|details| details.total_supply)
    }

    pub fn do_issue(owner: &T::AccountId, total_supply: Balance) -> Result<TokenId, DispatchError> {
      ensure!(!total_supply.is_zero(), Error::<T>::ZeroSupply);

      let token = NextTokenId::<T>::get();
      let next = token
        .checked_add(1)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      Tokens::<T>::insert(
        token,
        TokenDetails {
          issuer: owner.clone(),
          total_supply,
        },
      );
      Accounts::<T>::insert(token, owner, total_supply);
      NextTokenId::<T>::put(next);

      log::debug!(target: LOG_TARGET, "issued token {token} with supply {total_supply}");
      Self::deposit_event(Event::Issued {
        token,
        owner: owner.clone(),
        total_supply,
      });

      Ok(token)
    }

    pub fn do_transfer(
      token: TokenId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      ensure!(Tokens::<T>::contains_key(token), Error::<T>::UnknownToken);

      let from_balance = Accounts::<T>::get(token, from);
      let remaining = from_balance
        .checked_sub(amount)
        .ok_or(Error::<T>::InsufficientBalance)?;

      if amount.is_zero() || from == to {
        return Ok(());
      }

      let credited = Accounts::<T>::get(token, to)
        .checked_add(amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;

      if remaining.is_zero() {
        Accounts::<T>::remove(token, from);
      } else {
        Accounts::<T>::insert(token, from, remaining);
      }
      Accounts::<T>::insert(token, to, credited);

      Self::deposit_event(Event::Transferred {
        token,
        from: from.clone(),
        to: to.clone(),
        amount,
      });

      Ok(())
    }
  }

  impl<T: Config> TokenLedger<T::AccountId> for Pallet<T> {
    fn issue(owner: &T::AccountId, total_supply: Balance) -> Result<TokenId, DispatchError> {
      Self::do_issue(owner, total_supply)
    }

    fn transfer(
      token: TokenId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::do_transfer(token, from, to, amount)
    }

    fn balance_of(token: TokenId, who: &T::AccountId) -> Balance {
      Accounts::<T>::get(token, who)
    }

    fn total_supply(token: TokenId) -> Option<Balance> {
      Tokens::<T>::get(token).map(|details| details.total_supply)
    }
  }

  /// Tokens issued at genesis, in order, as `(owner, total_supply)`
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub tokens: Vec<(T::AccountId, Balance)>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (owner, total_supply) in &self.tokens {
        assert!(
          Pallet::<T>::do_issue(owner, *total_supply).is_ok(),
          "genesis tokens must have a non-zero supply"
        );
      }
    }
  }
}
