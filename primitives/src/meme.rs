use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::ecosystem::{Balance, params::launch};

/// Identifier of a token held in the meme token ledger.
pub type TokenId = u32;

/// Identifier of a bonding curve instance.
pub type CurveId = u32;

/// Position of a deployment record in the factory registry.
pub type MemeIndex = u32;

/// Numeric half of a token launch request.
///
/// `base_price` and `price_per_unit` are denominated in the smallest unit of the
/// settlement asset. `curve_supply` is the part of `initial_supply` sold through
/// the curve; the creator keeps the rest.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct LaunchParams {
  pub base_price: Balance,
  pub price_per_unit: Balance,
  pub initial_supply: Balance,
  pub curve_supply: Balance,
}

impl Default for LaunchParams {
  fn default() -> Self {
    Self {
      base_price: launch::BASE_PRICE,
      price_per_unit: launch::PRICE_PER_UNIT,
      initial_supply: launch::INITIAL_SUPPLY,
      curve_supply: launch::CURVE_SUPPLY,
    }
  }
}

impl LaunchParams {
  /// `0 < curve_supply <= initial_supply`. Prices may be zero.
  pub fn has_valid_supplies(&self) -> bool {
    self.initial_supply > 0 && self.curve_supply > 0 && self.curve_supply <= self.initial_supply
  }

  /// Units credited to the creator at launch.
  pub fn creator_allocation(&self) -> Balance {
    self.initial_supply.saturating_sub(self.curve_supply)
  }
}
