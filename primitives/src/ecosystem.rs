//! Ecosystem Constants for the MemeForge pallets
//!
//! Pallet ids used to derive pallet-owned accounts, and the economic parameters
//! shared by the factory, the bonding curves and the token ledger.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// The factory account receives freshly issued supply before it is split between
/// the curve and the creator. Curve accounts are sub-accounts of the bonding curve id.
pub mod pallet_ids {
  /// Meme Factory pallet ID (token + curve registry)
  pub const MEME_FACTORY_PALLET_ID: &[u8; 8] = b"memefact";

  /// Bonding Curve pallet ID (curve reserve accounts)
  pub const BONDING_CURVE_PALLET_ID: &[u8; 8] = b"bcurve00";
}

/// Ecosystem parameters.
pub mod params {
  use super::Balance;

  /// Smallest units in one whole unit of the settlement asset (10^18).
  pub const SETTLEMENT_UNIT: Balance = 1_000_000_000_000_000_000;

  /// Upper bound on a token name in bytes.
  pub const MAX_NAME_LENGTH: u32 = 64;

  /// Upper bound on a token symbol in bytes.
  pub const MAX_SYMBOL_LENGTH: u32 = 11;

  /// Launch parameters applied when a caller has no opinion of its own.
  pub mod launch {
    use super::{Balance, SETTLEMENT_UNIT};

    /// Price of the first unit sold (0.001).
    pub const BASE_PRICE: Balance = SETTLEMENT_UNIT / 1_000;

    /// Price increment per unit sold (0.00005).
    pub const PRICE_PER_UNIT: Balance = SETTLEMENT_UNIT / 20_000;

    /// Total supply minted at creation.
    pub const INITIAL_SUPPLY: Balance = 1_000_000;

    /// Portion of the supply handed to the curve.
    pub const CURVE_SUPPLY: Balance = 500_000;
  }
}
