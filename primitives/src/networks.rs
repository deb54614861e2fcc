//! Networks the launch factory is deployed on.
//!
//! The network only selects configuration values (currently the default deploy
//! fee). Pricing never depends on it.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::ecosystem::{Balance, params::SETTLEMENT_UNIT};

#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Network {
  Celo,
  #[default]
  CeloSepolia,
  Base,
  BaseSepolia,
  Optimism,
  OptimismSepolia,
  Arbitrum,
  ArbitrumSepolia,
}

impl Network {
  pub const ALL: [Network; 8] = [
    Network::Celo,
    Network::CeloSepolia,
    Network::Base,
    Network::BaseSepolia,
    Network::Optimism,
    Network::OptimismSepolia,
    Network::Arbitrum,
    Network::ArbitrumSepolia,
  ];

  /// EVM chain id of the network.
  pub const fn chain_id(self) -> u64 {
    match self {
      Network::Celo => 42_220,
      Network::CeloSepolia => 11_142_220,
      Network::Base => 8_453,
      Network::BaseSepolia => 84_532,
      Network::Optimism => 10,
      Network::OptimismSepolia => 11_155_420,
      Network::Arbitrum => 42_161,
      Network::ArbitrumSepolia => 421_614,
    }
  }

  pub fn from_chain_id(chain_id: u64) -> Option<Self> {
    Self::ALL.into_iter().find(|n| n.chain_id() == chain_id)
  }

  pub const fn is_testnet(self) -> bool {
    matches!(
      self,
      Network::CeloSepolia
        | Network::BaseSepolia
        | Network::OptimismSepolia
        | Network::ArbitrumSepolia
    )
  }

  /// Creation fee charged when the factory is configured for this network.
  ///
  /// Celo chains charge one whole CELO; the L2s charge 0.0001 ETH.
  pub const fn default_deploy_fee(self) -> Balance {
    match self {
      Network::Celo | Network::CeloSepolia => SETTLEMENT_UNIT,
      _ => SETTLEMENT_UNIT / 10_000,
    }
  }
}
