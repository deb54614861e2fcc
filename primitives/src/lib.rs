#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod meme;
pub mod networks;

pub use ecosystem::*;
pub use meme::*;
pub use networks::Network;
