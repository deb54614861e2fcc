//! Linear bonding curve arithmetic.
//!
//! The n-th unit sold (zero-indexed) is priced at `base_price + price_per_unit * n`.
//! Buying `amount` units after `sold` costs the sum of that progression:
//!
//! `amount * base_price + price_per_unit * (amount * sold + amount * (amount - 1) / 2)`
//!
//! Intermediate products are taken in 256 bits. Any result that does not fit a
//! `Balance` is reported as `None`, never wrapped.

use polkadot_sdk::sp_core::U256;
use primitives::Balance;

/// Marginal price of unit `n`.
pub fn unit_price(base_price: Balance, price_per_unit: Balance, n: Balance) -> Option<Balance> {
  price_per_unit.checked_mul(n)?.checked_add(base_price)
}

/// Closed-form cost of buying `amount` units starting at `sold`.
pub fn linear_cost(
  base_price: Balance,
  price_per_unit: Balance,
  sold: Balance,
  amount: Balance,
) -> Option<Balance> {
  if amount == 0 {
    return Some(0);
  }

  let amount = U256::from(amount);
  let sold = U256::from(sold);

  let flat = amount.checked_mul(U256::from(base_price))?;

  // amount * (amount - 1) is always even
  let triangle = amount.checked_mul(amount.saturating_sub(U256::one()))? / U256::from(2u8);
  let steps = amount.checked_mul(sold)?.checked_add(triangle)?;
  let slope = steps.checked_mul(U256::from(price_per_unit))?;

  let total = flat.checked_add(slope)?;
  if total > U256::from(u128::MAX) {
    return None;
  }

  Some(total.as_u128())
}
