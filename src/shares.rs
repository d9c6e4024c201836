// SPDX-License-Identifier: CC0-1.0

mod combine;
mod error;
mod split;

pub use combine::combine;
pub use error::{Error, ErrorKind};
pub use split::{random_identifiers, split, split_with_identifiers, split_with_rng};

/// Fewest shares a split may produce, and fewest a combination accepts.
const MIN_SHARES: usize = 2;

/// Most shares a split may produce: one per nonzero field element.
const MAX_SHARES: usize = 255;
