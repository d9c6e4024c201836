// Written in 2025 by Joshua Doman <joshsdoman@gmail.com>
// SPDX-License-Identifier: CC0-1.0

//! # Secret Shares
//!
//! A (t, n) threshold secret sharing scheme over GF(2^8): a secret byte string is split
//! into `n` shares such that any `t` of them recover the secret exactly, while `t - 1` or
//! fewer reveal nothing about it.
//!
//! ## How It Works
//!
//! 1. **Per-Byte Polynomials**: Every byte of the secret becomes the constant term of its
//!    own polynomial of degree `t - 1`, whose other coefficients are drawn from a
//!    cryptographically secure random source
//! 2. **Evaluation**: Each polynomial is evaluated at `n` distinct nonzero points, the share
//!    identifiers. A share is the list of evaluations followed by its identifier byte
//! 3. **Interpolation**: Given shares from the same split, each secret byte is recovered as
//!    the value at zero of the Lagrange interpolation of the shares' points
//!
//! All arithmetic happens in the [`gf256`] field (reduction polynomial 0x11B, generator
//! 0xE5), so shares interoperate with other implementations that use the same tables.
//!
//! ## Usage
//!
//! ```rust
//! use secret_shares::{combine, split};
//!
//! let secret = b"hi";
//! let shares = split(secret, 3, 2).unwrap();
//! assert_eq!(shares.len(), 3);
//! assert!(shares.iter().all(|share| share.len() == secret.len() + 1));
//!
//! // Any two of the three shares recover the secret
//! let recovered = combine(&[&shares[2], &shares[0]]).unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! Randomness can be injected for reproducible shares:
//!
//! ```rust
//! use rand::SeedableRng;
//! use secret_shares::{SeededRng, split_with_rng};
//!
//! let a = split_with_rng(b"secret", 5, 3, &mut SeededRng::seed_from_u64(7)).unwrap();
//! let b = split_with_rng(b"secret", 5, 3, &mut SeededRng::seed_from_u64(7)).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Security Considerations
//!
//! - Shares carry no integrity protection. Combining corrupted shares, shares from
//!   different splits, or fewer than the threshold silently returns a wrong value of the
//!   correct length. Callers needing integrity must add a checksum or MAC to the secret
//! - The secrecy of a split is only as good as the random source that produced it
//! - Field multiplication masks zero operands instead of branching on them, but no
//!   claim of constant-time execution is made for the platform's table lookups
//!

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

pub use gf256;

mod rng;
mod shares;

pub use rng::SeededRng;
pub use shares::*;

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::SliceRandom};

    #[test]
    fn test_integration() {
        let secret = b"correct horse battery staple".to_vec();

        for n in 2..=6 {
            for t in 2..=n {
                let shares = split(&secret, n, t).unwrap();
                assert_eq!(shares.len(), n);

                for subset in shares.iter().combinations(t) {
                    assert_eq!(combine(&subset).unwrap(), secret, "n={n} t={t}");
                }

                // More than the threshold also works
                assert_eq!(combine(&shares).unwrap(), secret);
            }
        }
    }

    #[test]
    fn test_random_parameters() {
        let mut rng = rand::rng();

        for _ in 0..20 {
            let len = rng.random_range(1..=64);
            let secret: Vec<u8> = (0..len).map(|_| rng.random()).collect();
            let n = rng.random_range(2..=255);
            let t = rng.random_range(2..=n);

            let mut shares = split(&secret, n, t).unwrap();
            shares.shuffle(&mut rng);
            shares.truncate(t);

            assert_eq!(combine(&shares).unwrap(), secret, "n={n} t={t}");
        }
    }

    #[test]
    fn test_maximum_parameters() {
        let secret = vec![0xA5; 8];
        let shares = split(&secret, 255, 255).unwrap();

        let identifiers: Vec<u8> = shares.iter().map(|s| s[s.len() - 1]).collect();
        assert_eq!(identifiers, (1..=255).collect::<Vec<u8>>());
        assert_eq!(combine(&shares).unwrap(), secret);
    }

    #[test]
    fn test_random_identifiers() {
        let mut rng = SeededRng::seed_from_u64(42);
        let secret = b"shuffled identifiers";

        let identifiers = random_identifiers(7, &mut rng).unwrap();
        let shares = split_with_identifiers(secret, 4, &identifiers, &mut rng).unwrap();

        for (share, id) in shares.iter().zip(&identifiers) {
            assert_eq!(share.last(), Some(id));
        }
        assert_eq!(combine(&shares[3..]).unwrap(), secret);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = split(b"", 3, 2).unwrap_err();
        assert!(err.to_string().contains("secret cannot be empty"));
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptySecret));

        let err = combine(&[vec![1u8, 2]]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::ShareSetSizeOutOfRange(1))
        );
        assert_eq!(err.downcast_ref::<Error>().unwrap().kind(), ErrorKind::Range);
    }
}
