// SPDX-License-Identifier: CC0-1.0

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use rand::{CryptoRng, seq::SliceRandom};
use tracing::debug;

use super::error::Error;
use super::{MAX_SHARES, MIN_SHARES};

/// Splits `secret` into `shares` shares, any `threshold` of which recover it.
///
/// Coefficients come from the thread-local CSPRNG and share `k` of the result has
/// identifier `k + 1`. Each share is `secret.len() + 1` bytes: one evaluation per secret
/// byte followed by the identifier.
///
/// # Errors
/// Fails if the secret is empty, if `shares` or `threshold` is outside 2..=255, or if
/// `threshold` is greater than `shares`.
pub fn split(secret: &[u8], shares: usize, threshold: usize) -> Result<Vec<Vec<u8>>> {
    split_with_rng(secret, shares, threshold, &mut rand::rng())
}

/// Identical to `split` except the polynomial coefficients are drawn from `rng`.
///
/// Exactly `secret.len() * (threshold - 1)` bytes are read from `rng`, position by
/// position, so a deterministic source yields reproducible shares.
///
/// # Errors
/// Same as `split`. Nothing is read from `rng` when the parameters are rejected.
pub fn split_with_rng<R: CryptoRng + ?Sized>(
    secret: &[u8],
    shares: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Vec<u8>>> {
    validate_parameters(secret, shares, threshold)
        .inspect_err(|e| debug!(error = %e, "rejected split parameters"))?;

    let identifiers: Vec<u8> = (1..=shares as u8).collect();
    Ok(split_unchecked(secret, threshold, &identifiers, rng))
}

/// Splits `secret` into one share per entry of `identifiers`, evaluating the polynomials
/// at those points.
///
/// # Errors
/// In addition to the checks of `split`, fails if an identifier is zero or repeated.
pub fn split_with_identifiers<R: CryptoRng + ?Sized>(
    secret: &[u8],
    threshold: usize,
    identifiers: &[u8],
    rng: &mut R,
) -> Result<Vec<Vec<u8>>> {
    validate_parameters(secret, identifiers.len(), threshold)
        .and_then(|_| validate_identifiers(identifiers))
        .inspect_err(|e| debug!(error = %e, "rejected split parameters"))?;

    Ok(split_unchecked(secret, threshold, identifiers, rng))
}

// Callers must have validated the parameters and identifiers.
fn split_unchecked<R: CryptoRng + ?Sized>(
    secret: &[u8],
    threshold: usize,
    identifiers: &[u8],
    rng: &mut R,
) -> Vec<Vec<u8>> {
    debug!(
        shares = identifiers.len(),
        threshold,
        secret_len = secret.len(),
        "splitting secret"
    );

    let mut shares: Vec<Vec<u8>> = identifiers
        .iter()
        .map(|_| Vec::with_capacity(secret.len() + 1))
        .collect();

    // coeffs = [a_0, a_1, ..., a_{t-1}], a_0 being the secret byte
    let mut coeffs = vec![0u8; threshold];
    for &secret_byte in secret {
        coeffs[0] = secret_byte;
        rng.fill_bytes(&mut coeffs[1..]);

        for (share, &x) in shares.iter_mut().zip(identifiers) {
            share.push(evaluate(&coeffs, x));
        }
    }
    coeffs.fill(0);

    for (share, &x) in shares.iter_mut().zip(identifiers) {
        share.push(x);
    }

    shares
}

/// Returns `count` distinct nonzero identifiers in random order, for use with
/// `split_with_identifiers` when a share's identifier should not reveal its position.
pub fn random_identifiers<R: CryptoRng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<u8>> {
    ensure!(
        (MIN_SHARES..=MAX_SHARES).contains(&count),
        Error::ShareCountOutOfRange(count)
    );

    let mut identifiers: Vec<u8> = (1..=u8::MAX).collect();
    identifiers.shuffle(rng);
    identifiers.truncate(count);

    Ok(identifiers)
}

fn validate_parameters(secret: &[u8], shares: usize, threshold: usize) -> Result<()> {
    ensure!(!secret.is_empty(), Error::EmptySecret);
    ensure!(
        (MIN_SHARES..=MAX_SHARES).contains(&shares),
        Error::ShareCountOutOfRange(shares)
    );
    ensure!(
        (MIN_SHARES..=MAX_SHARES).contains(&threshold),
        Error::ThresholdOutOfRange(threshold)
    );
    ensure!(
        threshold <= shares,
        Error::ThresholdExceedsShares { threshold, shares }
    );
    Ok(())
}

fn validate_identifiers(identifiers: &[u8]) -> Result<()> {
    ensure!(!identifiers.contains(&0), Error::ZeroIdentifier);
    if let Some(&id) = identifiers.iter().duplicates().next() {
        bail!(Error::DuplicateIdentifier(id));
    }
    Ok(())
}

// Evaluates P(x) = coeffs[0] + coeffs[1]*x + ... + coeffs[k-1]*x^(k-1) using Horner's method.
fn evaluate(coeffs: &[u8], x: u8) -> u8 {
    coeffs
        .iter()
        .rev()
        .fold(0, |acc, &c| gf256::add(gf256::mul(acc, x), c))
}
