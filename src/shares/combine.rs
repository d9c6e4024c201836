// SPDX-License-Identifier: CC0-1.0

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use tracing::debug;

use super::error::Error;
use super::{MAX_SHARES, MIN_SHARES};

/// Reconstructs a secret from shares produced by one split.
///
/// Every share is used. The result is `share length - 1` bytes long.
///
/// The shares carry no integrity check: passing fewer shares than the threshold, shares
/// from different splits, or corrupted shares returns a wrong secret of the correct
/// length rather than an error.
///
/// # Errors
/// Fails if fewer than 2 or more than 255 shares are given, if a share is shorter than
/// 2 bytes, if the shares differ in length, or if two shares have the same identifier
/// (last byte).
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<u8>> {
    validate_shares(shares).inspect_err(|e| debug!(error = %e, "rejected shares"))?;

    let share_len = shares[0].as_ref().len();
    let identifiers: Vec<u8> = shares.iter().map(|s| s.as_ref()[share_len - 1]).collect();

    debug!(
        shares = shares.len(),
        secret_len = share_len - 1,
        "combining shares"
    );

    // The Lagrange basis at zero depends only on the identifiers, so it is shared by
    // every byte position
    let basis = lagrange_basis_at_zero(&identifiers);

    let secret = (0..share_len - 1)
        .map(|byte_idx| {
            shares
                .iter()
                .zip(&basis)
                .fold(0, |acc, (share, &l_j)| {
                    gf256::add(acc, gf256::mul(share.as_ref()[byte_idx], l_j))
                })
        })
        .collect();

    Ok(secret)
}

fn validate_shares<S: AsRef<[u8]>>(shares: &[S]) -> Result<()> {
    ensure!(
        (MIN_SHARES..=MAX_SHARES).contains(&shares.len()),
        Error::ShareSetSizeOutOfRange(shares.len())
    );

    for (index, share) in shares.iter().enumerate() {
        let len = share.as_ref().len();
        ensure!(len >= 2, Error::ShareTooShort { index, len });
    }

    let expected = shares[0].as_ref().len();
    for (index, share) in shares.iter().enumerate() {
        let found = share.as_ref().len();
        ensure!(
            found == expected,
            Error::ShareLengthMismatch {
                index,
                expected,
                found
            }
        );
    }

    if let Some(id) = shares
        .iter()
        .map(|s| s.as_ref()[expected - 1])
        .duplicates()
        .next()
    {
        bail!(Error::DuplicateIdentifier(id));
    }

    Ok(())
}

// l_j(0) = product over m != j of x_m / (x_m - x_j), where subtraction is XOR.
// Identifiers must be distinct so no denominator is zero.
fn lagrange_basis_at_zero(xs: &[u8]) -> Vec<u8> {
    xs.iter()
        .enumerate()
        .map(|(j, &x_j)| {
            xs.iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .fold(1, |acc, (_, &x_m)| {
                    gf256::mul(acc, gf256::div(x_m, gf256::add(x_m, x_j)))
                })
        })
        .collect()
}
