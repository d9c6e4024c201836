// SPDX-License-Identifier: CC0-1.0

//! # GF(2^8)
//!
//! Arithmetic over the finite field with 256 elements, each represented as a byte.
//!
//! The field is built with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x11B)
//! and the multiplicative group is generated by 0xE5. These two choices fix the
//! logarithm and exponent tables, which match the tables used by HashiCorp Vault and
//! the `shamir-secret-sharing` packages, so values produced here interoperate with them.
//!
//! Addition is XOR. Multiplication and division go through the tables, which are
//! computed once per process on first use and are read-only afterwards.
//!
//! ```rust
//! assert_eq!(gf256::add(0x53, 0x53), 0);
//! assert_eq!(gf256::mul(0x53, 0xCA), 0x01);
//! assert_eq!(gf256::div(gf256::mul(0x1F, 0x40), 0x40), 0x1F);
//! ```

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

use std::sync::LazyLock;

/// The reduction polynomial x^8 + x^4 + x^3 + x + 1.
pub const POLYNOMIAL: u16 = 0x11B;

/// Generator of the multiplicative group used to build the tables.
pub const GENERATOR: u8 = 0xE5;

/// Order of the multiplicative group.
const ORDER: usize = 255;

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

struct Tables {
    // exp[i] = GENERATOR^i, with exp[255] = exp[0] so a sum mod 255 always lands inside
    exp: [u8; 256],
    // log[exp[i]] = i; log[0] is 0 and is never observed
    log: [u8; 256],
}

impl Tables {
    fn build() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut x = 1u8;
        for i in 0..ORDER {
            exp[i] = x;
            log[x as usize] = i as u8;
            x = mul_reference(x, GENERATOR);
        }
        exp[ORDER] = exp[0];

        Self { exp, log }
    }
}

// Shift-and-add multiplication. Only used to build the tables.
const fn mul_reference(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    while b != 0 {
        if b & 1 == 1 {
            p ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= (POLYNOMIAL & 0xFF) as u8;
        }
        b >>= 1;
    }
    p
}

// 0xFF if x is nonzero, 0x00 otherwise, without branching on x.
#[inline]
fn nonzero_mask(x: u8) -> u8 {
    ((x as u16).wrapping_neg() >> 8) as u8
}

/// Adds two field elements. Addition is XOR and every element is its own negative,
/// so this is also subtraction.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies two field elements.
///
/// The table lookup is always performed; a zero operand is handled by masking the
/// result rather than by returning early.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    let t = &*TABLES;
    let sum = t.log[a as usize] as usize + t.log[b as usize] as usize;
    t.exp[sum % ORDER] & nonzero_mask(a) & nonzero_mask(b)
}

/// Divides `a` by `b`.
///
/// # Panics
///
/// Panics if `b` is zero.
#[inline]
pub fn div(a: u8, b: u8) -> u8 {
    assert!(b != 0, "division by zero in GF(2^8)");

    let t = &*TABLES;
    let diff = t.log[a as usize] as usize + ORDER - t.log[b as usize] as usize;
    t.exp[diff % ORDER] & nonzero_mask(a)
}

/// Returns the multiplicative inverse of `a`.
///
/// # Panics
///
/// Panics if `a` is zero.
#[inline]
pub fn inv(a: u8) -> u8 {
    div(1, a)
}

/// Returns `GENERATOR` raised to `power`.
pub fn exp(power: usize) -> u8 {
    TABLES.exp[power % ORDER]
}

/// Returns the discrete logarithm of `x` to base `GENERATOR`, or `None` for zero.
pub fn log(x: u8) -> Option<u8> {
    (x != 0).then(|| TABLES.log[x as usize])
}
