// SPDX-License-Identifier: CC0-1.0

use chacha20::{
    ChaCha20,
    cipher::{KeyIvInit, StreamCipher},
};
use rand::{CryptoRng, RngCore, SeedableRng};

/// A deterministic generator that outputs the ChaCha20 keystream for key = seed and a
/// zero nonce.
///
/// Two generators built from the same seed produce the same bytes, which makes splits
/// reproducible. Anyone who knows the seed can recompute the polynomial coefficients and
/// recover the secret from a single share, so the seed must be as secret as the secret.
pub struct SeededRng {
    cipher: ChaCha20,
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let nonce = [0u8; 12];
        Self {
            cipher: ChaCha20::new(&seed.into(), &nonce.into()),
        }
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
        self.cipher.apply_keystream(dst);
    }
}

impl CryptoRng for SeededRng {}
