//! Commit-reveal fairness primitives and the deterministic shuffle PRNG.
//!
//! A hand's shuffle must be reproducible from the audit record: the server
//! commits to a secret before the deck is shuffled, and reveals it at
//! showdown so any observer can recompute the seed and replay the shuffle.
//! The PRNG itself is therefore fully specified here (splitmix64 expanding
//! into xoshiro256**) rather than delegated to an external crate's internal
//! byte stream, which could change between crate versions without notice.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Generate a fresh 32-byte secret from the OS RNG, hex-encoded.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// `HMAC-SHA256(key = secret, message = hand_id)`, hex-encoded.
pub fn compute_commitment(secret: &str, hand_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(hand_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// `SHA256(secret || ":" || hand_id)`, the 256-bit seed for the shuffle PRNG.
fn derive_seed(secret: &str, hand_id: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(hand_id.as_bytes());
    hasher.finalize().into()
}

#[inline]
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[inline]
fn rotl(x: u64, k: u32) -> u64 {
    (x << k) | (x >> (64 - k))
}

/// xoshiro256** seeded by splitmix64-expanding a 256-bit seed into its four
/// 64-bit state words. Not cryptographically secure; fairness comes from the
/// commitment binding the seed before the permutation is observable, not
/// from the PRNG itself.
pub struct ShuffleRng {
    s: [u64; 4],
}

impl ShuffleRng {
    pub fn from_secret_and_hand(secret: &str, hand_id: &str) -> Self {
        Self::from_seed_bytes(derive_seed(secret, hand_id))
    }

    fn from_seed_bytes(seed: [u8; 32]) -> Self {
        let mut sm_state = u64::from_be_bytes(seed[0..8].try_into().unwrap());
        let mut s = [0u64; 4];
        for word in &mut s {
            *word = splitmix64_next(&mut sm_state);
        }
        ShuffleRng { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = rotl(self.s[1].wrapping_mul(5), 7).wrapping_mul(9);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = rotl(self.s[3], 45);

        result
    }

    /// Uniform-enough value in `0..bound`. Deck sizes are small (<=52) so the
    /// modulo bias is negligible; this is not used for security-sensitive
    /// ranges.
    fn gen_range(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// In-place Fisher-Yates shuffle driven by the seeded PRNG.
pub fn shuffle<T>(rng: &mut ShuffleRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_shared::canonical_deck;

    #[test]
    fn commitment_matches_hmac_of_secret_and_hand_id() {
        let secret = generate_secret();
        let hand_id = "hand-1";
        let commitment = compute_commitment(&secret, hand_id);

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(hand_id.as_bytes());
        assert_eq!(commitment, hex::encode(mac.finalize().into_bytes()));
    }

    #[test]
    fn shuffle_is_deterministic_for_fixed_seed() {
        let secret = "00".repeat(32);
        let hand_id = "abc";

        let mut deck_a = canonical_deck();
        let mut rng_a = ShuffleRng::from_secret_and_hand(&secret, hand_id);
        shuffle(&mut rng_a, &mut deck_a);

        let mut deck_b = canonical_deck();
        let mut rng_b = ShuffleRng::from_secret_and_hand(&secret, hand_id);
        shuffle(&mut rng_b, &mut deck_b);

        assert_eq!(deck_a, deck_b);
    }

    #[test]
    fn shuffle_preserves_all_52_cards() {
        let mut deck = canonical_deck();
        let mut rng = ShuffleRng::from_secret_and_hand("seed", "hand-42");
        shuffle(&mut rng, &mut deck);
        assert_eq!(deck.len(), 52);

        let mut sorted = deck.clone();
        sorted.sort_by_key(|c| c.0);
        let mut canonical_sorted = canonical_deck();
        canonical_sorted.sort_by_key(|c| c.0);
        assert_eq!(sorted, canonical_sorted);
    }

    #[test]
    fn different_hand_ids_give_different_permutations() {
        let secret = "ff".repeat(32);
        let mut deck_a = canonical_deck();
        let mut rng_a = ShuffleRng::from_secret_and_hand(&secret, "hand-1");
        shuffle(&mut rng_a, &mut deck_a);

        let mut deck_b = canonical_deck();
        let mut rng_b = ShuffleRng::from_secret_and_hand(&secret, "hand-2");
        shuffle(&mut rng_b, &mut deck_b);

        assert_ne!(deck_a, deck_b);
    }
}
