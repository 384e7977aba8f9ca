//! Decorate-sort-undecorate shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

/// A card index decorated with 32 bits of randomness.
struct ShuffleInfo {
    /// Sort key, compared as unsigned bytes from the most significant end.
    key: [u8; 4],
    /// The card index being shuffled.
    card: u8,
}

/// Rewrites `slots` into a uniformly random order.
///
/// Each slot is paired with a fresh 4-byte key and the pairs are stably
/// sorted by lexicographic comparison of the keys. Key collisions are
/// resolved by sort stability, which is acceptable at 52 draws over 2^32
/// keys.
pub(crate) fn shuffle(slots: &mut [u8], rng: &mut ChaCha8Rng) {
    let mut decorated: Vec<ShuffleInfo> = slots
        .iter()
        .map(|&card| {
            let mut key = [0u8; 4];
            rng.fill_bytes(&mut key);
            ShuffleInfo { key, card }
        })
        .collect();

    decorated.sort_by(|a, b| a.key.cmp(&b.key));

    for (slot, info) in slots.iter_mut().zip(&decorated) {
        *slot = info.card;
    }
}
