//! Random letter strings.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bits per letter index
const INDEX_BITS: u32 = 6;
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;
/// Letter indices available from one 63-bit word
const INDICES_PER_WORD: u32 = 63 / INDEX_BITS;

/// Random string of `n` ASCII letters.
///
/// Each 63-bit word yields ten 6-bit indices; indices past the alphabet
/// are rejected so every letter is equally likely.
pub fn random_string<R: Rng>(rng: &mut R, n: usize) -> String {
    let mut out = vec![0u8; n];
    let mut filled = 0;
    let mut cache = rng.random::<u64>() >> 1;
    let mut remain = INDICES_PER_WORD;

    while filled < n {
        if remain == 0 {
            cache = rng.random::<u64>() >> 1;
            remain = INDICES_PER_WORD;
        }
        let idx = (cache & INDEX_MASK) as usize;
        if idx < LETTERS.len() {
            out[n - 1 - filled] = LETTERS[idx];
            filled += 1;
        }
        cache >>= INDEX_BITS;
        remain -= 1;
    }

    out.into_iter().map(char::from).collect()
}
