//! Seeded deterministic text scrambling.
//!
//! The scramble of a `(text, salt)` pair is stable within a session and
//! across sessions: re-rendering the same message never flickers, and hosts
//! on different machines show the same runes. This is cosmetic obfuscation,
//! not cryptography: anyone with the stored message sees the original.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Rolling 32-bit string hash (`hash * 31 + unit`) over UTF-16 code units,
/// with wrapping overflow. Kept bit-compatible with the historical seed
/// derivation so existing content scrambles identically.
pub fn hash_code(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash
}

/// Scramble `text` deterministically under `salt`.
///
/// Every non-whitespace character is replaced by a pseudorandom base-36
/// digit; a second draw per character decides upper/lower case. Whitespace
/// (positions, run lengths, line breaks) is preserved verbatim, so the
/// scramble has the same shape and character count as the input.
pub fn scramble(text: &str, salt: &str) -> String {
    let seed = hash_code(&format!("{text}{salt}"));
    // The generator is local to this call; a u32 seed keeps the full hash.
    let mut rng = Pcg32::seed_from_u64(seed as u32 as u64);

    text.chars()
        .map(|c| {
            if c.is_whitespace() {
                c
            } else {
                let digit = BASE36[rng.gen_range(0..36)] as char;
                if rng.gen_bool(0.5) {
                    digit.to_ascii_uppercase()
                } else {
                    digit
                }
            }
        })
        .collect()
}
