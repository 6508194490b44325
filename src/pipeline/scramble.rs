//! The keystream cipher applied to container payloads.
//!
//! A 64-bit running state starts at the cipher key and advances once per
//! byte. The keystream byte for position `i` is taken from the state at a
//! shift that cycles through 0..31, so the extraction window repeats every
//! 32 bytes while the state itself keeps evolving. The byte fed back into
//! the state is always the ciphertext byte: the freshly written byte when
//! scrambling, the pre-overwrite byte when descrambling. That symmetry is
//! what makes the transform invertible with the same key.

use crate::keygen::KEY_MULT;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Scramble or descramble `buf` in place with the given key.
///
/// Callers pass a sub-slice to leave a header region untouched.
pub fn scramble(buf: &mut [u8], dir: Direction, key: u64) {
    let mut state = key;
    for i in 0..buf.len() {
        let original = buf[i];
        buf[i] = original ^ (state >> (i & 0x1F)) as u8;

        let feedback = match dir {
            Direction::Encode => buf[i],
            Direction::Decode => original,
        };
        state = state.wrapping_add(feedback as u64).wrapping_mul(KEY_MULT);
    }
}
