//! intitool - Inti Creates asset container descrambler
//!
//! The games ship their assets and saves in obfuscated containers: a
//! keyed byte-stream cipher layered with zlib compression, with the
//! order of the two passes depending on the file type. This crate
//! reverses (and re-applies) the whole scheme, and converts the "TTB"
//! text-resource containers to and from an editable text format.
//!
//! ## Decode pipeline
//!
//! ```text
//! compress-then-scramble:  input → Descramble → [len prefix | zlib] → Inflate → output
//! scramble-then-compress:  input → [len prefix | zlib] → Inflate → Descramble → output
//! none:                    input → [plain header] + Descramble → output
//! ```
//!
//! Encoding mirrors each pipeline exactly; dual-key profiles descramble
//! with key1 then key2 and scramble in the opposite order, so the keyed
//! passes unwind the way they were applied.
//!
//! ## Example
//!
//! ```no_run
//! use intitool::cli::{decode_file, CodecOptions};
//! use std::path::Path;
//!
//! let options = CodecOptions {
//!     filetype: "txt".into(),
//!     steamid: None,
//! };
//! decode_file(
//!     Path::new("Chars_USA.ttb"),
//!     Path::new("Chars_USA.bin"),
//!     &options,
//! ).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod keygen;
pub mod pipeline;
pub mod profile;
pub mod text;
pub mod ttb;

pub use error::{IntiError, Result};
pub use keygen::derive_key;
pub use pipeline::{decode_buffer, encode_buffer};
pub use profile::{find_profile, FileProfile, FILE_TYPES};
pub use ttb::TtbRecord;

#[cfg(test)]
mod proptests;
