//! The table of known file-type profiles.
//!
//! Each profile names the password(s), the compression layering and the
//! unscrambled header region for one of the container flavors shipped by
//! the games. The table is a fixed part of the scheme; nothing here is
//! user-configurable beyond picking an entry.

use crate::error::{IntiError, Result};
use crate::keygen::derive_key;
use serde::Serialize;

/// How compression is layered with the scrambling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompMode {
    /// No compression; an optional leading header stays unscrambled.
    None,
    /// Payload is compressed first, then the whole prefixed buffer is
    /// scrambled (most asset containers).
    CompressThenScramble,
    /// Payload is scrambled first, then compressed; the length prefix
    /// itself is never scrambled (DMFD PC JSON files).
    ScrambleThenCompress,
}

/// A statically known file-type profile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FileProfile {
    pub shorthand: &'static str,
    pub password1: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password2: Option<&'static str>,
    pub compression: CompMode,
    pub header_skip: usize,
    pub needs_steamid: bool,
}

/// Derived cipher keys for one conversion, in application order.
#[derive(Debug, Clone, Copy)]
pub struct KeySet {
    pub key1: u64,
    pub key2: Option<u64>,
}

impl KeySet {
    /// Keys in decode order: key1 first, then key2 when present.
    /// Encoding walks this in reverse so the passes unwind correctly.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        std::iter::once(self.key1).chain(self.key2)
    }
}

/// All known file types.
pub const FILE_TYPES: &[FileProfile] = &[
    // BMPFont*.bfb
    profile("bft", "bft90210", None, CompMode::CompressThenScramble, 0, false),
    // *.osb
    profile("obj", "obj90210", None, CompMode::CompressThenScramble, 0, false),
    // stage background files, *.scb
    profile("scroll", "scroll90210", None, CompMode::CompressThenScramble, 0, false),
    // stage setup files, *.stb
    profile("set", "set90210", None, CompMode::None, 0, false),
    // *.bisar sound index files
    profile("snd", "snd90210", None, CompMode::None, 0, false),
    // text resource files, *.ttb
    profile("txt", "txt20170401", None, CompMode::CompressThenScramble, 0, false),
    // v2 text resource files, *.tb2
    profile("txt2", "x4NKvf3U", None, CompMode::CompressThenScramble, 0, false),
    profile("json", "json180601", None, CompMode::CompressThenScramble, 0, false),
    // DMFD PC JSON files, scrambled before compression
    profile("json2", "xN5sUeRo", None, CompMode::ScrambleThenCompress, 0, false),
    // COTM1/COTM2 save data: two passwords, 16-byte plaintext header
    profile("save1", "gYjkJoTX", Some("zZ2c9VTK"), CompMode::None, 16, false),
    profile("save2", "gVTYZ2jk", Some("JoTXzc9K"), CompMode::None, 16, false),
    // DMFD PC save data: same layout, passwords get a Steam ID suffix
    profile("save3", "gYjkJoTX", Some("zZ2c9VTK"), CompMode::None, 16, true),
    // format unconfirmed, entry kept for completeness
    profile("ssbpi", "ssbpi90210", None, CompMode::None, 0, false),
];

const fn profile(
    shorthand: &'static str,
    password1: &'static str,
    password2: Option<&'static str>,
    compression: CompMode,
    header_skip: usize,
    needs_steamid: bool,
) -> FileProfile {
    FileProfile {
        shorthand,
        password1,
        password2,
        compression,
        header_skip,
        needs_steamid,
    }
}

/// Look up a profile by shorthand, case-insensitively.
pub fn find_profile(shorthand: &str) -> Result<&'static FileProfile> {
    FILE_TYPES
        .iter()
        .find(|p| p.shorthand.eq_ignore_ascii_case(shorthand))
        .ok_or_else(|| IntiError::UnknownFileType(shorthand.to_string()))
}

impl FileProfile {
    /// Compression and a header skip are mutually exclusive by
    /// construction; a profile setting both is a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.compression != CompMode::None && self.header_skip > 0 {
            return Err(IntiError::BadProfile(self.shorthand));
        }
        Ok(())
    }

    /// Derive the cipher keys for this profile.
    ///
    /// Profiles flagged `needs_steamid` append the id's low 32 bits as
    /// lowercase hex to each password before derivation.
    pub fn resolve_keys(&self, steamid: Option<u64>) -> Result<KeySet> {
        self.validate()?;

        let suffix = if self.needs_steamid {
            let id = steamid.ok_or(IntiError::SteamIdRequired(self.shorthand))?;
            if id == 0 {
                return Err(IntiError::BadSteamId(id.to_string()));
            }
            Some(format!("{:x}", id as u32))
        } else {
            None
        };

        let derive = |password: &str| match &suffix {
            Some(tail) => derive_key(format!("{password}{tail}").as_bytes()),
            None => derive_key(password.as_bytes()),
        };

        Ok(KeySet {
            key1: derive(self.password1),
            key2: self.password2.map(derive),
        })
    }
}
