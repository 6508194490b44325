use crate::error::Result;
use crate::pipeline::decode_buffer;
use crate::profile::find_profile;
use std::path::Path;

/// Options shared by the decode and encode commands.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    pub filetype: String,
    pub steamid: Option<u64>,
}

/// Decode (descramble and, per profile, decompress) a container file.
/// Returns the number of output bytes written.
pub fn decode_file(input_path: &Path, output_path: &Path, options: &CodecOptions) -> Result<usize> {
    let profile = find_profile(&options.filetype)?;
    let keys = profile.resolve_keys(options.steamid)?;

    let input_data = std::fs::read(input_path)?;
    let output_data = decode_buffer(profile, &keys, &input_data)?;

    std::fs::write(output_path, &output_data)?;
    Ok(output_data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::encode_file;
    use tempfile::tempdir;

    #[test]
    fn test_decode_roundtrip_on_disk() {
        let dir = tempdir().unwrap();
        let plain_path = dir.path().join("strings.bin");
        let scrambled_path = dir.path().join("strings.ttb");
        let restored_path = dir.path().join("restored.bin");

        let original = b"record data\x00more record data\x00".repeat(4);
        std::fs::write(&plain_path, &original).unwrap();

        let options = CodecOptions {
            filetype: "txt".into(),
            steamid: None,
        };
        encode_file(&plain_path, &scrambled_path, &options).unwrap();

        // the scrambled file must not leak the plaintext
        let scrambled = std::fs::read(&scrambled_path).unwrap();
        assert_ne!(scrambled, original);

        decode_file(&scrambled_path, &restored_path, &options).unwrap();
        assert_eq!(std::fs::read(&restored_path).unwrap(), original);
    }

    #[test]
    fn test_unknown_filetype_fails_before_io() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let out = dir.path().join("out");

        let options = CodecOptions {
            filetype: "bogus".into(),
            steamid: None,
        };
        // the profile lookup fails before the input file is ever opened
        let err = decode_file(&missing, &out, &options).unwrap_err();
        assert!(err.to_string().contains("unknown file type"));
    }

    #[test]
    fn test_steamid_profile_needs_id() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("save.bin");
        let out = dir.path().join("out.bin");
        std::fs::write(&input, b"0123456789abcdefpayload").unwrap();

        let mut options = CodecOptions {
            filetype: "save3".into(),
            steamid: None,
        };
        assert!(decode_file(&input, &out, &options).is_err());

        options.steamid = Some(76561197960265729);
        decode_file(&input, &out, &options).unwrap();
    }
}
