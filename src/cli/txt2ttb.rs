use crate::cli::ttb2txt::{text_profile, TextConvOptions};
use crate::error::Result;
use crate::pipeline::encode_buffer;
use crate::text::from_text;
use crate::ttb;
use std::path::Path;

/// Convert an edited text file back into a scrambled TTB file.
/// Returns the number of records converted.
pub fn text_to_ttb(input_path: &Path, output_path: &Path, options: &TextConvOptions) -> Result<usize> {
    let profile = text_profile(&options.filetype)?;
    let keys = profile.resolve_keys(None)?;

    let input_data = std::fs::read(input_path)?;
    let records = from_text(&input_data)?;
    let plain = ttb::serialize(&records)?;

    std::fs::write(output_path, encode_buffer(profile, &keys, &plain)?)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ttb2txt::ttb_to_text;
    use tempfile::tempdir;

    #[test]
    fn test_text_ttb_text_roundtrip() {
        let dir = tempdir().unwrap();
        let txt_path = dir.path().join("edited.txt");
        let ttb_path = dir.path().join("rebuilt.ttb");
        let back_path = dir.path().join("back.txt");

        let text = b"3\n\n\
                     00000001 00000002 00000003\n\
                     First line\\nSecond line\n\n\
                     0000000A 0000000B 0000000C\n\
                     tab\\there, ctrl \\x01 and \\x7F\n\n\
                     000000FF 00000000 FFFFFFFF\n\
                     plain";
        std::fs::write(&txt_path, &text[..]).unwrap();

        let options = TextConvOptions::default();
        let n = text_to_ttb(&txt_path, &ttb_path, &options).unwrap();
        assert_eq!(n, 3);

        ttb_to_text(&ttb_path, &back_path, &options).unwrap();
        assert_eq!(std::fs::read(&back_path).unwrap(), text);
    }

    #[test]
    fn test_bad_text_produces_no_output() {
        let dir = tempdir().unwrap();
        let txt_path = dir.path().join("broken.txt");
        let ttb_path = dir.path().join("never.ttb");

        std::fs::write(&txt_path, b"1\n\nnot hex at all\noops").unwrap();

        assert!(text_to_ttb(&txt_path, &ttb_path, &TextConvOptions::default()).is_err());
        assert!(!ttb_path.exists());
    }
}
