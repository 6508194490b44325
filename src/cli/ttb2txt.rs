use crate::error::{IntiError, Result};
use crate::pipeline::decode_buffer;
use crate::profile::{find_profile, CompMode, FileProfile};
use crate::text::to_text;
use crate::ttb;
use std::path::Path;

/// Options for the text conversion commands.
#[derive(Debug, Clone)]
pub struct TextConvOptions {
    /// Profile naming the password and layering; `txt` for *.ttb files,
    /// `txt2` for *.tb2.
    pub filetype: String,
}

impl Default for TextConvOptions {
    fn default() -> Self {
        Self {
            filetype: "txt".into(),
        }
    }
}

pub(crate) fn text_profile(filetype: &str) -> Result<&'static FileProfile> {
    let profile = find_profile(filetype)?;
    // text containers are always compressed-then-scrambled wholes
    if profile.compression != CompMode::CompressThenScramble {
        return Err(IntiError::NotTextContainer(filetype.to_string()));
    }
    Ok(profile)
}

/// Convert a scrambled TTB file to editable text.
/// Returns the number of records converted.
pub fn ttb_to_text(input_path: &Path, output_path: &Path, options: &TextConvOptions) -> Result<usize> {
    let profile = text_profile(&options.filetype)?;
    let keys = profile.resolve_keys(None)?;

    let input_data = std::fs::read(input_path)?;
    let plain = decode_buffer(profile, &keys, &input_data)?;
    let records = ttb::parse(&plain)?;

    std::fs::write(output_path, to_text(&records))?;
    Ok(records.len())
}
