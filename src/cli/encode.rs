use crate::cli::decode::CodecOptions;
use crate::error::Result;
use crate::pipeline::encode_buffer;
use crate::profile::find_profile;
use std::path::Path;

/// Encode (per profile, compress and scramble) a container file.
/// Returns the number of output bytes written.
pub fn encode_file(input_path: &Path, output_path: &Path, options: &CodecOptions) -> Result<usize> {
    let profile = find_profile(&options.filetype)?;
    let keys = profile.resolve_keys(options.steamid)?;

    let input_data = std::fs::read(input_path)?;
    let output_data = encode_buffer(profile, &keys, &input_data)?;

    std::fs::write(output_path, &output_data)?;
    Ok(output_data.len())
}
