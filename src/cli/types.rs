use crate::error::Result;
use crate::profile::{CompMode, FILE_TYPES};

/// List the predefined file types.
/// Steam-ID-requiring types are marked with a `*`.
pub fn show_types(json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(FILE_TYPES)?;
        out.push('\n');
        return Ok(out);
    }

    let mut output = String::new();
    output.push_str("predefined filetypes:\n");
    for p in FILE_TYPES {
        let layering = match p.compression {
            CompMode::None if p.header_skip > 0 => "plain header + scrambled",
            CompMode::None => "scrambled",
            CompMode::CompressThenScramble => "compressed, then scrambled",
            CompMode::ScrambleThenCompress => "scrambled, then compressed",
        };
        output.push_str(&format!(
            "  {:<8}{} {}\n",
            p.shorthand,
            if p.needs_steamid { "*" } else { " " },
            layering,
        ));
    }
    output.push_str("\ntypes marked with '*' require your Steam ID\n");
    Ok(output)
}
