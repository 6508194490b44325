//! Lossless text interchange for TTB record lists.
//!
//! The format is line oriented: a decimal record count, a blank line,
//! then per record one line of three 8-digit uppercase hex tags and one
//! line holding the string with control bytes escaped, records separated
//! by a blank line (none after the last). Strings are byte strings; only
//! the escapes below are rewritten, everything else passes through
//! untouched, so a TTB buffer survives the trip byte for byte.

use crate::error::{IntiError, Result};
use crate::ttb::{TtbRecord, MAX_RECORDS};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render records as editable text.
pub fn to_text(records: &[TtbRecord]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(format!("{}\n\n", records.len()).as_bytes());

    for (i, rec) in records.iter().enumerate() {
        out.extend_from_slice(
            format!("{:08X} {:08X} {:08X}\n", rec.tags[0], rec.tags[1], rec.tags[2]).as_bytes(),
        );
        escape_into(&rec.string, &mut out);
        if i + 1 < records.len() {
            out.extend_from_slice(b"\n\n");
        }
    }
    out
}

/// Parse text produced by [`to_text`] (or hand-edited) back into records.
///
/// Tolerates a UTF-8 BOM before the count line and CRLF line endings.
pub fn from_text(text: &[u8]) -> Result<Vec<TtbRecord>> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut lines = Lines::new(text);

    let count_line = lines.next_line().ok_or(IntiError::UnexpectedEof)?;
    let count = parse_count(count_line)?;
    // blank line after the count, if present
    let _ = lines.next_line();

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let tag_line = lines.next_line().ok_or(IntiError::UnexpectedEof)?;
        let tags = parse_tags(tag_line)?;

        // An empty string in the last record leaves nothing after the
        // tag line, so end of input here reads as an empty string.
        let string_line = lines.next_line().unwrap_or(&[]);
        let string = unescape(string_line)?;

        records.push(TtbRecord { tags, string });

        // blank separator between records
        if i + 1 < count {
            let _ = lines.next_line();
        }
    }
    Ok(records)
}

fn parse_count(line: &[u8]) -> Result<usize> {
    let bad = || IntiError::BadRecordCount(String::from_utf8_lossy(line).into_owned());
    let s = std::str::from_utf8(line).map_err(|_| bad())?;
    let n: i64 = s.trim().parse().map_err(|_| bad())?;
    if n < 0 || n as usize > MAX_RECORDS {
        return Err(bad());
    }
    Ok(n as usize)
}

fn parse_tags(line: &[u8]) -> Result<[u32; 3]> {
    let bad = || IntiError::MalformedTagLine(String::from_utf8_lossy(line).into_owned());
    let s = std::str::from_utf8(line).map_err(|_| bad())?;

    let mut fields = s.split_whitespace();
    let mut tags = [0u32; 3];
    for tag in &mut tags {
        let field = fields.next().ok_or_else(bad)?;
        *tag = u32::from_str_radix(field, 16).map_err(|_| bad())?;
    }
    Ok(tags)
}

fn escape_into(data: &[u8], out: &mut Vec<u8>) {
    for &b in data {
        match b {
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            b if b < 0x20 || b == 0x7F => {
                out.extend_from_slice(format!("\\x{:02X}", b).as_bytes())
            }
            b => out.push(b),
        }
    }
}

fn unescape(line: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(line.len());
    let mut i = 0;
    while i < line.len() {
        if line[i] != b'\\' {
            out.push(line[i]);
            i += 1;
            continue;
        }
        match line.get(i + 1).copied() {
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(b'b') => out.push(0x08),
            Some(b'x') => {
                let hex = line
                    .get(i + 2..i + 4)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .ok_or_else(|| bad_escape(line, i))?;
                out.push(u8::from_str_radix(hex, 16).map_err(|_| bad_escape(line, i))?);
                i += 4;
                continue;
            }
            _ => return Err(bad_escape(line, i)),
        }
        i += 2;
    }
    Ok(out)
}

fn bad_escape(line: &[u8], pos: usize) -> IntiError {
    let end = (pos + 4).min(line.len());
    IntiError::BadEscape(String::from_utf8_lossy(&line[pos..end]).into_owned())
}

/// Byte-level line splitter; strips a trailing carriage return per line.
struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Lines<'a> {
    fn new(text: &'a [u8]) -> Self {
        Self { rest: text }
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                let line = &self.rest[..i];
                self.rest = &self.rest[i + 1..];
                line
            }
            None => {
                let line = self.rest;
                self.rest = &self.rest[self.rest.len()..];
                line
            }
        };
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }
}
