//! The TTB record-table container format.
//!
//! Layout: an 8-byte header (two u32 fields fixed at 8 and 16), a table
//! of 16-byte records (three opaque u32 tags plus an i32 string offset),
//! then the string pool of null-terminated byte strings. The format
//! stores no record count; the table ends at the first tuple whose
//! offset falls outside the open interval (32, buffer length). That
//! stopping predicate is part of the wire format and must not be
//! "improved".

use crate::error::{IntiError, Result};

/// Fixed header field values; a signature, not configuration.
pub const TTB_SIGNATURE: (u32, u32) = (0x8, 0x10);

pub const HEADER_SIZE: usize = 8;
pub const RECORD_SIZE: usize = 16;

/// Hard cap on the record table, an engineering limit of the source
/// format. Exceeding it means the buffer is malformed.
pub const MAX_RECORDS: usize = 512;

/// Smallest offset a record string can legally start at (exclusive).
const MIN_OFFSET: i32 = 32;

/// One record: three semantically unidentified tags, preserved verbatim,
/// and the string body located by the offset field. Offsets are derived
/// data and are recomputed on serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtbRecord {
    pub tags: [u32; 3],
    pub string: Vec<u8>,
}

fn read_u32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes(buf[pos..pos + 4].try_into().unwrap())
}

/// Parse a decompressed TTB buffer into its records.
pub fn parse(buf: &[u8]) -> Result<Vec<TtbRecord>> {
    if buf.len() < HEADER_SIZE {
        return Err(IntiError::TruncatedInput {
            needed: HEADER_SIZE,
            have: buf.len(),
        });
    }
    let signature = (read_u32(buf, 0), read_u32(buf, 4));
    if signature != TTB_SIGNATURE {
        return Err(IntiError::InvalidHeader(signature.0, signature.1));
    }

    let mut table = Vec::new();
    let mut pos = HEADER_SIZE;
    while pos + RECORD_SIZE <= buf.len() {
        let tags = [
            read_u32(buf, pos),
            read_u32(buf, pos + 4),
            read_u32(buf, pos + 8),
        ];
        let offset = read_u32(buf, pos + 12) as i32;
        // First out-of-range offset ends the table; that tuple is
        // already string-pool data, not a record.
        if offset <= MIN_OFFSET || offset as i64 >= buf.len() as i64 {
            break;
        }
        table.push((tags, offset as usize));
        if table.len() > MAX_RECORDS {
            return Err(IntiError::TooManyRecords(table.len()));
        }
        pos += RECORD_SIZE;
    }

    let mut records = Vec::with_capacity(table.len());
    for (tags, offset) in table {
        let len = buf[offset..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(IntiError::UnterminatedString(offset))?;
        records.push(TtbRecord {
            tags,
            string: buf[offset..offset + len].to_vec(),
        });
    }
    Ok(records)
}

/// Serialize records back into the binary layout.
///
/// Strings are written once each, in record order, immediately after the
/// table; offsets are a running cursor starting at `8 + 16 * n`.
pub fn serialize(records: &[TtbRecord]) -> Result<Vec<u8>> {
    if records.len() > MAX_RECORDS {
        return Err(IntiError::TooManyRecords(records.len()));
    }

    let table_end = HEADER_SIZE + RECORD_SIZE * records.len();
    let total: usize = table_end + records.iter().map(|r| r.string.len() + 1).sum::<usize>();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&TTB_SIGNATURE.0.to_le_bytes());
    out.extend_from_slice(&TTB_SIGNATURE.1.to_le_bytes());

    let mut cursor = table_end;
    for rec in records {
        for tag in rec.tags {
            out.extend_from_slice(&tag.to_le_bytes());
        }
        out.extend_from_slice(&(cursor as i32).to_le_bytes());
        cursor += rec.string.len() + 1;
    }
    for rec in records {
        out.extend_from_slice(&rec.string);
        out.push(0);
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}
