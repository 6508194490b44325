use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown file type '{0}'")]
    UnknownFileType(String),

    #[error("file type '{0}' enables compression and a header skip at the same time")]
    BadProfile(&'static str),

    #[error("file type '{0}' requires a Steam ID")]
    SteamIdRequired(&'static str),

    #[error("bad Steam ID '{0}'")]
    BadSteamId(String),

    #[error("file type '{0}' is not a compressed text container")]
    NotTextContainer(String),

    #[error("input truncated: need {needed} bytes, have {have}")]
    TruncatedInput { needed: usize, have: usize },

    #[error("zlib compression failed: {0}")]
    CompressionError(String),

    #[error("zlib decompression failed: {0}")]
    DecompressionError(String),

    #[error("decompressed size {actual} does not match declared size {declared}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("unexpected TTB header values (0x{0:X}/0x{1:X} should be 0x8/0x10)")]
    InvalidHeader(u32, u32),

    #[error("too many records: {0} exceeds the format limit of 512")]
    TooManyRecords(usize),

    #[error("record string at offset {0} has no null terminator")]
    UnterminatedString(usize),

    #[error("bad record count '{0}'")]
    BadRecordCount(String),

    #[error("malformed tag line '{0}' (expected three 8-digit hex values)")]
    MalformedTagLine(String),

    #[error("bad escape sequence '{0}'")]
    BadEscape(String),

    #[error("unexpected end of text input")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, IntiError>;
