macro_rules! general_err {
    ($fmt:expr) => (Error::OutOfSpec($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => (Error::OutOfSpec(format!($fmt, $($args),*)));
}

/// Errors surfaced by the codec.
///
/// Every failure aborts the current page's encode or decode and propagates to
/// the immediate caller; nothing is retried and no partially-valid output is
/// produced.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The reader ran out of bytes before satisfying a requested decode.
    #[error(
        "unexpected end of data: {requested} bytes requested at position {position}, {remaining} remaining"
    )]
    UnexpectedEndOfData {
        position: usize,
        requested: usize,
        remaining: usize,
    },

    /// A varint's continuation chain never terminated within the maximum
    /// width, or carried bits past the 32-bit range.
    #[error("malformed varint: continuation exceeds {max_bytes} bytes or overflows 32 bits")]
    MalformedVarInt { max_bytes: usize },

    /// A page header referenced an encoding code outside the closed set.
    #[error("unknown encoding code: {0}")]
    UnknownEncoding(i32),

    /// A decimal value cannot be represented exactly within the configured
    /// precision, scale and byte length.
    #[error(
        "decimal {value} does not fit precision {precision}, scale {scale} in {byte_length} bytes"
    )]
    PrecisionLoss {
        value: f64,
        precision: u8,
        scale: u8,
        byte_length: usize,
    },

    /// Wire metadata violated the format's structural rules.
    #[error("out of spec: {0}")]
    OutOfSpec(String),

    /// A string payload was not valid UTF-8.
    #[error("invalid utf-8 in string data: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
