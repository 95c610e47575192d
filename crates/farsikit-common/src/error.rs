use data_encoding::DecodeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], useful when callers only care about
/// which kind of input problem occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was empty or had the wrong size
    Validation,
    /// Structured input was malformed
    Format,
    /// A numeric value was outside its valid bounds
    Range,
    /// Encoded or encrypted input could not be decoded
    Decoding,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("wrong number of date components: expected 3, got {0} (use yyyy/MM/dd)")]
    WrongComponentCount(usize),

    #[error("date component is not a number: '{0}'")]
    InvalidComponent(String),

    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: i64 },

    #[error("invalid encoding: {0}")]
    Decode(#[from] DecodeError),

    #[error("ciphertext is invalid for AES-256-CBC with PKCS#7 padding")]
    Cipher,

    #[error("decrypted text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("wrong {what} size: expected {expected} bytes, got {actual} bytes")]
    InvalidKeyLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("stored password hash is malformed")]
    MalformedHash,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Empty(_) | Error::InvalidKeyLength { .. } => ErrorKind::Validation,
            Error::WrongComponentCount(_) | Error::InvalidComponent(_) | Error::MalformedHash => {
                ErrorKind::Format
            }
            Error::OutOfRange { .. } => ErrorKind::Range,
            Error::Decode(_) | Error::Cipher | Error::Utf8(_) => ErrorKind::Decoding,
        }
    }

    pub fn out_of_range(what: &'static str, value: impl Into<i64>) -> Self {
        Error::OutOfRange {
            what,
            value: value.into(),
        }
    }
}
