use thiserror::Error;

/// A global identifier could not be decoded into a (type, key) pair.
///
/// Fatal to the operation that requested decoding; never retried here.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not valid utf-8")]
    InvalidUtf8,

    #[error("missing type/key separator")]
    MissingSeparator,

    #[error("empty type token")]
    EmptyType,
}
