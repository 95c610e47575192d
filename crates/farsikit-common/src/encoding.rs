//! Encoding and decoding utilities for keys and other binary values

use data_encoding::{
    BASE64, BASE64_NOPAD, BASE64URL, BASE64URL_NOPAD, DecodeError, HEXLOWER, HEXUPPER,
};

/// Attempt to decode `encoded_value` into a `Vec<u8>` using multiple encoding formats until
/// one succeeds. Surrounding whitespace is ignored.
pub fn try_decode(encoded_value: &str) -> Result<Vec<u8>, DecodeError> {
    let input = encoded_value.trim().as_bytes();

    // Try all supported encodings
    let value = HEXLOWER
        .decode(input)
        .or_else(|_| HEXUPPER.decode(input))
        .or_else(|_| BASE64URL.decode(input))
        .or_else(|_| BASE64URL_NOPAD.decode(input))
        .or_else(|_| BASE64.decode(input))
        .or_else(|_| BASE64_NOPAD.decode(input))?;

    Ok(value)
}

/// Lowercase hex encoding, two digits per byte.
pub fn as_hex(data: &[u8]) -> String {
    HEXLOWER.encode(data)
}

/// Standard padded base64, the text form of ciphertexts.
pub fn as_base64(data: &[u8]) -> String {
    BASE64.encode(data)
}
