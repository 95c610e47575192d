//! Random alphanumeric tokens drawn from the system CSPRNG

/// The 62 characters a token is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Largest multiple of 62 that fits in a byte; bytes at or above it are rejected by
/// [`generate_uniform_token`].
const UNIFORM_LIMIT: u8 = 248;

/// Generate cryptographically secure random bytes
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut val = [0u8; N];
    fill_random(&mut val);
    val
}

/// Fill `buf` from the system CSPRNG
pub fn fill_random(buf: &mut [u8]) {
    aws_lc_rs::rand::fill(buf).expect("should be infallible");
}

/// Generate a token of exactly `length` characters from [`ALPHABET`].
///
/// Each random byte is reduced modulo 62, so the first four characters of the alphabet
/// are very slightly more likely than the rest. Use [`generate_uniform_token`] where
/// that bias matters.
pub fn generate_token(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    fill_random(&mut bytes);

    bytes
        .iter()
        .map(|&b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect()
}

/// Generate a token of exactly `length` characters with every alphabet character equally
/// likely, by discarding random bytes that would bias the modulo reduction.
pub fn generate_uniform_token(length: usize) -> String {
    let mut token = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while token.len() < length {
        fill_random(&mut buf);

        for &b in buf.iter().filter(|&&b| b < UNIFORM_LIMIT) {
            if token.len() == length {
                break;
            }
            token.push(ALPHABET[b as usize % ALPHABET.len()] as char);
        }
    }

    token
}
