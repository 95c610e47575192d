//! Password hashing.
//!
//! [`hash_password`] is the plain, unsalted SHA-256 digest kept for compatibility with
//! stored hashes. [`SaltedHash`] is the replacement for anything new: a random salt and
//! PBKDF2-HMAC-SHA256 with a configurable iteration count.

use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use std::str::FromStr;

use aws_lc_rs::digest::{SHA256, digest};
use aws_lc_rs::pbkdf2;
use data_encoding::BASE64_NOPAD;
use tracing::debug;

use crate::encoding::as_hex;
use crate::error::Error;
use crate::token::random_bytes;

/// Identifier written as the first field of a [`SaltedHash`] string
pub const SALTED_SCHEME: &str = "pbkdf2-sha256";

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: NonZeroU32 = NonZeroU32::new(600_000).unwrap();

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// SHA-256 of the UTF-8 bytes of `password` as 64 lowercase hex characters.
pub fn hash_password(password: &str) -> String {
    let hash = digest(&SHA256, password.as_bytes());
    as_hex(hash.as_ref())
}

/// A salted PBKDF2-HMAC-SHA256 password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    iterations: NonZeroU32,
    salt: Vec<u8>,
    hash: [u8; HASH_LEN],
}

impl SaltedHash {
    /// Hash `password` with a fresh random salt and [`DEFAULT_ITERATIONS`].
    pub fn derive(password: &str) -> Self {
        Self::derive_with(password, DEFAULT_ITERATIONS, &random_bytes::<SALT_LEN>())
    }

    pub fn derive_with(password: &str, iterations: NonZeroU32, salt: &[u8]) -> Self {
        let mut hash = [0u8; HASH_LEN];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            password.as_bytes(),
            &mut hash,
        );

        Self {
            iterations,
            salt: salt.to_vec(),
            hash,
        }
    }

    /// Constant-time check of `password` against this hash.
    pub fn verify(&self, password: &str) -> bool {
        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            self.iterations,
            &self.salt,
            password.as_bytes(),
            &self.hash,
        )
        .is_ok()
    }

    pub fn iterations(&self) -> NonZeroU32 {
        self.iterations
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl Display for SaltedHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SALTED_SCHEME}${}${}${}",
            self.iterations,
            BASE64_NOPAD.encode(&self.salt),
            BASE64_NOPAD.encode(&self.hash)
        )
    }
}

/// Parses `pbkdf2-sha256$<iterations>$<salt>$<hash>` with unpadded base64 fields.
impl FromStr for SaltedHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split('$').collect();
        let [scheme, iterations, salt, hash] = fields.as_slice() else {
            debug!("salted hash has {} fields, expected 4", fields.len());
            return Err(Error::MalformedHash);
        };

        if *scheme != SALTED_SCHEME {
            debug!("unknown password hash scheme '{scheme}'");
            return Err(Error::MalformedHash);
        }

        let iterations: NonZeroU32 = iterations.parse().map_err(|_| Error::MalformedHash)?;
        let salt = BASE64_NOPAD
            .decode(salt.as_bytes())
            .map_err(|_| Error::MalformedHash)?;
        let hash = BASE64_NOPAD
            .decode(hash.as_bytes())
            .map_err(|_| Error::MalformedHash)?
            .try_into()
            .map_err(|_| Error::MalformedHash)?;

        Ok(Self {
            iterations,
            salt,
            hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const FEW: NonZeroU32 = NonZeroU32::new(1_000).unwrap();

    #[test]
    fn sha256_known_answers() {
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn hash_is_deterministic_lowercase_hex() {
        let h1 = hash_password("myPassword123");
        let h2 = hash_password("myPassword123");
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
        assert!(h1.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_ne!(h1, hash_password("myPassword124"));
    }

    #[test]
    fn salted_hash_verifies() {
        let salted = SaltedHash::derive_with("hunter2", FEW, b"0123456789abcdef");
        assert!(salted.verify("hunter2"));
        assert!(!salted.verify("hunter3"));
    }

    #[test]
    fn salted_hashes_use_fresh_salts() {
        let a = SaltedHash::derive_with("pw", FEW, &random_bytes::<SALT_LEN>());
        let b = SaltedHash::derive_with("pw", FEW, &random_bytes::<SALT_LEN>());
        assert_ne!(a, b);
        assert!(a.verify("pw") && b.verify("pw"));
    }

    #[test]
    fn salted_hash_string_roundtrip() {
        let salted = SaltedHash::derive_with("correct horse", FEW, b"saltsaltsaltsalt");
        let stored = salted.to_string();
        assert!(stored.starts_with("pbkdf2-sha256$1000$"));

        let parsed: SaltedHash = stored.parse().unwrap();
        assert_eq!(parsed, salted);
        assert!(parsed.verify("correct horse"));
    }

    #[test]
    fn malformed_salted_hash_strings() {
        for bad in [
            "",
            "pbkdf2-sha256$1000$c2FsdA",
            "bcrypt$1000$c2FsdA$c2FsdA",
            "pbkdf2-sha256$0$c2FsdA$c2FsdA",
            "pbkdf2-sha256$1000$c2FsdA$c2FsdA",
            "pbkdf2-sha256$many$c2FsdA$c2FsdA",
        ] {
            let err = bad.parse::<SaltedHash>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{bad}");
        }
    }
}
