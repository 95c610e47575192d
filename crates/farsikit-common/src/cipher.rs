//! AES-256-CBC encryption of text, with PKCS#7 padding and base64 ciphertexts.
//!
//! [`CipherKey`] carries the key and IV explicitly. The free functions [`encrypt`] and
//! [`decrypt`] use [`CipherKey::legacy`], a key and IV compiled into this crate, so that
//! ciphertexts produced by older deployments remain readable. A compiled-in key offers no
//! confidentiality against anyone holding the binary, and a fixed IV maps equal plaintexts
//! to equal ciphertexts. New callers should hold their own [`CipherKey`].

use std::fmt::{Debug, Formatter};

use aws_lc_rs::cipher::{
    AES_256, AES_256_KEY_LEN, AES_CBC_IV_LEN, DecryptionContext, EncryptionContext,
    PaddedBlockDecryptingKey, PaddedBlockEncryptingKey, UnboundCipherKey,
};
use aws_lc_rs::iv::FixedLength;
use data_encoding::BASE64;
use tracing::{debug, trace};
use zeroize::ZeroizeOnDrop;

use crate::encoding::{as_base64, try_decode};
use crate::error::{Error, Result};
use crate::token::random_bytes;

const LEGACY_KEY: &[u8; AES_256_KEY_LEN] = b"12345678901234567890123456789012";
const LEGACY_IV: &[u8; AES_CBC_IV_LEN] = b"1234567890123456";

/// AES block size in bytes
const BLOCK_LEN: usize = 16;

/// Key and initialization vector for AES-256-CBC.
#[derive(ZeroizeOnDrop)]
pub struct CipherKey {
    key: [u8; AES_256_KEY_LEN],
    iv: [u8; AES_CBC_IV_LEN],
}

impl CipherKey {
    pub fn new(key: [u8; AES_256_KEY_LEN], iv: [u8; AES_CBC_IV_LEN]) -> Self {
        Self { key, iv }
    }

    /// Build from byte slices, failing if either has the wrong length.
    pub fn from_slices(key: &[u8], iv: &[u8]) -> Result<Self> {
        let key = key.try_into().map_err(|_| Error::InvalidKeyLength {
            what: "key",
            expected: AES_256_KEY_LEN,
            actual: key.len(),
        })?;
        let iv = iv.try_into().map_err(|_| Error::InvalidKeyLength {
            what: "IV",
            expected: AES_CBC_IV_LEN,
            actual: iv.len(),
        })?;

        Ok(Self::new(key, iv))
    }

    /// Build from hex or base64 text, see [`try_decode`].
    pub fn from_encoded(key: &str, iv: &str) -> Result<Self> {
        let key_bytes = try_decode(key)?;
        let iv_bytes = try_decode(iv)?;
        Self::from_slices(&key_bytes, &iv_bytes)
    }

    /// A fresh random key and IV from the system CSPRNG.
    pub fn random() -> Self {
        Self::new(random_bytes(), random_bytes())
    }

    /// The compiled-in key and IV. Insecure, see the module documentation.
    pub fn legacy() -> Self {
        Self::new(*LEGACY_KEY, *LEGACY_IV)
    }

    /// Encrypt the UTF-8 bytes of `plain_text`, returning padded base64.
    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        let cipher_bytes = self.encrypt_bytes(plain_text.as_bytes())?;
        Ok(as_base64(&cipher_bytes))
    }

    /// Decode the base64 `cipher_text`, decrypt it and return the UTF-8 plaintext.
    ///
    /// ASCII whitespace anywhere in `cipher_text` is ignored, so line-wrapped base64 is
    /// accepted.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String> {
        let compact: Vec<u8> = cipher_text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let mut in_out = BASE64.decode(&compact)?;

        if in_out.is_empty() || in_out.len() % BLOCK_LEN != 0 {
            debug!(
                "ciphertext length {} is not a positive multiple of {BLOCK_LEN}",
                in_out.len()
            );
            return Err(Error::Cipher);
        }

        let decrypting_key = PaddedBlockDecryptingKey::cbc_pkcs7(self.unbound_key()?)
            .map_err(|_| Error::Cipher)?;
        let context = DecryptionContext::Iv128(FixedLength::from(self.iv));
        let plain = decrypting_key
            .decrypt(&mut in_out, context)
            .map_err(|_| {
                debug!("ciphertext padding check failed");
                Error::Cipher
            })?
            .to_vec();

        Ok(String::from_utf8(plain)?)
    }

    fn encrypt_bytes(&self, plain: &[u8]) -> Result<Vec<u8>> {
        let encrypting_key = PaddedBlockEncryptingKey::cbc_pkcs7(self.unbound_key()?)
            .map_err(|_| Error::Cipher)?;

        let mut in_out = plain.to_vec();
        let context = EncryptionContext::Iv128(FixedLength::from(self.iv));
        encrypting_key
            .less_safe_encrypt(&mut in_out, context)
            .map_err(|_| Error::Cipher)?;

        trace!("encrypted {} bytes into {} bytes", plain.len(), in_out.len());
        Ok(in_out)
    }

    fn unbound_key(&self) -> Result<UnboundCipherKey> {
        UnboundCipherKey::new(&AES_256, &self.key).map_err(|_| Error::Cipher)
    }
}

impl Debug for CipherKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CipherKey(AES-256-CBC)")
    }
}

/// Encrypt with the compiled-in legacy key and IV.
pub fn encrypt(plain_text: &str) -> Result<String> {
    CipherKey::legacy().encrypt(plain_text)
}

/// Decrypt with the compiled-in legacy key and IV.
pub fn decrypt(cipher_text: &str) -> Result<String> {
    CipherKey::legacy().decrypt(cipher_text)
}
