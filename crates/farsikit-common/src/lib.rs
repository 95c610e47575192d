//! This crate provides the string, token and cryptographic helpers shared by the
//! farsikit crates: text normalization and slugs, random tokens, AES-256-CBC
//! encryption and password hashing, plus the error type used across the workspace.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod encoding;
pub mod error;
pub mod password;
pub mod text;
pub mod token;

pub use error::{Error, ErrorKind, Result};
