use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

/// Symmetric encryption for credentials at rest.
///
/// The key and IV are embedded at compile time by the build script, so the
/// stored credential blob is opaque to casual inspection of the state file.
/// Plaintext in, base64 ciphertext out.
#[derive(Clone, Debug)]
pub struct Secret {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new() -> Self {
        // Use compile-time embedded keys
        let key = APP_METADATA_ENCRYPTION_KEY.to_vec();
        let iv = APP_METADATA_ENCRYPTION_IV.to_vec();

        Self { key, iv }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(plaintext.as_bytes());
        Ok(BASE64_STANDARD.encode(&ciphertext))
    }

    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(decrypted)?)
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::new()
    }
}
