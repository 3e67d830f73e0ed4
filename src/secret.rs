//! Random secrets from the operating system entropy source.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

/// Default secret length in bytes (128 hex characters once encoded).
pub const DEFAULT_SECRET_BYTES: usize = 64;

/// The OS entropy source could not produce random bytes.
#[derive(Debug, Error)]
#[error("system entropy source failed: {0}")]
pub struct EntropyError(String);

/// Generates a hex-encoded secret of `bytes` random bytes drawn from the
/// operating system's random-byte source.
///
/// # Examples
///
/// ```rust
/// use stagehand::secret::hex_secret;
///
/// let secret = hex_secret(64).expect("entropy available");
/// assert_eq!(secret.len(), 128);
/// ```
pub fn hex_secret(bytes: usize) -> Result<String, EntropyError> {
    let mut buf = vec![0u8; bytes];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| EntropyError(e.to_string()))?;
    Ok(hex::encode(buf))
}
