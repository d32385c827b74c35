//! Slack request signature verification.
//!
//! Implements Slack's `v0` signing scheme:
//! <https://api.slack.com/authentication/verifying-requests-from-slack>
//!
//! Verification is opt-in. Without a signing secret the webhooks accept any
//! caller.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use tracing::{debug, instrument};

use super::error::SlackError;

/// Header carrying the request timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

/// Maximum accepted age of a signed request, in seconds.
const MAX_REQUEST_AGE_SECS: u64 = 300;

/// Slack app signing secret.
#[derive(Clone)]
pub struct SigningSecret(SecretString);

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}

impl SigningSecret {
    /// Wrap a signing secret.
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self(secret)
    }

    /// Verify a request against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidSignature`] if the timestamp is malformed
    /// or stale, or the signature does not match.
    pub fn verify(&self, timestamp: &str, body: &[u8], signature: &str) -> Result<(), SlackError> {
        let now_secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| SlackError::InvalidSignature(e.to_string()))?
            .as_secs();

        let now = i64::try_from(now_secs)
            .map_err(|_| SlackError::InvalidSignature("System time overflow".to_string()))?;

        self.verify_at(timestamp, body, signature, now)
    }

    /// Verify a request as if the current time were `now` (Unix seconds).
    ///
    /// # Errors
    ///
    /// See [`verify`](Self::verify).
    #[instrument(skip(self, body, signature))]
    pub fn verify_at(
        &self,
        timestamp: &str,
        body: &[u8],
        signature: &str,
        now: i64,
    ) -> Result<(), SlackError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| SlackError::InvalidSignature("Invalid timestamp".to_string()))?;

        if now.abs_diff(ts) > MAX_REQUEST_AGE_SECS {
            return Err(SlackError::InvalidSignature(
                "Request timestamp too old".to_string(),
            ));
        }

        let provided = signature
            .strip_prefix("v0=")
            .and_then(|hex_sig| hex::decode(hex_sig).ok())
            .ok_or_else(|| SlackError::InvalidSignature("Malformed signature".to_string()))?;

        // verify_slice compares in constant time
        self.mac(timestamp, body)?
            .verify_slice(&provided)
            .map_err(|_| SlackError::InvalidSignature("Signature mismatch".to_string()))?;

        debug!("Slack signature verified");

        Ok(())
    }

    /// Compute the `v0=<hex>` signature for a request.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidSignature`] if the MAC cannot be keyed.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> Result<String, SlackError> {
        let mac = self.mac(timestamp, body)?;
        Ok(format!("v0={}", hex::encode(mac.finalize().into_bytes())))
    }

    /// HMAC over the `v0:<timestamp>:<body>` base string.
    fn mac(&self, timestamp: &str, body: &[u8]) -> Result<Hmac<Sha256>, SlackError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.0.expose_secret().as_bytes())
            .map_err(|e| SlackError::InvalidSignature(e.to_string()))?;

        mac.update(b"v0:");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);

        Ok(mac)
    }
}
