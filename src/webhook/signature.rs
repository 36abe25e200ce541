use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("verif-hash header is missing or empty")]
    MissingSignature,
    #[error("webhook secret is not configured")]
    MissingSecret,
    #[error("request body is empty")]
    EmptyBody,
    #[error("signature does not match request body")]
    SignatureMismatch,
}

pub fn verify_signature(raw: &[u8], claimed: Option<&str>, secret: &str) -> Result<(), AuthError> {
    let claimed = match claimed {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Err(AuthError::MissingSignature),
    };
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    if raw.is_empty() {
        return Err(AuthError::EmptyBody);
    }

    let claimed_bytes = match hex::decode(claimed) {
        Ok(bytes) => bytes,
        Err(_) => return Err(AuthError::SignatureMismatch),
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(raw);
    let expected = mac.finalize().into_bytes();

    if !constant_time_compare(&claimed_bytes, expected.as_slice()) {
        return Err(AuthError::SignatureMismatch);
    }

    Ok(())
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::{verify_signature, AuthError, HmacSha256};
    use hmac::Mac;

    fn sign(body: &[u8], secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn matching_signature_verifies() {
        let body = br#"{"event":"charge.completed"}"#;
        let sig = sign(body, "s3cret");
        assert_eq!(verify_signature(body, Some(&sig), "s3cret"), Ok(()));
    }

    #[test]
    fn uppercase_hex_verifies() {
        let body = b"payload";
        let sig = sign(body, "s3cret").to_uppercase();
        assert_eq!(verify_signature(body, Some(&sig), "s3cret"), Ok(()));
    }

    #[test]
    fn tampered_body_fails() {
        let sig = sign(b"payload", "s3cret");
        assert_eq!(
            verify_signature(b"payloae", Some(&sig), "s3cret"),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn whitespace_variant_of_body_fails() {
        let sig = sign(br#"{"a":1}"#, "s3cret");
        assert_eq!(
            verify_signature(br#"{"a": 1}"#, Some(&sig), "s3cret"),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn wrong_secret_fails() {
        let body = b"payload";
        let sig = sign(body, "s3cret");
        assert_eq!(
            verify_signature(body, Some(&sig), "other"),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn truncated_signature_fails() {
        let body = b"payload";
        let sig = sign(body, "s3cret");
        assert_eq!(
            verify_signature(body, Some(&sig[..sig.len() - 2]), "s3cret"),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn non_hex_signature_fails() {
        assert_eq!(
            verify_signature(b"payload", Some("not-hex-at-all"), "s3cret"),
            Err(AuthError::SignatureMismatch)
        );
    }

    #[test]
    fn missing_signature_is_distinct() {
        assert_eq!(verify_signature(b"payload", None, "s3cret"), Err(AuthError::MissingSignature));
        assert_eq!(
            verify_signature(b"payload", Some("   "), "s3cret"),
            Err(AuthError::MissingSignature)
        );
    }

    #[test]
    fn missing_secret_is_distinct() {
        let sig = sign(b"payload", "s3cret");
        assert_eq!(verify_signature(b"payload", Some(&sig), ""), Err(AuthError::MissingSecret));
    }

    #[test]
    fn empty_body_is_distinct() {
        let sig = sign(b"", "s3cret");
        assert_eq!(verify_signature(b"", Some(&sig), "s3cret"), Err(AuthError::EmptyBody));
    }
}
