//! Utilities for cryptographic algorithms
use error_stack::ResultExt;
use subtle::ConstantTimeEq;

use crate::errors::{self, CustomResult};

/// Trait for generating a digest for SHA
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Trait for cryptographically verifying a message against a signature
pub trait VerifySignature {
    /// Takes in a secret, the signature and the message and verifies the message
    /// against the signature
    fn verify_signature(
        &self,
        _secret: &[u8],
        _signature: &[u8],
        _msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError>;
}

/// Secure Hash Algorithm 256
#[derive(Debug)]
pub struct Sha256;

impl GenerateDigest for Sha256 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = ring::digest::digest(&ring::digest::SHA256, message);
        Ok(digest.as_ref().to_vec())
    }
}

impl VerifySignature for Sha256 {
    fn verify_signature(
        &self,
        _secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, errors::CryptoError> {
        let hashed_digest = Self
            .generate_digest(msg)
            .change_context(errors::CryptoError::SignatureVerificationFailed)?;
        Ok(hashed_digest.as_slice().ct_eq(signature).into())
    }
}

/// Lower-case hex SHA-256 of `message`
pub fn sha256_hex(message: &[u8]) -> CustomResult<String, errors::CryptoError> {
    Sha256.generate_digest(message).map(hex::encode)
}

#[cfg(test)]
mod crypto_tests {
    use super::*;

    #[test]
    fn test_sha256_verify_signature() {
        let message = "12345SECRETSUCCESSyek".as_bytes();
        let signature = Sha256
            .generate_digest(message)
            .expect("digest should be generated");

        let verified = Sha256
            .verify_signature(&[], &signature, message)
            .expect("verification should not error");
        assert!(verified);

        let tampered = Sha256
            .verify_signature(&[], &signature, "12345SECRETFAILUREyek".as_bytes())
            .expect("verification should not error");
        assert!(!tampered);
    }

    #[test]
    fn test_sha256_rejects_truncated_signature() {
        let message = "12345SECRETSUCCESSyek".as_bytes();
        let signature = Sha256
            .generate_digest(message)
            .expect("digest should be generated");

        for truncated in [signature.split_at(16).0, &[][..]] {
            let verified = Sha256
                .verify_signature(&[], truncated, message)
                .expect("verification should not error");
            assert!(!verified);
        }
    }

    #[test]
    fn test_sha256_hex_known_vector() {
        let digest = sha256_hex(b"abc").expect("digest should be generated");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
