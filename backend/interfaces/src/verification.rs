use common_utils::{crypto, CustomResult};
use domain_types::{errors::ConnectorError, redirect::ReceivedRedirect};
use error_stack::ResultExt;
use hyperswitch_masking::Secret;

/// Verification of the checksum a gateway appends to a browser redirect
pub trait RedirectVerification {
    /// Merchant secret that takes part in the checksum
    fn get_secrets(&self) -> CustomResult<Vec<u8>, ConnectorError> {
        Ok(Vec::new())
    }

    /// Get the verification algorithm being used
    fn get_algorithm(
        &self,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, ConnectorError>;

    /// Get the checksum value sent with the redirect
    fn get_signature(
        &self,
        redirect: &ReceivedRedirect,
    ) -> CustomResult<Vec<u8>, ConnectorError> {
        let checksum = redirect
            .checksum
            .as_deref()
            .filter(|checksum| !checksum.is_empty())
            .ok_or(ConnectorError::MissingRequiredField {
                field_name: "checksum",
            })?;
        hex::decode(checksum).change_context(ConnectorError::ChecksumVerificationFailed)
    }

    /// Get the message that should be verified
    fn get_message(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
        secrets: &[u8],
    ) -> CustomResult<Vec<u8>, ConnectorError>;

    /// Perform the verification
    fn verify(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
    ) -> CustomResult<bool, ConnectorError> {
        let algorithm = self.get_algorithm()?;
        let secrets = self.get_secrets()?;
        let signature = match self.get_signature(redirect) {
            Ok(signature) => signature,
            Err(error) => {
                tracing::warn!(
                    tid = %redirect.tid,
                    ?error,
                    "redirect checksum is missing or malformed"
                );
                return Ok(false);
            }
        };
        let message = self.get_message(redirect, txn_secret, &secrets)?;

        match algorithm.verify_signature(&secrets, &signature, &message) {
            Ok(verified) => Ok(verified),
            Err(error) => {
                tracing::warn!(tid = %redirect.tid, ?error, "checksum verification errored");
                Ok(false)
            }
        }
    }
}
