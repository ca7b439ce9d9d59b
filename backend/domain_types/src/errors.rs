use strum::Display;

#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ApiClientError {
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Client construction failed")]
    ClientConstructionFailed,
    #[error("Request body serialization failed")]
    BodySerializationFailed,

    #[error("URL encoding of request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Failed to decode response")]
    ResponseDecodingFailed,

    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,

    #[error("Server responded with unexpected response")]
    UnexpectedServerResponse,
}

/// Failures talking to the payment gateway.
#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum ConnectorError {
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed to execute a processing step: {0:?}")]
    ProcessingStepFailed(Option<String>),
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Gateway responded with HTTP status {status_code}")]
    UnexpectedResponseStatus { status_code: u16 },
    #[error("Failed to verify redirect checksum")]
    ChecksumVerificationFailed,
    #[error("Payment method {0} is not supported by the gateway")]
    NotSupported(String),
}

/// Failures building a payment request from the checkout form.
#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum IntentError {
    #[error("Unknown payment method key: {0}")]
    UnknownPaymentMethod(String),
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid value for field: {field_name}")]
    InvalidFieldValue { field_name: &'static str },
    #[error("Order amount is missing or not numeric")]
    InvalidOrderAmount,
}

/// Failures of the host platform capabilities (session, basket, order).
#[derive(Debug, thiserror::Error, PartialEq, Clone)]
pub enum StorageError {
    #[error("Session {0} was not found")]
    SessionNotFound(String),
    #[error("Basket for session {0} was not found")]
    BasketNotFound(String),
    #[error("Order could not be finalized: {0}")]
    OrderFinalizationFailed(String),
}

/// Reasons a checkout step ends on an error notification.
#[derive(Debug, Clone, thiserror::Error, Display, PartialEq)]
pub enum CheckoutError {
    MissingTransactionId,
    ChecksumInvalid,
    GatewayReportedFailure,
    RedirectDataMissing,
    GatewayUnavailable,
    PaymentDataMissing,
    InvalidPaymentRequest,
}
