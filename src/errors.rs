use thiserror::Error;

/// Why a request failed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing signature")]
    MissingCredentials,

    #[error("invalid request signature")]
    InvalidSignature,
}

/// Terminal outcome of a rejected interaction request.
///
/// The `Display` text is exactly the body returned to Discord. Validation
/// failures collapse into a single `BadRequest` so the response never tells a
/// caller which field was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("bad request")]
    BadRequest,
}

impl InteractionError {
    /// HTTP status code for this rejection.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            InteractionError::Auth(_) => 401,
            InteractionError::BadRequest => 400,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid public key hex: {0}")]
    PublicKeyHex(#[from] hex::FromHexError),

    #[error("Public key must be 32 bytes, got {0}")]
    PublicKeyLength(usize),

    #[error("Public key is not a valid Ed25519 point: {0}")]
    PublicKeyPoint(#[from] ed25519_dalek::SignatureError),

    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),

    #[error("SIGNATURE_MAX_AGE_SECS: {0}")]
    MaxAge(#[from] std::num::ParseIntError),
}
