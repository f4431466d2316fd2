use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum KbError {
    #[error("knowledge base returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("knowledge base request failed: {0}")]
    Http(String),

    #[error("failed to decode knowledge base response: {0}")]
    Decode(String),

    #[error("invalid item reference: {0}")]
    InvalidItemRef(String),
}
