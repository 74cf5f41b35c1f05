use crate::soap::Fault;
use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed url")]
    MalformedUrl(#[from] url::ParseError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("zimbra fault {}: {}", .0.code(), .0.message())]
    Fault(Fault),
    #[error("http status {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    pub fn fault(fault: Fault) -> Self {
        Self::Fault(fault)
    }

    pub fn unexpected<S: ToString>(msg: S) -> Self {
        Self::UnexpectedResponse(msg.to_string())
    }

    /// Returns true if the server reported a fault, as opposed to a
    /// transport or decoding failure.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}
