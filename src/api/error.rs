use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// The service no longer accepts our admin identity.
    Unauthorized,
    /// The service answered with an error status; `message` is the service's
    /// own description when its envelope carried one.
    Remote { status: u16, message: String },
    Http(reqwest::Error),
    Parse(reqwest::Error),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::Remote { status, message } => write!(f, "{message} (status {status})"),
            ApiError::Http(e) => write!(f, "http: {e}"),
            ApiError::Parse(e) => write!(f, "parse: {e}"),
        }
    }
}
