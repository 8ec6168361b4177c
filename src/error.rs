use std::fmt;


// Everything that can go wrong during one load cycle. None of these escape the loader: they are
// logged and the loader goes back to idle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoadError {
    // Server replied with a status outside of 200-299.
    Http { status: u16 },
    // Request never produced a response: DNS, CORS, connection reset, etc.
    Network(String),
    // Response body is not a valid batch.
    Decode(String),
    // The page could not take the new content.
    Render(String),
    InvalidUrl(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Http { status } => write!(f, "An error occurred: {status}"),
            LoadError::Network(message) => write!(f, "Network error: {message}"),
            LoadError::Decode(message) => write!(f, "Cannot decode games batch: {message}"),
            LoadError::Render(message) => write!(f, "Cannot show games batch: {message}"),
            LoadError::InvalidUrl(message) => write!(f, "Invalid API URL: {message}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self { LoadError::Decode(err.to_string()) }
}

impl From<url::ParseError> for LoadError {
    fn from(err: url::ParseError) -> Self { LoadError::InvalidUrl(err.to_string()) }
}
