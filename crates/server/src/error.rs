use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use tower_oauth2_resource_server::error::StartupError as ResourceServerError;

/// Errors that stop the server from starting
#[derive(Debug)]
pub enum StartupError {
    /// An environment variable holds a value that cannot be used
    InvalidConfig(String),
    /// The OAuth2 resource server could not be built from the issuer
    ResourceServer(ResourceServerError),
    /// Binding or serving the listener failed
    Io(io::Error),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::ResourceServer(e) => write!(f, "Failed to build OAuth2 resource server: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ResourceServer(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<ResourceServerError> for StartupError {
    fn from(e: ResourceServerError) -> Self {
        Self::ResourceServer(e)
    }
}

impl From<io::Error> for StartupError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StartupError::InvalidConfig("bad".into()).to_string(),
            "Invalid configuration: bad"
        );

        let io_err = StartupError::from(io::Error::new(io::ErrorKind::AddrInUse, "taken"));
        assert_eq!(io_err.to_string(), "I/O error: taken");
        assert!(io_err.source().is_some());
    }
}
