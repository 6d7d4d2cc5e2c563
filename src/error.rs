use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComiqError {
    #[error(
        "Catalog API credentials missing.\n\nSet COMIQ_PUBLIC_KEY and COMIQ_PRIVATE_KEY, pass --public-key/--private-key, or add them to ~/.config/comiq/config.toml"
    )]
    MissingCredentials,

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Catalog API error ({code}): {message}")]
    Api { code: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ComiqError {
    fn from(e: std::io::Error) -> Self {
        ComiqError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ComiqError {
    fn from(e: serde_json::Error) -> Self {
        ComiqError::InvalidJson(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ComiqError::Api {
            code: "InvalidCredentials".to_string(),
            message: "The passed API key is invalid.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog API error (InvalidCredentials): The passed API key is invalid."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ComiqError = io.into();
        assert!(matches!(err, ComiqError::Io(msg) if msg.contains("missing")));
    }

    #[test]
    fn test_serde_error_conversion() {
        let err: ComiqError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, ComiqError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
