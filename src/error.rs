use thiserror::Error;

/// Main error type for the Vitrina library
#[derive(Error, Debug)]
pub enum VitrinaError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors from the remote video/form API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {reason}")]
    Request { reason: String },

    #[error("Server returned status {code}")]
    Status { code: u16 },

    #[error("Failed to parse response: {reason}")]
    Parse { reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using VitrinaError
pub type Result<T> = std::result::Result<T, VitrinaError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status {
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            ApiError::Parse {
                reason: err.to_string(),
            }
        } else {
            ApiError::Request {
                reason: err.to_string(),
            }
        }
    }
}

impl VitrinaError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message, in the wording the page shows
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(_) => "Xatolik yuz berdi. Iltimos, qayta urinib ko'ring.".to_string(),
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_map_to_localized_message() {
        let err = VitrinaError::Api(ApiError::Request {
            reason: "connection refused".to_string(),
        });
        assert_eq!(
            err.user_message(),
            "Xatolik yuz berdi. Iltimos, qayta urinib ko'ring."
        );
    }

    #[test]
    fn generic_errors_pass_through() {
        let err = VitrinaError::generic("something odd");
        assert_eq!(err.user_message(), "Generic error: something odd");
    }
}
