//! Error types for Estate Site

use thiserror::Error;

/// Main error type for content API and configuration operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Request never produced a response (DNS, connect, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for message extraction
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid site configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl SiteError {
    /// HTTP status carried by a protocol error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SiteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied `{"message": ...}` from a protocol error body.
    pub fn server_message(&self) -> Option<String> {
        let SiteError::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SiteError::Transport(format!("invalid response body: {}", err))
        } else {
            SiteError::Transport(err.to_string())
        }
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(format!("{}", err), "Request failed with status 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_server_message_extracted() {
        let err = SiteError::Status {
            status: 409,
            body: r#"{"message":"Duplicate"}"#.to_string(),
        };
        assert_eq!(err.server_message().as_deref(), Some("Duplicate"));
    }

    #[test]
    fn test_server_message_absent() {
        let not_json = SiteError::Status {
            status: 500,
            body: "<html>oops</html>".to_string(),
        };
        assert_eq!(not_json.server_message(), None);

        let empty = SiteError::Status {
            status: 422,
            body: r#"{"message":""}"#.to_string(),
        };
        assert_eq!(empty.server_message(), None);

        let transport = SiteError::Transport("connection refused".to_string());
        assert_eq!(transport.server_message(), None);
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Decode(_)));
    }
}
