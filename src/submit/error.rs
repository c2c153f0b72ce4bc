use thiserror::Error;

/// Errors that can occur while relaying a submission.
///
/// Only failures the caller can actually observe appear here. The external
/// endpoint's answer is never read, so there is no "rejected" variant.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint URL could not be parsed.
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed before a response arrived (DNS, connect, TLS, ...).
    #[error("Failed to reach '{host}': {source}")]
    Transport {
        host: String,
        #[source]
        source: reqwest::Error,
    },
}

impl SubmissionError {
    /// Short classification string for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::InvalidEndpoint { .. } => "invalid_endpoint",
            SubmissionError::Client(_) => "client_error",
            SubmissionError::Transport { source, .. } if source.is_timeout() => "timeout",
            SubmissionError::Transport { source, .. } if source.is_connect() => "connect_error",
            SubmissionError::Transport { .. } => "transport_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_endpoint_kind_and_message() {
        let err = SubmissionError::InvalidEndpoint {
            url: "not a url".to_string(),
            source: url::Url::parse("not a url").unwrap_err(),
        };
        assert_eq!(err.kind(), "invalid_endpoint");
        assert!(err.to_string().starts_with("Invalid endpoint URL 'not a url'"));
    }
}
