use std::fmt::Display;

/// Unified run error; the binary's top-level handler owns the process exit.
#[derive(Debug)]
pub enum NotifyError {
    // Missing required configuration or an unrecognised selector. Exit 1.
    Usage(String),
    // File, JSON or transmission failure. Exit 2.
    Failure(anyhow::Error),
}

impl NotifyError {
    pub fn usage<M: Into<String>>(message: M) -> Self {
        Self::Usage(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::Failure(_) => 2,
        }
    }
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::Failure(err) => write!(f, "{err:#}"),
        }
    }
}

impl std::error::Error for NotifyError {}

impl From<anyhow::Error> for NotifyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Failure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn usage_errors_exit_with_one() {
        let err = NotifyError::usage("Message is required");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn failures_exit_with_two_and_keep_the_context_chain() {
        let inner: Result<(), anyhow::Error> = Err(anyhow!("connection refused"));
        let err: NotifyError = inner.context("Error sending message").unwrap_err().into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Error sending message: connection refused");
    }
}
