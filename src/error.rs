use thiserror::Error;

/// Failures raised while setting up the database connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The server was unreachable or rejected the liveness check.
    #[error("MongoDB connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    /// Anything else that went wrong during setup, e.g. a malformed URI.
    #[error("unexpected database error: {0:#}")]
    Unexpected(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_display_includes_context() {
        let err = DbError::Unexpected(anyhow::anyhow!("bad scheme").context("invalid MongoDB URI"));
        let msg = err.to_string();
        assert!(msg.contains("unexpected database error"));
        assert!(msg.contains("invalid MongoDB URI"));
    }
}
