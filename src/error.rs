use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single audit run. Both variants are terminal.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The analyzer could not be started or reported failure.
    #[error("Error executing command: {0}")]
    Execution(io::Error),

    /// The captured report could not be persisted.
    #[error("Error writing to file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_mention_error() {
        let exec = AuditError::Execution(io::Error::new(io::ErrorKind::NotFound, "slither"));
        assert!(exec.to_string().starts_with("Error executing command"));

        let write = AuditError::Write {
            path: PathBuf::from("out/output.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = write.to_string();
        assert!(msg.contains("Error"));
        assert!(msg.contains("out/output.md"));
        assert!(msg.contains("denied"));
    }
}
