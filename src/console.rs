//! # Console Logger
//!
//! Operator-facing console sink, injected into the publisher.
//! Kept separate from the `tracing` diagnostic log.

/// Console log collaborator exposed to the host job output
pub trait ConsoleLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Console that writes to the process stdout/stderr, used by the CLI
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl ConsoleLogger for StdoutConsole {
    fn info(&self, message: &str) {
        println!("[s3-artifact-publisher] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[s3-artifact-publisher] ERROR: {message}");
    }
}
