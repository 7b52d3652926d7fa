//! Command-line interface for the `rtti` introspection demonstrator.

pub mod commands;
pub mod diagnostics;

// CLI-specific error handling
pub mod error {
    use miette::Diagnostic;
    use thiserror::Error;

    #[derive(Error, Debug, Diagnostic)]
    pub enum CliError {
        #[error("IO error: {0}")]
        #[diagnostic(code(rtti::io_error))]
        Io(#[from] std::io::Error),

        #[error(transparent)]
        #[diagnostic(
            code(rtti::introspection_error),
            help("Run `rtti list` to see the registered types")
        )]
        Introspection(#[from] rtti_core::Error),

        #[error("Serialization error: {0}")]
        #[diagnostic(code(rtti::serde_error))]
        Serde(#[from] serde_json::Error),

        #[error("Configuration error: {0}")]
        #[diagnostic(code(rtti::config_error))]
        Config(String),

        #[error("Invalid input: {0}")]
        #[diagnostic(code(rtti::invalid_input))]
        InvalidInput(String),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
