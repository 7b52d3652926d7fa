//! Diagnostic and error reporting utilities

use crate::{CliError, Result};

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| crate::CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// Render a failed command's error through the installed miette handler.
pub fn render_cli_error(error: CliError) {
    eprintln!("{:?}", miette::Report::new(error));
}
