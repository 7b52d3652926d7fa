//! rtti CLI Binary
//!
//! Runtime type introspection demonstrator: reports the declared shape of
//! the example hierarchy (superclass, interfaces, constructors, methods,
//! fields and field values) through registration-time metadata tables.
//!
//! # Usage
//!
//! ```bash
//! # Run the full canned walkthrough
//! rtti demo
//!
//! # Same, but with visibility overrides refused (exits non-zero)
//! rtti demo --restrict-access
//!
//! # Report one section for a type looked up by name
//! rtti report Dog --section constructors
//!
//! # Programmatic queries
//! rtti query Dog has-field name
//!
//! # Dump a descriptor as JSON
//! rtti dump Dog
//!
//! # List the registered types
//! rtti list
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use rtti_cli::{
    commands::{
        self, demo::DemoArgs, dump::DumpArgs, query::QueryArgs, report::ReportArgs,
    },
    diagnostics::{render_cli_error, setup_error_reporting},
    CliError, Result,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "rtti",
    version = env!("CARGO_PKG_VERSION"),
    about = "Runtime type introspection demonstrator",
    long_about = r#"
Reports the declared shape of a small example type hierarchy through a
general-purpose metadata query facility.

EXAMPLES:
    rtti demo                             # Full walkthrough on the example dog
    rtti report Dog --section methods     # One report section, by-name lookup
    rtti query Dog field-count            # Programmatic query
    rtti dump Animal                      # Descriptor as JSON
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full canned walkthrough against the example instance
    Demo(DemoArgs),

    /// Render report sections for a registered type
    Report(ReportArgs),

    /// Run a programmatic metadata query
    Query(QueryArgs),

    /// Dump a type descriptor as JSON
    Dump(DumpArgs),

    /// List the registered types
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up error reporting
    setup_error_reporting()?;

    // Configure logging
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    // Execute command
    let result = match cli.command {
        Commands::Demo(args) => commands::demo_command(args),
        Commands::Report(args) => commands::report_command(args),
        Commands::Query(args) => commands::query_command(args),
        Commands::Dump(args) => commands::dump_command(args),
        Commands::List => commands::list_command(),
    };

    match result {
        Ok(_) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            use tracing::error;
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            render_cli_error(e);
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr; stdout carries only report output.
    let result = match log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))
}
