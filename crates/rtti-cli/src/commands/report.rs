//! Render report sections for a registered type looked up by name.

use crate::Result;
use clap::{Args, ValueEnum};
use rtti_core::Reporter;
use std::io;
use tracing::info;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Type to report on (simple or fully-qualified name)
    pub type_name: String,

    /// Render only one section instead of all of them
    #[arg(long, value_enum)]
    pub section: Option<Section>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Section {
    Superclass,
    Interfaces,
    Constructors,
    Methods,
    Fields,
}

/// Execute the report command
pub fn report_command(args: ReportArgs) -> Result<()> {
    let registry = rtti_demo::demo::registry();
    let info = registry.type_by_name(&args.type_name)?;
    info!(type_name = %info.name, "rendering report");

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    match args.section {
        Some(Section::Superclass) => reporter.superclass(&info)?,
        Some(Section::Interfaces) => reporter.interfaces(&info)?,
        Some(Section::Constructors) => reporter.constructors(&info)?,
        Some(Section::Methods) => reporter.methods(&info)?,
        Some(Section::Fields) => reporter.fields(&info)?,
        None => {
            reporter.superclass(&info)?;
            reporter.constructors(&info)?;
            reporter.interfaces(&info)?;
            reporter.methods(&info)?;
            reporter.fields(&info)?;
        }
    }
    Ok(())
}
