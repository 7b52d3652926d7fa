//! JSON dump of a type descriptor.

use crate::Result;
use clap::Args;

/// Arguments for the dump command
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Type whose descriptor to dump (simple or fully-qualified name)
    pub type_name: String,
}

/// Execute the dump command
pub fn dump_command(args: DumpArgs) -> Result<()> {
    let registry = rtti_demo::demo::registry();
    let info = registry.type_by_name(&args.type_name)?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
