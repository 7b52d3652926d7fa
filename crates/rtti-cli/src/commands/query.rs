//! Programmatic metadata queries against registered types.

use crate::Result;
use clap::{Args, Subcommand};
use console::style;
use rtti_core::TypeQueries;

/// Arguments for the query command
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Type to query (simple or fully-qualified name)
    pub type_name: String,

    #[command(subcommand)]
    pub op: QueryOp,
}

#[derive(Subcommand, Debug)]
pub enum QueryOp {
    /// List declared fields with their types
    Fields,
    /// Number of declared fields
    FieldCount,
    /// Number of declared methods
    MethodCount,
    /// Whether the type declares a field with this name
    HasField { name: String },
    /// Declared type of one field
    FieldType { name: String },
}

/// Execute the query command
pub fn query_command(args: QueryArgs) -> Result<()> {
    let queries = TypeQueries::new(rtti_demo::demo::registry());
    let type_name = &args.type_name;

    match args.op {
        QueryOp::Fields => {
            for (name, ty) in queries.reflect_fields(type_name)? {
                println!("{}: {}", style(&name).cyan(), style(&ty).dim());
            }
        }
        QueryOp::FieldCount => {
            println!(
                "{} {}",
                style("Fields:").green().bold(),
                queries.field_count(type_name)?
            );
        }
        QueryOp::MethodCount => {
            println!(
                "{} {}",
                style("Methods:").green().bold(),
                queries.method_count(type_name)?
            );
        }
        QueryOp::HasField { name } => {
            println!("{}", queries.has_field(type_name, &name)?);
        }
        QueryOp::FieldType { name } => {
            let ty = queries.field_type(type_name, &name)?;
            println!("{} ({})", style(&ty.simple).cyan(), style(&ty.qualified).dim());
        }
    }
    Ok(())
}
