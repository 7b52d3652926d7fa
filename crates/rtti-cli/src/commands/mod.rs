//! Subcommand implementations.

pub mod demo;
pub mod dump;
pub mod list;
pub mod query;
pub mod report;

pub use demo::{demo_command, DemoArgs};
pub use dump::{dump_command, DumpArgs};
pub use list::list_command;
pub use query::{query_command, QueryArgs};
pub use report::{report_command, ReportArgs};
