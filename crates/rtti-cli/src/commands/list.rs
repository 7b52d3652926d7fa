//! List the registered types.

use crate::Result;
use console::style;

/// Execute the list command
pub fn list_command() -> Result<()> {
    let registry = rtti_demo::demo::registry();
    let mut types = registry.list_types();
    types.sort_by(|a, b| a.1.cmp(&b.1));
    for (id, name) in types {
        println!("{} {}", style(&name).cyan(), style(format!("#{}", id.0)).dim());
    }
    Ok(())
}
