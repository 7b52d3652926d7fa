//! The canned walkthrough command.

use crate::Result;
use clap::Args;
use rtti_core::AccessPolicy;
use std::io;
use tracing::info;

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Refuse visibility overrides, making the field-values report fatal
    #[arg(long)]
    pub restrict_access: bool,
}

/// Execute the demo command
pub fn demo_command(args: DemoArgs) -> Result<()> {
    let policy = if args.restrict_access {
        AccessPolicy::Restricted
    } else {
        AccessPolicy::Permissive
    };

    info!(?policy, "running introspection walkthrough");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    rtti_demo::demo::run(&mut out, policy)?;
    Ok(())
}
